/// Numeric conversion helpers.
///
/// Safe truncation of doubles to integers and bounds-checked index
/// conversion. All functions return a `Result` instead of silently wrapping or
/// saturating.
pub mod num;
/// Canonical text forms.
///
/// Formats doubles the way printf formats `%g` (six significant digits),
/// which is the form HRL prints and concatenates.
pub mod format;

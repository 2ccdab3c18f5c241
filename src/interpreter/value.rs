/// Canonical text form of values.
///
/// Implements `Display` for `Value`, which is what `print` writes, and the
/// fixed-decimal form `..` concatenates.
pub mod display;

/// The `Value` enum with its conversions, coercions and array helpers.
pub mod core;

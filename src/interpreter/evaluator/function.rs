/// Call dispatch and the built-in function table.
///
/// Resolves a call to a built-in or a user-defined function, checks the
/// argument count and binds parameters in a fresh frame.
pub mod core;
/// The `print` function implementation.
///
/// Writes a value to standard output and returns it.
pub mod print;
/// The `read` function implementation.
///
/// Reads one whitespace-delimited integer from standard input.
pub mod read;
/// The `callprogram` function implementation.
///
/// Runs an external program or script and returns its exit status.
pub mod callprogram;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Prints a value followed by a newline and returns it unchanged.
///
/// The value is formatted using its `Display` implementation: integers in
/// decimal, doubles like `%g`, booleans as `1`/`0` and strings as is.
///
/// # Parameters
/// - `context`: Supplies the console to write to.
/// - `args`: Slice containing one argument.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The printed value.
///
/// # Example
/// ```
/// use hrl::interpreter::{
///     console::Console, evaluator::core::Context, evaluator::function::print::print,
///     value::core::Value,
/// };
///
/// let (console, output) = Console::captured("");
/// let context = Context::new(console);
///
/// let result = print(&context, &[Value::Boolean(true)], 1).unwrap();
///
/// assert_eq!(result, Value::Boolean(true));
/// assert_eq!(output.lock().unwrap().as_slice(), b"1\n");
/// ```
pub fn print(context: &Context, args: &[Value], line: usize) -> EvalResult<Value> {
    let [value] = args else {
        return Err(RuntimeError::ArgumentCountMismatch { name: "print".to_string(),
                                                         expected: "1".to_string(),
                                                         found: args.len(),
                                                         line });
    };

    context.console
           .write_line(&value.to_string())
           .map_err(|e| RuntimeError::OutputFailed { details: e.to_string(),
                                                     line })?;
    Ok(value.clone())
}

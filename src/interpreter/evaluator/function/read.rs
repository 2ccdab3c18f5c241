use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Reads one whitespace-delimited integer from standard input.
///
/// Blocks the calling thread until a word is available. Other threads keep
/// running while it waits.
///
/// # Errors
/// Returns `RuntimeError::InvalidInput` at end of input or when the word is
/// not an integer.
///
/// # Example
/// ```
/// use hrl::interpreter::{
///     console::Console, evaluator::core::Context, evaluator::function::read::read,
///     value::core::Value,
/// };
///
/// let (console, _) = Console::captured("  -12\nabc");
/// let context = Context::new(console);
///
/// assert_eq!(read(&context, &[], 1).unwrap(), Value::Integer(-12));
/// assert!(read(&context, &[], 2).is_err());
/// assert!(read(&context, &[], 3).is_err());
/// ```
pub fn read(context: &Context, _args: &[Value], line: usize) -> EvalResult<Value> {
    let word = context.console
                      .read_word()
                      .map_err(|e| RuntimeError::InvalidInput { details: e.to_string(),
                                                                line })?
                      .ok_or_else(|| RuntimeError::InvalidInput { details: "end of input".to_string(),
                                                                  line })?;

    word.parse::<i64>()
        .map(Value::Integer)
        .map_err(|_| RuntimeError::InvalidInput { details: format!("expected an integer, found \
                                                                    '{word}'"),
                                                  line })
}

use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Maps a comparison operator and an ordering to the boolean result.
#[must_use]
pub fn ordering_satisfies(op: BinaryOperator, ordering: Ordering) -> bool {
    match op {
        BinaryOperator::Less => ordering.is_lt(),
        BinaryOperator::Greater => ordering.is_gt(),
        BinaryOperator::LessEqual => ordering.is_le(),
        BinaryOperator::GreaterEqual => ordering.is_ge(),
        BinaryOperator::NotEqual => ordering.is_ne(),
        _ => ordering.is_eq(),
    }
}

impl Context {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// Two strings compare lexicographically. Any other pair is coerced to
    /// integers and compared numerically, which makes `5 == 5.9` true.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Current line number used for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    ///
    /// # Example
    /// ```
    /// use hrl::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Less, &"abc".into(), &"abd".into(), 1);
    /// assert_eq!(result.unwrap(), Value::Boolean(true));
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Equal, &5.into(), &5.0.into(), 1);
    /// assert_eq!(result.unwrap(), Value::Boolean(true));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        let ordering = match (left, right) {
            (Value::String(a), Value::String(b)) => a.cmp(b),
            _ => left.coerce_to_integer(line)?
                     .cmp(&right.coerce_to_integer(line)?),
        };
        Ok(Value::Boolean(ordering_satisfies(op, ordering)))
    }
}

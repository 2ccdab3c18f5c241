use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a logical operation between two values.
    ///
    /// The operands are converted to booleans using `coerce_to_bool`, so any
    /// nonzero number counts as true. Both operands have already been
    /// evaluated by the time this runs.
    ///
    /// # Parameters
    /// - `op`: `And` or `Or`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use hrl::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_logic(BinaryOperator::And, &2.into(), &true.into(), 1);
    /// assert_eq!(result.unwrap(), Value::Boolean(true));
    /// ```
    pub fn eval_logic(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      line: usize)
                      -> EvalResult<Value> {
        let left = left.coerce_to_bool(line)?;
        let right = right.coerce_to_bool(line)?;

        Ok(Value::Boolean(match op {
                              BinaryOperator::Or => left || right,
                              _ => left && right,
                          }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_false() {
        let result = Context::eval_logic(BinaryOperator::Or, &0.into(), &0.0.into(), 1);
        assert_eq!(result.unwrap(), Value::Boolean(false));
    }

    #[test]
    fn strings_have_no_truthiness() {
        assert!(Context::eval_logic(BinaryOperator::And, &"a".into(), &"b".into(), 1).is_err());
    }
}

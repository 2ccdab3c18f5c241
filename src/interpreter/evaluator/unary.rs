use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates the operand of a unary expression and applies the operator.
    pub fn eval_unary_op(&self, op: UnaryOperator, expr: &Expr, line: usize) -> EvalResult<Value> {
        let value = self.eval_value(expr, line)?;
        Self::eval_unary(op, &value, line)
    }

    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Plus`: passes integers and doubles through unchanged.
    /// - `Negate`: numeric negation for integers and doubles.
    /// - `Not`: boolean negation.
    ///
    /// Any other operand type is a type error; `not` does not apply
    /// truthiness to numbers.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use hrl::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::Integer(5), 1).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Not, &Value::Boolean(false), 1).unwrap();
    /// assert_eq!(v, Value::Boolean(true));
    ///
    /// assert!(Context::eval_unary(UnaryOperator::Not, &Value::Integer(0), 1).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match (op, value) {
            (UnaryOperator::Plus, Value::Integer(_) | Value::Double(_)) => Ok(value.clone()),
            (UnaryOperator::Negate, Value::Integer(n)) => {
                n.checked_neg()
                 .map(Value::Integer)
                 .ok_or(RuntimeError::Overflow { line })
            },
            (UnaryOperator::Negate, Value::Double(d)) => Ok(Value::Double(-d)),
            (UnaryOperator::Not, Value::Boolean(b)) => Ok(Value::Boolean(!b)),
            _ => {
                Err(RuntimeError::TypeError { details: format!("cannot apply '{op}' to {}",
                                                               value.type_name()),
                                              line })
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_reject_every_unary_operator() {
        for op in [UnaryOperator::Plus, UnaryOperator::Negate, UnaryOperator::Not] {
            assert!(Context::eval_unary(op, &"x".into(), 2).is_err());
        }
    }

    #[test]
    fn negating_minimum_overflows() {
        assert_eq!(Context::eval_unary(UnaryOperator::Negate, &Value::Integer(i64::MIN), 4),
                   Err(RuntimeError::Overflow { line: 4 }));
    }

    #[test]
    fn doubles_negate() {
        assert_eq!(Context::eval_unary(UnaryOperator::Negate, &Value::Double(1.5), 1).unwrap(),
                   Value::Double(-1.5));
    }
}

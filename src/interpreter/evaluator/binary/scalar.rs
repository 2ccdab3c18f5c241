use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates an arithmetic operation.
    ///
    /// Both operands are coerced to integers first: doubles truncate toward
    /// zero and booleans become `0`/`1`. Division and remainder truncate
    /// toward zero, so `-7 / 2` is `-3` and `-7 % 2` is `-1`.
    ///
    /// # Parameters
    /// - `op`: One of `Add`, `Sub`, `Mul` or `Div`; any other operator is
    ///   taken as `Mod`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `DivisionByZero` for `/` or `%` with a zero divisor.
    /// - `Overflow` when the result does not fit in 64 bits.
    /// - `TypeError` for operands that cannot be coerced.
    ///
    /// # Example
    /// ```
    /// use hrl::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_scalar_op(BinaryOperator::Mul, &2.9.into(), &3.into(), 1);
    /// assert_eq!(result.unwrap(), Value::Integer(6));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          line: usize)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        let a = left.coerce_to_integer(line)?;
        let b = right.coerce_to_integer(line)?;

        if !matches!(op, Add | Sub | Mul) && b == 0 {
            return Err(RuntimeError::DivisionByZero { line });
        }

        let result = match op {
            Add => a.checked_add(b),
            Sub => a.checked_sub(b),
            Mul => a.checked_mul(b),
            Div => a.checked_div(b),
            _ => a.checked_rem(b),
        };

        result.map(Value::Integer)
              .ok_or(RuntimeError::Overflow { line })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(op: BinaryOperator, a: i64, b: i64) -> EvalResult<Value> {
        Context::eval_scalar_op(op, &a.into(), &b.into(), 1)
    }

    #[test]
    fn division_truncates_toward_zero() {
        for (a, b) in [(7, 2), (-7, 2), (7, -2), (-7, -2), (0, 5), (i64::MAX, 3)] {
            assert_eq!(apply(BinaryOperator::Div, a, b).unwrap(), Value::Integer(a / b));
            assert_eq!(apply(BinaryOperator::Mod, a, b).unwrap(), Value::Integer(a % b));
        }
        assert_eq!(apply(BinaryOperator::Div, -7, 2).unwrap(), Value::Integer(-3));
        assert_eq!(apply(BinaryOperator::Mod, -7, 2).unwrap(), Value::Integer(-1));
    }

    #[test]
    fn zero_divisor_is_fatal() {
        assert_eq!(apply(BinaryOperator::Div, 1, 0),
                   Err(RuntimeError::DivisionByZero { line: 1 }));
        assert_eq!(apply(BinaryOperator::Mod, 1, 0),
                   Err(RuntimeError::DivisionByZero { line: 1 }));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(apply(BinaryOperator::Add, i64::MAX, 1),
                   Err(RuntimeError::Overflow { line: 1 }));
        assert_eq!(apply(BinaryOperator::Div, i64::MIN, -1),
                   Err(RuntimeError::Overflow { line: 1 }));
    }

    #[test]
    fn booleans_count_as_integers() {
        let result = Context::eval_scalar_op(BinaryOperator::Add, &true.into(), &true.into(), 1);
        assert_eq!(result.unwrap(), Value::Integer(2));
    }
}

use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates both operands of a binary expression and combines them.
    ///
    /// Operands are evaluated one after the other, right first, and both are
    /// always evaluated: `and` and `or` do not short-circuit. The order shows
    /// whenever an operand has a side effect, so `read() - read()` subtracts
    /// the first word read from the second.
    ///
    /// # Errors
    /// Returns `RuntimeError::MissingValue` if either operand yields no value,
    /// and any error raised by [`Context::eval_binary`].
    pub fn eval_binary_op(&self,
                          left: &Expr,
                          op: BinaryOperator,
                          right: &Expr,
                          line: usize)
                          -> EvalResult<Value> {
        let right = self.eval_value(right, line)?;
        let left = self.eval_value(left, line)?;
        Self::eval_binary(op, &left, &right, line)
    }

    /// Evaluates a binary operation between two values.
    ///
    /// Concatenation accepts any operands and joins their concatenation text
    /// forms (see [`Value::concat_text`]). Every other operator rejects a string mixed with a non-string. Arithmetic
    /// goes to `eval_scalar_op`, relational and equality operators to
    /// `eval_comparison`, and logical operators to `eval_logic`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use hrl::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_binary(BinaryOperator::Concat, &1.into(), &"x".into(), 1);
    /// assert_eq!(result.unwrap(), Value::from("1x"));
    ///
    /// let mixed = Context::eval_binary(BinaryOperator::Equal, &"5".into(), &5.into(), 1);
    /// assert!(mixed.is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Concat, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul,
            NotEqual, Or, Sub,
        };

        match op {
            Concat => Ok(Value::String(left.concat_text() + &right.concat_text())),
            _ if left.is_string() != right.is_string() => {
                Err(RuntimeError::TypeError { details: format!("cannot apply '{op}' to {} and {}",
                                                               left.type_name(),
                                                               right.type_name()),
                                              line })
            },
            Add | Sub | Mul | Div | Mod => Self::eval_scalar_op(op, left, right, line),
            Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
                Self::eval_comparison(op, left, right, line)
            },
            And | Or => Self::eval_logic(op, left, right, line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::console::Console;

    #[test]
    fn concat_formats_every_scalar() {
        let joined = Context::eval_binary(BinaryOperator::Concat, &true.into(), &2.5.into(), 1);
        assert_eq!(joined.unwrap(), Value::from("12.500000"));

        let joined = Context::eval_binary(BinaryOperator::Concat, &"n=".into(), &(-3).into(), 1);
        assert_eq!(joined.unwrap(), Value::from("n=-3"));
    }

    #[test]
    fn right_operand_is_evaluated_first() {
        let (console, output) = Console::captured("10 3");
        let context = Context::new(console);
        let call = |name: &str| Expr::FunctionCall { name:      name.to_string(),
                                                     arguments: Vec::new(),
                                                     line:      1, };

        let difference =
            context.eval_binary_op(&call("read"), BinaryOperator::Sub, &call("read"), 1);
        assert_eq!(difference.unwrap(), Value::Integer(-7));
        assert!(output.lock().unwrap().is_empty());
    }

    #[test]
    fn mixed_strings_are_rejected() {
        for op in [BinaryOperator::Add, BinaryOperator::Less, BinaryOperator::And] {
            assert!(matches!(Context::eval_binary(op, &"a".into(), &1.into(), 3),
                             Err(RuntimeError::TypeError { line: 3, .. })));
        }
    }
}

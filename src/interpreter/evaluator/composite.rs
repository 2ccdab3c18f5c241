use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::lock,
        },
        value::core::Value,
    },
    util::num::checked_index,
};

impl Context {
    /// Builds an array from a literal element list.
    ///
    /// Elements are evaluated left to right and must all be of one scalar
    /// type.
    pub fn eval_array_literal(&self, elements: &[Expr], line: usize) -> EvalResult<Value> {
        let values = elements.iter()
                             .map(|e| self.eval_value(e, line))
                             .collect::<EvalResult<Vec<_>>>()?;
        Value::array_from(values, line)
    }

    /// Evaluates `array[index]`.
    ///
    /// The index is coerced to an integer and must lie in `0..len`.
    ///
    /// # Errors
    /// - `UnknownVariable` if the array is not bound in this frame.
    /// - `TypeError` if the variable is not an array.
    /// - `IndexOutOfBounds` for negative or too large indices.
    pub fn eval_array_index(&self, array: &str, index: &Expr, line: usize) -> EvalResult<Value> {
        let index = self.eval_value(index, line)?.coerce_to_integer(line)?;
        let array = self.get_variable(array, line)?;

        let Some(len) = array.array_len() else {
            return Err(RuntimeError::TypeError { details: format!("cannot index into {}",
                                                                  array.type_name()),
                                                 line });
        };

        array.element(checked_index(index, len, line)?)
             .ok_or(RuntimeError::IndexOutOfBounds { index, len, line })
    }

    /// Reads `instance.field`.
    pub fn eval_struct_field(&self, instance: &str, field: &str, line: usize) -> EvalResult<Value> {
        let frame = lock(&self.frame);
        let found = frame.instances.get(instance).ok_or_else(|| {
                                                      RuntimeError::UnknownStructInstance {
                    name: instance.to_string(),
                    line,
                }
                                                  })?;
        found.get(field)
             .cloned()
             .ok_or_else(|| RuntimeError::UnknownField { instance: instance.to_string(),
                                                         field: field.to_string(),
                                                         line })
    }

    /// Writes `instance.field = value`.
    ///
    /// Only fields declared by the instance's struct can be assigned.
    pub fn assign_struct_field(&self,
                               instance: &str,
                               field: &str,
                               value: Value,
                               line: usize)
                               -> EvalResult<()> {
        let mut frame = lock(&self.frame);
        let found = frame.instances.get_mut(instance).ok_or_else(|| {
                                                          RuntimeError::UnknownStructInstance {
                    name: instance.to_string(),
                    line,
                }
                                                      })?;
        let slot = found.get_mut(field)
                        .ok_or_else(|| RuntimeError::UnknownField { instance: instance.to_string(),
                                                                    field: field.to_string(),
                                                                    line })?;
        *slot = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{console::Console, parser::core::parse_script};

    fn context_after(source: &str) -> Context {
        let (console, _) = Console::captured("");
        let context = Context::new(console);
        context.exec_block(&parse_script(source).unwrap()).unwrap();
        context
    }

    #[test]
    fn indexing() {
        let context = context_after("const xs = [10, 20, 30]; const b = xs[1]; const c = xs[2.9];");
        assert_eq!(context.get_variable("b", 1).unwrap(), Value::Integer(20));
        assert_eq!(context.get_variable("c", 1).unwrap(), Value::Integer(30));
    }

    #[test]
    fn out_of_range_index_is_fatal() {
        let context = context_after("const xs = [\"a\"];");
        let index = Expr::IntLiteral { value: 1, line: 2 };
        assert_eq!(context.eval_array_index("xs", &index, 2),
                   Err(RuntimeError::IndexOutOfBounds { index: 1,
                                                        len:   1,
                                                        line:  2, }));
        let negative = Expr::IntLiteral { value: -1, line: 2 };
        assert!(context.eval_array_index("xs", &negative, 2).is_err());
    }

    #[test]
    fn struct_fields() {
        let context = context_after("struct Point { int x, int y }
                                     p : Point;
                                     p.y = 4;");
        assert_eq!(context.eval_struct_field("p", "x", 1).unwrap(), Value::Integer(0));
        assert_eq!(context.eval_struct_field("p", "y", 1).unwrap(), Value::Integer(4));
        assert!(matches!(context.eval_struct_field("p", "z", 1),
                         Err(RuntimeError::UnknownField { .. })));
        assert!(matches!(context.eval_struct_field("q", "x", 1),
                         Err(RuntimeError::UnknownStructInstance { .. })));
    }
}

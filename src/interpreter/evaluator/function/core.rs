use std::fmt;

use log::trace;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{callprogram, print, read},
            registry::Frame,
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the calling context, a slice of evaluated argument
/// values and the line number.
type BuiltinFn = fn(&Context, &[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means the builtin accepts `n` or more arguments.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    AtLeast(usize),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "print"       => { arity: Arity::Exact(1), func: print::print },
    "read"        => { arity: Arity::Exact(0), func: read::read },
    "callprogram" => { arity: Arity::AtLeast(1), func: callprogram::callprogram },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::AtLeast(m) => n >= m,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// Returns `true` for the names of the built-in pseudo functions.
///
/// # Example
/// ```
/// use hrl::interpreter::evaluator::function::core::is_builtin_function;
///
/// assert!(is_builtin_function("callprogram"));
/// assert!(!is_builtin_function("square"));
/// ```
#[must_use]
pub fn is_builtin_function(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name)
}

impl Context {
    /// Evaluates a function call.
    ///
    /// Arguments are evaluated left to right in the caller's frame. The
    /// evaluator then checks whether the name matches a builtin. If so, it
    /// verifies arity and executes the builtin. Otherwise it delegates to
    /// user-defined function handling.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Unevaluated argument expressions.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The function result or an error if lookup or arity fails.
    pub fn eval_function_call(&self,
                              name: &str,
                              arguments: &[Expr],
                              line: usize)
                              -> EvalResult<Value> {
        let arg_vals = arguments.iter()
                                .map(|arg| self.eval_value(arg, line))
                                .collect::<EvalResult<Vec<_>>>()?;

        if let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) {
            if !builtin.arity.check(arg_vals.len()) {
                return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                                 expected: builtin.arity
                                                                                  .to_string(),
                                                                 found: arg_vals.len(),
                                                                 line });
            }
            return (builtin.func)(self, &arg_vals, line);
        }

        self.call_user_defined_function(name, arg_vals, line)
    }

    /// Executes a user-defined function.
    ///
    /// The function is retrieved from the registry by name. Its parameter
    /// count must match the number of supplied arguments. The body runs in a
    /// new frame that holds only the parameters; the caller's variables are
    /// not visible inside it.
    ///
    /// # Errors
    /// - Unknown function name.
    /// - Wrong number of arguments.
    ///
    /// # Returns
    /// The value of the body's top-level `return`, or [`Value::Null`].
    fn call_user_defined_function(&self,
                                  name: &str,
                                  arg_vals: Vec<Value>,
                                  line: usize)
                                  -> EvalResult<Value> {
        let func = self.registry.function(name).ok_or_else(|| {
                                                   RuntimeError::UnknownFunction { name: name.to_string(),
                                                                                   line }
                                               })?;

        if arg_vals.len() != func.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             expected: func.params
                                                                           .len()
                                                                           .to_string(),
                                                             found: arg_vals.len(),
                                                             line });
        }

        trace!("line {line}: calling '{name}' with {} arguments", arg_vals.len());

        let bindings = func.params.iter().cloned().zip(arg_vals);
        let callee = self.with_frame(Frame::with_bindings(bindings));

        callee.exec_block(&func.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{console::Console, parser::core::parse_script};

    fn run(source: &str) -> EvalResult<Context> {
        let (console, _) = Console::captured("");
        let context = Context::new(console);
        context.exec_block(&parse_script(source).unwrap())?;
        Ok(context)
    }

    #[test]
    fn functions_see_only_their_parameters() {
        let result = run("x : int = 5; function f() { return x; } y : int = f();");
        assert!(matches!(result,
                         Err(RuntimeError::UnknownVariable { ref name, .. }) if name == "x"));
    }

    #[test]
    fn arguments_bind_positionally() {
        let context = run("function sub(a, b) { return a - b; } r : int = sub(10, 4);").unwrap();
        assert_eq!(context.get_variable("r", 1).unwrap(), Value::Integer(6));
    }

    #[test]
    fn recursion() {
        let context = run("function fact(n) {
                               r : int = 1;
                               if n > 1 { r = n * fact(n - 1); }
                               return r;
                           }
                           v : int = fact(5);").unwrap();
        assert_eq!(context.get_variable("v", 1).unwrap(), Value::Integer(120));
    }

    #[test]
    fn arity_is_exact() {
        let result = run("function f(a) { return a; } f(1, 2);");
        assert!(matches!(result,
                         Err(RuntimeError::ArgumentCountMismatch { found: 2, ref expected, .. })
                         if expected == "1"));
        assert!(matches!(run("read(1);"),
                         Err(RuntimeError::ArgumentCountMismatch { .. })));
    }

    #[test]
    fn unknown_and_duplicate_functions() {
        assert!(matches!(run("nothing();"), Err(RuntimeError::UnknownFunction { .. })));
        assert!(matches!(run("function f() { } function f() { }"),
                         Err(RuntimeError::FunctionAlreadyDefined { .. })));
    }

    #[test]
    fn missing_return_value_cannot_be_stored() {
        assert!(matches!(run("function f() { } x : int = f();"),
                         Err(RuntimeError::MissingValue { .. })));
    }
}

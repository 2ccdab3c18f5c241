use std::sync::{Arc, Mutex};

use log::{debug, trace};

use crate::{
    ast::{Block, Expr, Statement},
    error::RuntimeError,
    interpreter::{
        console::Console,
        evaluator::{
            registry::{Frame, Registry, StructInstance},
            threadloop::Supervisor,
            utils::lock,
        },
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Outcome of executing one statement.
///
/// `Break` and `Continue` never travel further than the nearest enclosing
/// block: the block stops executing its remaining statements and reports
/// completion, so a loop around it simply carries on. `Returned` is only
/// honored when the `return` is a direct child of the block.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// The statement ran to completion.
    Completed,
    /// A `return` produced this value.
    Returned(Value),
    /// A `break` was executed.
    Break,
    /// A `continue` was executed.
    Continue,
}

/// Stores the runtime evaluation context.
///
/// The context is a set of shared handles: the process-wide registry, the
/// current frame, the console and the threadloop supervisor. Cloning a
/// context is cheap and yields a second view onto the same state, which is
/// how threadloops share the top-level variables with `main`.
///
/// ## Usage
///
/// A context is created once per program run. Function calls derive a
/// context with a fresh frame via [`Context::with_frame`].
#[derive(Clone)]
pub struct Context {
    /// Enums, struct definitions and functions.
    pub registry:   Arc<Registry>,
    /// Variables and struct instances of the current activation.
    pub frame:      Arc<Mutex<Frame>>,
    /// Standard streams used by `print` and `read`.
    pub console:    Console,
    /// Stop flag and failure slot shared with all threadloops.
    pub supervisor: Arc<Supervisor>,
}

impl Context {
    /// Creates a context with empty tables writing to `console`.
    #[must_use]
    pub fn new(console: Console) -> Self {
        Self { registry: Arc::new(Registry::default()),
               frame: Arc::new(Mutex::new(Frame::default())),
               console,
               supervisor: Arc::new(Supervisor::default()) }
    }

    /// Derives a context that shares everything except the frame.
    #[must_use]
    pub fn with_frame(&self, frame: Frame) -> Self {
        Self { registry:   Arc::clone(&self.registry),
               frame:      Arc::new(Mutex::new(frame)),
               console:    self.console.clone(),
               supervisor: Arc::clone(&self.supervisor), }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant. Only calls to functions without
    /// a `return` can yield [`Value::Null`].
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Example
    /// ```
    /// use hrl::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{console::Console, evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let (console, _) = Console::captured("");
    /// let context = Context::new(console);
    /// let expr = Expr::BinaryOp { left:  Box::new(Expr::IntLiteral { value: 7, line: 1 }),
    ///                             op:    BinaryOperator::Div,
    ///                             right: Box::new(Expr::IntLiteral { value: 2, line: 1 }),
    ///                             line:  1, };
    ///
    /// assert_eq!(context.eval(&expr).unwrap(), Value::Integer(3));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::IntLiteral { value, .. } => Ok(Value::Integer(*value)),
            Expr::DoubleLiteral { value, .. } => Ok(Value::Double(*value)),
            Expr::StringLiteral { value, .. } => Ok(Value::String(value.clone())),
            Expr::Variable { name, line } => self.get_variable(name, *line),
            Expr::UnaryOp { op, expr, line } => self.eval_unary_op(*op, expr, *line),
            Expr::BinaryOp { left, op, right, line } => {
                self.eval_binary_op(left, *op, right, *line)
            },
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => self.eval_function_call(name, arguments, *line),
            Expr::EnumValue { enum_name,
                              value_name,
                              line, } => {
                self.registry
                    .enum_ordinal(enum_name, value_name, *line)
                    .map(Value::Integer)
            },
            Expr::StructField { instance, field, line } => {
                self.eval_struct_field(instance, field, *line)
            },
            Expr::ArrayLiteral { elements, line } => self.eval_array_literal(elements, *line),
            Expr::ArrayIndex { array, index, line } => self.eval_array_index(array, index, *line),
        }
    }

    /// Evaluates an expression that must produce a value.
    ///
    /// # Errors
    /// Returns `RuntimeError::MissingValue` when the expression yields the
    /// no-value sentinel.
    pub fn eval_value(&self, expr: &Expr, line: usize) -> EvalResult<Value> {
        let value = self.eval(expr)?;
        if value.is_null() {
            return Err(RuntimeError::MissingValue { line });
        }
        Ok(value)
    }

    /// Executes a block and returns its result.
    ///
    /// Statements run top to bottom. The block stops early when:
    /// - a direct `return` child runs, yielding its value;
    /// - a `break` or `continue` runs, here or in a nested statement that
    ///   passed it up, yielding no value.
    ///
    /// A block that runs to the end yields [`Value::Null`].
    pub fn exec_block(&self, block: &Block) -> EvalResult<Value> {
        for statement in &block.statements {
            match self.exec_statement(statement)? {
                Signal::Completed => {},
                Signal::Returned(value) => return Ok(value),
                Signal::Break | Signal::Continue => {
                    trace!("line {}: block interrupted", statement.line_number());
                    return Ok(Value::Null);
                },
            }
        }
        Ok(Value::Null)
    }

    /// Executes a single statement.
    ///
    /// Nested blocks, `if` and `while` always report [`Signal::Completed`]:
    /// a `return` inside them ends the inner block only.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    ///
    /// # Returns
    /// The [`Signal`] the enclosing block acts on.
    pub fn exec_statement(&self, statement: &Statement) -> EvalResult<Signal> {
        match statement {
            Statement::NoOp { .. } => Ok(Signal::Completed),
            Statement::VariableDeclaration { name,
                                             type_name,
                                             value,
                                             line, } => {
                self.declare_variable(name, type_name.as_deref(), value.as_ref(), *line)?;
                Ok(Signal::Completed)
            },
            Statement::Assignment { name, value, line } => {
                let value = self.eval_value(value, *line)?;
                lock(&self.frame).variables.insert(name.clone(), value);
                Ok(Signal::Completed)
            },
            Statement::FieldAssignment { instance,
                                         field,
                                         value,
                                         line, } => {
                let value = self.eval_value(value, *line)?;
                self.assign_struct_field(instance, field, value, *line)?;
                Ok(Signal::Completed)
            },
            Statement::Call { call, .. } => {
                self.eval(call)?;
                Ok(Signal::Completed)
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            line, } => {
                if self.eval(condition)?.as_condition(*line)? {
                    self.exec_block(then_branch)?;
                } else if let Some(else_branch) = else_branch {
                    self.exec_block(else_branch)?;
                }
                Ok(Signal::Completed)
            },
            Statement::While { condition, body, line } => {
                while self.eval(condition)?.as_condition(*line)? {
                    self.exec_block(body)?;
                }
                Ok(Signal::Completed)
            },
            Statement::Return { value, .. } => Ok(Signal::Returned(self.eval(value)?)),
            Statement::Break { .. } => Ok(Signal::Break),
            Statement::Continue { .. } => Ok(Signal::Continue),
            Statement::Function(def) => {
                self.registry.declare_function(def)?;
                debug!("line {}: declared function '{}'", def.line, def.name);
                Ok(Signal::Completed)
            },
            Statement::EnumDeclaration { name, values, line } => {
                self.registry.declare_enum(name, values);
                debug!("line {line}: declared enum '{name}' with {} values", values.len());
                Ok(Signal::Completed)
            },
            Statement::StructDeclaration { name, fields, line } => {
                self.registry.declare_struct(name, fields);
                debug!("line {line}: declared struct '{name}' with {} fields", fields.len());
                Ok(Signal::Completed)
            },
            Statement::ThreadLoop { name,
                                    params,
                                    body,
                                    line, } => {
                self.spawn_threadloop(name, params, body, *line)?;
                Ok(Signal::Completed)
            },
            Statement::Block(block) => {
                self.exec_block(block)?;
                Ok(Signal::Completed)
            },
        }
    }

    /// Reads a variable from the current frame.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownVariable` if the name is not bound here.
    /// There is no fallback to an enclosing or global frame.
    pub fn get_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        lock(&self.frame).variables
                         .get(name)
                         .cloned()
                         .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                                        line })
    }

    /// Handles `name : type [= value];` and `const name = value;`.
    ///
    /// Without an initializer, a declared struct type creates a struct
    /// instance with default fields; any other type binds its default value.
    fn declare_variable(&self,
                        name: &str,
                        type_name: Option<&str>,
                        value: Option<&Expr>,
                        line: usize)
                        -> EvalResult<()> {
        if let Some(expr) = value {
            let value = self.eval_value(expr, line)?;
            lock(&self.frame).variables.insert(name.to_string(), value);
            return Ok(());
        }

        let type_name = type_name.unwrap_or_default();
        if let Some(fields) = self.registry.struct_fields(type_name) {
            let instance = StructInstance::with_defaults(type_name, &fields);
            lock(&self.frame).instances.insert(name.to_string(), instance);
        } else {
            lock(&self.frame).variables
                             .insert(name.to_string(), Value::default_for_type(type_name));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::parser::core::parse_script;

    fn run(source: &str) -> (Context, Value) {
        let (console, _) = Console::captured("");
        let context = Context::new(console);
        let block = parse_script(source).unwrap();
        let value = context.exec_block(&block).unwrap();
        (context, value)
    }

    #[test]
    fn direct_return_ends_block() {
        let (context, value) = run("x : int = 1; return x + 1; x = 5;");
        assert_eq!(value, Value::Integer(2));
        assert_eq!(context.get_variable("x", 1).unwrap(), Value::Integer(1));
    }

    #[test]
    fn nested_return_ends_inner_block_only() {
        let (context, value) = run("if 1 == 1 { return 3; } y : int = 4;");
        assert_eq!(value, Value::Null);
        assert_eq!(context.get_variable("y", 1).unwrap(), Value::Integer(4));
    }

    #[test]
    fn break_leaves_only_its_block() {
        let (context, _) = run("i : int = 0; hits : int = 0;
                                while i < 3 {
                                    i = i + 1;
                                    if i == 2 { break; hits = 100; }
                                    hits = hits + 1;
                                }");
        assert_eq!(context.get_variable("i", 1).unwrap(), Value::Integer(3));
        assert_eq!(context.get_variable("hits", 1).unwrap(), Value::Integer(3));
    }

    #[test]
    fn declarations_without_initializer_use_defaults() {
        let (context, _) = run("n : int; s : string; d : double;");
        assert_eq!(context.get_variable("n", 1).unwrap(), Value::Integer(0));
        assert_eq!(context.get_variable("s", 1).unwrap(), Value::String(String::new()));
        assert_eq!(context.get_variable("d", 1).unwrap(), Value::Double(0.0));
    }

    #[test]
    fn assignment_creates_missing_variables() {
        let (context, _) = run("fresh = 8;");
        assert_eq!(context.get_variable("fresh", 1).unwrap(), Value::Integer(8));
    }

    #[test]
    fn conditions_must_be_boolean() {
        let (console, _) = Console::captured("");
        let context = Context::new(console);
        let block = parse_script("if 1 { }").unwrap();
        assert!(matches!(context.exec_block(&block),
                         Err(RuntimeError::ExpectedBoolean { line: 1, .. })));
    }
}

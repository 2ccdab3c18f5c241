use std::sync::Arc;

/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions always produce a value when evaluated (possibly the no-value
/// sentinel for calls to functions without a `return`). Every variant carries
/// the source line it started on for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An integer literal such as `42`.
    IntLiteral {
        /// The literal value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A double literal such as `1.5`.
    DoubleLiteral {
        /// The literal value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal such as `"hello"`.
    StringLiteral {
        /// The unescaped contents.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (`+x`, `-x`, `not x`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Function call expression (e.g. `square(x)` or `print(x)`).
    ///
    /// `print`, `read` and `callprogram` are resolved when the call is
    /// evaluated, not when it is parsed.
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Enum value reference (`Color::GREEN`).
    EnumValue {
        /// The enum name.
        enum_name:  String,
        /// The member name.
        value_name: String,
        /// Line number in the source code.
        line:       usize,
    },
    /// Struct field reference (`point.x`).
    StructField {
        /// Name of the struct instance.
        instance: String,
        /// Name of the field.
        field:    String,
        /// Line number in the source code.
        line:     usize,
    },
    /// Array literal expression (`[1, 2, 3]`).
    ArrayLiteral {
        /// Elements of the array.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Array indexing expression (`xs[2]`).
    ArrayIndex {
        /// Name of the array variable.
        array: String,
        /// The index to access.
        index: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use hrl::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::IntLiteral { line, .. }
            | Self::DoubleLiteral { line, .. }
            | Self::StringLiteral { line, .. }
            | Self::Variable { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::FunctionCall { line, .. }
            | Self::EnumValue { line, .. }
            | Self::StructField { line, .. }
            | Self::ArrayLiteral { line, .. }
            | Self::ArrayIndex { line, .. } => *line,
        }
    }
}

/// An ordered sequence of statements.
///
/// A block is the unit that intercepts `break` and `continue`, and the unit a
/// `return` short-circuits.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    /// Statements inside the block.
    pub statements: Vec<Statement>,
    /// Line of the opening brace.
    pub line:       usize,
}

/// Represents a user-defined function definition.
///
/// The body is shared between the declaration statement and the function
/// table; calls never copy it.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, bound positionally.
    pub params: Vec<String>,
    /// The body evaluated when the function is called.
    pub body:   Block,
    /// Line number in the source code.
    pub line:   usize,
}

/// A field of a struct declaration: `(type, name)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Declared type name, used to pick the field's default value.
    pub type_name: String,
    /// Field name.
    pub name:      String,
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// An empty statement (`;`).
    NoOp {
        /// Line number in the source code.
        line: usize,
    },
    /// A variable declaration: `x : int = 1;`, `x : int;` or `const x = 1;`.
    VariableDeclaration {
        /// The name of the variable.
        name:      String,
        /// The annotated type, absent for `const`.
        type_name: Option<String>,
        /// The initializer, if any.
        value:     Option<Expr>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A variable assignment: `x = expr;`.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A struct field assignment: `p.x = expr;`.
    FieldAssignment {
        /// Name of the struct instance.
        instance: String,
        /// Name of the field.
        field:    String,
        /// The value which is being assigned.
        value:    Expr,
        /// Line number in the source code.
        line:     usize,
    },
    /// A call used as a statement; its result is discarded.
    Call {
        /// The call expression.
        call: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `if cond { } else { }`.
    If {
        /// The condition, which must evaluate to a boolean.
        condition:   Expr,
        /// Block evaluated when the condition holds.
        then_branch: Block,
        /// Block evaluated otherwise; `else if` nests another `If` here.
        else_branch: Option<Block>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `while cond { }`.
    While {
        /// The loop condition, re-tested before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Block,
        /// Line number in the source code.
        line:      usize,
    },
    /// `return expr;`.
    Return {
        /// The returned expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `break;`.
    Break {
        /// Line number in the source code.
        line: usize,
    },
    /// `continue;`.
    Continue {
        /// Line number in the source code.
        line: usize,
    },
    /// `function name(params) { }`.
    Function(Arc<FunctionDef>),
    /// `enum Name { A, B, C }`.
    EnumDeclaration {
        /// The enum name.
        name:   String,
        /// Member names in declaration order.
        values: Vec<String>,
        /// Line number in the source code.
        line:   usize,
    },
    /// `struct Name { int x, int y }`.
    StructDeclaration {
        /// The struct name.
        name:   String,
        /// Fields in declaration order.
        fields: Vec<FieldDef>,
        /// Line number in the source code.
        line:   usize,
    },
    /// `threadloop name(params) { }`.
    ThreadLoop {
        /// The loop name, used in diagnostics.
        name:   String,
        /// Variables the loop body depends on.
        params: Vec<String>,
        /// Body evaluated forever on a background thread.
        body:   Arc<Block>,
        /// Line number in the source code.
        line:   usize,
    },
    /// A nested block.
    Block(Block),
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::NoOp { line }
            | Self::VariableDeclaration { line, .. }
            | Self::Assignment { line, .. }
            | Self::FieldAssignment { line, .. }
            | Self::Call { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::Return { line, .. }
            | Self::Break { line }
            | Self::Continue { line }
            | Self::EnumDeclaration { line, .. }
            | Self::StructDeclaration { line, .. }
            | Self::ThreadLoop { line, .. } => *line,
            Self::Function(def) => def.line,
            Self::Block(block) => block.line,
        }
    }
}

/// A whole HRL program: `setup { } main { }`.
///
/// `setup` runs once, `main` runs repeatedly.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// Block evaluated once at start-up.
    pub setup: Block,
    /// Block evaluated on every iteration of the main loop.
    pub main:  Block,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Truncating division (`/`)
    Div,
    /// Truncating remainder (`%`)
    Mod,
    /// String concatenation (`..`)
    Concat,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`and`, `&&`)
    And,
    /// Logical or (`or`, `||`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Numeric pass-through (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Negate,
    /// Logical NOT (`not x`, `!x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Concat, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul,
            NotEqual, Or, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Concat => "..",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "and",
            Or => "or",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Not => "not",
        };
        write!(f, "{operator}")
    }
}

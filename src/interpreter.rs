/// Standard output and standard input handles used by `print` and `read`.
///
/// The console is injectable so embedders and tests can capture output and
/// feed input without touching the process streams.
pub mod console;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST against a shared execution context, applies
/// operator semantics and coercions, manages the variable, function, enum and
/// struct tables, and drives the `setup`/`main` program loop and background
/// threadloops.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, functions, control flow, enums, structs and arrays.
/// - Reports runtime errors such as division by zero or undefined names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The tokenizer reads the raw source text and produces tokens lazily, one per
/// request, each corresponding to a keyword, literal, identifier, operator or
/// delimiter. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Reports lexical errors for empty input, unterminated strings and unknown
///   operators.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the tokenizer with one token of lookahead and
/// constructs the `setup`/`main` program tree by recursive descent.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates grammar, reporting the expected construct on mismatch.
/// - Requires the program to be followed by end of input.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the dynamically-typed values an HRL program computes
/// with: integers, doubles, strings, booleans, homogeneous arrays of each, and
/// the no-value sentinel. It also provides the coercions the operators rely on
/// and the canonical text form used by `print` and `..`.
pub mod value;

/// Parser entry points and the token stream.
///
/// Holds the one-token lookahead over the tokenizer, the program and script
/// entry points, and the expression entry point.
pub mod core;

/// Unary and primary expressions.
///
/// Handles prefix operators, literals, parenthesized expressions, array
/// literals and everything that starts with an identifier.
pub mod unary;

/// Binary operator parsing.
///
/// One function per precedence level, from logical OR down to
/// multiplication.
pub mod binary;

/// Block parsing.
///
/// Parses brace-delimited statement sequences.
pub mod block;

/// Utility functions for the parser.
///
/// Comma-separated lists and identifier helpers shared by several rules.
pub mod utils;

/// Statement parsing.
///
/// Declarations, assignments, calls, control flow, and the `function`,
/// `enum`, `struct` and `threadloop` constructs.
pub mod statement;

/// Lexical errors.
///
/// Raised by the tokenizer for empty input, unterminated strings and character
/// sequences that match no token.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// the token stream, including lexical errors surfaced on demand.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: type
/// mismatches, undefined names, arithmetic faults and failed external calls.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Top-level error for a whole interpreter run.
///
/// Every variant is fatal; HRL programs have no way to recover from errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The source could not be tokenized.
    #[error("Lexical error: {0}")]
    Lex(#[from] LexError),
    /// The source could not be parsed.
    #[error("Syntax error: {0}")]
    Parse(#[from] ParseError),
    /// Evaluation aborted.
    #[error("Runtime error: {0}")]
    Runtime(#[from] RuntimeError),
    /// Reading the source file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

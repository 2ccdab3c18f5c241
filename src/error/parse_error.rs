use crate::error::LexError;

/// Represents all errors that can occur during lexing or parsing.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The tokenizer failed while the parser pulled the next token.
    #[error(transparent)]
    Lexical(#[from] LexError),
    /// Found a token other than the one the grammar rule requires.
    #[error("Error on line {line}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// Description of the expected token class.
        expected: String,
        /// The token encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input while a construct was still open.
    #[error("Error on line {line}: Unexpected end of input, expected {expected}.")]
    UnexpectedEndOfInput {
        /// Description of the expected token class.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Found extra tokens after the program should have ended.
    #[error("Error on line {line}: Expected end of input, found {token}.")]
    TrailingTokens {
        /// The extra token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Tried to use a keyword or builtin name where a new name is declared.
    #[error("Error on line {line}: Identifier '{name}' is reserved.")]
    IdentifierReserved {
        /// The reserved identifier name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

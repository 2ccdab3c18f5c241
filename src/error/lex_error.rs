/// Represents all errors the tokenizer can raise.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// The source text was empty.
    #[error("Empty input.")]
    EmptyInput,
    /// A string literal reached the end of input without a closing quote.
    #[error("Error on line {line}: Unterminated string.")]
    UnterminatedString {
        /// The source line where the string started.
        line: usize,
    },
    /// A character sequence matched no token.
    #[error("Error on line {line}: Invalid operator: '{text}'.")]
    InvalidOperator {
        /// The offending text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer literal does not fit in 64 bits.
    #[error("Error on line {line}: Integer literal '{text}' is too large.")]
    IntegerTooLarge {
        /// The literal text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

/// Error kind produced inside the `logos` callbacks.
///
/// The lexer wrapper attaches the slice and line number and turns it into a
/// [`LexError`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// No token matched.
    #[default]
    InvalidToken,
    /// A string literal was not closed.
    UnterminatedString,
    /// An integer literal overflowed.
    IntegerTooLarge,
}

use logos::Logos;

use crate::error::{LexError, lex_error::LexErrorKind};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
pub enum Token {
    /// Double literal tokens, such as `3.14`.
    #[regex(r"[0-9]+\.[0-9]+", parse_double)]
    Double(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Double-quoted string literal; `\"` is the only escape.
    #[token("\"", lex_string)]
    Str(String),
    /// `setup`
    #[token("setup")]
    Setup,
    /// `main`
    #[token("main")]
    Main,
    /// `enum`
    #[token("enum")]
    Enum,
    /// `struct`
    #[token("struct")]
    Struct,
    /// `while`
    #[token("while")]
    While,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `const`
    #[token("const")]
    Const,
    /// `function`
    #[token("function")]
    Function,
    /// `threadloop`
    #[token("threadloop")]
    ThreadLoop,
    /// `break`
    #[token("break")]
    Break,
    /// `continue`
    #[token("continue")]
    Continue,
    /// `return`
    #[token("return")]
    Return,
    /// `and` or `&&`
    #[token("and")]
    #[token("&&")]
    And,
    /// `or` or `||`
    #[token("or")]
    #[token("||")]
    Or,
    /// `not` or `!`
    #[token("not")]
    #[token("!")]
    Not,
    /// Identifier tokens; variable, function, type or field names.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `..`
    #[token("..")]
    DotDot,
    /// `.`
    #[token(".")]
    Dot,
    /// `::`
    #[token("::")]
    DoubleColon,
    /// `:`
    #[token(":")]
    Colon,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// End of input. Never produced by `logos` itself; the [`Tokenizer`]
    /// returns it once the source is exhausted.
    Eof,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Double(value) => write!(f, "number {value}"),
            Self::Integer(value) => write!(f, "number {value}"),
            Self::Str(value) => write!(f, "string \"{value}\""),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Eof => write!(f, "end of input"),
            other => write!(f, "'{}'", other.symbol()),
        }
    }
}

impl Token {
    /// Source spelling of keyword and punctuation tokens.
    const fn symbol(&self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Main => "main",
            Self::Enum => "enum",
            Self::Struct => "struct",
            Self::While => "while",
            Self::If => "if",
            Self::Else => "else",
            Self::Const => "const",
            Self::Function => "function",
            Self::ThreadLoop => "threadloop",
            Self::Break => "break",
            Self::Continue => "continue",
            Self::Return => "return",
            Self::And => "and",
            Self::Or => "or",
            Self::Not => "not",
            Self::DotDot => "..",
            Self::Dot => ".",
            Self::DoubleColon => "::",
            Self::Colon => ":",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Equals => "=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Double(_)
            | Self::Integer(_)
            | Self::Str(_)
            | Self::Identifier(_)
            | Self::Comment
            | Self::NewLine
            | Self::Ignored
            | Self::Eof => "",
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Pull-based tokenizer over a source string.
///
/// Tokens are produced one at a time on demand. Once the input is exhausted
/// every further call yields [`Token::Eof`].
pub struct Tokenizer<'source> {
    lexer: logos::Lexer<'source, Token>,
}

impl<'source> Tokenizer<'source> {
    /// Creates a tokenizer for `source`.
    ///
    /// # Errors
    /// Returns `LexError::EmptyInput` if `source` is empty.
    pub fn new(source: &'source str) -> Result<Self, LexError> {
        if source.is_empty() {
            return Err(LexError::EmptyInput);
        }
        Ok(Self { lexer: Token::lexer_with_extras(source, LexerExtras::default()) })
    }

    /// Line the tokenizer is currently positioned on.
    #[must_use]
    pub fn line(&self) -> usize {
        self.lexer.extras.line
    }

    /// Produces the next token together with the line it ends on.
    ///
    /// # Errors
    /// Returns a [`LexError`] for unterminated strings, oversized integers
    /// and character sequences that match no token.
    ///
    /// # Example
    /// ```
    /// use hrl::interpreter::lexer::{Token, Tokenizer};
    ///
    /// let mut tokenizer = Tokenizer::new("x = 1;").unwrap();
    /// assert_eq!(tokenizer.next_token().unwrap().0, Token::Identifier("x".into()));
    /// assert_eq!(tokenizer.next_token().unwrap().0, Token::Equals);
    /// assert_eq!(tokenizer.next_token().unwrap().0, Token::Integer(1));
    /// assert_eq!(tokenizer.next_token().unwrap().0, Token::Semicolon);
    /// assert_eq!(tokenizer.next_token().unwrap().0, Token::Eof);
    /// assert_eq!(tokenizer.next_token().unwrap().0, Token::Eof);
    /// ```
    pub fn next_token(&mut self) -> Result<(Token, usize), LexError> {
        let start_line = self.lexer.extras.line;
        match self.lexer.next() {
            None => Ok((Token::Eof, self.lexer.extras.line)),
            Some(Ok(token)) => Ok((token, self.lexer.extras.line)),
            Some(Err(LexErrorKind::UnterminatedString)) => {
                Err(LexError::UnterminatedString { line: start_line })
            },
            Some(Err(LexErrorKind::IntegerTooLarge)) => {
                Err(LexError::IntegerTooLarge { text: self.lexer.slice().to_string(),
                                                line: start_line, })
            },
            Some(Err(LexErrorKind::InvalidToken)) => {
                Err(LexError::InvalidOperator { text: self.lexer.slice().to_string(),
                                                line: self.lexer.extras.line, })
            },
        }
    }
}

/// Parses a double literal from the current token slice.
fn parse_double(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
///
/// # Errors
/// Returns `LexErrorKind::IntegerTooLarge` when the digits overflow `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexErrorKind> {
    lex.slice().parse().map_err(|_| LexErrorKind::IntegerTooLarge)
}

/// Consumes a string literal after its opening quote.
///
/// Scans the remainder up to the next unescaped `"`. The sequence `\"`
/// produces a literal quote; every other character, including a lone
/// backslash, is taken as is. Newlines inside the literal advance the line
/// counter.
///
/// # Errors
/// Returns `LexErrorKind::UnterminatedString` if the input ends first; the
/// whole remainder is consumed in that case.
fn lex_string(lex: &mut logos::Lexer<Token>) -> Result<String, LexErrorKind> {
    let remainder = lex.remainder();
    let mut value = String::new();
    let mut newlines = 0;
    let mut end = None;

    let mut chars = remainder.char_indices().peekable();
    while let Some((position, c)) = chars.next() {
        match c {
            '"' => {
                end = Some(position + 1);
                break;
            },
            '\\' if matches!(chars.peek(), Some((_, '"'))) => {
                chars.next();
                value.push('"');
            },
            '\n' => {
                newlines += 1;
                value.push(c);
            },
            _ => value.push(c),
        }
    }

    lex.extras.line += newlines;
    match end {
        Some(consumed) => {
            lex.bump(consumed);
            Ok(value)
        },
        None => {
            lex.bump(remainder.len());
            Err(LexErrorKind::UnterminatedString)
        },
    }
}

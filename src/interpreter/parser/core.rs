use crate::{
    ast::{Block, Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Token, Tokenizer},
        parser::{binary::parse_logical_or, block::parse_block, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// One-token lookahead over a [`Tokenizer`].
///
/// The parser pulls tokens on demand; `current` is always the first token of
/// the rule about to be parsed.
pub struct TokenStream<'source> {
    tokenizer: Tokenizer<'source>,
    current:   Token,
    line:      usize,
}

impl<'source> TokenStream<'source> {
    /// Creates a stream positioned at the first token of `source`.
    ///
    /// # Errors
    /// Returns a lexical error for empty input or a malformed first token.
    pub fn new(source: &'source str) -> ParseResult<Self> {
        let mut tokenizer = Tokenizer::new(source)?;
        let (current, line) = tokenizer.next_token()?;
        Ok(Self { tokenizer,
                  current,
                  line })
    }

    /// The lookahead token.
    #[must_use]
    pub const fn peek(&self) -> &Token {
        &self.current
    }

    /// Line of the lookahead token.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns `true` if the lookahead equals `token`.
    #[must_use]
    pub fn check(&self, token: &Token) -> bool {
        &self.current == token
    }

    /// Consumes the lookahead and pulls the next token.
    ///
    /// # Errors
    /// Returns a lexical error if the following token is malformed.
    pub fn advance(&mut self) -> ParseResult<Token> {
        let (next, line) = self.tokenizer.next_token()?;
        self.line = line;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consumes the lookahead if it equals `token`.
    ///
    /// # Errors
    /// Returns a lexical error if the following token is malformed.
    pub fn consume_if(&mut self, token: &Token) -> ParseResult<bool> {
        if self.check(token) {
            self.advance()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Consumes `token` or fails naming what was expected.
    ///
    /// # Errors
    /// Returns `UnexpectedToken`, or `UnexpectedEndOfInput` at end of input.
    pub fn expect(&mut self, token: &Token, expected: &str) -> ParseResult<()> {
        if self.check(token) {
            self.advance()?;
            return Ok(());
        }
        Err(self.error(expected))
    }

    /// Builds the error for a lookahead that does not fit the current rule.
    #[must_use]
    pub fn error(&self, expected: &str) -> ParseError {
        if self.current == Token::Eof {
            ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                               line:     self.line, }
        } else {
            ParseError::UnexpectedToken { expected: expected.to_string(),
                                          found:    self.current.to_string(),
                                          line:     self.line, }
        }
    }
}

/// Parses a complete program.
///
/// Grammar: `program := "setup" block "main" block EOF`
///
/// # Errors
/// Returns the first lexical or syntax error encountered, or
/// `TrailingTokens` if anything follows the `main` block.
///
/// # Example
/// ```
/// use hrl::interpreter::parser::core::parse_program;
///
/// let program = parse_program("setup { const a = 3; } main { print(a); }").unwrap();
/// assert_eq!(program.setup.statements.len(), 1);
/// assert_eq!(program.main.statements.len(), 1);
///
/// assert!(parse_program("main { }").is_err());
/// ```
pub fn parse_program(source: &str) -> ParseResult<Program> {
    let mut tokens = TokenStream::new(source)?;

    tokens.expect(&Token::Setup, "'setup' at start of program")?;
    let setup = parse_block(&mut tokens)?;
    tokens.expect(&Token::Main, "'main' block after setup")?;
    let main = parse_block(&mut tokens)?;

    expect_end(&tokens)?;
    Ok(Program { setup, main })
}

/// Parses a bare statement sequence with no `setup`/`main` wrapper.
///
/// Grammar: `script := statement* EOF`
///
/// # Errors
/// Returns the first lexical or syntax error encountered.
pub fn parse_script(source: &str) -> ParseResult<Block> {
    let mut tokens = TokenStream::new(source)?;
    let line = tokens.line();

    let mut statements = Vec::new();
    while !tokens.check(&Token::Eof) {
        statements.push(parse_statement(&mut tokens)?);
    }

    Ok(Block { statements, line })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := logical_or`
pub fn parse_expression(tokens: &mut TokenStream) -> ParseResult<Expr> {
    parse_logical_or(tokens)
}

/// Fails unless the stream is exhausted.
fn expect_end(tokens: &TokenStream) -> ParseResult<()> {
    match tokens.peek() {
        Token::Eof => Ok(()),
        token => Err(ParseError::TrailingTokens { token: token.to_string(),
                                                  line:  tokens.line(), }),
    }
}

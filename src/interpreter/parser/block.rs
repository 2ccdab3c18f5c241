use crate::{
    ast::Block,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, TokenStream},
            statement::parse_statement,
        },
    },
};

/// Parses a block delimited by braces.
///
/// A block consists of zero or more statements. Parsing continues until the
/// closing `}`, which is consumed.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Returns
/// The parsed [`Block`].
pub fn parse_block(tokens: &mut TokenStream) -> ParseResult<Block> {
    let line = tokens.line();
    tokens.expect(&Token::LBrace, "'{' at start of block")?;

    let mut statements = Vec::new();
    loop {
        match tokens.peek() {
            Token::RBrace => {
                tokens.advance()?;
                break;
            },
            Token::Eof => return Err(tokens.error("'}' at end of block")),
            _ => statements.push(parse_statement(tokens)?),
        }
    }

    Ok(Block { statements, line })
}

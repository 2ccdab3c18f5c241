use crate::{
    error::ParseError,
    interpreter::{
        evaluator::function::core::is_builtin_function,
        lexer::Token,
        parser::core::{ParseResult, TokenStream},
    },
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by argument lists, parameter lists, array
/// literals, and enum and struct bodies. It repeatedly calls `parse_item` to
/// parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list, and a
/// trailing comma before the closing token is accepted.
///
/// Grammar (simplified): `list := (item ("," item)* ","?)? closing`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g., `]` or `)`).
///
/// # Returns
/// A vector of parsed items.
pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
    tokens: &mut TokenStream,
    mut parse_item: impl FnMut(&mut TokenStream) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>> {
    let mut items = Vec::new();
    if tokens.consume_if(closing)? {
        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        if tokens.consume_if(&Token::Comma)? {
            if tokens.consume_if(closing)? {
                break;
            }
            continue;
        }
        if tokens.consume_if(closing)? {
            break;
        }
        return Err(tokens.error(&format!("',' or {closing}")));
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// # Parameters
/// - `tokens`: Token stream positioned at an identifier.
/// - `expected`: Description used in the error if no identifier is found.
pub(in crate::interpreter::parser) fn parse_identifier(tokens: &mut TokenStream,
                                                       expected: &str)
                                                       -> ParseResult<String> {
    if let Token::Identifier(_) = tokens.peek() {
        if let Token::Identifier(name) = tokens.advance()? {
            return Ok(name);
        }
    }
    Err(tokens.error(expected))
}

/// Parses a parenthesized parameter list: `"(" identifier,* ")"`.
pub(in crate::interpreter::parser) fn parse_parameters(tokens: &mut TokenStream)
                                                       -> ParseResult<Vec<String>> {
    tokens.expect(&Token::LParen, "'(' before parameters")?;
    parse_comma_separated(tokens,
                          |tokens| parse_identifier(tokens, "parameter name"),
                          &Token::RParen)
}

/// Rejects declarations that would shadow a built-in pseudo function.
pub(in crate::interpreter::parser) fn check_not_builtin(name: &str,
                                                        line: usize)
                                                        -> ParseResult<()> {
    if is_builtin_function(name) {
        return Err(ParseError::IdentifierReserved { name: name.to_string(),
                                                    line });
    }
    Ok(())
}

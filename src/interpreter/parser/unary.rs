use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, TokenStream, parse_expression},
            utils::{parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a unary expression.
///
/// Prefix operators bind tighter than any binary operator and may be
/// stacked (`- -x`, `not not b`).
///
/// The rule is: `unary := ("+" | "-" | "not" | "!") unary | primary`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the operator or operand.
///
/// # Returns
/// An `Expr::UnaryOp`, or the primary expression itself.
pub fn parse_unary(tokens: &mut TokenStream) -> ParseResult<Expr> {
    let op = match tokens.peek() {
        Token::Plus => UnaryOperator::Plus,
        Token::Minus => UnaryOperator::Negate,
        Token::Not => UnaryOperator::Not,
        _ => return parse_primary(tokens),
    };
    let line = tokens.line();
    tokens.advance()?;
    let expr = parse_unary(tokens)?;
    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       line })
}

/// Parses a primary expression.
///
/// Primary expressions are the atoms of the grammar: literals, array
/// literals, parenthesized expressions and identifier-led forms.
///
/// The rule is: `primary := INT | DOUBLE | STRING | "(" expression ")" |
/// array_literal | identifier_expression`
pub fn parse_primary(tokens: &mut TokenStream) -> ParseResult<Expr> {
    let line = tokens.line();
    match tokens.peek() {
        Token::Integer(_) | Token::Double(_) | Token::Str(_) => {
            match tokens.advance()? {
                Token::Integer(value) => Ok(Expr::IntLiteral { value, line }),
                Token::Double(value) => Ok(Expr::DoubleLiteral { value, line }),
                Token::Str(value) => Ok(Expr::StringLiteral { value, line }),
                _ => Err(tokens.error("literal")),
            }
        },
        Token::LParen => {
            tokens.advance()?;
            let expr = parse_expression(tokens)?;
            tokens.expect(&Token::RParen, "')' after expression")?;
            Ok(expr)
        },
        Token::LBracket => parse_array_literal(tokens),
        Token::Identifier(_) => parse_identifier_expression(tokens),
        _ => Err(tokens.error("expression")),
    }
}

/// Parses an array literal: `"[" expression,* "]"`.
pub fn parse_array_literal(tokens: &mut TokenStream) -> ParseResult<Expr> {
    let line = tokens.line();
    tokens.expect(&Token::LBracket, "'['")?;
    let elements = parse_comma_separated(tokens, parse_expression, &Token::RBracket)?;
    Ok(Expr::ArrayLiteral { elements, line })
}

/// Parses an argument list: `"(" expression,* ")"`.
pub fn parse_arguments(tokens: &mut TokenStream) -> ParseResult<Vec<Expr>> {
    tokens.expect(&Token::LParen, "'(' before arguments")?;
    parse_comma_separated(tokens, parse_expression, &Token::RParen)
}

/// Parses an expression that begins with an identifier.
///
/// The token after the identifier decides the form:
///
/// - `(` starts a function call,
/// - `::` names an enum value,
/// - `.` names a struct field,
/// - `[` indexes an array,
/// - anything else leaves a bare variable reference.
pub fn parse_identifier_expression(tokens: &mut TokenStream) -> ParseResult<Expr> {
    let line = tokens.line();
    let name = parse_identifier(tokens, "identifier")?;

    match tokens.peek() {
        Token::LParen => {
            let arguments = parse_arguments(tokens)?;
            Ok(Expr::FunctionCall { name,
                                    arguments,
                                    line })
        },
        Token::DoubleColon => {
            tokens.advance()?;
            let value_name = parse_identifier(tokens, "enum value after '::'")?;
            Ok(Expr::EnumValue { enum_name: name,
                                 value_name,
                                 line })
        },
        Token::Dot => {
            tokens.advance()?;
            let field = parse_identifier(tokens, "field name after '.'")?;
            Ok(Expr::StructField { instance: name,
                                   field,
                                   line })
        },
        Token::LBracket => {
            tokens.advance()?;
            let index = parse_expression(tokens)?;
            tokens.expect(&Token::RBracket, "']' after index")?;
            Ok(Expr::ArrayIndex { array: name,
                                  index: Box::new(index),
                                  line })
        },
        _ => Ok(Expr::Variable { name, line }),
    }
}

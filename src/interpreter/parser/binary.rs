use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, TokenStream},
            unary::parse_unary,
        },
    },
};

/// Parses one left-associative precedence level.
///
/// Repeatedly parses `next`, joining the operands with any operator from
/// `accepts`. Each node takes the line of its operator.
fn parse_left_associative(tokens: &mut TokenStream,
                          next: fn(&mut TokenStream) -> ParseResult<Expr>,
                          accepts: fn(BinaryOperator) -> bool)
                          -> ParseResult<Expr> {
    let mut left = next(tokens)?;
    while let Some(op) = token_to_binary_operator(tokens.peek())
          && accepts(op)
    {
        let line = tokens.line();
        tokens.advance()?;
        let right = next(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }
    Ok(left)
}

/// Parses logical OR expressions.
///
/// The rule is: `logical_or := logical_and (("or" | "||") logical_and)*`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the expression.
///
/// # Returns
/// An `Expr::BinaryOp` tree, or the operand itself if no `or` follows.
pub fn parse_logical_or(tokens: &mut TokenStream) -> ParseResult<Expr> {
    parse_left_associative(tokens, parse_logical_and, |op| op == BinaryOperator::Or)
}

/// Parses logical AND expressions.
///
/// The rule is: `logical_and := relational (("and" | "&&") relational)*`
pub fn parse_logical_and(tokens: &mut TokenStream) -> ParseResult<Expr> {
    parse_left_associative(tokens, parse_relational, |op| op == BinaryOperator::And)
}

/// Parses comparison expressions.
///
/// All six comparison operators share one level and associate to the left,
/// so `a < b == c` compares the boolean `a < b` with `c`.
///
/// The rule is: `relational := additive (("==" | "!=" | "<" | "<=" | ">" |
/// ">=") additive)*`
pub fn parse_relational(tokens: &mut TokenStream) -> ParseResult<Expr> {
    parse_left_associative(tokens, parse_additive, |op| {
        matches!(op,
                 BinaryOperator::Equal
                 | BinaryOperator::NotEqual
                 | BinaryOperator::Less
                 | BinaryOperator::LessEqual
                 | BinaryOperator::Greater
                 | BinaryOperator::GreaterEqual)
    })
}

/// Parses addition, subtraction and concatenation.
///
/// The rule is: `additive := multiplicative (("+" | "-" | "..")
/// multiplicative)*`
pub fn parse_additive(tokens: &mut TokenStream) -> ParseResult<Expr> {
    parse_left_associative(tokens, parse_multiplicative, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub | BinaryOperator::Concat)
    })
}

/// Parses multiplication-level expressions.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "%") unary)*`
pub fn parse_multiplicative(tokens: &mut TokenStream) -> ParseResult<Expr> {
    parse_left_associative(tokens, parse_unary, |op| {
        matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
    })
}

/// Maps a token to its binary operator, if it is one.
///
/// # Example
/// ```
/// use hrl::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::DotDot), Some(BinaryOperator::Concat));
/// assert_eq!(token_to_binary_operator(&Token::Semicolon), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    use BinaryOperator::{
        Add, And, Concat, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual,
        Or, Sub,
    };
    match token {
        Token::Plus => Some(Add),
        Token::Minus => Some(Sub),
        Token::Star => Some(Mul),
        Token::Slash => Some(Div),
        Token::Percent => Some(Mod),
        Token::DotDot => Some(Concat),
        Token::Less => Some(Less),
        Token::Greater => Some(Greater),
        Token::LessEqual => Some(LessEqual),
        Token::GreaterEqual => Some(GreaterEqual),
        Token::EqualEqual => Some(Equal),
        Token::BangEqual => Some(NotEqual),
        Token::And => Some(And),
        Token::Or => Some(Or),
        _ => None,
    }
}

use std::sync::Arc;

use crate::{
    ast::{Block, Expr, FieldDef, FunctionDef, Statement},
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, TokenStream, parse_expression},
            unary::parse_arguments,
            utils::{check_not_builtin, parse_comma_separated, parse_identifier, parse_parameters},
        },
    },
};

/// Parses a single statement.
///
/// The lookahead token selects the rule:
/// - `;` is an empty statement.
/// - a keyword starts the matching construct (`const`, `if`, `while`,
///   `return`, `break`, `continue`, `function`, `enum`, `struct`,
///   `threadloop`).
/// - `{` opens a nested block.
/// - an identifier starts a declaration, assignment, field assignment or
///   call, decided by the token that follows it.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first token of the statement.
///
/// # Returns
/// A parsed [`Statement`] node, with the lookahead left on the token after
/// it.
pub fn parse_statement(tokens: &mut TokenStream) -> ParseResult<Statement> {
    let line = tokens.line();
    match tokens.peek() {
        Token::Semicolon => {
            tokens.advance()?;
            Ok(Statement::NoOp { line })
        },
        Token::Const => parse_const_declaration(tokens),
        Token::If => parse_if(tokens),
        Token::While => parse_while(tokens),
        Token::Return => {
            tokens.advance()?;
            let value = parse_expression(tokens)?;
            tokens.expect(&Token::Semicolon, "';' after return value")?;
            Ok(Statement::Return { value, line })
        },
        Token::Break => {
            tokens.advance()?;
            tokens.expect(&Token::Semicolon, "';' after 'break'")?;
            Ok(Statement::Break { line })
        },
        Token::Continue => {
            tokens.advance()?;
            tokens.expect(&Token::Semicolon, "';' after 'continue'")?;
            Ok(Statement::Continue { line })
        },
        Token::Function => parse_function_definition(tokens),
        Token::Enum => parse_enum_declaration(tokens),
        Token::Struct => parse_struct_declaration(tokens),
        Token::ThreadLoop => parse_threadloop(tokens),
        Token::LBrace => Ok(Statement::Block(parse_block(tokens)?)),
        Token::Identifier(_) => parse_identifier_statement(tokens),
        _ => Err(tokens.error("statement")),
    }
}

/// Parses a statement that begins with an identifier.
///
/// Grammar:
/// ```text
/// name ":" type ("=" expression)? ";"
/// name "=" expression ";"
/// name "." field "=" expression ";"
/// name "(" arguments ")" ";"
/// ```
fn parse_identifier_statement(tokens: &mut TokenStream) -> ParseResult<Statement> {
    let line = tokens.line();
    let name = parse_identifier(tokens, "identifier")?;

    let statement = match tokens.peek() {
        Token::Colon => {
            tokens.advance()?;
            let type_name = parse_identifier(tokens, "type name after ':'")?;
            let value = if tokens.consume_if(&Token::Equals)? {
                Some(parse_expression(tokens)?)
            } else {
                None
            };
            Statement::VariableDeclaration { name,
                                             type_name: Some(type_name),
                                             value,
                                             line }
        },
        Token::Equals => {
            tokens.advance()?;
            let value = parse_expression(tokens)?;
            Statement::Assignment { name, value, line }
        },
        Token::Dot => {
            tokens.advance()?;
            let field = parse_identifier(tokens, "field name after '.'")?;
            tokens.expect(&Token::Equals, "'=' after struct field")?;
            let value = parse_expression(tokens)?;
            Statement::FieldAssignment { instance: name,
                                         field,
                                         value,
                                         line }
        },
        Token::LParen => {
            let arguments = parse_arguments(tokens)?;
            Statement::Call { call: Expr::FunctionCall { name,
                                                         arguments,
                                                         line },
                              line }
        },
        _ => return Err(tokens.error("':', '=', '.' or '(' after identifier")),
    };

    tokens.expect(&Token::Semicolon, "';' after statement")?;
    Ok(statement)
}

/// Parses `const name = expression;`.
fn parse_const_declaration(tokens: &mut TokenStream) -> ParseResult<Statement> {
    let line = tokens.line();
    tokens.expect(&Token::Const, "'const'")?;
    let name = parse_identifier(tokens, "constant name")?;
    tokens.expect(&Token::Equals, "'=' after constant name")?;
    let value = parse_expression(tokens)?;
    tokens.expect(&Token::Semicolon, "';' after constant")?;
    Ok(Statement::VariableDeclaration { name,
                                        type_name: None,
                                        value: Some(value),
                                        line })
}

/// Parses `if condition block ("else" (if_statement | block))?`.
///
/// An `else if` chain nests each following `if` inside a one-statement else
/// block.
fn parse_if(tokens: &mut TokenStream) -> ParseResult<Statement> {
    let line = tokens.line();
    tokens.expect(&Token::If, "'if'")?;
    let condition = parse_expression(tokens)?;
    let then_branch = parse_block(tokens)?;

    let else_branch = if tokens.consume_if(&Token::Else)? {
        if tokens.check(&Token::If) {
            let nested_line = tokens.line();
            let nested = parse_if(tokens)?;
            Some(Block { statements: vec![nested],
                         line:       nested_line, })
        } else {
            Some(parse_block(tokens)?)
        }
    } else {
        None
    };

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch,
                       line })
}

/// Parses `while condition block`.
fn parse_while(tokens: &mut TokenStream) -> ParseResult<Statement> {
    let line = tokens.line();
    tokens.expect(&Token::While, "'while'")?;
    let condition = parse_expression(tokens)?;
    let body = parse_block(tokens)?;
    Ok(Statement::While { condition, body, line })
}

/// Parses a function definition.
///
/// Grammar: `"function" name "(" params ")" block`
///
/// The names of the built-in pseudo functions cannot be reused.
///
/// # Errors
/// Returns `ParseError::IdentifierReserved` for `print`, `read` and
/// `callprogram`.
fn parse_function_definition(tokens: &mut TokenStream) -> ParseResult<Statement> {
    let line = tokens.line();
    tokens.expect(&Token::Function, "'function'")?;
    let name = parse_identifier(tokens, "function name")?;
    check_not_builtin(&name, line)?;
    let params = parse_parameters(tokens)?;
    let body = parse_block(tokens)?;
    Ok(Statement::Function(Arc::new(FunctionDef { name,
                                                  params,
                                                  body,
                                                  line })))
}

/// Parses `enum Name { A, B, C }`.
fn parse_enum_declaration(tokens: &mut TokenStream) -> ParseResult<Statement> {
    let line = tokens.line();
    tokens.expect(&Token::Enum, "'enum'")?;
    let name = parse_identifier(tokens, "enum name")?;
    tokens.expect(&Token::LBrace, "'{' after enum name")?;
    let values = parse_comma_separated(tokens,
                                       |tokens| parse_identifier(tokens, "enum value"),
                                       &Token::RBrace)?;
    Ok(Statement::EnumDeclaration { name, values, line })
}

/// Parses `struct Name { type field, type field }`.
fn parse_struct_declaration(tokens: &mut TokenStream) -> ParseResult<Statement> {
    let line = tokens.line();
    tokens.expect(&Token::Struct, "'struct'")?;
    let name = parse_identifier(tokens, "struct name")?;
    tokens.expect(&Token::LBrace, "'{' after struct name")?;
    let fields = parse_comma_separated(tokens,
                                       |tokens| {
                                           let type_name =
                                               parse_identifier(tokens, "field type")?;
                                           let name = parse_identifier(tokens, "field name")?;
                                           Ok(FieldDef { type_name, name })
                                       },
                                       &Token::RBrace)?;
    Ok(Statement::StructDeclaration { name, fields, line })
}

/// Parses `threadloop name(params) block`.
fn parse_threadloop(tokens: &mut TokenStream) -> ParseResult<Statement> {
    let line = tokens.line();
    tokens.expect(&Token::ThreadLoop, "'threadloop'")?;
    let name = parse_identifier(tokens, "threadloop name")?;
    let params = parse_parameters(tokens)?;
    let body = parse_block(tokens)?;
    Ok(Statement::ThreadLoop { name,
                               params,
                               body: Arc::new(body),
                               line })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::BinaryOperator,
        error::ParseError,
        interpreter::parser::core::{parse_program, parse_script},
    };

    fn single(source: &str) -> Statement {
        let mut block = parse_script(source).unwrap();
        assert_eq!(block.statements.len(), 1);
        block.statements.remove(0)
    }

    #[test]
    fn declarations() {
        assert!(matches!(single("x : int = 3;"),
                         Statement::VariableDeclaration { type_name: Some(t), value: Some(_), .. }
                         if t == "int"));
        assert!(matches!(single("x : int;"),
                         Statement::VariableDeclaration { value: None, .. }));
        assert!(matches!(single("const xs = [1, 2];"),
                         Statement::VariableDeclaration { type_name: None,
                                                          value: Some(Expr::ArrayLiteral { .. }),
                                                          .. }));
    }

    #[test]
    fn identifier_disambiguation() {
        assert!(matches!(single("x = 1;"), Statement::Assignment { .. }));
        assert!(matches!(single("p.x = 1;"), Statement::FieldAssignment { .. }));
        assert!(matches!(single("print(1, 2);"), Statement::Call { .. }));
    }

    #[test]
    fn precedence() {
        let Statement::Assignment { value, .. } = single("x = 1 + 2 * 3 .. \"a\";") else {
            panic!("expected assignment");
        };
        let Expr::BinaryOp { op, left, .. } = value else {
            panic!("expected binary op");
        };
        assert_eq!(op, BinaryOperator::Concat);
        assert!(matches!(*left, Expr::BinaryOp { op: BinaryOperator::Add, .. }));
    }

    #[test]
    fn else_if_nests() {
        let Statement::If { else_branch: Some(block), .. } =
            single("if a { } else if b { } else { }")
        else {
            panic!("expected if");
        };
        assert!(matches!(block.statements.as_slice(), [Statement::If { else_branch: Some(_), .. }]));
    }

    #[test]
    fn declarations_of_types() {
        assert!(matches!(single("enum Color { RED, GREEN }"),
                         Statement::EnumDeclaration { values, .. } if values.len() == 2));
        assert!(matches!(single("struct Point { int x, int y }"),
                         Statement::StructDeclaration { fields, .. } if fields[1].name == "y"));
        assert!(matches!(single("threadloop t(a, b) { }"),
                         Statement::ThreadLoop { params, .. } if params.len() == 2));
    }

    #[test]
    fn builtin_names_are_reserved() {
        assert!(matches!(parse_script("function print(x) { }"),
                         Err(ParseError::IdentifierReserved { .. })));
    }

    #[test]
    fn program_errors() {
        assert!(matches!(parse_program("setup { } main { } x"),
                         Err(ParseError::TrailingTokens { line: 1, .. })));
        assert!(matches!(parse_program("setup { x = ; } main { }"),
                         Err(ParseError::UnexpectedToken { .. })));
        assert!(matches!(parse_program("setup { } main {"),
                         Err(ParseError::UnexpectedEndOfInput { .. })));
        assert!(matches!(parse_program("setup { } main { x = 1 }"),
                         Err(ParseError::UnexpectedToken { .. })));
    }

    #[test]
    fn lines_are_tracked() {
        let block = parse_script("x = 1;\n\ny = 2;").unwrap();
        assert_eq!(block.statements[1].line_number(), 3);
    }
}

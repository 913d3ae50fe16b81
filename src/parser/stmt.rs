use crate::{
    ast::statements::Stmt,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_condition, parse_expr},
    parser::Parser,
};

/// Statement := IfStmt | WhileStmt | Assignment
///
/// Dispatch is by the kind of the lookahead alone; any other token is an error.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();

    let Some(handler) = handler else {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().describe(),
            },
            parser.get_position(),
        ));
    };

    parser.enter_nested()?;
    let stmt = handler(parser);
    parser.leave_nested();

    stmt
}

/// Assignment := VARIABLE '=' Expression
pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let name = parser
        .expect(TokenKind::Variable, "expected variable at start of assignment")?
        .text()
        .unwrap_or_default()
        .to_string();

    parser.expect_value(TokenKind::Operator, "=", "expected `=` in assignment")?;
    let value = parse_expr(parser)?;

    Ok(Stmt::Assign { name, value })
}

/// IfStmt := IF Condition THEN Statement (ELSE Statement)?
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::If, "expected `if`")?;

    let condition = parse_condition(parser)?;
    parser.expect(TokenKind::Then, "expected `then` after condition")?;
    let then_branch = parse_stmt(parser)?;

    let else_branch;
    if parser.current_token_kind() == TokenKind::Else {
        parser.advance()?;
        else_branch = Some(Box::new(parse_stmt(parser)?));
    } else {
        else_branch = None;
    }

    Ok(Stmt::If {
        condition,
        then_branch: Box::new(then_branch),
        else_branch,
    })
}

/// WhileStmt := WHILE Condition DO Statement
pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::While, "expected `while`")?;

    let condition = parse_condition(parser)?;
    parser.expect(TokenKind::Do, "expected `do` after condition")?;
    let body = parse_stmt(parser)?;

    Ok(Stmt::While {
        condition,
        body: Box::new(body),
    })
}

use crate::{
    ast::expressions::{BinaryOperator, Condition, Expr, RelationalOperator},
    errors::errors::Error,
    lexer::tokens::{TokenKind, TokenValue},
};

use super::parser::Parser;

/// Returns the arithmetic operator under the cursor, if there is one.
fn current_binary_operator(parser: &Parser) -> Option<BinaryOperator> {
    if parser.current_token_kind() != TokenKind::Operator {
        return None;
    }

    parser
        .current_token()
        .text()
        .and_then(BinaryOperator::from_symbol)
}

/// Condition := Expression RelOp Expression
pub fn parse_condition(parser: &mut Parser) -> Result<Condition, Error> {
    let left = parse_expr(parser)?;

    let operator = match parser.current_token_kind() {
        TokenKind::Operator => parser
            .current_token()
            .text()
            .and_then(RelationalOperator::from_symbol),
        _ => None,
    };
    let Some(operator) = operator else {
        return Err(parser.unexpected("expected one of `== != < > <= >=` in condition"));
    };
    parser.advance()?;

    let right = parse_expr(parser)?;

    Ok(Condition {
        operator,
        left,
        right,
    })
}

/// Expression := Term (('+' | '-') Term)*
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_term(parser)?;

    while let Some(operator) = current_binary_operator(parser).filter(|op| op.is_additive()) {
        parser.advance()?;
        let right = parse_term(parser)?;
        left = Expr::binary(operator, left, right);
    }

    Ok(left)
}

/// Term := Factor (('*' | '/') Factor)*
pub fn parse_term(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_factor(parser)?;

    while let Some(operator) = current_binary_operator(parser).filter(|op| !op.is_additive()) {
        parser.advance()?;
        let right = parse_factor(parser)?;
        left = Expr::binary(operator, left, right);
    }

    Ok(left)
}

/// Factor := NUMBER | VARIABLE | '(' Expression ')'
pub fn parse_factor(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.current_token().is(TokenKind::Paren, "(") {
        parser.enter_nested()?;
        let inner = parser.advance().and_then(|()| parse_expr(parser));
        parser.leave_nested();

        let inner = inner?;
        parser.expect_value(TokenKind::Paren, ")", "expected `)` to close `(`")?;
        return Ok(inner);
    }

    let expr = match (parser.current_token_kind(), &parser.current_token().value) {
        (TokenKind::Number, TokenValue::Number(value)) => Expr::Number(*value),
        (TokenKind::Variable, TokenValue::Text(name)) => Expr::Variable(name.clone()),
        _ => return Err(parser.unexpected("expected a number, variable or `(`")),
    };

    parser.advance()?;
    Ok(expr)
}

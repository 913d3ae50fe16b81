//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and variables
//! - Integer literals
//! - Operators and parentheses, including two-character operators
//! - End of input behaviour
//! - Error cases

use crate::errors::errors::{ErrorImpl, ErrorKind};

use super::{
    lexer::{tokenize, Lexer},
    tokens::{TokenKind, TokenValue},
};

fn kinds_and_values(source: &str) -> Vec<(TokenKind, TokenValue)> {
    tokenize(source.to_string(), Some("test.toy".to_string()))
        .unwrap()
        .into_iter()
        .map(|token| (token.kind, token.value))
        .collect()
}

fn text(value: &str) -> TokenValue {
    TokenValue::Text(value.to_string())
}

#[test]
fn test_tokenize_keywords() {
    let source = "if then else while do".to_string();
    let tokens = tokenize(source, Some("test.toy".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::If);
    assert_eq!(tokens[1].kind, TokenKind::Then);
    assert_eq!(tokens[2].kind, TokenKind::Else);
    assert_eq!(tokens[3].kind, TokenKind::While);
    assert_eq!(tokens[4].kind, TokenKind::Do);
    assert_eq!(tokens[5].kind, TokenKind::EOI);
}

#[test]
fn test_tokenize_keyword_prefixes_are_variables() {
    let tokens = kinds_and_values("iff done whiled elsewhere thence");

    for (kind, _) in &tokens[..5] {
        assert_eq!(*kind, TokenKind::Variable);
    }
    assert_eq!(tokens[1].1, text("done"));
}

#[test]
fn test_tokenize_variables() {
    let tokens = kinds_and_values("foo bar baz_123 CamelCase x1_y2");

    assert_eq!(tokens[0], (TokenKind::Variable, text("foo")));
    assert_eq!(tokens[1], (TokenKind::Variable, text("bar")));
    assert_eq!(tokens[2], (TokenKind::Variable, text("baz_123")));
    assert_eq!(tokens[3], (TokenKind::Variable, text("CamelCase")));
    assert_eq!(tokens[4], (TokenKind::Variable, text("x1_y2")));
    assert_eq!(tokens[5], (TokenKind::EOI, TokenValue::None));
}

#[test]
fn test_tokenize_numbers() {
    let tokens = kinds_and_values("42 0 100 007");

    assert_eq!(tokens[0], (TokenKind::Number, TokenValue::Number(42)));
    assert_eq!(tokens[1], (TokenKind::Number, TokenValue::Number(0)));
    assert_eq!(tokens[2], (TokenKind::Number, TokenValue::Number(100)));
    assert_eq!(tokens[3], (TokenKind::Number, TokenValue::Number(7)));
    assert_eq!(tokens[4].0, TokenKind::EOI);
}

#[test]
fn test_tokenize_number_followed_by_letters() {
    let tokens = kinds_and_values("12abc");

    assert_eq!(tokens[0], (TokenKind::Number, TokenValue::Number(12)));
    assert_eq!(tokens[1], (TokenKind::Variable, text("abc")));
}

#[test]
fn test_tokenize_number_overflow() {
    let result = tokenize("x = 99999999999999999999".to_string(), None);
    let error = result.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Lex);
    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_tokenize_operators() {
    let tokens = kinds_and_values("+ - * / = == != < > <= >=");
    let expected = ["+", "-", "*", "/", "=", "==", "!=", "<", ">", "<=", ">="];

    for (token, symbol) in tokens.iter().zip(expected) {
        assert_eq!(*token, (TokenKind::Operator, text(symbol)));
    }
    assert_eq!(tokens.len(), expected.len() + 1);
}

#[test]
fn test_tokenize_parens() {
    let tokens = kinds_and_values("(x)");

    assert_eq!(tokens[0], (TokenKind::Paren, text("(")));
    assert_eq!(tokens[1], (TokenKind::Variable, text("x")));
    assert_eq!(tokens[2], (TokenKind::Paren, text(")")));
    assert_eq!(tokens[3], (TokenKind::EOI, TokenValue::None));
}

#[test]
fn test_tokenize_two_character_operator_without_spaces() {
    let tokens = kinds_and_values("a>=b");

    assert_eq!(
        tokens,
        vec![
            (TokenKind::Variable, text("a")),
            (TokenKind::Operator, text(">=")),
            (TokenKind::Variable, text("b")),
            (TokenKind::EOI, TokenValue::None),
        ]
    );
}

#[test]
fn test_tokenize_split_operator_stays_split() {
    let tokens = kinds_and_values("a> =b");

    assert_eq!(tokens[1], (TokenKind::Operator, text(">")));
    assert_eq!(tokens[2], (TokenKind::Operator, text("=")));
}

#[test]
fn test_tokenize_triple_equals() {
    let tokens = kinds_and_values("===");

    assert_eq!(tokens[0], (TokenKind::Operator, text("==")));
    assert_eq!(tokens[1], (TokenKind::Operator, text("=")));
}

#[test]
fn test_tokenize_mixed_expression() {
    let source = "x + 5 * (y - 3)".to_string();
    let tokens = tokenize(source, Some("test.toy".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Variable);
    assert_eq!(tokens[1].kind, TokenKind::Operator);
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[3].kind, TokenKind::Operator);
    assert_eq!(tokens[4].kind, TokenKind::Paren);
    assert_eq!(tokens[5].kind, TokenKind::Variable);
    assert_eq!(tokens[6].kind, TokenKind::Operator);
    assert_eq!(tokens[7].kind, TokenKind::Number);
    assert_eq!(tokens[8].kind, TokenKind::Paren);
    assert_eq!(tokens[9].kind, TokenKind::EOI);
}

#[test]
fn test_tokenize_whitespace_handling() {
    let tokens = kinds_and_values("  x\t=\n\n  42  \n");

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0].0, TokenKind::Variable);
    assert_eq!(tokens[1].0, TokenKind::Operator);
    assert_eq!(tokens[2].0, TokenKind::Number);
    assert_eq!(tokens[3].0, TokenKind::EOI);
}

#[test]
fn test_tokenize_empty_and_blank_input() {
    assert_eq!(kinds_and_values(""), vec![(TokenKind::EOI, TokenValue::None)]);
    assert_eq!(kinds_and_values(" \n\t "), vec![(TokenKind::EOI, TokenValue::None)]);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("x <= 10".to_string(), None).unwrap();

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 1);
    assert_eq!(tokens[1].span.start.0, 2);
    assert_eq!(tokens[1].span.end.0, 4);
    assert_eq!(tokens[2].span.start.0, 5);
    assert_eq!(tokens[2].span.end.0, 7);
    assert_eq!(tokens[3].span.start.0, 7);
    assert_eq!(*tokens[0].span.start.1, "shell");
}

#[test]
fn test_next_token_is_idempotent_at_end() {
    let mut lexer = Lexer::new("x".to_string(), None);

    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Variable);
    for _ in 0..3 {
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EOI);
    }
}

#[test]
fn test_peek_does_not_move() {
    let lexer = Lexer::new("<=".to_string(), None);

    assert_eq!(lexer.at(), Some('<'));
    assert_eq!(lexer.peek(), Some('='));
    assert_eq!(lexer.peek(), Some('='));
    assert_eq!(lexer.at(), Some('<'));

    let lexer = Lexer::new("<".to_string(), None);
    assert_eq!(lexer.peek(), None);
}

#[test]
fn test_tokenize_unknown_character() {
    let result = tokenize("x = @".to_string(), Some("test.toy".to_string()));
    let error = result.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Lex);
    assert_eq!(
        *error.get_internal_error(),
        ErrorImpl::UnknownCharacter { character: '@' }
    );
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_tokenize_lone_bang_and_semicolon() {
    let error = tokenize("x = !y".to_string(), None).unwrap_err();
    assert_eq!(
        *error.get_internal_error(),
        ErrorImpl::UnknownCharacter { character: '!' }
    );

    let error = tokenize("x = 1;".to_string(), None).unwrap_err();
    assert_eq!(
        *error.get_internal_error(),
        ErrorImpl::UnknownCharacter { character: ';' }
    );

    let error = tokenize("x !".to_string(), None).unwrap_err();
    assert_eq!(
        *error.get_internal_error(),
        ErrorImpl::UnknownCharacter { character: '!' }
    );
}

#[test]
fn test_tokenize_round_trip() {
    let sources = [
        "while i<=10 do if (a+b)*c!=d then x=x/2 else y=y-1",
        "if a==b then c=a-b else while c>=0 do c=c-1",
        "if x<y then m=x else m=y",
        "while n>0 do n=n/2",
        "total=(total+1)*(count-2)/3",
    ];

    for source in sources {
        let tokens = tokenize(source.to_string(), None).unwrap();

        let rendered = tokens
            .iter()
            .map(|token| token.source_text())
            .collect::<Vec<String>>()
            .join(" ");
        let relexed = tokenize(rendered, None).unwrap();

        assert_eq!(tokens.len(), relexed.len(), "source: {}", source);
        for (original, again) in tokens.iter().zip(relexed.iter()) {
            assert_eq!(original.kind, again.kind, "source: {}", source);
            assert_eq!(original.value, again.value, "source: {}", source);
        }
    }
}

#[test]
fn test_round_trip_sources_cover_every_token_form() {
    let sources = "while i<=10 do if (a+b)*c!=d then x=x/2 else y=y-1 \
                   if a==b then c=a-b else while c>=0 do c=c-1 if x<y then m=x else m=y \
                   while n>0 do n=n/2";
    let tokens = tokenize(sources.to_string(), None).unwrap();

    for kind in [TokenKind::If, TokenKind::Then, TokenKind::Else, TokenKind::While, TokenKind::Do] {
        assert!(tokens.iter().any(|token| token.kind == kind), "missing {}", kind);
    }
    for symbol in ["+", "-", "*", "/", "=", "==", "!=", "<", ">", "<=", ">=", "(", ")"] {
        assert!(
            tokens.iter().any(|token| token.text() == Some(symbol)),
            "missing {}",
            symbol
        );
    }
}

#[test]
fn test_tokenize_non_ascii_identifiers() {
    let tokens = kinds_and_values("\u{88f} = 1");
    assert_eq!(tokens[0], (TokenKind::Variable, text("\u{88f}")));
    assert_eq!(tokens[1], (TokenKind::Operator, text("=")));
    assert_eq!(tokens[2], (TokenKind::Number, TokenValue::Number(1)));

    let tokens = kinds_and_values("café_2 = größe + 变量");
    assert_eq!(tokens[0], (TokenKind::Variable, text("café_2")));
    assert_eq!(tokens[2], (TokenKind::Variable, text("größe")));
    assert_eq!(tokens[4], (TokenKind::Variable, text("变量")));
    assert_eq!(tokens[5], (TokenKind::EOI, TokenValue::None));
}

#[test]
fn test_identifier_always_moves_the_cursor() {
    let mut lexer = Lexer::new("\u{88f}é变".to_string(), None);

    let token = lexer.next_token().unwrap();
    assert_eq!(token.kind, TokenKind::Variable);
    assert_eq!(token.span.start.0, 0);
    assert_eq!(token.span.end.0, "\u{88f}é变".len());
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EOI);
}

#[test]
fn test_token_display() {
    let tokens = tokenize("if x >= 3".to_string(), None).unwrap();

    assert_eq!(tokens[0].to_string(), "Token(IF, None)");
    assert_eq!(tokens[1].to_string(), "Token(VARIABLE, x)");
    assert_eq!(tokens[2].to_string(), "Token(OPERATOR, >=)");
    assert_eq!(tokens[3].to_string(), "Token(NUMBER, 3)");
    assert_eq!(tokens[4].to_string(), "Token(EOI, None)");
}

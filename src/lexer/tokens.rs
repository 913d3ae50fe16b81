use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("do", TokenKind::Do);
        map
    };

    /// Characters that form a token on their own.
    pub static ref SINGLE_CHAR_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        for op in ['+', '-', '*', '/', '=', '>', '<'] {
            map.insert(op, TokenKind::Operator);
        }
        map.insert('(', TokenKind::Paren);
        map.insert(')', TokenKind::Paren);
        map
    };
}

/// Operators spelled with two characters, resolved with a one-character peek.
pub const DOUBLE_CHAR_OPERATORS: [&str; 4] = ["==", "!=", ">=", "<="];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Number,
    Variable,

    // Reserved
    If,
    Then,
    Else,
    While,
    Do,

    Operator,
    Paren,

    EOI,
}

impl TokenKind {
    /// The source spelling of a keyword kind.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            TokenKind::If => Some("if"),
            TokenKind::Then => Some("then"),
            TokenKind::Else => Some("else"),
            TokenKind::While => Some("while"),
            TokenKind::Do => Some("do"),
            _ => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Number => "NUMBER",
            TokenKind::Variable => "VARIABLE",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::Do => "DO",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Paren => "PAREN",
            TokenKind::EOI => "EOI",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TokenValue {
    None,
    Number(i64),
    /// Variable name, operator symbol or parenthesis.
    Text(String),
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::None => write!(f, "None"),
            TokenValue::Number(number) => write!(f, "{}", number),
            TokenValue::Text(text) => write!(f, "{}", text),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({}, {})", self.kind, self.value)
    }
}

impl Token {
    /// Returns true when this token has the given kind and carries `text` as its value.
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && matches!(&self.value, TokenValue::Text(value) if value == text)
    }

    pub fn text(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Renders the token the way it would be written in source.
    pub fn source_text(&self) -> String {
        match (&self.value, self.kind.keyword()) {
            (_, Some(keyword)) => keyword.to_string(),
            (TokenValue::Number(number), _) => number.to_string(),
            (TokenValue::Text(text), _) => text.clone(),
            (TokenValue::None, None) => String::new(),
        }
    }

    /// Short description used in error messages.
    pub fn describe(&self) -> String {
        if self.kind == TokenKind::EOI {
            String::from("<EOI>")
        } else {
            self.source_text()
        }
    }
}

use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_SPAN, MK_TOKEN};

use super::tokens::{Token, TokenKind, TokenValue, DOUBLE_CHAR_OPERATORS, RESERVED_LOOKUP, SINGLE_CHAR_LOOKUP};

lazy_static! {
    static ref WHITESPACE_PATTERN: Regex = Regex::new(r"\A\s+").unwrap();
    static ref NUMBER_PATTERN: Regex = Regex::new(r"\A[0-9]+").unwrap();
}

/// Pull-based lexer: each call to [`Lexer::next_token`] scans exactly one token.
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// The character under the cursor, or `None` at end of input.
    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    /// The character one past the cursor. Never moves the cursor.
    pub fn peek(&self) -> Option<char> {
        self.remainder().chars().nth(1)
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn get_position(&self) -> Position {
        Position(self.pos, Rc::clone(&self.file))
    }

    /// Scans the next token. Once the input is exhausted every call returns `EOI`.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        self.skip_whitespace();

        let Some(current) = self.at() else {
            return Ok(MK_TOKEN!(TokenKind::EOI, TokenValue::None, MK_SPAN!(self.pos, self.pos, self.file)));
        };

        if current.is_ascii_digit() {
            self.number()
        } else if current.is_alphabetic() {
            Ok(self.symbol())
        } else {
            self.operator(current)
        }
    }

    fn unknown_character(&self) -> Error {
        let character = self.at().unwrap_or_default();
        Error::new(ErrorImpl::UnknownCharacter { character }, self.get_position())
    }

    fn matched(&self, regex: &Regex) -> Option<usize> {
        regex.find(self.remainder()).map(|found| found.end())
    }

    fn skip_whitespace(&mut self) {
        if let Some(len) = self.matched(&WHITESPACE_PATTERN) {
            self.advance_n(len);
        }
    }

    fn number(&mut self) -> Result<Token, Error> {
        let Some(len) = self.matched(&NUMBER_PATTERN) else {
            return Err(self.unknown_character());
        };
        let digits = &self.remainder()[..len];

        let Ok(value) = digits.parse::<i64>() else {
            return Err(Error::new(ErrorImpl::NumberParseError { token: digits.to_string() }, self.get_position()));
        };

        let token = MK_TOKEN!(TokenKind::Number, TokenValue::Number(value), MK_SPAN!(self.pos, self.pos + len, self.file));
        self.advance_n(len);
        Ok(token)
    }

    /// Scans an identifier. The cursor sits on an alphabetic character, so the run is never empty.
    fn symbol(&mut self) -> Token {
        let len = self
            .remainder()
            .char_indices()
            .find(|&(_, c)| !(c.is_alphanumeric() || c == '_'))
            .map_or(self.remainder().len(), |(index, _)| index);
        let value = &self.remainder()[..len];
        let span = MK_SPAN!(self.pos, self.pos + len, self.file);

        let token = if let Some(kind) = RESERVED_LOOKUP.get(value) {
            MK_TOKEN!(*kind, TokenValue::None, span)
        } else {
            MK_TOKEN!(TokenKind::Variable, TokenValue::Text(value.to_string()), span)
        };

        self.advance_n(len);
        token
    }

    fn operator(&mut self, current: char) -> Result<Token, Error> {
        if let Some(next) = self.peek() {
            let pair: String = [current, next].iter().collect();

            if DOUBLE_CHAR_OPERATORS.contains(&pair.as_str()) {
                let len = pair.len();
                let token = MK_TOKEN!(TokenKind::Operator, TokenValue::Text(pair), MK_SPAN!(self.pos, self.pos + len, self.file));
                self.advance_n(len);
                return Ok(token);
            }
        }

        // A lone `!` or `;` has no token of its own and lands here with everything else.
        let Some(kind) = SINGLE_CHAR_LOOKUP.get(&current) else {
            return Err(self.unknown_character());
        };

        let len = current.len_utf8();
        let token = MK_TOKEN!(*kind, TokenValue::Text(current.to_string()), MK_SPAN!(self.pos, self.pos + len, self.file));
        self.advance_n(len);
        Ok(token)
    }
}

/// Lexes the whole of `source` eagerly. The trailing `EOI` token is included.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token()?;
        let done = token.kind == TokenKind::EOI;
        tokens.push(token);

        if done {
            return Ok(tokens);
        }
    }
}

//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parse entry point.
//! The parser owns its lexer and keeps exactly one token of lookahead,
//! fetched when the parser is created and replaced on every advance.

use std::collections::HashMap;

use crate::{
    ast::statements::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

/// How many statements and parenthesized groups may be open at once.
pub const MAX_NESTING_DEPTH: usize = 256;

use super::{
    lookups::{create_token_lookups, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// The lookahead token is owned by the parser and never aliased; each
/// production inspects it and advances past what it consumes.
pub struct Parser {
    /// Source of tokens, pulled one at a time
    lexer: Lexer,
    /// The current lookahead token
    current: Token,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Open statements and parenthesized groups
    depth: usize,
}

impl Parser {
    /// Creates a new Parser and reads the first lookahead token.
    ///
    /// # Arguments
    ///
    /// * `lexer` - Lexer positioned at the start of the source
    ///
    /// # Returns
    ///
    /// A parser ready to parse, or the lex error raised by the first token.
    pub fn new(mut lexer: Lexer) -> Result<Self, Error> {
        let current = lexer.next_token()?;

        let mut parser = Parser {
            lexer,
            current,
            stmt_lookup: HashMap::new(),
            depth: 0,
        };
        create_token_lookups(&mut parser);

        Ok(parser)
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Discards the current token and pulls the next one from the lexer.
    pub fn advance(&mut self) -> Result<(), Error> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    /// Consumes a token of the expected kind.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `message` - What was expected, used in the error when the check fails
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) with the consumed token, otherwise an Error at the current token.
    pub fn expect(&mut self, expected_kind: TokenKind, message: &str) -> Result<Token, Error> {
        if self.current.kind != expected_kind {
            return Err(self.unexpected(message));
        }

        let token = self.current.clone();
        self.advance()?;
        Ok(token)
    }

    /// Consumes a token of the expected kind carrying exactly `value`.
    pub fn expect_value(
        &mut self,
        expected_kind: TokenKind,
        value: &str,
        message: &str,
    ) -> Result<Token, Error> {
        if !self.current.is(expected_kind, value) {
            return Err(self.unexpected(message));
        }

        let token = self.current.clone();
        self.advance()?;
        Ok(token)
    }

    /// Builds a parse error describing the current token.
    pub fn unexpected(&self, message: &str) -> Error {
        Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: self.current.describe(),
                message: String::from(message),
            },
            self.get_position(),
        )
    }

    /// Opens one nesting level, failing once [`MAX_NESTING_DEPTH`] are already open.
    ///
    /// Every successful call is paired with [`Parser::leave_nested`].
    pub fn enter_nested(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Returns true while the lookahead is not the end of input.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOI
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Registers a statement handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `stmt_fn` - The handler function for this statement type
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Parses statements until the end of input.
    ///
    /// The first malformed statement aborts the whole parse; nothing parsed
    /// before it is returned.
    pub fn parse(&mut self) -> Result<Program, Error> {
        let mut body = vec![];

        while self.has_tokens() {
            body.push(parse_stmt(self)?);
        }

        Ok(Program { body })
    }
}

/// Parses source text into a [`Program`].
///
/// This is the main entry point for parsing. It creates a lexer and parser,
/// then parses all statements until EOI.
///
/// # Arguments
///
/// * `source` - The program text
/// * `file` - Name reported in error positions, `shell` when omitted
///
/// # Returns
///
/// The parsed program, or the first lex or parse error encountered.
pub fn parse(source: &str, file: Option<String>) -> Result<Program, Error> {
    let lexer = Lexer::new(source.to_string(), file);
    let mut parser = Parser::new(lexer)?;

    parser.parse()
}

//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that pulls tokens from
//! the lexer one at a time and builds the AST. It handles:
//!
//! - Statement parsing (assignments, `if`/`then`/`else`, `while`/`do`)
//! - Arithmetic expressions with precedence and left associativity
//! - Relational conditions
//! - Fail-fast error reporting: the first grammar violation aborts the parse
//!
//! There is one function per grammar production and a single token of lookahead.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

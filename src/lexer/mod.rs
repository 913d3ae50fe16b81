//! Lexical analysis module.
//!
//! This module contains the lexer that converts source text into tokens
//! for the parser. It handles:
//!
//! - Pull-based tokenization, one token per call
//! - Recognition of keywords, variables, integers, operators and parentheses
//! - Disambiguation of two-character relational operators
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;

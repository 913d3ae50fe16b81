//! Error types and error handling for the front end.
//!
//! This module defines the errors raised while lexing and parsing:
//!
//! - Error structures with source position information
//! - Lex and parse error variants
//! - Helpful tips for diagnostics

pub mod errors;

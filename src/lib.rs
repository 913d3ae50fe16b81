#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    ast::statements::Program,
    errors::errors::{Error, ErrorTip},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into a source, tagged with the name of the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub usize, pub Rc<String>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Lexes and parses `source` into a [`Program`], failing on the first malformed statement.
pub fn parse(source: &str) -> Result<Program, Error> {
    parser::parser::parse(source, None)
}

/// Parses `source`, degrading to an empty program when it is malformed.
pub fn parse_or_empty(source: &str) -> Program {
    parse(source).unwrap_or_default()
}

/// Finds the line holding byte `position`.
///
/// Returns the 1-based line number, the line text (including its line break) and the
/// offset of `position` within that line. A position equal to the source length maps to
/// the end of the last line, so errors raised at end of input still have a home.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    if position > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;
    let mut last_line = (0, "");

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&position) {
            let line_pos = position - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        last_line = (start, line);
        start = end;
        line_number += 1;
    }

    let (last_start, last_text) = last_line;
    if source.is_empty() || last_text.ends_with('\n') {
        Some((line_number, String::new(), 0))
    } else {
        Some((line_number - 1, last_text.to_string(), position - last_start))
    }
}

/// Renders `error` against the source it was raised for.
///
/// ```text
/// Error: UnexpectedTokenDetailed (Unexpected token: `i`, expected `do` after condition)
/// -> loop.toy
///   |
/// 1 | while i < 10 i = i + 1
///   | -------------^
/// ```
pub fn format_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        output.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    output.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return output;
    };

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    output.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    output.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim_end()));

    // Positions are byte offsets; the caret is placed by characters.
    let column = line_text.get(..line_pos).map_or(line_pos, |prefix| prefix.chars().count());
    let arrows = column.saturating_sub(removed_whitespace) + 1;
    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    output
}

pub fn display_error(error: &Error, source: &str) {
    eprint!("{}", format_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += c.len_utf8();
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

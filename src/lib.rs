#![allow(clippy::module_inception)]

use std::fmt::{Display, Write};

use crate::{
    errors::errors::{Error, ErrorTip},
    source::source::SourceUnit,
};

pub mod errors;
pub mod macros;
pub mod parser;
pub mod scanner;
pub mod source;

extern crate regex;

/// A `(line, column)` pair, both 1-indexed.
///
/// `Position(0, 0)` is reserved for synthetic tokens that were not read from
/// the character stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position(pub u32, pub u32);

impl Position {
    pub fn unknown() -> Self {
        Position(0, 0)
    }

    pub fn is_unknown(&self) -> bool {
        *self == Position::unknown()
    }

    pub fn line(&self) -> u32 {
        self.0
    }

    pub fn column(&self) -> u32 {
        self.1
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_unknown() {
            write!(f, "[?, ?]")
        } else {
            write!(f, "[{}, {}]", self.0, self.1)
        }
    }
}

/// Looks up the text of a 1-indexed line inside the unit an error points at.
pub fn get_line_at_position<'a>(
    units: &'a [SourceUnit],
    unit: Option<&str>,
    position: Position,
) -> Option<&'a str> {
    if position.is_unknown() {
        return None;
    }

    units
        .iter()
        .find(|candidate| candidate.name.as_deref() == unit)
        .and_then(|found| {
            let index = (position.line() as usize).checked_sub(1)?;
            found.lines.get(index)
        })
        .map(String::as_str)
}

pub fn format_error(error: &Error, units: &[SourceUnit]) -> String {
    /*
        Error: message
        -> main.nj
          |
        3 | let s = "abc
          | --------^
    */

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", error.get_unit().unwrap_or("<input>"));

    let position = *error.get_position();
    let Some(line_text) = get_line_at_position(units, error.get_unit(), position) else {
        return out;
    };

    let line_string = position.line().to_string();
    let padding = line_string.len() + 2;

    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let line_pos = (position.column() as usize).saturating_sub(1);
    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}

use std::{fs, path::Path};

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

lazy_static! {
    static ref UNIT_HEADER: Regex =
        Regex::new("^//([^\r\n]*)").expect("unit header pattern is valid");
}

/// One logical input, usually one file, as an ordered list of lines.
///
/// Line 1 of the unit is `lines[0]`; the unit's name is never part of
/// `lines`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceUnit {
    pub name: Option<String>,
    pub lines: Vec<String>,
}

impl SourceUnit {
    pub fn new(name: Option<String>, lines: Vec<String>) -> SourceUnit {
        SourceUnit { name, lines }
    }

    pub fn from_text(name: Option<&str>, text: &str) -> SourceUnit {
        SourceUnit {
            name: name.map(String::from),
            lines: text.lines().map(String::from).collect(),
        }
    }

    /// Reads a file and names the unit after the file's last path component.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<SourceUnit, Error> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| {
            Error::new(
                ErrorImpl::SourceRead {
                    path: path.display().to_string(),
                    message: err.to_string(),
                },
                Position::unknown(),
            )
        })?;

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        debug!("read {} from {}", name, path.display());
        Ok(SourceUnit::from_text(Some(&name), &text))
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<input>")
    }

    /// The `//name` line that opens this unit in a framed line list.
    pub fn header(&self) -> Option<String> {
        self.name.as_ref().map(|name| format!("//{}", name))
    }
}

/// Returns the unit name if `line` is a `//name` header line.
pub fn unit_header_name(line: &str) -> Option<&str> {
    UNIT_HEADER
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|name| name.as_str())
}

/// Splits a header-framed line list into units.
///
/// Each header line opens a new named unit. Lines before the first header
/// form a single unnamed unit.
pub fn units_from_lines<S: AsRef<str>>(lines: &[S]) -> Vec<SourceUnit> {
    let mut units = vec![];
    let mut current: Option<SourceUnit> = None;

    for line in lines {
        let line = line.as_ref();

        if let Some(name) = unit_header_name(line) {
            if let Some(unit) = current.take() {
                units.push(unit);
            }
            current = Some(SourceUnit::new(Some(name.to_string()), vec![]));
        } else {
            current
                .get_or_insert_with(SourceUnit::default)
                .lines
                .push(line.to_string());
        }
    }

    if let Some(unit) = current {
        units.push(unit);
    }

    units
}

/// Flattens units back into a header-framed line list.
pub fn frame_units(units: &[SourceUnit]) -> Vec<String> {
    let mut lines = vec![];

    for unit in units {
        if let Some(header) = unit.header() {
            lines.push(header);
        }
        lines.extend(unit.lines.iter().cloned());
    }

    lines
}

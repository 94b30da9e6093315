use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    unit: Option<String>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
            unit: None,
        }
    }

    /// Tags the error with the name of the source unit it was raised in.
    pub fn with_unit(mut self, unit: Option<String>) -> Self {
        self.unit = unit;
        self
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Name of the scanner state that was still open when input ran out.
    pub fn get_pending_state(&self) -> Option<&'static str> {
        match &self.internal_error {
            ErrorImpl::UnterminatedString { .. } => Some("string"),
            ErrorImpl::UnterminatedBlockComment => Some("block-comment"),
            _ => None,
        }
    }

    pub fn is_fatal_scan_error(&self) -> bool {
        self.get_pending_state().is_some()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::UnterminatedBlockComment => "UnterminatedBlockComment",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::SourceRead { .. } => "SourceRead",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedString { .. } => {
                ErrorTip::Suggestion(String::from("close the string with `\"`"))
            }
            ErrorImpl::UnterminatedBlockComment => {
                ErrorTip::Suggestion(String::from("close the comment with a backtick"))
            }
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "Expected {}, found `{}`",
                expected, found
            )),
            ErrorImpl::UnexpectedEndOfInput { expected } => {
                ErrorTip::Suggestion(format!("Expected {} before end of input", expected))
            }
            ErrorImpl::SourceRead { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.unit {
            Some(unit) => write!(f, "{} ({} {})", self.internal_error, unit, self.position),
            None => write!(f, "{} ({})", self.internal_error, self.position),
        }
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unterminated string at end of input: {content:?}")]
    UnterminatedString { content: String },
    #[error("unterminated block comment at end of input")]
    UnterminatedBlockComment,
    #[error("unexpected token: expected {expected}, found {found:?}")]
    UnexpectedToken { expected: String, found: String },
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEndOfInput { expected: String },
    #[error("could not read {path:?}: {message}")]
    SourceRead { path: String, message: String },
}

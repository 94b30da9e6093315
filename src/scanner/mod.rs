//! Lexical analysis module.
//!
//! This module contains the scanner that converts source units into a flat
//! stream of position-tagged tokens. It handles:
//!
//! - A character-driven state machine carried across lines of one unit
//! - Recognition of keywords, identifiers, numbers, strings and symbols
//! - Line comments (`#`) and block comments (backticks)
//! - Fatal errors for strings or comments left open at end of input

pub mod scanner;
pub mod state;
pub mod tokens;

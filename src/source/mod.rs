//! Source unit framing.
//!
//! Turns files, in-memory text and header-framed line lists into the
//! `SourceUnit` values the scanner consumes.

pub mod source;

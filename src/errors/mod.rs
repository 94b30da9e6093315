//! Error types and error handling for the scanner.
//!
//! This module defines the error types shared by the scanner, the source
//! framing and the token cursor. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each failure
//! - Error names and suggestions used by diagnostics

pub mod errors;

//! Token cursor for the downstream syntax recognizer.
//!
//! The scanner emits a flat token list; a recursive-descent consumer reads
//! it through `TokenStream` one token at a time, with lookahead and
//! `expect` helpers that turn a mismatch into a positioned `Error`.

pub mod stream;

//! Error types and error handling for the lexer.
//!
//! This module defines:
//!
//! - `Error`, a lexical failure paired with the source position it occurred at
//! - `ErrorImpl`, the specific failure variants
//! - `PatternError`, raised when a pattern table is built from bad rules
//! - `ErrorTip` suggestions used when rendering diagnostics

pub mod errors;

#[cfg(test)]
mod tests;

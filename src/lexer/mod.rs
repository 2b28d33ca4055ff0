//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - An ordered table of anchored regex patterns, where list order is priority
//! - Recognition of keywords, identifiers, integer literals and operators
//! - Token position tracking for error reporting
//! - Whitespace and newline skipping

pub mod lexer;
pub mod patterns;
pub mod tokens;

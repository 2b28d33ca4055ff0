use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { .. } => "InvalidCharacter",
            ErrorImpl::IntegerLiteralOverflow { .. } => "IntegerLiteralOverflow",
            ErrorImpl::SourceTooLarge { .. } => "SourceTooLarge",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { .. } => ErrorTip::None,
            ErrorImpl::IntegerLiteralOverflow { literal } => ErrorTip::Suggestion(format!(
                "Integer literal `{}` does not fit in 32 bits (max {})",
                literal,
                i32::MAX
            )),
            ErrorImpl::SourceTooLarge { length } => ErrorTip::Suggestion(format!(
                "Source is {} bytes, split it into files of at most {} bytes",
                length,
                u32::MAX
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.internal_error, self.position)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

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

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("invalid character: {character:?}")]
    InvalidCharacter { character: char },
    #[error("integer literal out of range: {literal:?}")]
    IntegerLiteralOverflow { literal: String },
    #[error("source is {length} bytes, more than offsets can address")]
    SourceTooLarge { length: usize },
}

/// Reasons a rule is refused when a pattern table is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern {pattern:?} is not a valid regex: {message}")]
    InvalidRegex { pattern: String, message: String },
    #[error("pattern {pattern:?} must be anchored with a leading `^`")]
    Unanchored { pattern: String },
    #[error("pattern {pattern:?} can match the empty string")]
    EmptyMatch { pattern: String },
}

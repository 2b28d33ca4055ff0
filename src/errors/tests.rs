//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, PatternError};
use crate::Position;
use std::sync::Arc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::InvalidCharacter { character: '@' },
        Position(10, Arc::from("test.c")),
    );

    assert_eq!(error.get_error_name(), "InvalidCharacter");
    assert_eq!(error.kind(), &ErrorImpl::InvalidCharacter { character: '@' });
}

#[test]
fn test_error_position() {
    let pos = Position(42, Arc::from("test.c"));
    let error = Error::new(
        ErrorImpl::IntegerLiteralOverflow {
            literal: "99999999999".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position(), &pos);
}

#[test]
fn test_integer_overflow_error() {
    let error = Error::new(
        ErrorImpl::IntegerLiteralOverflow {
            literal: "2147483648".to_string(),
        },
        Position(0, Arc::from("test.c")),
    );

    assert_eq!(error.get_error_name(), "IntegerLiteralOverflow");

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("2147483648")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_invalid_character_has_no_tip() {
    let error = Error::new(
        ErrorImpl::InvalidCharacter { character: '\u{7}' },
        Position::null(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
#[cfg(target_pointer_width = "64")]
fn test_source_too_large_error() {
    let error = Error::new(
        ErrorImpl::SourceTooLarge {
            length: 5_000_000_000,
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "SourceTooLarge");
    assert_eq!(
        error.get_tip().to_string(),
        "Source is 5000000000 bytes, split it into files of at most 4294967295 bytes"
    );
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::InvalidCharacter { character: '$' },
        Position(3, Arc::from("main.c")),
    );

    assert_eq!(error.to_string(), "invalid character: '$' at main.c:3");
}

#[test]
fn test_error_source_is_the_variant() {
    let error = Error::new(
        ErrorImpl::IntegerLiteralOverflow {
            literal: "4294967296".to_string(),
        },
        Position::null(),
    );

    let source = std::error::Error::source(&error).unwrap();
    assert_eq!(
        source.to_string(),
        "integer literal out of range: \"4294967296\""
    );
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_pattern_error_messages() {
    let error = PatternError::Unanchored {
        pattern: "abc".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "pattern \"abc\" must be anchored with a leading `^`"
    );

    let error = PatternError::EmptyMatch {
        pattern: "^a*".to_string(),
    };
    assert_eq!(error.to_string(), "pattern \"^a*\" can match the empty string");
}

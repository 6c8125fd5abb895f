//! Unit tests for error handling.
//!
//! This module contains tests for the decode error raised at construction.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::lexer::{Lexer, LexerConfig};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::InvalidUtf8 {
            valid_up_to: 3,
            error_len: Some(1),
        },
        Position(3, Rc::new("test.mt".to_string())),
    );

    assert_eq!(error.get_error_name(), "InvalidUtf8");
    assert_eq!(error.get_position().0, 3);
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::InvalidUtf8 {
            valid_up_to: 7,
            error_len: Some(1),
        },
        Position(7, Rc::new("test.mt".to_string())),
    );

    assert_eq!(error.to_string(), "invalid UTF-8 at byte 7 in test.mt");
}

#[test]
fn test_invalid_utf8_reports_offset() {
    let source = b"abc\xffdef";
    let error = Lexer::new(source, Some("test.mt".to_string()), LexerConfig::default()).unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::InvalidUtf8 {
            valid_up_to: 3,
            error_len: Some(1),
        }
    );
    assert_eq!(error.get_position().0, 3);
    assert_eq!(error.get_position().1.as_str(), "test.mt");
}

#[test]
fn test_truncated_sequence_tip() {
    // First two bytes of a three byte character
    let source = b"x = \xe2\x82";
    let error = Lexer::new(source, None, LexerConfig::default()).unwrap_err();

    assert_eq!(error.get_position().0, 4);
    assert_eq!(error.get_position().1.as_str(), "shell");
    let ErrorTip::Suggestion(tip) = error.get_tip();
    assert!(tip.contains("truncated"));
}

#[test]
fn test_error_is_std_error() {
    let error = Lexer::new(b"\xc0", None, LexerConfig::default()).unwrap_err();
    let boxed: Box<dyn std::error::Error> = Box::new(error);

    assert!(boxed.to_string().starts_with("invalid UTF-8 at byte 0"));
}

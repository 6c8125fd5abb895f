use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} in {}", .position.1)]
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

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidUtf8 { .. } => "InvalidUtf8",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidUtf8 { error_len: None, .. } => ErrorTip::Suggestion(String::from(
                "The source ends in the middle of a multi-byte character, was the file truncated?",
            )),
            ErrorImpl::InvalidUtf8 { .. } => ErrorTip::Suggestion(String::from(
                "Source files must be encoded as UTF-8",
            )),
        }
    }
}

pub enum ErrorTip {
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("invalid UTF-8 at byte {valid_up_to}")]
    InvalidUtf8 {
        valid_up_to: usize,
        error_len: Option<usize>,
    },
}

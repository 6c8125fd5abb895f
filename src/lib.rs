#![allow(clippy::module_inception)]

use std::rc::Rc;

pub mod errors;
pub mod lexer;
pub mod macros;

pub use errors::errors::{Error, ErrorImpl};
pub use lexer::lexer::{tokenize, tokenize_with, Lexer, LexerConfig};
pub use lexer::tokens::{Token, TokenKind};

/// Byte offset into a named source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

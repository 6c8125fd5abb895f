//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Decoding the source into a code point buffer with line tracking
//! - Recognition of keywords, identifiers, constants and instance variables
//! - Integer, float and string literals
//! - Longest-match operators and separators
//! - Context-sensitive `+`, `-` and `|` through a small state machine
//! - Comments and significant newlines, both configurable

pub mod lexer;
pub mod scanner;
pub mod state;
pub mod tokens;

//! Error types for the lexer.
//!
//! Lexing itself never fails: bad characters and unterminated strings come
//! back as `Illegal` tokens. The only error is raised while decoding the
//! source, when the input bytes are not valid UTF-8.

pub mod errors;

#[cfg(test)]
mod tests;

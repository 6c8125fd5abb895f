use std::rc::Rc;

use crate::{errors::errors::{Error, ErrorImpl}, Position};

/// Character scanner over an eagerly decoded source buffer.
///
/// Positions count code points, not bytes, so multi-byte characters never
/// skew the cursor or line arithmetic. `None` marks the end of input.
#[derive(Debug, Clone)]
pub struct Scanner {
    source: Vec<char>,
    position: usize,
    read_position: usize,
    line: u32,
    ch: Option<char>,
}

impl Scanner {
    /// Decodes `bytes` as UTF-8. This is the only fallible step of lexing.
    pub fn new(bytes: &[u8], file: &Rc<String>) -> Result<Scanner, Error> {
        let text = std::str::from_utf8(bytes).map_err(|err| {
            tracing::debug!(file = %file, offset = err.valid_up_to(), "source is not valid UTF-8");
            Error::new(
                ErrorImpl::InvalidUtf8 {
                    valid_up_to: err.valid_up_to(),
                    error_len: err.error_len(),
                },
                Position(err.valid_up_to() as u32, Rc::clone(file)),
            )
        })?;

        let source: Vec<char> = text.chars().collect();
        let ch = source.first().copied();

        Ok(Scanner {
            source,
            position: 0,
            read_position: 1,
            line: 1,
            ch,
        })
    }

    pub fn current(&self) -> Option<char> {
        self.ch
    }

    pub fn peek(&self) -> Option<char> {
        self.peek_nth(1)
    }

    /// Character `n` places ahead of the cursor; `peek_nth(0)` is the current one.
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.source.get(self.position + n).copied()
    }

    /// Commits the current character and moves to the next one.
    pub fn advance(&mut self) {
        let Some(ch) = self.ch else {
            return;
        };

        if ch == '\n' {
            self.line += 1;
        }

        self.position = self.read_position;
        self.read_position += 1;
        self.ch = self.source.get(self.position).copied();
    }

    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.ch.is_none()
    }

    /// Number of decoded code points.
    pub fn char_count(&self) -> usize {
        self.source.len()
    }

    /// Text between two code point positions, clamped to the buffer.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.source.len());
        let start = start.min(end);
        self.source[start..end].iter().collect()
    }
}

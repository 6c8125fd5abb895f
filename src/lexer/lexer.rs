use std::rc::Rc;

use crate::{errors::errors::Error, MK_TOKEN};

use super::{
    scanner::Scanner,
    state::LexerState,
    tokens::{lookup_ident, lookup_symbol, Token, TokenKind, MAX_OPERATOR_LEN},
};

/// Options fixed for the lifetime of a lexer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// Surface `#` comments as `Comment` tokens instead of skipping them.
    pub emit_comments: bool,
    /// Emit each line break as a `Newline` statement terminator.
    pub newline_significant: bool,
}

impl LexerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_comments(mut self) -> Self {
        self.emit_comments = true;
        self
    }

    pub fn with_significant_newlines(mut self) -> Self {
        self.newline_significant = true;
        self
    }
}

/// Pull-based tokenizer for a single compilation unit.
///
/// Each call to [`Lexer::next_token`] produces exactly one token. Bad input
/// comes back as `Illegal` tokens; once the input is exhausted every call
/// returns the same `EOF` token.
#[derive(Debug, Clone)]
pub struct Lexer {
    scanner: Scanner,
    state: LexerState,
    config: LexerConfig,
    file: Rc<String>,
    finished: bool,
}

impl Lexer {
    pub fn new(source: &[u8], file: Option<String>, config: LexerConfig) -> Result<Lexer, Error> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let scanner = Scanner::new(source, &file_name)?;
        tracing::debug!(file = %file_name, chars = scanner.char_count(), ?config, "created lexer");

        Ok(Lexer {
            scanner,
            state: LexerState::default(),
            config,
            file: file_name,
            finished: false,
        })
    }

    pub fn state(&self) -> LexerState {
        self.state
    }

    pub fn config(&self) -> LexerConfig {
        self.config
    }

    pub fn file(&self) -> &Rc<String> {
        &self.file
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_trivia();

        let line = self.scanner.line();
        let token = match self.scanner.current() {
            None => MK_TOKEN!(TokenKind::EOF, String::new(), line),
            Some('\n') => {
                self.scanner.advance();
                MK_TOKEN!(TokenKind::Newline, String::from("\n"), line)
            }
            Some('#') => self.read_comment(),
            Some(delimiter @ ('"' | '\'')) => self.read_string(delimiter),
            Some(c) if c.is_ascii_digit() => self.read_number(),
            Some(c) if is_ident_start(c) => self.read_identifier(),
            Some('@') if self.scanner.peek().is_some_and(is_ident_start) => self.read_identifier(),
            Some('|') if self.state == LexerState::ExpectBlockParams || self.state.in_block_params() => {
                self.read_block_delimiter()
            }
            Some(c) => self.read_symbol(c),
        };

        self.advance_state(&token);
        token
    }

    fn advance_state(&mut self, token: &Token) {
        let next = self.state.transition(token.kind);
        tracing::trace!(
            kind = %token.kind,
            literal = %token.literal,
            line = token.line,
            from = %self.state,
            to = %next,
            "emitted token"
        );
        self.state = next;
    }

    fn skip_trivia(&mut self) {
        loop {
            match self.scanner.current() {
                Some(' ' | '\t' | '\r') => self.scanner.advance(),
                Some('\n') if !self.config.newline_significant => self.scanner.advance(),
                Some('#') if !self.config.emit_comments => {
                    self.read_comment();
                }
                _ => break,
            }
        }
    }

    /// Reads from `#` up to, but not including, the line break.
    fn read_comment(&mut self) -> Token {
        let line = self.scanner.line();
        let start = self.scanner.position();

        while self.scanner.current().is_some_and(|c| c != '\n') {
            self.scanner.advance();
        }

        MK_TOKEN!(TokenKind::Comment, self.scanner.slice(start, self.scanner.position()), line)
    }

    fn read_string(&mut self, delimiter: char) -> Token {
        let line = self.scanner.line();
        let mut result = String::new();
        self.scanner.advance();

        loop {
            match self.scanner.current() {
                None => {
                    tracing::debug!(file = %self.file, line, "unterminated string");
                    return MK_TOKEN!(TokenKind::Illegal, result, line);
                }
                Some(c) if c == delimiter => {
                    self.scanner.advance();
                    return MK_TOKEN!(TokenKind::String, result, line);
                }
                Some('\\') => {
                    self.scanner.advance();
                    match self.scanner.current() {
                        Some('n') => result.push('\n'),
                        Some('t') => result.push('\t'),
                        Some('\\') => result.push('\\'),
                        Some(c) if c == delimiter => result.push(c),
                        Some(c) => {
                            // Unknown escapes are kept as written
                            result.push('\\');
                            result.push(c);
                        }
                        None => {
                            result.push('\\');
                            continue;
                        }
                    }
                    self.scanner.advance();
                }
                Some(c) => {
                    result.push(c);
                    self.scanner.advance();
                }
            }
        }
    }

    fn read_number(&mut self) -> Token {
        let line = self.scanner.line();
        let start = self.scanner.position();
        let mut kind = TokenKind::Integer;

        self.skip_digits();

        if self.scanner.current() == Some('.') && self.scanner.peek().is_some_and(|c| c.is_ascii_digit()) {
            kind = TokenKind::Float;
            self.scanner.advance();
            self.skip_digits();
        }

        MK_TOKEN!(kind, self.scanner.slice(start, self.scanner.position()), line)
    }

    fn skip_digits(&mut self) {
        while self.scanner.current().is_some_and(|c| c.is_ascii_digit()) {
            self.scanner.advance();
        }
    }

    fn read_identifier(&mut self) -> Token {
        let line = self.scanner.line();
        let start = self.scanner.position();

        if self.scanner.current() == Some('@') {
            self.scanner.advance();
        }

        while self.scanner.current().is_some_and(is_ident_continue) {
            self.scanner.advance();
        }

        // Method-style suffix, as in `block?`, unless it starts `!=` or `?=`
        if matches!(self.scanner.current(), Some('?' | '!')) && self.scanner.peek() != Some('=') {
            self.scanner.advance();
        }

        let literal = self.scanner.slice(start, self.scanner.position());
        MK_TOKEN!(lookup_ident(&literal), literal, line)
    }

    fn read_block_delimiter(&mut self) -> Token {
        let line = self.scanner.line();
        self.scanner.advance();

        let kind = if self.state.in_block_params() {
            TokenKind::BlockParamClose
        } else {
            TokenKind::BlockParamOpen
        };

        MK_TOKEN!(kind, String::from("|"), line)
    }

    /// Longest match over the operator and separator tables.
    fn read_symbol(&mut self, current: char) -> Token {
        let line = self.scanner.line();

        for len in (1..=MAX_OPERATOR_LEN).rev() {
            let Some(candidate) = (0..len).map(|i| self.scanner.peek_nth(i)).collect::<Option<String>>() else {
                continue;
            };

            if let Some(kind) = lookup_symbol(&candidate) {
                self.scanner.advance_n(len);
                return MK_TOKEN!(self.disambiguate(kind), candidate, line);
            }
        }

        self.scanner.advance();
        MK_TOKEN!(TokenKind::Illegal, current.to_string(), line)
    }

    fn disambiguate(&self, kind: TokenKind) -> TokenKind {
        match kind {
            TokenKind::Plus if self.state.expects_operand() => TokenKind::UnaryPlus,
            TokenKind::Minus if self.state.expects_operand() => TokenKind::UnaryMinus,
            _ => kind,
        }
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields every token up to and including the first `EOF`.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.is_eof() {
            self.finished = true;
        }

        Some(token)
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit() || c == '_'
}

#[tracing::instrument(level = "debug", skip(source, config), fields(len = source.len()))]
pub fn tokenize_with(source: &[u8], file: Option<String>, config: LexerConfig) -> Result<Vec<Token>, Error> {
    let lexer = Lexer::new(source, file, config)?;
    Ok(lexer.collect())
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    tokenize_with(source.as_bytes(), file, LexerConfig::default())
}

//! Integration tests for the public lexing API.
//!
//! These tests drive the lexer the way a parser does, pulling tokens until
//! `EOF`, and check the properties every token stream must have.

use blocklex::{tokenize, tokenize_with, Lexer, LexerConfig, Token, TokenKind};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn triples(tokens: &[Token]) -> Vec<(TokenKind, &str, u32)> {
    tokens
        .iter()
        .map(|token| (token.kind, token.literal.as_str(), token.line))
        .collect()
}

#[test]
fn test_tokenize_method_with_block() {
    let source = "def total(items)\n  items.map { |item| item.price * -1 } # refund\nend\n".to_string();
    let tokens = tokenize(source, Some("refund.mt".to_string())).unwrap();

    assert_eq!(
        triples(&tokens),
        vec![
            (TokenKind::Def, "def", 1),
            (TokenKind::Identifier, "total", 1),
            (TokenKind::OpenParen, "(", 1),
            (TokenKind::Identifier, "items", 1),
            (TokenKind::CloseParen, ")", 1),
            (TokenKind::Identifier, "items", 2),
            (TokenKind::Dot, ".", 2),
            (TokenKind::Identifier, "map", 2),
            (TokenKind::OpenCurly, "{", 2),
            (TokenKind::BlockParamOpen, "|", 2),
            (TokenKind::Identifier, "item", 2),
            (TokenKind::BlockParamClose, "|", 2),
            (TokenKind::Identifier, "item", 2),
            (TokenKind::Dot, ".", 2),
            (TokenKind::Identifier, "price", 2),
            (TokenKind::Star, "*", 2),
            (TokenKind::UnaryMinus, "-", 2),
            (TokenKind::Integer, "1", 2),
            (TokenKind::CloseCurly, "}", 2),
            (TokenKind::Identifier, "end", 3),
            (TokenKind::EOF, "", 4),
        ]
    );
}

#[test]
fn test_tokenize_class_with_statement_terminators() {
    let config = LexerConfig::new().with_significant_newlines().with_comments();
    let source = "class Account < Base # ledger\n  @balance ||= 0.0\nend";
    let tokens = tokenize_with(source.as_bytes(), None, config).unwrap();

    assert_eq!(
        triples(&tokens),
        vec![
            (TokenKind::Class, "class", 1),
            (TokenKind::Constant, "Account", 1),
            (TokenKind::Less, "<", 1),
            (TokenKind::Constant, "Base", 1),
            (TokenKind::Comment, "# ledger", 1),
            (TokenKind::Newline, "\n", 1),
            (TokenKind::InstanceVariable, "@balance", 2),
            (TokenKind::OrEquals, "||=", 2),
            (TokenKind::Float, "0.0", 2),
            (TokenKind::Newline, "\n", 2),
            (TokenKind::Identifier, "end", 3),
            (TokenKind::EOF, "", 3),
        ]
    );
}

#[test]
fn test_pull_until_eof() {
    let mut lexer = Lexer::new(b"yield x if block?", Some("pull.mt".to_string()), LexerConfig::default()).unwrap();
    let mut pulled = Vec::new();

    loop {
        let token = lexer.next_token();
        if token.is_eof() {
            break;
        }
        pulled.push(token.kind);
    }

    assert_eq!(
        pulled,
        vec![TokenKind::Yield, TokenKind::Identifier, TokenKind::If, TokenKind::HasBlock]
    );
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    assert_eq!(lexer.file().as_str(), "pull.mt");
    assert_eq!(lexer.config(), LexerConfig::default());
}

#[test]
fn test_invalid_utf8_fails_construction() {
    let result = tokenize_with(b"ok \xff", None, LexerConfig::default());

    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "InvalidUtf8");
    assert_eq!(error.get_position().0, 3);
}

proptest! {
    #[test]
    fn test_stream_is_total(source in "\\PC{0,64}") {
        let tokens = tokenize(source, None).unwrap();

        prop_assert!(!tokens.is_empty());
        prop_assert_eq!(tokens.iter().filter(|token| token.is_eof()).count(), 1);
        prop_assert!(tokens.last().unwrap().is_eof());
        prop_assert!(tokens.iter().all(|token| token.line >= 1));
    }

    #[test]
    fn test_lexing_is_deterministic(source in "[ -~\\n\\t]{0,64}") {
        let config = LexerConfig::new().with_comments().with_significant_newlines();
        let first = tokenize_with(source.as_bytes(), None, config).unwrap();
        let second = tokenize_with(source.as_bytes(), None, config).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_lines_never_decrease(source in "[a-z0-9+\\-|{}\"# \\n]{0,64}") {
        let tokens = tokenize(source.clone(), None).unwrap();

        prop_assert!(tokens.windows(2).all(|pair| pair[0].line <= pair[1].line));
        let newlines = source.matches('\n').count() as u32;
        prop_assert_eq!(tokens.last().unwrap().line, newlines + 1);
    }

    #[test]
    fn test_arbitrary_bytes_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        if let Ok(mut lexer) = Lexer::new(&bytes, None, LexerConfig::default()) {
            let mut steps = 0;
            while !lexer.next_token().is_eof() {
                steps += 1;
                prop_assert!(steps <= bytes.len());
            }
        }
    }
}

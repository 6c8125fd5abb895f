use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

/// Longest operator or separator text, in characters.
pub const MAX_OPERATOR_LEN: usize = 3;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("def", TokenKind::Def);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("nil", TokenKind::Nil);
        map.insert("if", TokenKind::If);
        map.insert("elsif", TokenKind::Elsif);
        map.insert("else", TokenKind::Else);
        map.insert("switch", TokenKind::Switch);
        map.insert("case", TokenKind::Case);
        map.insert("default", TokenKind::Default);
        map.insert("return", TokenKind::Return);
        map.insert("self", TokenKind::SelfKeyword);
        map.insert("super", TokenKind::Super);
        map.insert("while", TokenKind::While);
        map.insert("yield", TokenKind::Yield);
        map.insert("next", TokenKind::Next);
        map.insert("class", TokenKind::Class);
        map.insert("module", TokenKind::Module);
        map.insert("break", TokenKind::Break);
        map.insert("block!", TokenKind::GetBlock);
        map.insert("block?", TokenKind::HasBlock);
        map.insert("catch", TokenKind::Catch);
        map.insert("finally", TokenKind::Finally);
        map
    };

    pub static ref OPERATOR_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("=", TokenKind::Assign);
        map.insert("+", TokenKind::Plus);
        map.insert("+=", TokenKind::PlusEquals);
        map.insert("-", TokenKind::Minus);
        map.insert("-=", TokenKind::MinusEquals);
        map.insert("!", TokenKind::Bang);
        map.insert("*", TokenKind::Star);
        map.insert("**", TokenKind::Pow);
        map.insert("/", TokenKind::Slash);
        map.insert(".", TokenKind::Dot);
        map.insert("&&", TokenKind::And);
        map.insert("||", TokenKind::Or);
        map.insert("||=", TokenKind::OrEquals);
        map.insert("%", TokenKind::Percent);
        map.insert("&", TokenKind::Amp);

        map.insert("=~", TokenKind::Match);
        map.insert("<", TokenKind::Less);
        map.insert("<=", TokenKind::LessEquals);
        map.insert(">", TokenKind::Greater);
        map.insert(">=", TokenKind::GreaterEquals);
        map.insert("<=>", TokenKind::Compare);

        map.insert("==", TokenKind::Equals);
        map.insert("!=", TokenKind::NotEquals);
        map.insert("===", TokenKind::IsSame);
        map.insert("!==", TokenKind::IsNotSame);
        map.insert("..", TokenKind::Range);
        map.insert("...", TokenKind::RangeExclusive);

        map.insert("::", TokenKind::Resolution);
        map.insert("->", TokenKind::RightArrow);
        map.insert("<-", TokenKind::LeftArrow);
        map
    };

    pub static ref SEPARATOR_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert(",", TokenKind::Comma);
        map.insert(";", TokenKind::Semicolon);
        map.insert(":", TokenKind::Colon);
        map.insert("|", TokenKind::Bar);

        map.insert("(", TokenKind::OpenParen);
        map.insert(")", TokenKind::CloseParen);
        map.insert("{", TokenKind::OpenCurly);
        map.insert("}", TokenKind::CloseCurly);
        map.insert("[", TokenKind::OpenBracket);
        map.insert("]", TokenKind::CloseBracket);
        map
    };
}

/// Looks up operator or separator text, operators first.
pub fn lookup_symbol(text: &str) -> Option<TokenKind> {
    OPERATOR_LOOKUP
        .get(text)
        .or_else(|| SEPARATOR_LOOKUP.get(text))
        .copied()
}

/// Classifies an identifier-shaped run.
///
/// Keywords win over every other rule, then a leading `@` marks an instance
/// variable, then a leading uppercase letter marks a constant.
pub fn lookup_ident(text: &str) -> TokenKind {
    if let Some(kind) = RESERVED_LOOKUP.get(text) {
        return *kind;
    }

    match text.chars().next() {
        Some('@') => TokenKind::InstanceVariable,
        Some(c) if c.is_uppercase() => TokenKind::Constant,
        _ => TokenKind::Identifier,
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Illegal,
    Newline,
    Comment,

    Identifier,
    Constant,
    InstanceVariable,
    Integer,
    Float,
    String,

    Assign,      // =
    Plus,        // + (binary)
    PlusEquals,  // +=
    Minus,       // - (binary)
    MinusEquals, // -=
    UnaryPlus,
    UnaryMinus,
    Bang, // !
    Star,
    Pow, // **
    Slash,
    Dot,
    And,      // &&
    Or,       // ||
    OrEquals, // ||=
    Percent,
    Amp,

    Match, // =~
    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    Compare, // <=>

    Equals,    // ==
    NotEquals, // !=
    IsSame,    // ===
    IsNotSame, // !==
    Range,     // ..
    RangeExclusive,

    Resolution, // ::
    RightArrow, // ->
    LeftArrow,  // <-

    Comma,
    Semicolon,
    Colon,
    Bar, // | (bitwise or)
    BlockParamOpen,
    BlockParamClose,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,

    // Reserved
    True,
    False,
    Nil,
    If,
    Elsif,
    Else,
    Switch,
    Case,
    Default,
    Return,
    Next,
    Break,
    Def,
    SelfKeyword,
    Super,
    While,
    Yield,
    GetBlock, // block!
    HasBlock, // block?
    Class,
    Module,
    Catch,
    Finally,
}

impl TokenKind {
    /// Whether a token of this kind can end an expression, making a
    /// following `+` or `-` binary.
    pub fn terminates_expression(self) -> bool {
        matches!(
            self,
            TokenKind::Integer
                | TokenKind::Float
                | TokenKind::String
                | TokenKind::Identifier
                | TokenKind::Constant
                | TokenKind::InstanceVariable
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Nil
                | TokenKind::SelfKeyword
                | TokenKind::Super
                | TokenKind::GetBlock
                | TokenKind::HasBlock
                | TokenKind::CloseParen
                | TokenKind::CloseBracket
                | TokenKind::CloseCurly
        )
    }

    /// Whether a block parameter list may follow a token of this kind.
    pub fn introduces_block(self) -> bool {
        matches!(self, TokenKind::OpenCurly | TokenKind::RightArrow)
    }

    pub fn is_keyword(self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| *kind == self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub line: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?}) at line {}", self.kind, self.literal, self.line)
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }
}

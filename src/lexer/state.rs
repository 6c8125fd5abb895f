use std::fmt::Display;

use super::tokens::TokenKind;

/// Lexer mode carried from one token to the next.
///
/// The state is always the one left behind by the previously emitted token;
/// it decides how `+`, `-` and `|` are read.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub enum LexerState {
    /// Nothing has been emitted yet.
    #[default]
    Initial,
    /// The next token starts an operand, so `+`/`-` are unary.
    ExpectOperand,
    /// An operand just ended, so `+`/`-` are binary.
    ExpectOperator,
    /// A block may start here; `|` opens its parameter list.
    ExpectBlockParams,
    /// Inside `|...|`, where the next `|` closes the list.
    BlockParams,
    /// Inside `|...|` right after an operand.
    BlockParamsOperator,
    /// After `.` or `::`, where a keyword names a method.
    ExpectMember,
}

impl LexerState {
    pub fn expects_operand(self) -> bool {
        matches!(
            self,
            LexerState::Initial
                | LexerState::ExpectOperand
                | LexerState::ExpectBlockParams
                | LexerState::BlockParams
        )
    }

    pub fn in_block_params(self) -> bool {
        matches!(self, LexerState::BlockParams | LexerState::BlockParamsOperator)
    }

    /// State after emitting a token of `kind`. Defined for every pair.
    pub fn transition(self, kind: TokenKind) -> LexerState {
        match (self, kind) {
            (state, TokenKind::EOF | TokenKind::Illegal | TokenKind::Comment) => state,
            (state, TokenKind::Newline) if state.in_block_params() => state,
            (LexerState::ExpectBlockParams, TokenKind::Newline) => LexerState::ExpectBlockParams,
            (_, TokenKind::Newline) => LexerState::ExpectOperand,

            (_, TokenKind::BlockParamOpen) => LexerState::BlockParams,
            (_, TokenKind::BlockParamClose) => LexerState::ExpectOperand,

            (state, kind) if state.in_block_params() => {
                if kind.terminates_expression() {
                    LexerState::BlockParamsOperator
                } else {
                    LexerState::BlockParams
                }
            }

            (LexerState::ExpectMember, kind) if kind.is_keyword() => LexerState::ExpectOperator,
            (_, TokenKind::Dot | TokenKind::Resolution) => LexerState::ExpectMember,

            (_, kind) if kind.terminates_expression() => LexerState::ExpectOperator,
            (_, kind) if kind.introduces_block() => LexerState::ExpectBlockParams,
            (_, _) => LexerState::ExpectOperand,
        }
    }
}

impl Display for LexerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

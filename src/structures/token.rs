//! Tokens are a kind paired with the text they were read from.
//!
//! ```rust
//! # use wff_check::structures::token::{Token, TokenKind};
//! let token = Token::new(TokenKind::Implication, "->", 3);
//!
//! assert!(token.kind.is_binary_connective());
//! assert_eq!(token.end(), 5);
//! ```

use serde::Serialize;

/// The kinds of token of the formula language.
///
/// Variants are listed in the order the [lexer](crate::lexer) tries them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// `0` or `1`.
    Numeral,

    /// A single character from `A` to `Z`.
    Symbol,

    /// `!`
    Negation,

    /// `&`
    Conjunction,

    /// `|`
    Disjunction,

    /// `->`
    Implication,

    /// `~`
    Equivalence,

    /// `(`
    LeftParen,

    /// `)`
    RightParen,
}

impl TokenKind {
    /// Whether the kind may join two formulas inside a parenthesised group.
    pub fn is_binary_connective(&self) -> bool {
        matches!(
            self,
            Self::Conjunction | Self::Disjunction | Self::Implication | Self::Equivalence
        )
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeral => write!(f, "numeral"),
            Self::Symbol => write!(f, "symbol"),
            Self::Negation => write!(f, "'!'"),
            Self::Conjunction => write!(f, "'&'"),
            Self::Disjunction => write!(f, "'|'"),
            Self::Implication => write!(f, "'->'"),
            Self::Equivalence => write!(f, "'~'"),
            Self::LeftParen => write!(f, "'('"),
            Self::RightParen => write!(f, "')'"),
        }
    }
}

/// A token, borrowing its text from the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    /// The kind of the token.
    pub kind: TokenKind,

    /// The text of the token, as found in the input.
    pub text: &'src str,

    /// The byte offset of the first character of the token.
    pub position: usize,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: &'src str, position: usize) -> Self {
        Token {
            kind,
            text,
            position,
        }
    }

    /// The byte offset immediately after the token.
    pub fn end(&self) -> usize {
        self.position + self.text.len()
    }

    /// The character of a symbol token.
    pub fn symbol(&self) -> Option<char> {
        match self.kind {
            TokenKind::Symbol => self.text.chars().next(),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

//! Error types used in the library.
//!
//! - A [LexError] is raised when some character of the input belongs to no token class.
//! - A [NormalFormError] notes which part of a normal form check failed.
//!
//! Rejection of a formula by the [recognizer](crate::recognizer) is *not* an error, and is instead returned as a [Recognition](crate::recognizer::Recognition).

use serde::Serialize;

/// Some character of the input does not begin any token.
///
/// The position is a byte offset into the input.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct LexError {
    /// The byte offset of the character.
    pub position: usize,

    /// The character found.
    pub character: char,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unexpected character {:?} at position {}",
            self.character, self.position
        )
    }
}

impl std::error::Error for LexError {}

/// Reasons some text fails to be in a [NormalForm](crate::normal_form::NormalForm).
///
/// Clauses are identified by their index, from zero, in order of appearance.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NormalFormError {
    /// No tokens were found.
    Empty,

    /// The text could not be tokenized.
    Lex(LexError),

    /// An implication or equivalence was found at the given byte offset.
    ForbiddenConnective { position: usize },

    /// A parenthesis at the given byte offset has no partner.
    UnbalancedParentheses { position: usize },

    /// Strict checking is enabled and the text is not a formula.
    Malformed,

    /// Some part of a clause is not a (possibly negated) symbol.
    NotALiteral { clause: usize },

    /// A symbol occurs more than once in a clause.
    RepeatedSymbol { clause: usize, symbol: char },

    /// The symbols of a clause differ from the symbols of the formula.
    SymbolMismatch { clause: usize },

    /// Two clauses have the same literals.
    DuplicateClause { first: usize, second: usize },
}

impl std::fmt::Display for NormalFormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "no formula given"),
            Self::Lex(e) => write!(f, "{e}"),
            Self::ForbiddenConnective { position } => {
                write!(f, "implication or equivalence at position {position}")
            }
            Self::UnbalancedParentheses { position } => {
                write!(f, "unbalanced parenthesis at position {position}")
            }
            Self::Malformed => write!(f, "not a well-formed formula"),
            Self::NotALiteral { clause } => write!(f, "clause {clause} contains a non-literal"),
            Self::RepeatedSymbol { clause, symbol } => {
                write!(f, "symbol {symbol} repeated in clause {clause}")
            }
            Self::SymbolMismatch { clause } => {
                write!(f, "clause {clause} does not mention every symbol")
            }
            Self::DuplicateClause { first, second } => {
                write!(f, "clauses {first} and {second} are duplicates")
            }
        }
    }
}

impl std::error::Error for NormalFormError {}

impl From<LexError> for NormalFormError {
    fn from(e: LexError) -> Self {
        NormalFormError::Lex(e)
    }
}

/*!
Recognition of well-formed formulas.

Formulas are fully parenthesised, and so no precedence is needed:

```text
Formula ::= Numeral | Symbol | '(' '!' Formula ')' | '(' Formula BinOp Formula ')'
BinOp   ::= '&' | '|' | '->' | '~'
```

The grammar is LL(1), and recognition is by descent with a single token of lookahead.
Open groups are held on an explicit stack, so deeply nested formulas do not exhaust the call stack.
No tree is built.
Instead, an accepted formula is paired with a *size*: the count of symbol leaves together with the count of parenthesised subformulas.
Numerals contribute nothing to the size.

# Cursors

The state of a recognition is a [Cursor]: a lexer paired with the one buffered lookahead token.
Cursors are values.
Each step of the recognizer takes a cursor and, on success, returns the advanced cursor together with its result.
So, a partial parse may be examined by calling [formula] directly.

Tokens are pulled from the lexer only as the lookahead is consumed, and so a step stops with a lexical error only when the lookahead reaches the unrecognised character.
[recognize] goes further, and reads the rest of the text for a lexical error before reporting a rejection.

# Examples

```rust
# use wff_check::recognizer::{recognize, Recognition};
assert_eq!(recognize("A"), Ok(Recognition::Accepted { size: 1 }));
assert_eq!(recognize("1"), Ok(Recognition::Accepted { size: 0 }));
assert_eq!(recognize("(A & (!B))"), Ok(Recognition::Accepted { size: 4 }));

assert!(!recognize("(A & B").unwrap().is_accepted());
assert!(recognize("(A & b)").is_err());
```
*/

use serde::Serialize;

use crate::{
    lexer::{tokenize, Lexer},
    misc::log::targets::{self},
    structures::token::{Token, TokenKind},
    types::err::LexError,
};

/// The outcome of recognition of some tokenizable text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Recognition {
    /// The text is a formula of the given size.
    Accepted { size: usize },

    /// The text is not a formula.
    Rejected(Rejection),
}

impl Recognition {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// The size of an accepted formula.
    pub fn size(&self) -> Option<usize> {
        match self {
            Self::Accepted { size } => Some(*size),
            Self::Rejected(_) => None,
        }
    }
}

/// What the recognizer required when it stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    /// A numeral, a symbol, or an opening parenthesis.
    Formula,

    /// One of `&`, `|`, `->`, `~`.
    BinaryConnective,

    /// A closing parenthesis.
    RightParen,

    /// Nothing further, as a formula was complete.
    EndOfInput,
}

impl std::fmt::Display for Expectation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Formula => write!(f, "a formula"),
            Self::BinaryConnective => write!(f, "a binary connective"),
            Self::RightParen => write!(f, "')'"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// Details of where, and why, recognition stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// The byte offset of the offending token, or the length of the text if input ended.
    pub position: usize,

    /// The count of tokens consumed before stopping.
    pub token_index: usize,

    /// The kind of the offending token, if any.
    pub found: Option<TokenKind>,

    /// What was required in place of the token found.
    pub expected: Expectation,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.found {
            Some(kind) => write!(
                f,
                "expected {} but found {kind} at position {}",
                self.expected, self.position
            ),
            None => write!(
                f,
                "expected {} but input ended at position {}",
                self.expected, self.position
            ),
        }
    }
}

/// Reasons for a recognition step to stop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Halt {
    /// The text could not be tokenized.
    Lex(LexError),

    /// The tokens do not continue a formula.
    Reject(Rejection),
}

impl From<LexError> for Halt {
    fn from(e: LexError) -> Self {
        Halt::Lex(e)
    }
}

/// The result of a recognition step: an advanced cursor and a value, or a reason to stop.
pub type Step<'src, T> = Result<(Cursor<'src>, T), Halt>;

/// A position in a token stream, with one token of lookahead.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'src> {
    /// The source of further tokens.
    lexer: Lexer<'src>,

    /// The next unconsumed token, if any.
    lookahead: Option<Token<'src>>,

    /// The count of tokens consumed.
    consumed: usize,
}

impl<'src> Cursor<'src> {
    /// A cursor at the start of `text`, with the first token buffered.
    pub fn new(text: &'src str) -> Result<Self, LexError> {
        let mut lexer = Lexer::new(text);
        let lookahead = lexer.next().transpose()?;
        Ok(Cursor {
            lexer,
            lookahead,
            consumed: 0,
        })
    }

    /// The next unconsumed token, if any.
    pub fn lookahead(&self) -> Option<Token<'src>> {
        self.lookahead
    }

    /// The count of tokens consumed.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Whether every token has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.lookahead.is_none()
    }

    /// The byte offset of the lookahead, or the length of the text if there is no lookahead.
    pub fn position(&self) -> usize {
        match self.lookahead {
            Some(token) => token.position,
            None => self.lexer.source().len(),
        }
    }

    /// Consumes the lookahead and buffers the following token.
    fn advance(mut self) -> Result<Self, LexError> {
        self.lookahead = self.lexer.next().transpose()?;
        self.consumed += 1;
        Ok(self)
    }

    /// Consumes the lookahead if it is of the given kind, and otherwise stops with the expectation.
    fn expect(self, kind: TokenKind, expected: Expectation) -> Result<Self, Halt> {
        match self.lookahead {
            Some(token) if token.kind == kind => Ok(self.advance()?),
            _ => Err(self.reject(expected)),
        }
    }

    fn rejection(&self, expected: Expectation) -> Rejection {
        let rejection = Rejection {
            position: self.position(),
            token_index: self.consumed,
            found: self.lookahead.map(|token| token.kind),
            expected,
        };
        log::debug!(target: targets::RECOGNIZER, "Rejected: {rejection}");
        rejection
    }

    fn reject(&self, expected: Expectation) -> Halt {
        Halt::Reject(self.rejection(expected))
    }
}

/// A parenthesised formula whose opening has been read, awaiting the rest.
#[derive(Clone, Copy, Debug)]
enum Pending {
    /// `( !` has been read.
    Negation,

    /// `(` has been read, and the left operand is next.
    Left,

    /// `( Formula BinOp` has been read, with the size of the left operand.
    Right { left: usize },
}

/// Recognizes a single formula from the cursor, returning the cursor after the formula and the size of the formula.
///
/// Tokens after the formula are left unconsumed.
///
/// Open groups are kept on a stack rather than the call stack, so nesting is bounded only by memory.
///
/// ```rust
/// # use wff_check::recognizer::{formula, Cursor};
/// # use wff_check::structures::token::TokenKind;
/// let cursor = Cursor::new("(A | 0) B").unwrap();
/// let (rest, size) = formula(cursor).unwrap();
///
/// assert_eq!(size, 2);
/// assert_eq!(rest.lookahead().map(|t| t.kind), Some(TokenKind::Symbol));
/// ```
pub fn formula(mut cursor: Cursor<'_>) -> Step<'_, usize> {
    let mut pending: Vec<Pending> = Vec::default();

    'descent: loop {
        log::trace!(target: targets::RECOGNIZER, "Formula at {}", cursor.position());

        let mut size = match cursor.lookahead.map(|token| token.kind) {
            Some(TokenKind::Numeral) => {
                cursor = cursor.advance()?;
                0
            }

            Some(TokenKind::Symbol) => {
                cursor = cursor.advance()?;
                1
            }

            Some(TokenKind::LeftParen) => {
                cursor = cursor.advance()?;
                match cursor.lookahead.map(|token| token.kind) {
                    Some(TokenKind::Negation) => {
                        cursor = cursor.advance()?;
                        pending.push(Pending::Negation);
                    }
                    _ => pending.push(Pending::Left),
                }
                continue 'descent;
            }

            _ => return Err(cursor.reject(Expectation::Formula)),
        };

        // A formula of `size` is complete, so close every group it completes.
        loop {
            match pending.pop() {
                None => return Ok((cursor, size)),

                Some(Pending::Negation) => {
                    cursor = cursor.expect(TokenKind::RightParen, Expectation::RightParen)?;
                    size += 1;
                }

                Some(Pending::Left) => {
                    cursor = binary_connective(cursor)?;
                    pending.push(Pending::Right { left: size });
                    continue 'descent;
                }

                Some(Pending::Right { left }) => {
                    cursor = cursor.expect(TokenKind::RightParen, Expectation::RightParen)?;
                    size += left + 1;
                }
            }
        }
    }
}

fn binary_connective(cursor: Cursor<'_>) -> Result<Cursor<'_>, Halt> {
    match cursor.lookahead {
        Some(token) if token.kind.is_binary_connective() => Ok(cursor.advance()?),
        _ => Err(cursor.reject(Expectation::BinaryConnective)),
    }
}

/// Recognizes `text` as a formula.
///
/// Lexical errors take precedence over rejection.
/// So, if the tokens stop making a formula before an unrecognised character is reached, the rest of the text is read for a lexical error before the rejection is returned.
/// Both `(A & B) x` and `(A & ) x` are lexical errors at `x`.
pub fn recognize(text: &str) -> Result<Recognition, LexError> {
    let recognition = match Cursor::new(text).map_err(Halt::Lex).and_then(formula) {
        Ok((cursor, size)) => match cursor.is_exhausted() {
            true => Recognition::Accepted { size },
            false => Recognition::Rejected(cursor.rejection(Expectation::EndOfInput)),
        },

        Err(Halt::Reject(rejection)) => Recognition::Rejected(rejection),

        Err(Halt::Lex(e)) => return Err(e),
    };

    if let Recognition::Rejected(_) = recognition {
        tokenize(text)?;
    }

    log::debug!(target: targets::RECOGNIZER, "{text:?}: {recognition:?}");
    Ok(recognition)
}

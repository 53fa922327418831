/*!
Lexical analysis of formulas.

A [Lexer] turns text into a lazy sequence of [tokens](crate::structures::token), read left to right on demand.
Runs of whitespace separate tokens and are discarded.

Token classes are tried in the order of [TokenKind], so at each position the first class to match is used:

| Class       | Text         |
|-------------|--------------|
| Numeral     | `0`, `1`     |
| Symbol      | `A` … `Z`    |
| Negation    | `!`          |
| Conjunction | `&`          |
| Disjunction | `\|`         |
| Implication | `->`         |
| Equivalence | `~`          |
| Parentheses | `(`, `)`     |

Matching is case sensitive, and symbols are single letters, so `AB` is two symbols.

If some character begins no token a [LexError] is returned in place of a token, and the sequence ends.

A lexer holds nothing but the text and a position, and so is cheap to copy.
A copy continues independently of the original, and a fresh lexer may be made for the same text at any time.

```rust
# use wff_check::lexer::Lexer;
# use wff_check::structures::token::TokenKind;
let kinds = Lexer::new("(A -> !B)")
    .map(|token| token.map(|t| t.kind))
    .collect::<Result<Vec<_>, _>>();

assert_eq!(
    kinds,
    Ok(vec![
        TokenKind::LeftParen,
        TokenKind::Symbol,
        TokenKind::Implication,
        TokenKind::Negation,
        TokenKind::Symbol,
        TokenKind::RightParen,
    ])
);
```
*/

use crate::{
    misc::log::targets::{self},
    structures::token::{Token, TokenKind},
    types::err::LexError,
};

/// A lexer over some text.
#[derive(Clone, Copy, Debug)]
pub struct Lexer<'src> {
    /// The text being read.
    source: &'src str,

    /// The byte offset of the first unread character.
    position: usize,

    /// Set once an unrecognised character has been reported.
    halted: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            source,
            position: 0,
            halted: false,
        }
    }

    /// The byte offset of the first unread character.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The text being read.
    pub fn source(&self) -> &'src str {
        self.source
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.source[self.position..];
        let trimmed = rest.trim_start();
        self.position += rest.len() - trimmed.len();
    }

    /// The kind and byte length of the token at the start of `rest`, if any.
    fn classify(rest: &str) -> Option<(TokenKind, usize)> {
        let kind = match rest.chars().next()? {
            '0' | '1' => TokenKind::Numeral,
            'A'..='Z' => TokenKind::Symbol,
            '!' => TokenKind::Negation,
            '&' => TokenKind::Conjunction,
            '|' => TokenKind::Disjunction,
            '-' if rest.starts_with("->") => return Some((TokenKind::Implication, 2)),
            '~' => TokenKind::Equivalence,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            _ => return None,
        };
        Some((kind, 1))
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }

        self.skip_whitespace();

        let rest = &self.source[self.position..];
        let character = rest.chars().next()?;
        let start = self.position;

        match Self::classify(rest) {
            Some((kind, length)) => {
                self.position += length;
                let token = Token::new(kind, &self.source[start..self.position], start);
                log::trace!(target: targets::LEXER, "{kind:?} {:?} at {start}", token.text);
                Some(Ok(token))
            }

            None => {
                self.halted = true;
                log::debug!(target: targets::LEXER, "Unrecognised {character:?} at {start}");
                Some(Err(LexError {
                    position: start,
                    character,
                }))
            }
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Every token of `text`, or the first lexical error.
pub fn tokenize(text: &str) -> Result<Vec<Token<'_>>, LexError> {
    Lexer::new(text).collect()
}

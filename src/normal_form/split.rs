//! Depth-aware splitting of token sequences.
//!
//! A connective separates parts of a sequence only at parenthesis depth zero, so in `(A | B) & C` the `|` is ignored when splitting on `|`.
//!
//! All methods take token slices with balanced parentheses, as checked by [balance].

use crate::structures::token::{Token, TokenKind};

/// The byte offset of the first parenthesis without a partner, if any.
///
/// A closing parenthesis is reported as soon as it has no partner, and otherwise the earliest unclosed opening parenthesis is reported.
pub fn balance(tokens: &[Token<'_>]) -> Result<(), usize> {
    let mut open = Vec::default();

    for token in tokens {
        match token.kind {
            TokenKind::LeftParen => open.push(token.position),
            TokenKind::RightParen => {
                if open.pop().is_none() {
                    return Err(token.position);
                }
            }
            _ => {}
        }
    }

    match open.first() {
        None => Ok(()),
        Some(position) => Err(*position),
    }
}

/// The parts of `tokens` between occurrences of `separator` at depth zero.
///
/// There is always at least one part, and parts may be empty.
pub fn split_depth_zero<'t, 'src>(
    tokens: &'t [Token<'src>],
    separator: TokenKind,
) -> Vec<&'t [Token<'src>]> {
    let mut parts = Vec::default();
    let mut depth: usize = 0;
    let mut start = 0;

    for (index, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::LeftParen => depth += 1,
            TokenKind::RightParen => depth = depth.saturating_sub(1),
            kind if kind == separator && depth == 0 => {
                parts.push(&tokens[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }

    parts.push(&tokens[start..]);
    parts
}

/// `tokens` without any parentheses which enclose the whole sequence.
///
/// So, `((A & B))` is stripped to `A & B`, while `(A) & (B)` is unchanged.
pub fn strip_enclosing<'t, 'src>(mut tokens: &'t [Token<'src>]) -> &'t [Token<'src>] {
    while let [first, .., last] = tokens {
        if first.kind != TokenKind::LeftParen || last.kind != TokenKind::RightParen {
            break;
        }

        match partner(tokens) {
            Some(index) if index == tokens.len() - 1 => tokens = &tokens[1..index],
            _ => break,
        }
    }
    tokens
}

/// The index of the parenthesis closing the parenthesis at the start of `tokens`.
fn partner(tokens: &[Token<'_>]) -> Option<usize> {
    let mut depth: usize = 0;

    for (index, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::LeftParen => depth += 1,
            TokenKind::RightParen => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(index);
                }
            }
            _ => {}
        }
    }

    None
}

/// The parts of `tokens` when split by `separator`, with nested groups joined by the same separator split in turn.
///
/// So, on `|`, both `A | B | C` and `((A | B) | C)` give the three parts `A`, `B`, and `C`.
pub fn flatten<'t, 'src>(tokens: &'t [Token<'src>], separator: TokenKind) -> Vec<&'t [Token<'src>]> {
    let mut parts = Vec::default();
    let mut pending = vec![tokens];

    while let Some(tokens) = pending.pop() {
        let inner = strip_enclosing(tokens);
        let split = split_depth_zero(inner, separator);

        match split.len() {
            1 => parts.push(inner),
            // Reversed, so parts are found in order of appearance.
            _ => pending.extend(split.into_iter().rev()),
        }
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn texts(parts: &[&[Token<'_>]]) -> Vec<String> {
        parts
            .iter()
            .map(|part| part.iter().map(|t| t.text).collect::<String>())
            .collect()
    }

    #[test]
    fn split_respects_depth() {
        let tokens = tokenize("(A|B)|C|(!A&(B|C))").unwrap();
        let parts = split_depth_zero(&tokens, TokenKind::Disjunction);
        assert_eq!(texts(&parts), vec!["(A|B)", "C", "(!A&(B|C))"]);
    }

    #[test]
    fn split_without_separator() {
        let tokens = tokenize("(A&B)").unwrap();
        let parts = split_depth_zero(&tokens, TokenKind::Disjunction);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].len(), tokens.len());
    }

    #[test]
    fn split_keeps_empty_parts() {
        let tokens = tokenize("A||B|").unwrap();
        let parts = split_depth_zero(&tokens, TokenKind::Disjunction);
        assert_eq!(texts(&parts), vec!["A", "", "B", ""]);
    }

    #[test]
    fn strip_only_enclosing() {
        let tokens = tokenize("((A&B))").unwrap();
        assert_eq!(texts(&[strip_enclosing(&tokens)]), vec!["A&B"]);

        let tokens = tokenize("(A)&(B)").unwrap();
        assert_eq!(strip_enclosing(&tokens).len(), tokens.len());

        let tokens = tokenize("()").unwrap();
        assert!(strip_enclosing(&tokens).is_empty());
    }

    #[test]
    fn flatten_nested_groups() {
        let tokens = tokenize("(((A&B)|(C&D))|(E&F))").unwrap();
        let parts = flatten(&tokens, TokenKind::Disjunction);
        assert_eq!(texts(&parts), vec!["A&B", "C&D", "E&F"]);
    }

    #[test]
    fn flatten_deep_groups() {
        let depth = 2_000;
        let text = format!("{}A{}", "(".repeat(depth), "|B)".repeat(depth));
        let tokens = tokenize(&text).unwrap();
        let parts = flatten(&tokens, TokenKind::Disjunction);
        assert_eq!(parts.len(), depth + 1);
        assert_eq!(texts(&parts[..2]), vec!["A", "B"]);
    }

    #[test]
    fn flatten_leaves_other_connectives() {
        let tokens = tokenize("((A|B)&C)").unwrap();
        let parts = flatten(&tokens, TokenKind::Disjunction);
        assert_eq!(texts(&parts), vec!["(A|B)&C"]);
    }

    #[test]
    fn balance_positions() {
        assert_eq!(balance(&tokenize("((A)(B))").unwrap()), Ok(()));
        assert_eq!(balance(&tokenize("(A))").unwrap()), Err(3));
        assert_eq!(balance(&tokenize("((A)").unwrap()), Err(0));
        assert_eq!(balance(&tokenize(")(").unwrap()), Err(0));
    }
}

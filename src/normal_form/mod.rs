/*!
Canonical normal forms.

A formula is in *SDNF* (perfect disjunctive normal form) if it is a disjunction of distinct clauses, where each clause is a conjunction which mentions every symbol of the formula exactly once, either plainly or negated.
Dually, a formula is in *SKNF* (perfect conjunctive normal form) if it is a conjunction of distinct clauses, each a disjunction which mentions every symbol exactly once.

Membership is decided from the tokens of a formula, without building the formula:
1. The symbols of the formula are collected.
2. The tokens are [split](split::flatten) into clauses on the outer connective of the form, at parenthesis depth zero.
3. Each clause is split into literals on the inner connective of the form, and each literal is stripped of enclosing parentheses and negations to find its symbol.
4. Each clause must mention every symbol exactly once, and no two clauses may have the same literals (in any order).

Implications and equivalences are not permitted anywhere.

By default text need not be a [well-formed](crate::recognizer) formula, as canonical forms are conventionally written without outer parentheses or parentheses around negations.
See [Config::strict_normal_form](crate::config::Config::strict_normal_form).

# Examples

```rust
# use wff_check::normal_form::{check_normal_form, NormalForm};
assert!(check_normal_form("(A&B)|(!A&!B)", NormalForm::SDNF));
assert!(!check_normal_form("(A&B)|(A&B)", NormalForm::SDNF));
assert!(!check_normal_form("(A&B)|(B&A)", NormalForm::SDNF));

assert!(check_normal_form("(A|B)&(!A|B)", NormalForm::SKNF));
assert!(!check_normal_form("(A->B)", NormalForm::SKNF));
```
*/

pub mod split;

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::{
    config::Config,
    lexer::tokenize,
    misc::log::targets::{self},
    recognizer::recognize,
    structures::token::{Token, TokenKind},
    types::err::NormalFormError,
};

/// The canonical normal forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
#[allow(clippy::upper_case_acronyms)]
pub enum NormalForm {
    /// A disjunction of conjunctive clauses
    SDNF,

    /// A conjunction of disjunctive clauses
    SKNF,
}

impl NormalForm {
    /// The connective joining clauses.
    pub fn clause_separator(&self) -> TokenKind {
        match self {
            Self::SDNF => TokenKind::Disjunction,
            Self::SKNF => TokenKind::Conjunction,
        }
    }

    /// The connective joining literals within a clause.
    pub fn literal_separator(&self) -> TokenKind {
        match self {
            Self::SDNF => TokenKind::Conjunction,
            Self::SKNF => TokenKind::Disjunction,
        }
    }
}

impl std::fmt::Display for NormalForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SDNF => write!(f, "SDNF"),
            Self::SKNF => write!(f, "SKNF"),
        }
    }
}

/// A symbol, perhaps negated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    pub symbol: char,
    pub negated: bool,
}

impl Literal {
    /// The literal of `tokens`, after removal of enclosing parentheses and leading negations.
    ///
    /// An even count of negations cancels.
    pub fn from_tokens(mut tokens: &[Token<'_>]) -> Option<Self> {
        let mut negated = false;

        loop {
            tokens = split::strip_enclosing(tokens);
            match tokens {
                [first, rest @ ..] if first.kind == TokenKind::Negation => {
                    negated = !negated;
                    tokens = rest;
                }

                [only] => {
                    return only.symbol().map(|symbol| Literal { symbol, negated });
                }

                _ => return None,
            }
        }
    }
}

/// A summary of some text in a normal form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// The symbols of the text, in order.
    pub symbols: Vec<char>,

    /// The count of clauses.
    pub clause_count: usize,
}

/// Examines whether `text` is in the given normal form, noting the first reason found if not.
///
/// ```rust
/// # use wff_check::config::Config;
/// # use wff_check::normal_form::{examine, NormalForm};
/// # use wff_check::types::err::NormalFormError;
/// let config = Config::default();
///
/// let summary = examine("(A|B|!C) & (!A|B|C)", NormalForm::SKNF, &config).unwrap();
/// assert_eq!(summary.symbols, vec!['A', 'B', 'C']);
/// assert_eq!(summary.clause_count, 2);
///
/// assert_eq!(
///     examine("(A&B) | A", NormalForm::SDNF, &config),
///     Err(NormalFormError::SymbolMismatch { clause: 1 })
/// );
/// ```
pub fn examine(text: &str, form: NormalForm, config: &Config) -> Result<Summary, NormalFormError> {
    let tokens = tokenize(text)?;

    if tokens.is_empty() {
        return Err(NormalFormError::Empty);
    }

    if let Some(token) = tokens
        .iter()
        .find(|t| matches!(t.kind, TokenKind::Implication | TokenKind::Equivalence))
    {
        return Err(NormalFormError::ForbiddenConnective {
            position: token.position,
        });
    }

    split::balance(&tokens)
        .map_err(|position| NormalFormError::UnbalancedParentheses { position })?;

    if config.strict_normal_form.value && !recognize(text).is_ok_and(|r| r.is_accepted()) {
        return Err(NormalFormError::Malformed);
    }

    let symbols = tokens
        .iter()
        .filter_map(|token| token.symbol())
        .collect::<BTreeSet<_>>();

    let clauses = split::flatten(&tokens, form.clause_separator());
    log::trace!(target: targets::NORMAL_FORM, "{} clauses over {symbols:?}", clauses.len());

    let mut seen: HashMap<Vec<Literal>, usize> = HashMap::default();

    for (index, clause) in clauses.iter().enumerate() {
        let mut literals = clause_literals(clause, form, index)?;

        let mentioned = literals.iter().map(|l| l.symbol).collect::<BTreeSet<_>>();
        if mentioned != symbols {
            return Err(NormalFormError::SymbolMismatch { clause: index });
        }

        literals.sort_unstable();
        if let Some(first) = seen.insert(literals, index) {
            return Err(NormalFormError::DuplicateClause {
                first,
                second: index,
            });
        }
    }

    Ok(Summary {
        symbols: symbols.into_iter().collect(),
        clause_count: clauses.len(),
    })
}

/// The literals of a clause, each of a distinct symbol.
fn clause_literals(
    clause: &[Token<'_>],
    form: NormalForm,
    index: usize,
) -> Result<Vec<Literal>, NormalFormError> {
    let mut symbols = BTreeSet::default();
    let mut literals = Vec::default();

    for part in split::flatten(clause, form.literal_separator()) {
        let literal =
            Literal::from_tokens(part).ok_or(NormalFormError::NotALiteral { clause: index })?;

        if !symbols.insert(literal.symbol) {
            return Err(NormalFormError::RepeatedSymbol {
                clause: index,
                symbol: literal.symbol,
            });
        }
        literals.push(literal);
    }

    Ok(literals)
}

/// Whether `text` is in the given normal form, with configuration.
pub fn check_normal_form_with(text: &str, form: NormalForm, config: &Config) -> bool {
    match examine(text, form, config) {
        Ok(_) => true,
        Err(e) => {
            log::debug!(target: targets::NORMAL_FORM, "{text:?} is not in {form}: {e}");
            false
        }
    }
}

/// Whether `text` is in the given normal form, with the default configuration.
pub fn check_normal_form(text: &str, form: NormalForm) -> bool {
    check_normal_form_with(text, form, &Config::default())
}

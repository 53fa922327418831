//! A library for recognising well-formed propositional formulas, and for checking whether a formula is in a canonical normal form.
//!
//! Formulas are built from the numerals `0` and `1`, the symbols `A` to `Z`, negation `!`, and the binary connectives `&`, `|`, `->`, and `~`.
//! Every compound formula is parenthesised, so `(A & (!B))` is a formula while `A & !B` is not.
//!
//! # Orientation
//!
//! The library is made of three parts, each used independently on some text:
//! - The [lexer], which reads text as a lazy sequence of [tokens](structures::token).
//! - The [recognizer], which decides whether the tokens of some text make a formula, and if so reports the size of the formula.
//! - The [normal form](normal_form) validator, which decides whether some text is in SDNF or SKNF from the clauses of the text.
//!
//! Nothing is shared between calls, and no formula is built, so each call is independent of every other.
//!
//! Lexical errors are distinguished from rejection of a formula.
//! A character which begins no token is an [error](types::err::LexError), while tokens which do not make a formula are a [rejection](recognizer::Recognition::Rejected), which is an ordinary outcome.
//!
//! # Examples
//!
//! + Recognise some formulas.
//!
//! ```rust
//! use wff_check::recognizer::{recognize, Recognition};
//!
//! assert_eq!(recognize("(A & B)"), Ok(Recognition::Accepted { size: 3 }));
//! assert_eq!(recognize("((A -> 0) ~ (!B))").map(|r| r.size()), Ok(Some(5)));
//!
//! match recognize("(A & B))") {
//!     Ok(Recognition::Rejected(rejection)) => assert_eq!(rejection.position, 7),
//!     _ => panic!("trailing parenthesis"),
//! }
//! ```
//!
//! + Check normal forms.
//!
//! ```rust
//! use wff_check::normal_form::{check_normal_form, NormalForm};
//!
//! let sdnf = "(A & B & !C) | (!A & B & C) | (A & !B & !C)";
//! assert!(check_normal_form(sdnf, NormalForm::SDNF));
//! assert!(!check_normal_form(sdnf, NormalForm::SKNF));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made with the targets listed in [misc::log].
//! No logger is installed by the library.

pub mod config;
pub mod lexer;
pub mod misc;
pub mod normal_form;
pub mod recognizer;
pub mod reports;
pub mod structures;
pub mod types;

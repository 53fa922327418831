/*!
Reports on a formula.

A [Report] gathers the result of recognition or a normal form check, together with any reason for failure, in a form suited to display.
*/

use serde::Serialize;

use crate::{
    config::Config,
    normal_form::{self, NormalForm},
    recognizer::{self, Recognition, Rejection},
    types::err::{LexError, NormalFormError},
};

/// High-level reports regarding some text.
#[derive(PartialEq, Eq, Clone, Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Report {
    /// The text is a formula.
    Accepted { size: usize },

    /// The text is not a formula.
    Rejected(Rejection),

    /// Some character of the text belongs to no token.
    LexFailure(LexError),

    /// Whether the text is in a normal form, and if not some reason why.
    NormalForm {
        form: NormalForm,
        holds: bool,
        reason: Option<String>,
    },
}

impl Report {
    /// A report on recognition of `text`.
    pub fn recognition(text: &str) -> Self {
        match recognizer::recognize(text) {
            Ok(Recognition::Accepted { size }) => Report::Accepted { size },
            Ok(Recognition::Rejected(rejection)) => Report::Rejected(rejection),
            Err(e) => Report::LexFailure(e),
        }
    }

    /// A report on whether `text` is in the given normal form.
    ///
    /// Text which cannot be tokenized is reported as a lexical failure, as with recognition.
    pub fn normal_form(text: &str, form: NormalForm, config: &Config) -> Self {
        let reason = match normal_form::examine(text, form, config) {
            Ok(_) => None,
            Err(NormalFormError::Lex(e)) => return Report::LexFailure(e),
            Err(e) => Some(e.to_string()),
        };

        Report::NormalForm {
            form,
            holds: reason.is_none(),
            reason,
        }
    }

    /// Whether the report is of an accepted formula, or of a normal form which holds.
    pub fn is_positive(&self) -> bool {
        match self {
            Self::Accepted { .. } => true,
            Self::NormalForm { holds, .. } => *holds,
            Self::Rejected(_) | Self::LexFailure(_) => false,
        }
    }

    /// Some explanation of a negative report.
    pub fn reason(&self) -> Option<String> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected(rejection) => Some(rejection.to_string()),
            Self::LexFailure(e) => Some(e.to_string()),
            Self::NormalForm { reason, .. } => reason.clone(),
        }
    }
}

/// Reports are displayed as `(True, size)` for an accepted formula, and otherwise as `True` or `False`.
impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accepted { size } => write!(f, "(True, {size})"),
            Self::Rejected(_) | Self::LexFailure(_) => write!(f, "False"),
            Self::NormalForm { holds: true, .. } => write!(f, "True"),
            Self::NormalForm { holds: false, .. } => write!(f, "False"),
        }
    }
}

//! Results of resolving one conversational turn.

use serde::Serialize;

/// What the caller should show for one turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Events found for a date, range, name or selection.
    Answer { text: String },
    /// Low-confidence names offered as numbered choices.
    Suggestions { text: String, option_count: usize },
    /// Nothing scheduled or nothing matched.
    NoMatch { text: String },
    /// A confirmation arrived with no earlier answer to repeat.
    NothingToConfirm { text: String },
}

impl Outcome {
    pub fn text(&self) -> &str {
        match self {
            Outcome::Answer { text }
            | Outcome::Suggestions { text, .. }
            | Outcome::NoMatch { text }
            | Outcome::NothingToConfirm { text } => text,
        }
    }
}

//! Per-conversation disambiguation state.

use serde::Serialize;

/// How a numbered option list was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKind {
    /// Confident matches, listed together with their dates.
    Matches,
    /// "Did you mean" titles without dates.
    Suggestions,
}

/// The last answer a conversation can refer back to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum LastResult {
    #[default]
    Absent,
    PlainAnswer {
        text: String,
    },
    OptionSet {
        text: String,
        kind: OptionKind,
        /// Normalized event names; option `"1"` is the first entry.
        options: Vec<String>,
    },
}

impl LastResult {
    /// Event name for a numbered reply such as `"2"`.
    pub fn option(&self, key: &str) -> Option<&str> {
        let LastResult::OptionSet { options, .. } = self else {
            return None;
        };
        options
            .iter()
            .enumerate()
            .find(|(i, _)| (i + 1).to_string() == key)
            .map(|(_, name)| name.as_str())
    }
}

/// Where a conversation stands, derived from its [`LastResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingConfirmation,
    AwaitingSelection,
}

/// State owned by exactly one conversation. Create one per conversation and
/// drop it when the conversation ends.
#[derive(Debug, Clone, Default)]
pub struct Session {
    last_result: LastResult,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    pub fn state(&self) -> SessionState {
        match self.last_result {
            LastResult::Absent => SessionState::Idle,
            LastResult::PlainAnswer { .. } => SessionState::AwaitingConfirmation,
            LastResult::OptionSet { .. } => SessionState::AwaitingSelection,
        }
    }

    pub fn last_result(&self) -> &LastResult {
        &self.last_result
    }

    pub(crate) fn store(&mut self, result: LastResult) {
        self.last_result = result;
    }

    pub(crate) fn clear(&mut self) {
        self.last_result = LastResult::Absent;
    }
}

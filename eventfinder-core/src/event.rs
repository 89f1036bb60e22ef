//! Calendar event records as delivered by a loader.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::UNKNOWN_EVENT_NAME;

/// A single occurrence of a named event on a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub name: String,
    pub date: NaiveDate,
}

impl EventRecord {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        EventRecord {
            name: name.into(),
            date,
        }
    }
}

/// Lowercase, trim and collapse internal whitespace.
/// Blank names map to [`UNKNOWN_EVENT_NAME`].
pub fn normalize_name(name: &str) -> String {
    let collapsed = name.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        UNKNOWN_EVENT_NAME.to_string()
    } else {
        collapsed.to_lowercase()
    }
}

/// Capitalize the first letter of every word ("fall fest" -> "Fall Fest").
///
/// A word starts after any non-alphabetic character, so "mid-term" becomes
/// "Mid-Term".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_whitespace_and_lowercases() {
        assert_eq!(normalize_name("  Spring   Break\t2025 "), "spring break 2025");
    }

    #[test]
    fn normalize_blank_name_is_unknown_event() {
        assert_eq!(normalize_name(""), "unknown event");
        assert_eq!(normalize_name("   "), "unknown event");
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("fall fest"), "Fall Fest");
        assert_eq!(title_case("mid-term grades due"), "Mid-Term Grades Due");
        assert_eq!(title_case("final exam week 2"), "Final Exam Week 2");
    }
}

//! Shared constants.

/// Name given to events whose SUMMARY is missing or blank.
pub const UNKNOWN_EVENT_NAME: &str = "unknown event";

/// Scores strictly above this are direct answers.
pub const HIGH_CONFIDENCE_THRESHOLD: u8 = 60;

/// Scores strictly above this (and not above the high threshold) are suggestions.
pub const LOW_CONFIDENCE_THRESHOLD: u8 = 40;

/// Number of fuzzy candidates considered per query.
pub const DEFAULT_MATCH_LIMIT: usize = 5;

/// Replies that replay the previous answer.
pub const DEFAULT_AFFIRMATIVES: &[&str] = &["yes", "yeah", "sure", "show me"];

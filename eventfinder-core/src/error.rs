//! Error types for eventfinder.
//!
//! Unmatched queries are not errors: they resolve to an ordinary
//! [`Outcome::NoMatch`](crate::outcome::Outcome::NoMatch).

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in eventfinder operations.
#[derive(Error, Debug)]
pub enum EventFinderError {
    #[error("Query is empty")]
    InvalidQuery,

    #[error("Calendar contains no events")]
    EmptyCalendar,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Calendar file not found: {}", .0.display())]
    CalendarNotFound(PathBuf),

    #[error("ICS parse error: {0}")]
    IcsParse(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for eventfinder operations.
pub type EventFinderResult<T> = Result<T, EventFinderError>;

//! Calendar file loading.
//!
//! Reads RFC 5545 .ics files into flat [`EventRecord`](crate::event::EventRecord)
//! lists for [`CalendarIndex::build`](crate::index::CalendarIndex::build).

mod parse;

pub use parse::{load_calendar, parse_calendar};

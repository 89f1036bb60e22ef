//! Conversational event lookup over a university calendar.
//!
//! Build a [`CalendarIndex`] once from loader output, wrap it in a
//! [`Resolver`], and give every conversation its own [`Session`]:
//!
//! - `index` / `event`: lookup tables over `(name, date)` records
//! - `normalize`: keyword rewriting of raw queries
//! - `date_expr`: relative date phrases ("tomorrow", "this week")
//! - `fuzzy`: name similarity and confidence tiers
//! - `session` / `resolver`: follow-up handling ("yes", "2") across turns
//! - `ics` / `config`: loading calendars and settings from disk

pub mod config;
pub mod constants;
pub mod date_expr;
pub mod date_range;
pub mod error;
pub mod event;
pub mod fuzzy;
pub mod ics;
pub mod index;
pub mod normalize;
pub mod outcome;
pub mod resolver;
pub mod session;

pub use error::{EventFinderError, EventFinderResult};
pub use event::EventRecord;
pub use index::CalendarIndex;
pub use outcome::Outcome;
pub use resolver::{Resolver, ResolverConfig};
pub use session::Session;

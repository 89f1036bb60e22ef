//! Relative date phrases ("tomorrow", "this week", ...).
//!
//! Only fixed phrases are recognized. Anything else, including explicit
//! dates like "march 5", falls through to name search.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Serialize;

use crate::date_range::DateRange;

/// What a query says about dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DateQuery {
    NoDate,
    Single { date: NaiveDate },
    Range { range: DateRange },
}

type PhraseResolver = fn(NaiveDate) -> Option<DateQuery>;

/// Checked in order; the first phrase contained in the query wins.
const PHRASES: &[(&[&str], PhraseResolver)] = &[
    (&["tomorrow", "tmrw"], tomorrow),
    (&["today"], today),
    (&["next week"], next_week),
    (&["next month"], next_month),
    (&["this week"], this_week),
];

fn tomorrow(today: NaiveDate) -> Option<DateQuery> {
    today.succ_opt().map(|date| DateQuery::Single { date })
}

fn today(today: NaiveDate) -> Option<DateQuery> {
    Some(DateQuery::Single { date: today })
}

fn next_week(today: NaiveDate) -> Option<DateQuery> {
    today
        .checked_add_days(Days::new(7))
        .map(|date| DateQuery::Single { date })
}

fn next_month(today: NaiveDate) -> Option<DateQuery> {
    today
        .with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .map(|date| DateQuery::Single { date })
}

fn this_week(today: NaiveDate) -> Option<DateQuery> {
    Some(DateQuery::Range {
        range: DateRange::week_of(today),
    })
}

/// Resolve the first recognized date phrase in `query` relative to `today`.
pub fn resolve_date(query: &str, today: NaiveDate) -> DateQuery {
    PHRASES
        .iter()
        .find(|(words, _)| words.iter().any(|w| query.contains(w)))
        .and_then(|(_, resolve)| resolve(today))
        .unwrap_or(DateQuery::NoDate)
}

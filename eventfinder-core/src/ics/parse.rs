//! ICS parsing using the icalendar crate's parser.

use std::path::Path;

use chrono::NaiveDate;
use chrono_tz::Tz;
use icalendar::{
    CalendarDateTime, DatePerhapsTime,
    parser::{Component, read_calendar, unfold},
};
use tracing::{info, warn};

use crate::error::{EventFinderError, EventFinderResult};
use crate::event::EventRecord;

/// Read an .ics file into one record per VEVENT.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn load_calendar(path: &Path, tz: Option<Tz>) -> EventFinderResult<Vec<EventRecord>> {
    if !path.exists() {
        return Err(EventFinderError::CalendarNotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);
    let records = parse_calendar(&content, tz)?;

    info!(path = %path.display(), events = records.len(), "loaded calendar");
    Ok(records)
}

/// Parse ICS content into records: SUMMARY becomes the name, the calendar
/// date of DTSTART the date. UTC start times are shifted into `tz` first
/// when one is given.
pub fn parse_calendar(content: &str, tz: Option<Tz>) -> EventFinderResult<Vec<EventRecord>> {
    let unfolded = unfold(content);
    let calendar =
        read_calendar(&unfolded).map_err(|e| EventFinderError::IcsParse(e.to_string()))?;

    let records = calendar
        .components
        .iter()
        .filter(|c| c.name == "VEVENT")
        .filter_map(|vevent| {
            let record = to_record(vevent, tz);
            if record.is_none() {
                let uid = vevent.find_prop("UID").map(|p| p.val.to_string());
                warn!(?uid, "skipping VEVENT without a usable DTSTART");
            }
            record
        })
        .collect();

    Ok(records)
}

fn to_record(vevent: &Component, tz: Option<Tz>) -> Option<EventRecord> {
    let name = vevent
        .find_prop("SUMMARY")
        .map(|p| unescape_text(p.val.as_ref()))
        .unwrap_or_default();
    let start = DatePerhapsTime::try_from(vevent.find_prop("DTSTART")?).ok()?;

    Some(EventRecord::new(name, to_date(start, tz)))
}

fn to_date(dpt: DatePerhapsTime, tz: Option<Tz>) -> NaiveDate {
    match dpt {
        DatePerhapsTime::Date(d) => d,
        DatePerhapsTime::DateTime(cal_dt) => match cal_dt {
            CalendarDateTime::Utc(dt) => match tz {
                Some(tz) => dt.with_timezone(&tz).date_naive(),
                None => dt.date_naive(),
            },
            CalendarDateTime::Floating(naive) => naive.date(),
            CalendarDateTime::WithTimezone { date_time, .. } => date_time.date(),
        },
    }
}

/// Undo RFC 5545 TEXT escaping (`\,` `\;` `\n` `\\`).
fn unescape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push(' '),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }

    out
}

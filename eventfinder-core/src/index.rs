//! In-memory lookup tables over a loaded calendar.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use tracing::info;

use crate::date_range::DateRange;
use crate::error::{EventFinderError, EventFinderResult};
use crate::event::{EventRecord, normalize_name};

/// Two inverse indexes over the same set of `(name, date)` records.
///
/// Immutable after construction, so one index can be shared between any
/// number of conversations.
#[derive(Debug, Clone)]
pub struct CalendarIndex {
    /// Normalized names in order of first (chronological) appearance.
    names: Vec<String>,
    events_by_name: HashMap<String, Vec<NaiveDate>>,
    dates_by_date: BTreeMap<NaiveDate, Vec<String>>,
}

impl CalendarIndex {
    /// Build the index from loader output. Records are ordered chronologically
    /// first; records sharing a date keep their input order.
    pub fn build(records: impl IntoIterator<Item = EventRecord>) -> EventFinderResult<Self> {
        let mut records: Vec<EventRecord> = records.into_iter().collect();

        if records.is_empty() {
            return Err(EventFinderError::EmptyCalendar);
        }

        records.sort_by_key(|r| r.date);

        let mut names = Vec::new();
        let mut events_by_name: HashMap<String, Vec<NaiveDate>> = HashMap::new();
        let mut dates_by_date: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();

        for record in &records {
            let name = normalize_name(&record.name);

            let dates = events_by_name.entry(name.clone()).or_insert_with(|| {
                names.push(name.clone());
                Vec::new()
            });
            dates.push(record.date);

            dates_by_date.entry(record.date).or_default().push(name);
        }

        info!(
            records = records.len(),
            names = names.len(),
            dates = dates_by_date.len(),
            "built calendar index"
        );

        Ok(CalendarIndex {
            names,
            events_by_name,
            dates_by_date,
        })
    }

    /// Indexed event names in first-occurrence order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of distinct event names.
    pub fn name_count(&self) -> usize {
        self.names.len()
    }

    /// Ascending occurrence dates for a normalized name.
    pub fn dates_for(&self, name: &str) -> Option<&[NaiveDate]> {
        self.events_by_name.get(name).map(Vec::as_slice)
    }

    /// Events on a single date, in chronological insertion order.
    pub fn events_on(&self, date: NaiveDate) -> Option<&[String]> {
        self.dates_by_date.get(&date).map(Vec::as_slice)
    }

    /// Dates within the inclusive range that have at least one event, ascending.
    pub fn events_between(
        &self,
        range: &DateRange,
    ) -> impl Iterator<Item = (NaiveDate, &[String])> {
        self.dates_by_date
            .range(range.start..=range.end)
            .map(|(date, names)| (*date, names.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> CalendarIndex {
        CalendarIndex::build(vec![
            EventRecord::new("Fall Concert", date(2025, 10, 3)),
            EventRecord::new("Fall  Fest ", date(2025, 9, 20)),
            EventRecord::new("Career Fair", date(2025, 9, 20)),
            EventRecord::new("Fall Fest", date(2025, 9, 27)),
            EventRecord::new("", date(2025, 9, 1)),
        ])
        .unwrap()
    }

    #[test]
    fn empty_records_are_rejected() {
        let err = CalendarIndex::build(Vec::new()).unwrap_err();
        assert!(matches!(err, EventFinderError::EmptyCalendar));
    }

    #[test]
    fn dates_per_name_are_ascending_and_normalized() {
        let index = sample();
        assert_eq!(
            index.dates_for("fall fest"),
            Some(&[date(2025, 9, 20), date(2025, 9, 27)][..])
        );
        assert_eq!(index.dates_for("Fall Fest"), None);
    }

    #[test]
    fn names_follow_chronological_first_appearance() {
        let index = sample();
        let names: Vec<_> = index.names().collect();
        assert_eq!(
            names,
            vec!["unknown event", "fall fest", "career fair", "fall concert"]
        );
    }

    #[test]
    fn same_day_events_keep_input_order() {
        let index = sample();
        assert_eq!(
            index.events_on(date(2025, 9, 20)),
            Some(&["fall fest".to_string(), "career fair".to_string()][..])
        );
    }

    #[test]
    fn duplicate_records_are_preserved() {
        let index = CalendarIndex::build(vec![
            EventRecord::new("Reading Day", date(2025, 6, 1)),
            EventRecord::new("Reading Day", date(2025, 6, 1)),
        ])
        .unwrap();
        assert_eq!(index.dates_for("reading day").map(<[_]>::len), Some(2));
        assert_eq!(index.events_on(date(2025, 6, 1)).map(<[_]>::len), Some(2));
    }

    #[test]
    fn both_indexes_describe_the_same_records() {
        let index = sample();

        for name in index.names() {
            for d in index.dates_for(name).unwrap() {
                assert!(index.events_on(*d).unwrap().iter().any(|n| n == name));
            }
        }

        let range = DateRange::new(date(2025, 1, 1), date(2025, 12, 31));
        for (d, names) in index.events_between(&range) {
            for name in names {
                assert!(index.dates_for(name).unwrap().contains(&d));
            }
        }
    }

    #[test]
    fn range_lookup_is_inclusive() {
        let index = sample();
        let range = DateRange::new(date(2025, 9, 20), date(2025, 9, 27));
        let dates: Vec<_> = index.events_between(&range).map(|(d, _)| d).collect();
        assert_eq!(dates, vec![date(2025, 9, 20), date(2025, 9, 27)]);
    }
}

pub mod ask;
pub mod chat;
pub mod config;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use eventfinder_core::config::EventFinderConfig;
use eventfinder_core::ics::load_calendar;
use eventfinder_core::{CalendarIndex, EventFinderError, Resolver};

use crate::utils::tui::with_spinner;

/// Calendar file to use: the --calendar flag, else the configured path.
pub fn calendar_path(config: &EventFinderConfig, calendar: Option<&Path>) -> PathBuf {
    calendar
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.calendar_path())
}

/// Load the calendar file and build a resolver over it.
pub fn load_resolver(config: &EventFinderConfig, calendar: Option<&Path>) -> Result<Resolver> {
    let path = calendar_path(config, calendar);
    let tz = config.timezone()?;

    let records = with_spinner(format!("Loading {}", path.display()), || {
        load_calendar(&path, tz)
    });

    let records = match records {
        Ok(records) => records,
        Err(EventFinderError::CalendarNotFound(path)) => {
            let config_path = EventFinderConfig::config_path()?;
            anyhow::bail!(
                "Calendar file not found: {}\n\n\
                Point eventfinder at your calendar with:\n  \
                eventfinder --calendar <file.ics>\n\n\
                or set calendar_path in {}",
                path.display(),
                config_path.display()
            );
        }
        Err(e) => return Err(e.into()),
    };

    let index = match CalendarIndex::build(records) {
        Ok(index) => index,
        Err(EventFinderError::EmptyCalendar) => {
            anyhow::bail!("No events found in {}. Try another file!", path.display());
        }
        Err(e) => return Err(e.into()),
    };

    Ok(Resolver::new(Arc::new(index), config.resolver_config()))
}

/// The --today override, else the current date in the configured zone.
pub fn today(config: &EventFinderConfig, fixed: Option<NaiveDate>) -> Result<NaiveDate> {
    match fixed {
        Some(date) => Ok(date),
        None => Ok(config.today()?),
    }
}

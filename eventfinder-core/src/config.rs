//! Global eventfinder configuration.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use chrono_tz::Tz;
use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_AFFIRMATIVES, DEFAULT_MATCH_LIMIT};
use crate::error::{EventFinderError, EventFinderResult};
use crate::fuzzy::ScorerKind;
use crate::normalize::{KeywordRule, KeywordTable};
use crate::resolver::ResolverConfig;

static DEFAULT_CALENDAR_PATH: &str = "~/calendar/events.ics";

fn default_calendar_path() -> PathBuf {
    PathBuf::from(DEFAULT_CALENDAR_PATH)
}

fn is_default_calendar_path(p: &PathBuf) -> bool {
    *p == default_calendar_path()
}

fn default_match_limit() -> usize {
    DEFAULT_MATCH_LIMIT
}

fn default_affirmatives() -> Vec<String> {
    DEFAULT_AFFIRMATIVES.iter().map(|s| s.to_string()).collect()
}

/// Global configuration at ~/.config/eventfinder/config.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EventFinderConfig {
    #[serde(default = "default_calendar_path", skip_serializing_if = "is_default_calendar_path")]
    pub calendar_path: PathBuf,

    /// IANA zone name, e.g. "America/Chicago"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    #[serde(default = "default_match_limit")]
    pub match_limit: usize,

    #[serde(default)]
    pub scorer: ScorerKind,

    #[serde(default = "default_affirmatives")]
    pub affirmatives: Vec<String>,

    /// Replaces the built-in keyword table when set. Order matters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<KeywordRule>>,
}

impl Default for EventFinderConfig {
    fn default() -> Self {
        EventFinderConfig {
            calendar_path: default_calendar_path(),
            timezone: None,
            match_limit: default_match_limit(),
            scorer: ScorerKind::default(),
            affirmatives: default_affirmatives(),
            keywords: None,
        }
    }
}

impl EventFinderConfig {
    pub fn config_path() -> EventFinderResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventFinderError::Config("Could not determine config directory".into()))?
            .join("eventfinder");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented-out default file first if
    /// none exists yet.
    pub fn load() -> EventFinderResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load config from a specific file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> EventFinderResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| EventFinderError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventFinderError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> EventFinderResult<()> {
        let contents = format!(
            "\
# eventfinder configuration

# Calendar file (.ics) to answer questions about:
# calendar_path = \"{}\"

# Time zone used for \"today\" and for event start times:
# timezone = \"America/Chicago\"

# How many candidate events a name search considers:
# match_limit = {}

# Name similarity scorer: \"weighted\", \"ratio\" or \"jaro-winkler\"
# scorer = \"weighted\"

# Replies that repeat the previous answer:
# affirmatives = [\"yes\", \"yeah\", \"sure\", \"show me\"]

# Query rewrites, applied in order (replaces the built-in table):
# [[keywords]]
# trigger = \"finals\"
# replacement = \"final exam\"
",
            DEFAULT_CALENDAR_PATH, DEFAULT_MATCH_LIMIT
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EventFinderError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| EventFinderError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Calendar path with `~` expanded.
    pub fn calendar_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.calendar_path.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn timezone(&self) -> EventFinderResult<Option<Tz>> {
        self.timezone
            .as_deref()
            .map(|name| {
                name.parse::<Tz>()
                    .map_err(|_| EventFinderError::Config(format!("Unknown timezone '{name}'")))
            })
            .transpose()
    }

    /// Current date in the configured zone, or the machine's local zone.
    pub fn today(&self) -> EventFinderResult<NaiveDate> {
        Ok(match self.timezone()? {
            Some(tz) => chrono::Utc::now().with_timezone(&tz).date_naive(),
            None => chrono::Local::now().date_naive(),
        })
    }

    pub fn resolver_config(&self) -> ResolverConfig {
        let keywords = match &self.keywords {
            Some(rules) => KeywordTable::new(rules.clone()),
            None => KeywordTable::default(),
        };

        ResolverConfig {
            keywords,
            scorer: self.scorer,
            match_limit: self.match_limit,
            affirmatives: self.affirmatives.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = EventFinderConfig::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.calendar_path, PathBuf::from("~/calendar/events.ics"));
        assert_eq!(config.match_limit, 5);
        assert_eq!(config.scorer, ScorerKind::Weighted);
        assert_eq!(config.affirmatives, vec!["yes", "yeah", "sure", "show me"]);
        assert!(config.keywords.is_none());
    }

    #[test]
    fn commented_default_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        EventFinderConfig::create_default_config(&path).unwrap();
        let config = EventFinderConfig::load_from(&path).unwrap();

        assert_eq!(config.match_limit, 5);
        assert!(config.timezone.is_none());
    }

    #[test]
    fn reads_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
calendar_path = "/srv/calendars/university.ics"
timezone = "America/Chicago"
match_limit = 10
scorer = "jaro-winkler"
affirmatives = ["yes", "yep"]

[[keywords]]
trigger = "hols"
replacement = "university closed"
"#,
        )
        .unwrap();

        let config = EventFinderConfig::load_from(&path).unwrap();
        assert_eq!(
            config.calendar_path(),
            PathBuf::from("/srv/calendars/university.ics")
        );
        assert_eq!(config.timezone().unwrap(), Some(chrono_tz::America::Chicago));
        assert_eq!(config.scorer, ScorerKind::JaroWinkler);

        let resolver_config = config.resolver_config();
        assert_eq!(resolver_config.match_limit, 10);
        assert_eq!(resolver_config.affirmatives, vec!["yes", "yep"]);
        assert_eq!(
            resolver_config.keywords.normalize("Any hols?"),
            "any university closed?"
        );
    }

    #[test]
    fn unknown_timezone_is_config_error() {
        let config = EventFinderConfig {
            timezone: Some("Mars/Olympus".to_string()),
            ..EventFinderConfig::default()
        };
        assert!(matches!(config.timezone(), Err(EventFinderError::Config(_))));
        assert!(config.today().is_err());
    }
}

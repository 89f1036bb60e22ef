//! Turn-by-turn query resolution over a calendar index.

use std::fmt::Write as _;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::constants::{DEFAULT_AFFIRMATIVES, DEFAULT_MATCH_LIMIT};
use crate::date_expr::{DateQuery, resolve_date};
use crate::date_range::DateRange;
use crate::error::{EventFinderError, EventFinderResult};
use crate::event::title_case;
use crate::fuzzy::{self, Match, Scorer, ScorerKind, Tier, Tiers};
use crate::index::CalendarIndex;
use crate::normalize::KeywordTable;
use crate::outcome::Outcome;
use crate::session::{LastResult, OptionKind, Session};

/// Tunables for a [`Resolver`].
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    pub keywords: KeywordTable,
    pub scorer: ScorerKind,
    pub match_limit: usize,
    /// Replies that repeat the previous answer. Compared lowercased and trimmed.
    pub affirmatives: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            keywords: KeywordTable::default(),
            scorer: ScorerKind::default(),
            match_limit: DEFAULT_MATCH_LIMIT,
            affirmatives: DEFAULT_AFFIRMATIVES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Resolves queries against a shared index. Holds no per-conversation state,
/// so one resolver can serve many sessions at once.
pub struct Resolver {
    index: Arc<CalendarIndex>,
    keywords: KeywordTable,
    scorer: Box<dyn Scorer>,
    match_limit: usize,
    affirmatives: Vec<String>,
}

impl Resolver {
    pub fn new(index: Arc<CalendarIndex>, config: ResolverConfig) -> Self {
        Resolver {
            index,
            keywords: config.keywords,
            scorer: config.scorer.scorer(),
            match_limit: config.match_limit.max(1),
            affirmatives: config
                .affirmatives
                .iter()
                .map(|a| a.trim().to_lowercase())
                .collect(),
        }
    }

    /// Replace the configured scorer.
    pub fn with_scorer(mut self, scorer: Box<dyn Scorer>) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn index(&self) -> &CalendarIndex {
        &self.index
    }

    /// Resolve one turn of a conversation.
    ///
    /// Confirmations replay the session's last answer, numbered replies select
    /// from its last option list, and anything else is a fresh search by date
    /// phrase or by name. Only blank queries are errors.
    pub fn resolve(
        &self,
        session: &mut Session,
        query: &str,
        today: NaiveDate,
    ) -> EventFinderResult<Outcome> {
        let reply = query.trim().to_lowercase();
        if reply.is_empty() {
            return Err(EventFinderError::InvalidQuery);
        }

        if self.affirmatives.contains(&reply) {
            return Ok(replay(session.last_result()));
        }

        if let Some(name) = session.last_result().option(&reply).map(str::to_string) {
            debug!(option = %reply, event = %name, "selected option");
            return Ok(self.select(session, &name));
        }

        let normalized = self.keywords.normalize(query);
        let date_query = resolve_date(&normalized, today);
        debug!(query = %normalized, ?date_query, "resolving query");

        let outcome = match date_query {
            DateQuery::Single { date } => self.on_date(session, date),
            DateQuery::Range { range } => self.in_range(session, range),
            DateQuery::NoDate => self.by_name(session, &normalized),
        };

        Ok(outcome)
    }

    fn select(&self, session: &mut Session, name: &str) -> Outcome {
        let found = match self.index.dates_for(name) {
            Some(dates) => Some((name.to_string(), dates)),
            None => self.closest_name(name).and_then(|closest| {
                let dates = self.index.dates_for(&closest)?;
                Some((closest, dates))
            }),
        };

        let Some((name, dates)) = found else {
            session.clear();
            return Outcome::NoMatch {
                text: "Event details not found. Try searching again.".to_string(),
            };
        };

        let text = format!(
            "{} is scheduled on: {}",
            title_case(&name),
            join_dates(dates)
        );
        session.store(LastResult::PlainAnswer { text: text.clone() });
        Outcome::Answer { text }
    }

    /// Best confident match for an option name that is not an index key.
    fn closest_name(&self, name: &str) -> Option<String> {
        fuzzy::extract(name, self.index.names(), self.scorer.as_ref(), 1)
            .into_iter()
            .find(|m| Tier::for_score(m.score) == Tier::High)
            .map(|m| m.name)
    }

    fn on_date(&self, session: &mut Session, date: NaiveDate) -> Outcome {
        let Some(names) = self.index.events_on(date) else {
            session.clear();
            return Outcome::NoMatch {
                text: format!("No events found on {date}. Maybe try a different date?"),
            };
        };

        let mut text = format!("Events on {date}:");
        for name in names {
            let _ = write!(text, "\n  - {}", title_case(name));
        }

        session.store(LastResult::PlainAnswer { text: text.clone() });
        Outcome::Answer { text }
    }

    fn in_range(&self, session: &mut Session, range: DateRange) -> Outcome {
        let mut days = self.index.events_between(&range).peekable();

        if days.peek().is_none() {
            session.clear();
            return Outcome::NoMatch {
                text: format!("No events found for this week ({range})."),
            };
        }

        let mut text = format!("Events this week ({range}):");
        for (date, names) in days {
            let _ = write!(text, "\n  {date}:");
            for name in names {
                let _ = write!(text, "\n    - {}", title_case(name));
            }
        }

        session.store(LastResult::PlainAnswer { text: text.clone() });
        Outcome::Answer { text }
    }

    fn by_name(&self, session: &mut Session, query: &str) -> Outcome {
        let matches = fuzzy::extract(
            query,
            self.index.names(),
            self.scorer.as_ref(),
            self.match_limit,
        );
        let Tiers { high, low } = Tiers::partition(matches);

        if !high.is_empty() {
            let mut text = "Here's what I found:".to_string();
            for (i, m) in high.iter().enumerate() {
                let dates = self.index.dates_for(&m.name).unwrap_or_default();
                let _ = write!(
                    text,
                    "\n  {}. {} is scheduled on: {}",
                    i + 1,
                    title_case(&m.name),
                    join_dates(dates)
                );
            }

            session.store(LastResult::OptionSet {
                text: text.clone(),
                kind: OptionKind::Matches,
                options: names_of(high),
            });
            return Outcome::Answer { text };
        }

        if !low.is_empty() {
            let mut text = format!("No exact match found for '{query}'. Did you mean:");
            for (i, m) in low.iter().enumerate() {
                let _ = write!(text, "\n  {}. {}", i + 1, title_case(&m.name));
            }

            let option_count = low.len();
            session.store(LastResult::OptionSet {
                text: text.clone(),
                kind: OptionKind::Suggestions,
                options: names_of(low),
            });
            return Outcome::Suggestions { text, option_count };
        }

        session.clear();
        Outcome::NoMatch {
            text: format!(
                "I couldn't find anything for '{query}'. Try another event name or date!"
            ),
        }
    }
}

/// Repeat a stored result without changing it.
fn replay(last: &LastResult) -> Outcome {
    match last {
        LastResult::Absent => Outcome::NothingToConfirm {
            text: "No previous search results found. Try again!".to_string(),
        },
        LastResult::PlainAnswer { text } => Outcome::Answer { text: text.clone() },
        LastResult::OptionSet {
            text,
            kind: OptionKind::Matches,
            ..
        } => Outcome::Answer { text: text.clone() },
        LastResult::OptionSet {
            text,
            kind: OptionKind::Suggestions,
            options,
        } => Outcome::Suggestions {
            text: text.clone(),
            option_count: options.len(),
        },
    }
}

fn names_of(matches: Vec<Match>) -> Vec<String> {
    matches.into_iter().map(|m| m.name).collect()
}

fn join_dates(dates: &[NaiveDate]) -> String {
    dates
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

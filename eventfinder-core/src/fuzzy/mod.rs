//! Fuzzy matching of queries against event names, and confidence tiers.

pub mod ratio;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{HIGH_CONFIDENCE_THRESHOLD, LOW_CONFIDENCE_THRESHOLD};

/// Similarity between a query and one candidate name, 0-100 (100 = exact).
pub trait Scorer: Send + Sync {
    fn score(&self, query: &str, choice: &str) -> u8;
}

/// Weighted token/character similarity. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedRatio;

impl Scorer for WeightedRatio {
    fn score(&self, query: &str, choice: &str) -> u8 {
        to_score(ratio::weighted_ratio(
            &ratio::preprocess(query),
            &ratio::preprocess(choice),
        ))
    }
}

/// Whole-string edit-distance similarity.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRatio;

impl Scorer for SimpleRatio {
    fn score(&self, query: &str, choice: &str) -> u8 {
        to_score(ratio::ratio(
            &ratio::preprocess(query),
            &ratio::preprocess(choice),
        ))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JaroWinkler;

impl Scorer for JaroWinkler {
    fn score(&self, query: &str, choice: &str) -> u8 {
        to_score(
            strsim::jaro_winkler(&ratio::preprocess(query), &ratio::preprocess(choice)) * 100.0,
        )
    }
}

fn to_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

/// Scorer selection as written in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScorerKind {
    #[default]
    Weighted,
    Ratio,
    JaroWinkler,
}

impl ScorerKind {
    pub fn scorer(self) -> Box<dyn Scorer> {
        match self {
            ScorerKind::Weighted => Box::new(WeightedRatio),
            ScorerKind::Ratio => Box::new(SimpleRatio),
            ScorerKind::JaroWinkler => Box::new(JaroWinkler),
        }
    }
}

/// A scored candidate name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub name: String,
    pub score: u8,
}

/// Score every candidate and keep the best `limit`, highest first.
/// Equal scores keep the candidates' iteration order.
pub fn extract<'a>(
    query: &str,
    choices: impl IntoIterator<Item = &'a str>,
    scorer: &dyn Scorer,
    limit: usize,
) -> Vec<Match> {
    let mut matches: Vec<Match> = choices
        .into_iter()
        .map(|name| Match {
            name: name.to_string(),
            score: scorer.score(query, name),
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches.truncate(limit);
    matches
}

/// Confidence band of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// `score > 60`
    High,
    /// `40 < score <= 60`
    Low,
    /// `score <= 40`
    None,
}

impl Tier {
    pub fn for_score(score: u8) -> Self {
        if score > HIGH_CONFIDENCE_THRESHOLD {
            Tier::High
        } else if score > LOW_CONFIDENCE_THRESHOLD {
            Tier::Low
        } else {
            Tier::None
        }
    }
}

/// Matches split into direct answers and "did you mean" suggestions.
/// Scores at or below the low threshold are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tiers {
    pub high: Vec<Match>,
    pub low: Vec<Match>,
}

impl Tiers {
    pub fn partition(matches: Vec<Match>) -> Self {
        let mut tiers = Tiers::default();
        for m in matches {
            match Tier::for_score(m.score) {
                Tier::High => tiers.high.push(m),
                Tier::Low => tiers.low.push(m),
                Tier::None => {}
            }
        }
        debug!(high = tiers.high.len(), low = tiers.low.len(), "partitioned matches");
        tiers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedScores(Vec<(&'static str, u8)>);

    impl Scorer for FixedScores {
        fn score(&self, _query: &str, choice: &str) -> u8 {
            self.0
                .iter()
                .find(|(name, _)| *name == choice)
                .map(|(_, s)| *s)
                .unwrap_or(0)
        }
    }

    #[test]
    fn tier_boundaries_are_exact() {
        assert_eq!(Tier::for_score(100), Tier::High);
        assert_eq!(Tier::for_score(61), Tier::High);
        assert_eq!(Tier::for_score(60), Tier::Low);
        assert_eq!(Tier::for_score(41), Tier::Low);
        assert_eq!(Tier::for_score(40), Tier::None);
        assert_eq!(Tier::for_score(0), Tier::None);
    }

    #[test]
    fn extract_orders_by_score_and_keeps_ties_stable() {
        let scorer = FixedScores(vec![("a", 50), ("b", 90), ("c", 50), ("d", 90)]);
        let names: Vec<_> = extract("q", ["a", "b", "c", "d"], &scorer, 10)
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn extract_respects_limit() {
        let scorer = FixedScores(vec![("a", 10), ("b", 20), ("c", 30)]);
        let matches = extract("q", ["a", "b", "c"], &scorer, 2);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].name, "c");
        assert_eq!(matches[1].name, "b");
    }

    #[test]
    fn partition_drops_low_scores() {
        let scorer = FixedScores(vec![("x", 61), ("y", 60), ("z", 41), ("w", 40)]);
        let tiers = Tiers::partition(extract("q", ["x", "y", "z", "w"], &scorer, 10));
        let high: Vec<_> = tiers.high.iter().map(|m| m.name.as_str()).collect();
        let low: Vec<_> = tiers.low.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(high, vec!["x"]);
        assert_eq!(low, vec!["y", "z"]);
    }

    #[test]
    fn builtin_scorers_agree_on_exact_match() {
        for kind in [ScorerKind::Weighted, ScorerKind::Ratio, ScorerKind::JaroWinkler] {
            assert_eq!(kind.scorer().score("Spring Break", "spring break"), 100);
        }
    }

    #[test]
    fn weighted_scorer_ignores_punctuation() {
        assert_eq!(WeightedRatio.score("when is spring break?", "spring break"), 90);
    }
}

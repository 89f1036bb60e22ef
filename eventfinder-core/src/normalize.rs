//! Query normalization through an ordered keyword table.

use serde::{Deserialize, Serialize};

/// Rewrite every occurrence of `trigger` with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub trigger: String,
    pub replacement: String,
}

impl KeywordRule {
    pub fn new(trigger: impl Into<String>, replacement: impl Into<String>) -> Self {
        KeywordRule {
            trigger: trigger.into(),
            replacement: replacement.into(),
        }
    }
}

/// Ordered keyword rules. Rules run one after another, each over the output
/// of the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    rules: Vec<KeywordRule>,
}

impl Default for KeywordTable {
    fn default() -> Self {
        KeywordTable::new(vec![
            KeywordRule::new("final", "final exam"),
            KeywordRule::new("finals", "final exam"),
            KeywordRule::new("break", "spring break"),
            KeywordRule::new("holiday", "university closed"),
            KeywordRule::new("vacation", "university closed"),
            KeywordRule::new("graduation", "commencement"),
            KeywordRule::new("exam", "exam"),
        ])
    }
}

impl KeywordTable {
    /// Rules with an empty trigger are dropped.
    pub fn new(rules: Vec<KeywordRule>) -> Self {
        let rules = rules
            .into_iter()
            .filter(|r| !r.trigger.is_empty())
            .map(|r| KeywordRule::new(r.trigger.to_lowercase(), r.replacement.to_lowercase()))
            .collect();
        KeywordTable { rules }
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// Lowercase, trim, then apply every rule in table order.
    pub fn normalize(&self, raw: &str) -> String {
        let mut query = raw.trim().to_lowercase();

        for rule in &self.rules {
            if query.contains(&rule.trigger) {
                query = query.replace(&rule.trigger, &rule.replacement);
            }
        }

        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_trims_and_maps_keywords() {
        let table = KeywordTable::default();
        assert_eq!(table.normalize("  Break "), "spring break");
        assert_eq!(table.normalize("When is GRADUATION?"), "when is commencement?");
        assert_eq!(table.normalize("any holiday soon"), "any university closed soon");
    }

    #[test]
    fn rules_apply_sequentially() {
        let table = KeywordTable::default();
        // "final" fires first, so the "finals" rule never sees its trigger.
        assert_eq!(table.normalize("finals"), "final exams");
        assert_eq!(table.normalize("final"), "final exam");
    }

    #[test]
    fn later_rules_see_earlier_replacements() {
        let table = KeywordTable::new(vec![
            KeywordRule::new("hols", "holiday"),
            KeywordRule::new("holiday", "university closed"),
        ]);
        assert_eq!(table.normalize("hols"), "university closed");

        let reversed = KeywordTable::new(vec![
            KeywordRule::new("holiday", "university closed"),
            KeywordRule::new("hols", "holiday"),
        ]);
        assert_eq!(reversed.normalize("hols"), "holiday");
    }

    #[test]
    fn idempotent_once_no_triggers_remain() {
        let table = KeywordTable::default();
        for q in ["When is Graduation", "career fair", "events tomorrow", "exam week"] {
            let once = table.normalize(q);
            assert_eq!(table.normalize(&once), once);
        }
    }

    #[test]
    fn custom_rules_are_lowercased_and_blank_triggers_dropped() {
        let table = KeywordTable::new(vec![
            KeywordRule::new("", "ignored"),
            KeywordRule::new("Convo", "Convocation"),
        ]);
        assert_eq!(table.rules().len(), 1);
        assert_eq!(table.normalize("convo day"), "convocation day");
    }
}

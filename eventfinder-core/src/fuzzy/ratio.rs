//! Token and character similarity ratios on a 0-100 scale.
//!
//! Character edits are measured with `strsim`'s normalized Levenshtein
//! distance; everything else here combines that base ratio over windows and
//! token orderings.

use std::collections::BTreeSet;

/// Weight applied to token-based ratios.
const UNBASE_SCALE: f64 = 0.95;

/// Lowercase and replace anything that is not alphanumeric with a space.
pub fn preprocess(s: &str) -> String {
    let replaced: String = s
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    replaced.trim().to_lowercase()
}

/// Plain edit-distance similarity.
pub fn ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }
    strsim::normalized_levenshtein(a, b) * 100.0
}

/// Best ratio of the shorter string against every same-length window of the longer.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let (short, long) = if a_chars.len() <= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };

    if short.is_empty() {
        return 0.0;
    }

    let needle: String = short.iter().collect();
    if short.len() == long.len() {
        return ratio(&needle, &long.iter().collect::<String>());
    }

    let mut best: f64 = 0.0;
    for window in long.windows(short.len()) {
        let window: String = window.iter().collect();
        best = best.max(ratio(&needle, &window));
        if best >= 100.0 {
            break;
        }
    }
    best
}

fn tokens(s: &str) -> BTreeSet<&str> {
    s.split_whitespace().collect()
}

fn sorted_tokens(s: &str) -> String {
    let mut words: Vec<&str> = s.split_whitespace().collect();
    words.sort_unstable();
    words.join(" ")
}

fn join(set: &BTreeSet<&str>) -> String {
    set.iter().copied().collect::<Vec<_>>().join(" ")
}

/// Ratio after sorting the words of both strings.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Ratio comparing the shared words against each side's leftovers.
/// Scores 100 whenever one side's words are a subset of the other's.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let ta = tokens(a);
    let tb = tokens(b);
    if ta.is_empty() || tb.is_empty() {
        return 0.0;
    }

    let sect: BTreeSet<&str> = ta.intersection(&tb).copied().collect();
    let diff_ab: BTreeSet<&str> = ta.difference(&tb).copied().collect();
    let diff_ba: BTreeSet<&str> = tb.difference(&ta).copied().collect();

    if !sect.is_empty() && (diff_ab.is_empty() || diff_ba.is_empty()) {
        return 100.0;
    }

    let t0 = join(&sect);
    let t1 = format!("{} {}", t0, join(&diff_ab)).trim().to_string();
    let t2 = format!("{} {}", t0, join(&diff_ba)).trim().to_string();

    ratio(&t0, &t1).max(ratio(&t0, &t2)).max(ratio(&t1, &t2))
}

/// Partial ratio over sorted words; any shared word scores 100.
pub fn partial_token_ratio(a: &str, b: &str) -> f64 {
    let ta = tokens(a);
    let tb = tokens(b);
    if ta.is_empty() || tb.is_empty() {
        return 0.0;
    }
    if ta.intersection(&tb).next().is_some() {
        return 100.0;
    }
    partial_ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Weighted blend of character, partial and token ratios.
///
/// Strings of similar length are compared whole and by token; when one is
/// much longer than the other, substring windows dominate instead, scaled
/// down the more lopsided the lengths are.
pub fn weighted_ratio(a: &str, b: &str) -> f64 {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    if len_a == 0 || len_b == 0 {
        return 0.0;
    }

    let len_ratio = len_a.max(len_b) as f64 / len_a.min(len_b) as f64;
    let base = ratio(a, b);

    if len_ratio < 1.5 {
        let token = token_sort_ratio(a, b).max(token_set_ratio(a, b));
        return base.max(token * UNBASE_SCALE);
    }

    let partial_scale = if len_ratio < 8.0 { 0.9 } else { 0.6 };

    base.max(partial_ratio(a, b) * partial_scale)
        .max(partial_token_ratio(a, b) * UNBASE_SCALE * partial_scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preprocess_strips_punctuation() {
        assert_eq!(preprocess("  When is Spring-Break? "), "when is spring break");
    }

    #[test]
    fn identical_strings_score_100() {
        assert_eq!(ratio("fall fest", "fall fest"), 100.0);
        assert_eq!(weighted_ratio("spring break", "spring break"), 100.0);
    }

    #[test]
    fn empty_strings_score_zero() {
        assert_eq!(ratio("", ""), 0.0);
        assert_eq!(weighted_ratio("", "fall fest"), 0.0);
        assert_eq!(token_set_ratio("", ""), 0.0);
    }

    #[test]
    fn partial_ratio_finds_substring() {
        assert_eq!(partial_ratio("fall", "fall fest"), 100.0);
        assert_eq!(partial_ratio("fall fest", "fall"), 100.0);
    }

    #[test]
    fn token_ratios_ignore_word_order() {
        assert_eq!(token_sort_ratio("break spring", "spring break"), 100.0);
        assert_eq!(token_set_ratio("spring spring break", "spring break"), 100.0);
    }

    #[test]
    fn long_choice_uses_scaled_partial_ratio() {
        // 4 vs 9 characters: the substring match is capped at 90.
        assert_eq!(weighted_ratio("fall", "fall fest").round(), 90.0);
    }

    #[test]
    fn unrelated_strings_score_low() {
        assert_eq!(weighted_ratio("zzzz", "career fair"), 0.0);
    }
}

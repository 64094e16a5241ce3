//! Best-candidate lookup above a similarity threshold.

use crate::similarity::similarity;

/// General-purpose threshold for approximate matches.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.7;
/// Threshold for unreviewed automatic decisions made by the resolver.
pub const RESOLVE_MATCH_THRESHOLD: f64 = 0.8;
/// Threshold for suggestions a reviewer confirms before import.
pub const SUGGEST_MATCH_THRESHOLD: f64 = 0.6;

/// Best candidate found by [`find_best_match`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatch<'a> {
    /// Matching candidate, `None` when nothing cleared the threshold.
    pub matched: Option<&'a str>,
    /// Similarity of the match, `0.0` when there is none.
    pub similarity: f64,
}

/// Finds the candidate most similar to `value` with a score `>= threshold`.
///
/// Ties keep the first candidate in iteration order.
pub fn find_best_match<'a, S: AsRef<str>>(
    value: &str,
    candidates: &'a [S],
    threshold: f64,
) -> FuzzyMatch<'a> {
    let mut best = FuzzyMatch {
        matched: None,
        similarity: 0.0,
    };
    for candidate in candidates {
        let candidate = candidate.as_ref();
        let score = similarity(value, candidate);
        if score >= threshold && (best.matched.is_none() || score > best.similarity) {
            best = FuzzyMatch {
                matched: Some(candidate),
                similarity: score,
            };
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGETS: [&str; 2] = ["Surveillance", "Interview"];

    #[test]
    fn one_letter_omission_clears_default_threshold() {
        let found = find_best_match("Surveilance", &TARGETS, DEFAULT_MATCH_THRESHOLD);
        assert_eq!(found.matched, Some("Surveillance"));
        assert!(found.similarity > 0.9);
    }

    #[test]
    fn unrelated_value_has_no_match() {
        let found = find_best_match("xyz123", &TARGETS, DEFAULT_MATCH_THRESHOLD);
        assert_eq!(found.matched, None);
        assert_eq!(found.similarity, 0.0);
    }

    #[test]
    fn ties_keep_first_candidate() {
        let found = find_best_match("abcd", &["abcx", "abcy"], DEFAULT_MATCH_THRESHOLD);
        assert_eq!(found.matched, Some("abcx"));

        let found = find_best_match("abcd", &["abcy", "abcx"], DEFAULT_MATCH_THRESHOLD);
        assert_eq!(found.matched, Some("abcy"));
    }

    #[test]
    fn higher_score_replaces_earlier_candidate() {
        let found = find_best_match("abcd", &["abxx", "abcx", "ABCD"], 0.5);
        assert_eq!(found.matched, Some("ABCD"));
        assert_eq!(found.similarity, 1.0);
    }

    #[test]
    fn empty_candidates_have_no_match() {
        let none: [String; 0] = [];
        assert_eq!(find_best_match("abc", &none, 0.0).matched, None);
    }

    #[test]
    fn thresholds_are_ordered() {
        assert!(SUGGEST_MATCH_THRESHOLD < DEFAULT_MATCH_THRESHOLD);
        assert!(DEFAULT_MATCH_THRESHOLD < RESOLVE_MATCH_THRESHOLD);
    }
}

//! Answer matching for the typed-answer games.

use crate::types::MatchingMode;
use serde::{Deserialize, Serialize};

/// Shortest string allowed to match by containment.
const MIN_CONTAINMENT_LEN: usize = 3;

/// Which lenient rule accepted an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    Exact,
    Containment,
    Plural,
}

/// Result of comparing a typed answer to the correct answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// The rule that accepted the answer, if any.
    pub rule: Option<MatchRule>,
    /// The matching mode used.
    pub matching_mode: MatchingMode,
    /// Normalized typed answer (for display).
    pub typed_normalized: String,
    /// Normalized correct answer (for display).
    pub correct_normalized: String,
}

/// Lenient check used by the picture and word games.
pub fn matches(typed: &str, correct: &str) -> bool {
    compare_answers(typed, correct, MatchingMode::Lenient).is_correct
}

/// Compare a typed answer to the correct answer.
pub fn compare_answers(typed: &str, correct: &str, mode: MatchingMode) -> MatchResult {
    match mode {
        MatchingMode::Exact => {
            let typed_normalized = typed.trim().to_string();
            let correct_normalized = correct.trim().to_string();
            let is_correct = typed_normalized == correct_normalized;
            MatchResult {
                is_correct,
                rule: is_correct.then_some(MatchRule::Exact),
                matching_mode: mode,
                typed_normalized,
                correct_normalized,
            }
        }
        MatchingMode::CaseInsensitive => {
            let typed_normalized = normalize(typed);
            let correct_normalized = normalize(correct);
            let is_correct = typed_normalized == correct_normalized;
            MatchResult {
                is_correct,
                rule: is_correct.then_some(MatchRule::Exact),
                matching_mode: mode,
                typed_normalized,
                correct_normalized,
            }
        }
        MatchingMode::Lenient => {
            let typed_normalized = normalize(typed);
            let correct_normalized = normalize(correct);
            let rule = lenient_rule(&typed_normalized, &correct_normalized);
            MatchResult {
                is_correct: rule.is_some(),
                rule,
                matching_mode: mode,
                typed_normalized,
                correct_normalized,
            }
        }
    }
}

/// Trim and lower-case.
fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// First lenient rule satisfied by two normalized strings.
fn lenient_rule(a: &str, b: &str) -> Option<MatchRule> {
    if a == b {
        return Some(MatchRule::Exact);
    }

    let (shorter, longer) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    if shorter.chars().count() >= MIN_CONTAINMENT_LEN && longer.contains(shorter) {
        return Some(MatchRule::Containment);
    }

    if strip_plural(a) == strip_plural(b) {
        return Some(MatchRule::Plural);
    }

    None
}

/// Drop a single trailing "s".
fn strip_plural(s: &str) -> &str {
    s.strip_suffix('s').unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_after_normalization() {
        assert!(matches("  Cat ", "cat"));
        assert!(matches("BANANA", "banana"));
    }

    #[test]
    fn test_plural_rule() {
        assert!(matches("cat", "cats"));
        assert!(matches("cats", "cat"));
        let result = compare_answers("dogs", "dog", MatchingMode::Lenient);
        assert_eq!(result.rule, Some(MatchRule::Containment));
    }

    #[test]
    fn test_plural_rule_for_short_words() {
        // Too short for containment, so only the plural rule can accept these.
        let result = compare_answers("us", "u", MatchingMode::Lenient);
        assert_eq!(result.rule, Some(MatchRule::Plural));
        assert!(!matches("us", "a"));
    }

    #[test]
    fn test_short_substrings_rejected() {
        assert!(!matches("ca", "cats"));
        assert!(!matches("a", "banana"));
        assert!(!matches("an", "banana"));
    }

    #[test]
    fn test_containment_either_direction() {
        assert!(matches("ban", "banana"));
        assert!(matches("a red apple", "apple"));
        assert!(matches("apple", "a red apple"));
        let result = compare_answers("the sun", "sun", MatchingMode::Lenient);
        assert_eq!(result.rule, Some(MatchRule::Containment));
    }

    #[test]
    fn test_unrelated_answers_rejected() {
        assert!(!matches("dog", "cat"));
        assert!(!matches("tree", "house"));
        assert!(!matches("", "flower"));
    }

    #[test]
    fn test_lenient_rules_are_symmetric() {
        let pairs = [
            ("cat", "cats"),
            ("ca", "cats"),
            ("ban", "banana"),
            ("Star ", "stars"),
            ("dog", "frog"),
            ("us", "u"),
            ("fish", "Big Fish"),
        ];
        for (a, b) in pairs {
            assert_eq!(matches(a, b), matches(b, a), "asymmetric for {a:?} / {b:?}");
        }
    }

    #[test]
    fn test_compare_exact_mode() {
        let result = compare_answers(" cat ", "cat", MatchingMode::Exact);
        assert!(result.is_correct);

        let result = compare_answers("Cat", "cat", MatchingMode::Exact);
        assert!(!result.is_correct);
        assert_eq!(result.rule, None);
    }

    #[test]
    fn test_compare_case_insensitive_mode() {
        let result = compare_answers("CAT", "cat", MatchingMode::CaseInsensitive);
        assert!(result.is_correct);

        let result = compare_answers("cats", "cat", MatchingMode::CaseInsensitive);
        assert!(!result.is_correct);
    }

    #[test]
    fn test_normalized_values_for_display() {
        let result = compare_answers("  Banana ", "BANANA", MatchingMode::Lenient);
        assert_eq!(result.typed_normalized, "banana");
        assert_eq!(result.correct_normalized, "banana");
    }
}

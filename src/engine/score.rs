//! Confidence scoring.
//!
//! A single formula is applied wherever a recognizer, catalog hit or fallback
//! construction has produced a candidate and the caller supplied a test
//! value: a passing example is rewarded (+0.15), a failing one penalized
//! harder (-0.20), biasing the engine toward caution. The result is always
//! clamped to [0, 1].

/// Base confidence of a catalog hit or a catalog-backed recognizer.
pub(crate) const HIGH_CONFIDENCE: f64 = 0.9;

/// Below this, generic guidance and did-you-mean suggestions are appended.
pub(crate) const MEDIUM_CONFIDENCE: f64 = 0.6;

/// Below this, the call is a hard failure (`success=false`) regardless of
/// whether a pattern was constructed.
pub(crate) const LOW_CONFIDENCE: f64 = 0.4;

/// Fixed confidence of the loose-phrase literal fallback. Deliberately below
/// `LOW_CONFIDENCE`: an uncorroborated loose guess only survives when a
/// passing test value lifts it over the failure threshold.
pub(crate) const LOOSE_PHRASE_CONFIDENCE: f64 = 0.3;

pub(crate) const TEST_MATCH_BONUS: f64 = 0.15;
pub(crate) const TEST_MISMATCH_PENALTY: f64 = 0.20;

/// Adjust a base confidence by test-value evidence, scale by a complexity
/// multiplier, and clamp to [0, 1].
pub(crate) fn score(base: f64, test_passed: Option<bool>, complexity: f64) -> f64 {
    let adjusted = base
        + match test_passed {
            Some(true) => TEST_MATCH_BONUS,
            Some(false) => -TEST_MISMATCH_PENALTY,
            None => 0.0,
        };
    (adjusted * complexity).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passing_test_rewards_less_than_failing_test_penalizes() {
        assert!(score(0.5, Some(true), 1.0) - 0.5 < 0.5 - score(0.5, Some(false), 1.0));
    }

    #[test]
    fn no_test_value_leaves_base_unchanged() {
        assert_eq!(score(0.72, None, 1.0), 0.72);
    }

    #[test]
    fn result_is_clamped_to_unit_interval() {
        assert_eq!(score(0.95, Some(true), 1.0), 1.0);
        assert_eq!(score(0.1, Some(false), 1.0), 0.0);
        assert_eq!(score(0.8, None, 2.0), 1.0);
        assert_eq!(score(-0.5, None, 1.0), 0.0);
    }

    #[test]
    fn complexity_multiplier_scales_the_adjusted_base() {
        assert_eq!(score(0.5, Some(true), 0.5), (0.5 + TEST_MATCH_BONUS) * 0.5);
    }

    #[test]
    fn thresholds_are_ordered() {
        assert!(LOOSE_PHRASE_CONFIDENCE < LOW_CONFIDENCE);
        assert!(LOW_CONFIDENCE < MEDIUM_CONFIDENCE);
        assert!(MEDIUM_CONFIDENCE < HIGH_CONFIDENCE);
        // A passing test value must be able to rescue a loose-phrase match.
        assert!(LOOSE_PHRASE_CONFIDENCE + TEST_MATCH_BONUS >= LOW_CONFIDENCE);
    }
}

use crate::engine::{fallback, recognize, score, suggest};
use crate::normalize::normalize;
use crate::{Candidate, catalog, error, validation};
use regex::Regex;
use tracing::debug;

/// Result of [`resolve_pattern`] and [`resolve_pattern_with`].
///
/// `confidence` is always in [0, 1]. When `success` is false, `expression`
/// is `None`; `suggestions` are the diagnostic channel.
#[derive(Debug, Clone)]
pub struct ResolutionResult {
    pub success: bool,
    /// The compiled pattern. Populated only on success.
    pub expression: Option<Regex>,
    pub confidence: f64,
    /// Human description of what the pattern matches.
    pub description: String,
    pub suggestions: Vec<String>,
}

/// Result of [`resolve_validation`] and [`resolve_validation_with`].
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub success: bool,
    /// Named rules. Populated only on success.
    pub rules: Vec<validation::ValidationRule>,
    pub confidence: f64,
    pub description: String,
    pub suggestions: Vec<String>,
    /// Whether every rule passed the test value; `None` without a test value.
    pub all_passed: Option<bool>,
    /// Names of rules the test value failed.
    pub failed_rules: Vec<String>,
}

/// Resolve a natural-language description into a compiled pattern.
///
/// # Example
/// ```
/// use verbalex::resolve_pattern;
///
/// let out = resolve_pattern("email address");
/// assert!(out.success);
/// assert!(out.expression.unwrap().is_match("user@example.com"));
/// ```
pub fn resolve_pattern(text: &str) -> ResolutionResult {
    resolve_pattern_with(text, None)
}

/// Resolve a description, optionally checking the produced pattern against a
/// sample value. A matching sample raises confidence; a failing one lowers
/// it harder.
pub fn resolve_pattern_with(text: &str, test_value: Option<&str>) -> ResolutionResult {
    let norm = normalize(text);

    let candidate = recognize(&norm, text)
        .map(|m| m.candidate)
        .or_else(|| {
            catalog::direct_hit(&norm).map(|d| {
                debug!(key = d.key, "catalog direct hit");
                Candidate {
                    expression: d.expression.to_string(),
                    description: d.description.to_string(),
                    base_confidence: score::HIGH_CONFIDENCE,
                }
            })
        })
        .or_else(|| fallback::construct(&norm));

    let Some(candidate) = candidate else {
        debug!(input = %norm, "no candidate could be derived");
        return failure("no pattern could be derived from the description", low_confidence_suggestions(&norm));
    };

    let compiled = match error::compile(&candidate.expression) {
        Ok(re) => re,
        Err(err) => {
            debug!(expression = %candidate.expression, %err, "constructed pattern does not compile");
            let mut suggestions = vec![format!("{err}")];
            suggestions.extend(low_confidence_suggestions(&norm));
            return ResolutionResult {
                success: false,
                expression: None,
                confidence: 0.0,
                description: candidate.description,
                suggestions,
            };
        }
    };

    let test_passed = test_value.map(|v| compiled.is_match(v));
    let confidence = score::score(candidate.base_confidence, test_passed, 1.0);

    let mut suggestions = Vec::new();
    if confidence < score::MEDIUM_CONFIDENCE {
        suggestions.extend(low_confidence_suggestions(&norm));
    }

    let success = confidence >= score::LOW_CONFIDENCE;
    ResolutionResult {
        success,
        expression: success.then_some(compiled),
        confidence,
        description: candidate.description,
        suggestions,
    }
}

/// Resolve a description into a set of named validation rules.
pub fn resolve_validation(text: &str) -> ValidationResult {
    resolve_validation_with(text, None)
}

/// Resolve a description into validation rules, optionally evaluating every
/// rule against a sample value.
pub fn resolve_validation_with(text: &str, test_value: Option<&str>) -> ValidationResult {
    validation::extract(text, test_value)
}

/// Did-you-mean catalog keys for a description. At most 5, catalog order.
pub fn suggest_patterns(text: &str) -> Vec<String> {
    suggest::pattern_suggestions(&normalize(text))
}

pub(crate) fn low_confidence_suggestions(norm: &str) -> Vec<String> {
    let mut suggestions = suggest::guidance();
    suggestions.extend(suggest::pattern_suggestions(norm));
    suggestions
}

fn failure(description: &str, suggestions: Vec<String>) -> ResolutionResult {
    ResolutionResult {
        success: false,
        expression: None,
        confidence: 0.0,
        description: description.to_string(),
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(result: &ResolutionResult, value: &str) -> bool {
        result.expression.as_ref().unwrap().is_match(value)
    }

    #[test]
    fn email_description_with_sample() {
        let out = resolve_pattern_with("email address", Some("user@example.com"));
        assert!(out.success);
        assert!(out.confidence >= 0.8);
        assert!(matches(&out, "user@example.com"));
        assert_eq!(out.description, "email address");
    }

    #[test]
    fn employee_id_is_compound_not_generic() {
        let out = resolve_pattern_with("employee id with department prefix and 4 digit number", Some("HR-1234"));
        assert!(out.success);
        assert_eq!(out.description, "employee identifier with department prefix");
        assert!(matches(&out, "HR-1234"));
        assert!(!matches(&out, "HR-12"));
    }

    #[test]
    fn length_range_description() {
        let out = resolve_pattern("between 5 and 10 characters");
        assert!(out.success);
        assert!(matches(&out, "hello"));
        assert!(!matches(&out, "hi"));
    }

    #[test]
    fn nonsense_fails_hard_with_no_expression() {
        let out = resolve_pattern("an imaginary and nonsensical pattern");
        assert!(!out.success);
        assert!(out.expression.is_none());
        assert!(out.confidence < 0.4);
    }

    #[test]
    fn quoted_prefix_preserves_case() {
        let out = resolve_pattern(r#"starts with "ID:""#);
        assert!(out.success);
        assert!(matches(&out, "ID:12345"));
        assert!(!matches(&out, "12345ID:"));
    }

    #[test]
    fn passing_sample_rescues_a_loose_phrase() {
        // Loose-phrase fallback alone is below the failure threshold; a
        // matching sample lifts it over.
        let alone = resolve_pattern("curious greeting text");
        assert!(!alone.success);

        let helped = resolve_pattern_with("curious greeting text", Some("a curious greeting text indeed"));
        assert!(helped.success);
        assert!(helped.confidence >= 0.4);
    }

    #[test]
    fn failing_sample_lowers_confidence() {
        let clean = resolve_pattern("email address");
        let hurt = resolve_pattern_with("email address", Some("not-an-email"));
        assert!(hurt.confidence < clean.confidence);
        // Still a confident recognizer hit overall.
        assert!(hurt.success);
    }

    #[test]
    fn confidence_is_always_in_unit_interval() {
        for text in [
            "email address",
            "employee id with department prefix and 4 digit number",
            "an imaginary and nonsensical pattern",
            "exactly 4 digits",
            "",
            "   ",
        ] {
            for test in [None, Some("x"), Some("1234")] {
                let out = resolve_pattern_with(text, test);
                assert!((0.0..=1.0).contains(&out.confidence), "{text:?}: {}", out.confidence);
            }
        }
    }

    #[test]
    fn empty_input_is_a_normal_failure() {
        let out = resolve_pattern("");
        assert!(!out.success);
        assert!(out.expression.is_none());
        assert!(!out.suggestions.is_empty());
    }

    #[test]
    fn every_catalog_keyword_resolves_to_its_entry() {
        for entry in crate::catalog::entries() {
            for kw in entry.keywords {
                let out = resolve_pattern(kw);
                assert!(out.success, "keyword {kw:?} did not resolve");
                assert_eq!(out.description, entry.description, "keyword {kw:?}");
            }
        }
    }

    #[test]
    fn catalog_hits_carry_high_confidence() {
        let out = resolve_pattern("uuid");
        assert!(out.success);
        assert!(out.confidence >= 0.9);
        assert_eq!(out.description, "UUID");
    }

    #[test]
    fn suggest_patterns_is_capped() {
        assert!(suggest_patterns("ema pho url ipv dat tim num dec uui zip").len() <= 5);
        assert!(suggest_patterns("entirely unrelated").is_empty());
    }

    #[test]
    fn successful_results_omit_guidance() {
        let out = resolve_pattern("email address");
        assert!(out.suggestions.is_empty());
    }
}

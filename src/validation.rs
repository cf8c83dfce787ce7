//! Validation rule extraction.
//!
//! Runs in addition to the pattern pipeline: requirement vocabulary is
//! scanned through a static factory table (the rule-side mirror of the
//! pattern catalog), and a successful pattern resolution is wrapped as one
//! more named rule. Factories that cannot produce a well-formed rule return
//! `None` and are skipped; a single bad rule never aborts the extraction.

use crate::api::{ValidationResult, low_confidence_suggestions};
use crate::engine::score;
use crate::normalize::{contains_any, first_integer, normalize};
use regex::Regex;
use tracing::debug;

/// Base confidence when only requirement rules (no resolved pattern) matched.
const REQUIREMENT_ONLY_CONFIDENCE: f64 = 0.7;

/// A named validation rule. Satisfied by its predicate when present,
/// otherwise by a pattern match.
#[derive(Debug, Clone)]
pub struct ValidationRule {
    pub name: String,
    pub expression: Regex,
    pub message: String,
    pub predicate: Option<fn(&str) -> bool>,
}

impl ValidationRule {
    pub fn is_satisfied_by(&self, value: &str) -> bool {
        match self.predicate {
            Some(predicate) => predicate(value),
            None => self.expression.is_match(value),
        }
    }
}

/// Keyword → rule constructor. `make` receives the normalized text and may
/// decline (missing bound, missing co-occurring vocabulary, ...).
struct RuleFactory {
    key: &'static str,
    keywords: &'static [&'static str],
    make: fn(&str) -> Option<ValidationRule>,
}

static RULE_FACTORIES: &[RuleFactory] = &[
    RuleFactory {
        key: "required",
        keywords: &["required", "mandatory", "must have", "need"],
        make: |_norm| {
            Some(ValidationRule {
                name: "required".to_string(),
                expression: regex!(r"^.+$").clone(),
                message: "value is required".to_string(),
                predicate: Some(non_empty),
            })
        },
    },
    RuleFactory {
        key: "strong-password",
        keywords: &["strong", "secure", "complex"],
        make: |norm| {
            // Strength vocabulary only means a password rule when the text
            // actually talks about a password.
            if !norm.contains("password") {
                return None;
            }
            Some(ValidationRule {
                name: "strong-password".to_string(),
                expression: regex!(r"^.{8,}$").clone(),
                message: "password must be 8+ characters and mix upper and lower case letters, digits and symbols"
                    .to_string(),
                predicate: Some(strong_password),
            })
        },
    },
    RuleFactory {
        key: "min-length",
        keywords: &["at least", "minimum", "min length"],
        make: |norm| {
            let n = first_integer(norm)?;
            Some(ValidationRule {
                name: "min-length".to_string(),
                expression: Regex::new(&format!("^.{{{n},}}$")).ok()?,
                message: format!("value must be at least {n} characters"),
                predicate: None,
            })
        },
    },
    RuleFactory {
        key: "max-length",
        keywords: &["at most", "maximum", "max length", "no more than"],
        make: |norm| {
            let n = first_integer(norm)?;
            Some(ValidationRule {
                name: "max-length".to_string(),
                expression: Regex::new(&format!("^.{{0,{n}}}$")).ok()?,
                message: format!("value must be at most {n} characters"),
                predicate: None,
            })
        },
    },
];

fn non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

fn strong_password(value: &str) -> bool {
    value.chars().count() >= 8
        && value.chars().any(|c| c.is_uppercase())
        && value.chars().any(|c| c.is_lowercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| !c.is_alphanumeric())
}

/// Extract validation rules from a description, optionally evaluating every
/// rule against a test value.
pub(crate) fn extract(text: &str, test_value: Option<&str>) -> ValidationResult {
    let norm = normalize(text);

    let mut rules: Vec<ValidationRule> = Vec::new();
    for factory in RULE_FACTORIES {
        if !contains_any(&norm, factory.keywords) {
            continue;
        }
        if let Some(rule) = (factory.make)(&norm) {
            debug!(key = factory.key, "requirement rule attached");
            rules.push(rule);
        }
    }
    let has_strong_password = rules.iter().any(|r| r.name == "strong-password");

    // The pattern pipeline contributes one more rule, unless it would
    // duplicate an already attached password constraint.
    let pattern = crate::api::resolve_pattern_with(text, None);
    if pattern.success && !(has_strong_password && pattern.description.contains("password")) {
        if let Some(expression) = pattern.expression.clone() {
            rules.push(ValidationRule {
                name: "pattern".to_string(),
                expression,
                message: format!("value must match {}", pattern.description),
                predicate: None,
            });
        }
    }

    if rules.is_empty() {
        return ValidationResult {
            success: false,
            rules: Vec::new(),
            confidence: 0.0,
            description: "no validation rules could be derived from the description".to_string(),
            suggestions: low_confidence_suggestions(&norm),
            all_passed: None,
            failed_rules: Vec::new(),
        };
    }

    let base = if pattern.success { pattern.confidence } else { REQUIREMENT_ONLY_CONFIDENCE };

    let (all_passed, failed_rules) = match test_value {
        Some(value) => {
            let failed: Vec<String> =
                rules.iter().filter(|r| !r.is_satisfied_by(value)).map(|r| r.name.clone()).collect();
            (Some(failed.is_empty()), failed)
        }
        None => (None, Vec::new()),
    };

    let confidence = score::score(base, all_passed, 1.0);

    let description = if pattern.success {
        pattern.description
    } else {
        let names: Vec<&str> = rules.iter().map(|r| r.name.as_str()).collect();
        format!("validation rules: {}", names.join(", "))
    };

    let mut suggestions = Vec::new();
    if confidence < score::MEDIUM_CONFIDENCE {
        suggestions.extend(low_confidence_suggestions(&norm));
    }

    let success = confidence >= score::LOW_CONFIDENCE;
    ValidationResult {
        success,
        rules: if success { rules } else { Vec::new() },
        confidence,
        description,
        suggestions,
        all_passed,
        failed_rules,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{resolve_validation, resolve_validation_with};

    #[test]
    fn required_email_yields_required_and_pattern_rules() {
        let out = resolve_validation("required email address");
        assert!(out.success);
        assert!(out.rules.len() >= 2);
        assert!(out.rules.iter().any(|r| r.name == "required"));
        assert!(out.rules.iter().any(|r| r.message.contains("email address")));
    }

    #[test]
    fn strong_password_rule_uses_the_class_predicate() {
        let out = resolve_validation_with("strong password", Some("Abcdef1!"));
        assert!(out.success);
        assert_eq!(out.all_passed, Some(true));
        assert!(out.failed_rules.is_empty());

        let out = resolve_validation_with("strong password", Some("weakpassword"));
        assert_eq!(out.all_passed, Some(false));
        assert_eq!(out.failed_rules, vec!["strong-password".to_string()]);
    }

    #[test]
    fn resolved_password_pattern_is_not_duplicated() {
        let out = resolve_validation("strong password");
        assert!(out.success);
        // Only the strong-password rule; the resolved pattern also talks
        // about a password and is dropped as redundant.
        assert_eq!(out.rules.len(), 1);
        assert_eq!(out.rules[0].name, "strong-password");
    }

    #[test]
    fn strength_vocabulary_without_password_attaches_no_password_rule() {
        let out = resolve_validation("secure api key");
        assert!(out.rules.iter().all(|r| r.name != "strong-password"));
    }

    #[test]
    fn length_bounds_extract_the_first_integer() {
        let out = resolve_validation_with("at least 8 characters", Some("long enough"));
        assert!(out.success);
        let min = out.rules.iter().find(|r| r.name == "min-length").unwrap();
        assert!(min.is_satisfied_by("12345678"));
        assert!(!min.is_satisfied_by("1234567"));

        let out = resolve_validation("at most 3 characters");
        let max = out.rules.iter().find(|r| r.name == "max-length").unwrap();
        assert!(max.is_satisfied_by("abc"));
        assert!(!max.is_satisfied_by("abcd"));
    }

    #[test]
    fn requirement_only_text_still_succeeds() {
        let out = resolve_validation("this field is mandatory");
        assert!(out.success);
        assert!(out.rules.iter().any(|r| r.name == "required"));
        assert_eq!(out.all_passed, None);
    }

    #[test]
    fn required_rule_rejects_blank_values() {
        let out = resolve_validation_with("required email address", Some("   "));
        assert_eq!(out.all_passed, Some(false));
        assert!(out.failed_rules.contains(&"required".to_string()));
    }

    #[test]
    fn unresolvable_text_returns_an_empty_failure() {
        let out = resolve_validation("an imaginary and nonsensical pattern");
        assert!(!out.success);
        assert!(out.rules.is_empty());
        assert_eq!(out.all_passed, None);
        assert!(!out.suggestions.is_empty());
    }

    #[test]
    fn confidence_stays_in_unit_interval() {
        for text in ["required email address", "strong password", "at least 5 characters", "nonsense"] {
            for test in [None, Some("sample")] {
                let out = resolve_validation_with(text, test);
                assert!((0.0..=1.0).contains(&out.confidence));
            }
        }
    }
}

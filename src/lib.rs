extern crate self as verbalex;

#[macro_use]
mod macros;
mod api;
mod catalog;
mod engine;
mod error;
mod normalize;
mod recognizers;
mod validation;

pub use api::{
    ResolutionResult, ValidationResult, resolve_pattern, resolve_pattern_with, resolve_validation,
    resolve_validation_with, suggest_patterns,
};
pub use catalog::{Category, PatternDescriptor, PatternType, entries};
pub use validation::ValidationRule;

// --- Internal types ---------------------------------------------------------

/// A candidate produced by a recognizer, a catalog hit or the fallback
/// constructor: the raw (not yet compiled) expression, a human description and
/// the base confidence before test-value scoring.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub expression: String,
    pub description: String,
    pub base_confidence: f64,
}

/// Builder function for a recognizer. Receives the normalized input (for
/// trigger-adjacent extraction such as embedded counts) and the raw input
/// (for case-preserving extraction such as quoted literals). Returning `None`
/// lets lower-priority recognizers and the fallback constructor proceed.
pub(crate) type Build = Box<dyn Fn(&str, &str) -> Option<Candidate> + Send + Sync>;

/// A category recognizer: a trigger condition over the normalized text plus a
/// builder that assembles the candidate.
///
/// Trigger semantics:
/// - `required_phrases`: ALL must occur as substrings (AND logic).
/// - `optional_phrases`: when non-empty, ANY one must occur (OR logic).
/// - `buckets`: coarse `BucketMask` bits the input must carry (prefilter).
pub(crate) struct Recognizer {
    pub name: &'static str,
    pub required_phrases: &'static [&'static str],
    pub optional_phrases: &'static [&'static str],
    pub buckets: u32,
    pub build: Build,
}

impl Recognizer {
    /// Explicit priority: recognizers demanding more simultaneous trigger
    /// phrases are more specific and must win ties against simpler ones.
    /// The registry sorts by this, descending; declaration order breaks ties.
    pub fn specificity(&self) -> usize {
        self.required_phrases.len() + usize::from(!self.optional_phrases.is_empty())
    }

    /// Phrase-level trigger check against normalized text (buckets are
    /// checked separately by the compiled registry).
    pub fn triggered_by(&self, norm: &str) -> bool {
        self.required_phrases.iter().all(|p| norm.contains(p))
            && (self.optional_phrases.is_empty() || self.optional_phrases.iter().any(|p| norm.contains(p)))
    }
}

impl std::fmt::Debug for Recognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recognizer")
            .field("name", &self.name)
            .field("required_phrases", &self.required_phrases)
            .field("optional_phrases", &self.optional_phrases)
            .field("buckets", &self.buckets)
            .field("build", &"<function>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe(name: &'static str, required: &'static [&'static str], optional: &'static [&'static str]) -> Recognizer {
        Recognizer {
            name,
            required_phrases: required,
            optional_phrases: optional,
            buckets: 0,
            build: Box::new(|_, _| None),
        }
    }

    #[test]
    fn specificity_counts_required_and_optional_sets() {
        assert_eq!(probe("a", &["x", "y"], &[]).specificity(), 2);
        assert_eq!(probe("b", &["x"], &["p", "q"]).specificity(), 2);
        assert_eq!(probe("c", &[], &["p"]).specificity(), 1);
    }

    #[test]
    fn trigger_requires_all_required_and_any_optional() {
        let r = probe("r", &["employee", "id"], &[]);
        assert!(r.triggered_by("employee id with prefix"));
        assert!(!r.triggered_by("employee badge"));

        let o = probe("o", &["password"], &["strong", "secure"]);
        assert!(o.triggered_by("strong password"));
        assert!(!o.triggered_by("password"));
    }
}

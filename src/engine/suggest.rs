//! Suggestion generation.
//!
//! Two independent mechanisms:
//!
//! - Generic guidance, appended whenever overall confidence falls below the
//!   medium threshold.
//! - A deliberately loose did-you-mean scan: catalog entries whose keyword's
//!   first three characters appear anywhere in the input are proposed, in
//!   catalog order, capped at five.

use crate::catalog;

pub(crate) const MAX_SUGGESTIONS: usize = 5;

/// Generic guidance for low-confidence resolutions.
pub(crate) fn guidance() -> Vec<String> {
    vec![
        "Use more specific keywords, for example \"email\", \"exactly 6 digits\" or \"employee id\"".to_string(),
        "Provide a sample value so the pattern can be checked against it".to_string(),
    ]
}

/// Catalog keys whose keyword prefixes partially match the input.
/// Order-preserving, deduplicated, capped at `MAX_SUGGESTIONS`.
pub(crate) fn pattern_suggestions(norm: &str) -> Vec<String> {
    let mut keys = Vec::new();

    for entry in catalog::entries() {
        let close = entry.keywords.iter().any(|kw| {
            let prefix: String = kw.chars().take(3).collect();
            prefix.chars().count() == 3 && norm.contains(&prefix)
        });
        if close && !keys.contains(&entry.key.to_string()) {
            keys.push(entry.key.to_string());
        }
        if keys.len() == MAX_SUGGESTIONS {
            break;
        }
    }

    keys
}

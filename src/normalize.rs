//! Input normalization and shared scanning helpers.
//!
//! Every resolution starts by normalizing the caller's description: trim,
//! lower-case, collapse internal whitespace. Trigger phrases, catalog
//! keywords and requirement vocabulary all match against the normalized form,
//! so the rest of the engine can assume lowercase single-spaced text.
//!
//! Note: uses `to_lowercase()` (not ASCII-only) so descriptions containing
//! non-ASCII letters still normalize sensibly, even though all current
//! trigger phrases are ASCII English.

/// Normalize a description: trimmed, lower-cased, internal whitespace
/// collapsed to single spaces. Total and idempotent.
pub(crate) fn normalize(input: &str) -> String {
    input.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First embedded unsigned integer in the text, if any.
pub(crate) fn first_integer(text: &str) -> Option<u32> {
    regex!(r"\d+").find(text).and_then(|m| m.as_str().parse().ok())
}

/// First two embedded unsigned integers, in order of appearance.
pub(crate) fn integer_pair(text: &str) -> Option<(u32, u32)> {
    let mut it = regex!(r"\d+").find_iter(text);
    let a = it.next()?.as_str().parse().ok()?;
    let b = it.next()?.as_str().parse().ok()?;
    Some((a, b))
}

/// First quoted literal in the text, double or single quotes. Runs on the
/// RAW input so the literal's case survives normalization.
pub(crate) fn quoted_literal(raw: &str) -> Option<&str> {
    let caps = regex!(r#""([^"]+)"|'([^']+)'"#).captures(raw)?;
    caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str())
}

/// All quoted literals in the text, in order of appearance.
pub(crate) fn quoted_literals(raw: &str) -> Vec<&str> {
    regex!(r#""([^"]+)"|'([^']+)'"#)
        .captures_iter(raw)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str())
        .collect()
}

/// True if any of the phrases occurs as a substring of the text.
pub(crate) fn contains_any(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| text.contains(p))
}

//! Trigger scanning (input pre-classification).
//!
//! Inspects the normalized input and produces coarse buckets that let the
//! resolver quickly skip recognizers that cannot possibly fire. This is a
//! heuristic scan: false positives are acceptable because every recognizer
//! still checks its full phrase triggers, but false negatives are not: a
//! bucket must be set whenever any recognizer requiring it could match.

use crate::normalize::contains_any;

bitflags::bitflags! {
    /// Coarse buckets for fast input classification.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BucketMask: u32 {
        /// Input contains at least one ASCII digit.
        const HAS_DIGITS    = 1 << 0;
        /// Input contains a single- or double-quoted section.
        const HAS_QUOTED    = 1 << 1;
        /// Identifier vocabulary ("id", "identifier", "number", "code", ...).
        const IDENTIFIERISH = 1 << 2;
        /// Length-constraint vocabulary ("characters", "between", "exactly", ...).
        const LENGTHISH     = 1 << 3;
        /// Credential vocabulary ("password", "token", "key", ...).
        const SECURITYISH   = 1 << 4;
    }
}

/// Input characteristics detected from the normalized input.
#[derive(Debug, Clone)]
pub struct TriggerInfo {
    pub buckets: BucketMask,
}

impl TriggerInfo {
    /// Scan normalized text for coarse buckets.
    pub fn scan(norm: &str) -> Self {
        let mut buckets = BucketMask::empty();

        if norm.bytes().any(|b| b.is_ascii_digit()) {
            buckets |= BucketMask::HAS_DIGITS;
        }

        if norm.contains('"') || norm.contains('\'') {
            buckets |= BucketMask::HAS_QUOTED;
        }

        // "id" needs a word-boundary check; the rest are safe as substrings.
        if norm.split_whitespace().any(|w| w.trim_matches(|c: char| !c.is_alphanumeric()) == "id")
            || contains_any(norm, &["identifier", "number", "code", "sku", "vin", "plate", "tracking"])
        {
            buckets |= BucketMask::IDENTIFIERISH;
        }

        if contains_any(norm, &["character", "chars", "length", "exactly", "at least", "at most", "between", "digit"])
        {
            buckets |= BucketMask::LENGTHISH;
        }

        if contains_any(norm, &["password", "token", "key", "secret", "credential"]) {
            buckets |= BucketMask::SECURITYISH;
        }

        TriggerInfo { buckets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_detects_digits_and_length_vocabulary() {
        let info = TriggerInfo::scan("between 5 and 10 characters");
        assert!(info.buckets.contains(BucketMask::HAS_DIGITS));
        assert!(info.buckets.contains(BucketMask::LENGTHISH));
        assert!(!info.buckets.contains(BucketMask::SECURITYISH));
    }

    #[test]
    fn scan_detects_quotes_and_identifiers() {
        let info = TriggerInfo::scan(r#"starts with "id:""#);
        assert!(info.buckets.contains(BucketMask::HAS_QUOTED));

        let info = TriggerInfo::scan("employee id with department prefix");
        assert!(info.buckets.contains(BucketMask::IDENTIFIERISH));
    }

    #[test]
    fn id_requires_a_word_boundary() {
        // "idiom" must not count as identifier vocabulary on its own.
        let info = TriggerInfo::scan("an idiom");
        assert!(!info.buckets.contains(BucketMask::IDENTIFIERISH));
    }

    #[test]
    fn empty_input_has_no_buckets() {
        assert!(TriggerInfo::scan("").buckets.is_empty());
    }
}

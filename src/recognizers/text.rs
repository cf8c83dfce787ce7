//! Text recognizers: character classes, unicode, positional literals and
//! length constraints.
//!
//! Positional recognizers extract quoted literals from the RAW input so the
//! literal's case survives normalization ("starts with \"ID:\"" must anchor
//! `ID:`, not `id:`). A positional recognizer without a quoted literal
//! declines and lets the fallback constructor handle anchor words instead.

use crate::Candidate;
use crate::Recognizer;
use crate::engine::BucketMask;
use crate::normalize::{first_integer, integer_pair, quoted_literal, quoted_literals};

/// Character class selected by companion words in a length constraint.
fn class_for(norm: &str) -> (&'static str, &'static str) {
    if norm.contains("digit") {
        (r"\d", "digits")
    } else if norm.contains("letter") {
        ("[A-Za-z]", "letters")
    } else {
        (".", "characters")
    }
}

pub(crate) fn get() -> Vec<Recognizer> {
    vec![
        recognizer! {
            name: "letters only",
            required: ["only"],
            optional: ["letter", "alphabetic"],
            build: |norm, _raw| {
                let (expression, description) = if norm.contains("uppercase") {
                    (r"^[A-Z]+$", "uppercase letters only")
                } else if norm.contains("lowercase") {
                    (r"^[a-z]+$", "lowercase letters only")
                } else {
                    (r"^[A-Za-z]+$", "letters only")
                };
                Some(Candidate {
                    expression: expression.to_string(),
                    description: description.to_string(),
                    base_confidence: 0.8,
                })
            },
        },
        recognizer! {
            name: "uppercase letters",
            required: ["uppercase"],
            build: |_norm, _raw| {
                Some(Candidate {
                    expression: r"^[A-Z]+$".to_string(),
                    description: "uppercase letters".to_string(),
                    base_confidence: 0.8,
                })
            },
        },
        recognizer! {
            name: "lowercase letters",
            required: ["lowercase"],
            build: |_norm, _raw| {
                Some(Candidate {
                    expression: r"^[a-z]+$".to_string(),
                    description: "lowercase letters".to_string(),
                    base_confidence: 0.8,
                })
            },
        },
        recognizer! {
            name: "alphanumeric text",
            required: ["alphanumeric"],
            build: |_norm, _raw| {
                Some(Candidate {
                    expression: r"^[A-Za-z0-9]+$".to_string(),
                    description: "alphanumeric text".to_string(),
                    base_confidence: 0.8,
                })
            },
        },
        recognizer! {
            name: "unicode text",
            required: ["unicode"],
            build: |_norm, _raw| {
                Some(Candidate {
                    expression: r"^[\p{L}\p{N}\p{Zs}]+$".to_string(),
                    description: "unicode text".to_string(),
                    base_confidence: 0.75,
                })
            },
        },
        recognizer! {
            name: "starts and ends with literals",
            required: ["start", "end"],
            buckets: BucketMask::HAS_QUOTED.bits(),
            build: |_norm, raw| {
                let literals = quoted_literals(raw);
                let (first, last) = match literals.as_slice() {
                    [first, .., last] => (*first, *last),
                    _ => return None,
                };
                Some(Candidate {
                    expression: format!("^{}.*{}$", regex::escape(first), regex::escape(last)),
                    description: format!("value starting with \"{first}\" and ending with \"{last}\""),
                    base_confidence: 0.8,
                })
            },
        },
        recognizer! {
            name: "starts with literal",
            required: ["start"],
            buckets: BucketMask::HAS_QUOTED.bits(),
            build: |_norm, raw| {
                let literal = quoted_literal(raw)?;
                Some(Candidate {
                    expression: format!("^{}.*", regex::escape(literal)),
                    description: format!("value starting with \"{literal}\""),
                    base_confidence: 0.8,
                })
            },
        },
        recognizer! {
            name: "ends with literal",
            required: ["end"],
            buckets: BucketMask::HAS_QUOTED.bits(),
            build: |_norm, raw| {
                let literal = quoted_literal(raw)?;
                Some(Candidate {
                    expression: format!(".*{}$", regex::escape(literal)),
                    description: format!("value ending with \"{literal}\""),
                    base_confidence: 0.8,
                })
            },
        },
        recognizer! {
            name: "contains literal",
            required: ["contain"],
            buckets: BucketMask::HAS_QUOTED.bits(),
            build: |_norm, raw| {
                let literal = quoted_literal(raw)?;
                Some(Candidate {
                    expression: regex::escape(literal),
                    description: format!("value containing \"{literal}\""),
                    base_confidence: 0.75,
                })
            },
        },
        recognizer! {
            name: "length between",
            required: ["between"],
            optional: ["character", "chars", "length"],
            buckets: (BucketMask::HAS_DIGITS | BucketMask::LENGTHISH).bits(),
            build: |norm, _raw| {
                let (min, max) = integer_pair(norm)?;
                if min > max {
                    return None;
                }
                Some(Candidate {
                    expression: format!("^.{{{min},{max}}}$"),
                    description: format!("between {min} and {max} characters"),
                    base_confidence: 0.85,
                })
            },
        },
        recognizer! {
            name: "exact length",
            required: ["exactly"],
            optional: ["character", "chars", "length", "digit", "letter"],
            buckets: (BucketMask::HAS_DIGITS | BucketMask::LENGTHISH).bits(),
            build: |norm, _raw| {
                let n = first_integer(norm)?;
                let (class, noun) = class_for(norm);
                Some(Candidate {
                    expression: format!("^{class}{{{n}}}$"),
                    description: format!("exactly {n} {noun}"),
                    base_confidence: 0.85,
                })
            },
        },
        recognizer! {
            name: "minimum length",
            required: ["at least"],
            optional: ["character", "chars", "length", "digit", "letter"],
            buckets: (BucketMask::HAS_DIGITS | BucketMask::LENGTHISH).bits(),
            build: |norm, _raw| {
                let n = first_integer(norm)?;
                let (class, noun) = class_for(norm);
                Some(Candidate {
                    expression: format!("^{class}{{{n},}}$"),
                    description: format!("at least {n} {noun}"),
                    base_confidence: 0.8,
                })
            },
        },
        recognizer! {
            name: "maximum length",
            required: ["at most"],
            optional: ["character", "chars", "length", "digit", "letter"],
            buckets: (BucketMask::HAS_DIGITS | BucketMask::LENGTHISH).bits(),
            build: |norm, _raw| {
                let n = first_integer(norm)?;
                let (class, noun) = class_for(norm);
                Some(Candidate {
                    expression: format!("^{class}{{0,{n}}}$"),
                    description: format!("at most {n} {noun}"),
                    base_confidence: 0.8,
                })
            },
        },
        recognizer! {
            name: "minimum length (worded)",
            required: ["minimum"],
            optional: ["character", "chars", "length", "digit", "letter"],
            buckets: (BucketMask::HAS_DIGITS | BucketMask::LENGTHISH).bits(),
            build: |norm, _raw| {
                let n = first_integer(norm)?;
                let (class, noun) = class_for(norm);
                Some(Candidate {
                    expression: format!("^{class}{{{n},}}$"),
                    description: format!("at least {n} {noun}"),
                    base_confidence: 0.8,
                })
            },
        },
        recognizer! {
            name: "maximum length (worded)",
            required: ["maximum"],
            optional: ["character", "chars", "length", "digit", "letter"],
            buckets: (BucketMask::HAS_DIGITS | BucketMask::LENGTHISH).bits(),
            build: |norm, _raw| {
                let n = first_integer(norm)?;
                let (class, noun) = class_for(norm);
                Some(Candidate {
                    expression: format!("^{class}{{0,{n}}}$"),
                    description: format!("at most {n} {noun}"),
                    base_confidence: 0.8,
                })
            },
        },
    ]
}

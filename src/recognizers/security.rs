//! Security and credential recognizers.

use crate::Candidate;
use crate::Recognizer;
use crate::engine::BucketMask;
use crate::normalize::first_integer;

pub(crate) fn get() -> Vec<Recognizer> {
    vec![
        recognizer! {
            name: "strong password",
            required: ["password"],
            optional: ["strong", "secure", "complex"],
            buckets: BucketMask::SECURITYISH.bits(),
            build: |_norm, _raw| {
                // The regex crate has no lookaround, so a single pattern can
                // only approximate "mixed classes". The validation path
                // enforces the classes with a predicate instead.
                Some(Candidate {
                    expression: r"^\S{8,}$".to_string(),
                    description: "strong password (mixed-case letters, digits and symbols)".to_string(),
                    base_confidence: 0.85,
                })
            },
        },
        recognizer! {
            name: "password with minimum length",
            required: ["password"],
            optional: ["minimum", "at least", "min length", "character", "chars"],
            buckets: (BucketMask::SECURITYISH | BucketMask::HAS_DIGITS).bits(),
            build: |norm, _raw| {
                let n = first_integer(norm)?;
                Some(Candidate {
                    expression: format!(r"^.{{{n},}}$"),
                    description: format!("password of at least {n} characters"),
                    base_confidence: 0.85,
                })
            },
        },
        recognizer! {
            name: "api key",
            required: ["api"],
            optional: ["key", "token"],
            buckets: BucketMask::SECURITYISH.bits(),
            build: |_norm, _raw| {
                Some(Candidate {
                    expression: r"^[A-Za-z0-9]{32,64}$".to_string(),
                    description: "API key".to_string(),
                    base_confidence: 0.8,
                })
            },
        },
        recognizer! {
            name: "json web token",
            required: ["jwt"],
            build: |_norm, _raw| {
                Some(Candidate {
                    expression: r"^[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+$".to_string(),
                    description: "JSON Web Token".to_string(),
                    base_confidence: 0.85,
                })
            },
        },
        recognizer! {
            name: "verification code",
            required: ["verification"],
            optional: ["code", "pin"],
            build: |norm, _raw| {
                let n = first_integer(norm).unwrap_or(6);
                Some(Candidate {
                    expression: format!(r"^\d{{{n}}}$"),
                    description: format!("{n}-digit verification code"),
                    base_confidence: 0.8,
                })
            },
        },
    ]
}

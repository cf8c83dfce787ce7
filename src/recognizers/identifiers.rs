//! Identifier recognizers: business, healthcare, education, transportation.
//!
//! These are the compound end of the registry: most require several
//! co-occurring trigger phrases and therefore outrank the generic
//! single-feature recognizers on overlapping input.

use crate::Recognizer;
use crate::engine::BucketMask;
use crate::normalize::first_integer;
use crate::Candidate;

pub(crate) fn get() -> Vec<Recognizer> {
    vec![
        recognizer! {
            name: "employee id",
            required: ["employee", "id"],
            buckets: BucketMask::IDENTIFIERISH.bits(),
            build: |norm, _raw| {
                let digits = first_integer(norm).unwrap_or(4);
                if norm.contains("prefix") {
                    Some(Candidate {
                        expression: format!(r"^[A-Z]{{2,4}}-\d{{{digits}}}$"),
                        description: "employee identifier with department prefix".to_string(),
                        base_confidence: 0.85,
                    })
                } else {
                    Some(Candidate {
                        expression: format!(r"^EMP-?\d{{{digits}}}$"),
                        description: "employee identifier".to_string(),
                        base_confidence: 0.8,
                    })
                }
            },
        },
        recognizer! {
            name: "invoice number",
            required: ["invoice"],
            build: |norm, _raw| {
                let expression = match first_integer(norm) {
                    Some(n) => format!(r"^INV-?\d{{{n}}}$"),
                    None => r"^INV-?\d{4,10}$".to_string(),
                };
                Some(Candidate {
                    expression,
                    description: "invoice number".to_string(),
                    base_confidence: 0.8,
                })
            },
        },
        recognizer! {
            name: "order number",
            required: ["order"],
            optional: ["number", "id", "reference"],
            build: |_norm, _raw| {
                Some(Candidate {
                    expression: r"^ORD-?\d{6,12}$".to_string(),
                    description: "order number".to_string(),
                    base_confidence: 0.8,
                })
            },
        },
        recognizer! {
            name: "product sku",
            required: ["sku"],
            build: |_norm, _raw| {
                Some(Candidate {
                    expression: r"^[A-Z0-9]{4,12}(?:-[A-Z0-9]{1,6})?$".to_string(),
                    description: "product SKU".to_string(),
                    base_confidence: 0.8,
                })
            },
        },
        recognizer! {
            name: "product code",
            required: ["product", "code"],
            build: |_norm, _raw| {
                Some(Candidate {
                    expression: r"^[A-Z0-9]{4,12}(?:-[A-Z0-9]{1,6})?$".to_string(),
                    description: "product code".to_string(),
                    base_confidence: 0.8,
                })
            },
        },
        recognizer! {
            name: "patient id",
            required: ["patient"],
            optional: ["id", "number", "identifier"],
            buckets: BucketMask::IDENTIFIERISH.bits(),
            build: |_norm, _raw| {
                Some(Candidate {
                    expression: r"^P-?\d{6,9}$".to_string(),
                    description: "patient identifier".to_string(),
                    base_confidence: 0.8,
                })
            },
        },
        recognizer! {
            name: "insurance policy",
            required: ["insurance"],
            build: |_norm, _raw| {
                Some(Candidate {
                    expression: r"^[A-Z]{3}-?\d{9}$".to_string(),
                    description: "insurance policy number".to_string(),
                    base_confidence: 0.8,
                })
            },
        },
        recognizer! {
            name: "student id",
            required: ["student"],
            optional: ["id", "number", "identifier"],
            buckets: BucketMask::IDENTIFIERISH.bits(),
            build: |_norm, _raw| {
                Some(Candidate {
                    expression: r"^S\d{7,9}$".to_string(),
                    description: "student identifier".to_string(),
                    base_confidence: 0.8,
                })
            },
        },
        recognizer! {
            name: "course code",
            required: ["course"],
            optional: ["code", "number"],
            build: |_norm, _raw| {
                Some(Candidate {
                    expression: r"^[A-Z]{2,4} ?\d{3}[A-Z]?$".to_string(),
                    description: "course code".to_string(),
                    base_confidence: 0.8,
                })
            },
        },
        recognizer! {
            name: "flight number",
            required: ["flight"],
            build: |_norm, _raw| {
                Some(Candidate {
                    expression: r"^[A-Z]{2}\d{1,4}$".to_string(),
                    description: "flight number".to_string(),
                    base_confidence: 0.8,
                })
            },
        },
        recognizer! {
            name: "license plate",
            required: ["plate"],
            build: |_norm, _raw| {
                Some(Candidate {
                    expression: r"^[A-Z0-9]{1,3}[- ]?[A-Z0-9]{3,4}$".to_string(),
                    description: "license plate".to_string(),
                    base_confidence: 0.8,
                })
            },
        },
        recognizer! {
            name: "vehicle vin",
            required: ["vin"],
            build: |_norm, _raw| {
                Some(Candidate {
                    // VINs exclude I, O and Q.
                    expression: r"^[A-HJ-NPR-Z0-9]{17}$".to_string(),
                    description: "vehicle identification number".to_string(),
                    base_confidence: 0.85,
                })
            },
        },
        recognizer! {
            name: "tracking number",
            required: ["tracking"],
            build: |_norm, _raw| {
                Some(Candidate {
                    expression: r"^[A-Z0-9]{10,30}$".to_string(),
                    description: "shipment tracking number".to_string(),
                    base_confidence: 0.8,
                })
            },
        },
    ]
}

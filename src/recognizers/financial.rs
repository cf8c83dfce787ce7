//! Financial instrument recognizers.

use crate::Candidate;
use crate::Recognizer;
use crate::catalog::Category;
use crate::recognizers::from_catalog;

pub(crate) fn get() -> Vec<Recognizer> {
    vec![
        recognizer! {
            name: "credit card number",
            required: ["card"],
            optional: ["credit", "debit", "number"],
            build: |_norm, _raw| { from_catalog(Category::CreditCard) },
        },
        recognizer! {
            name: "iban",
            required: ["iban"],
            build: |_norm, _raw| {
                Some(Candidate {
                    expression: r"^[A-Z]{2}\d{2}[A-Z0-9]{11,30}$".to_string(),
                    description: "IBAN".to_string(),
                    base_confidence: 0.85,
                })
            },
        },
        recognizer! {
            name: "currency amount",
            required: ["amount"],
            optional: ["currency", "dollar", "price", "money"],
            build: |_norm, _raw| {
                Some(Candidate {
                    expression: r"^\$?\d+(?:\.\d{2})?$".to_string(),
                    description: "currency amount".to_string(),
                    base_confidence: 0.8,
                })
            },
        },
        recognizer! {
            name: "bank account number",
            required: ["bank", "account"],
            build: |_norm, _raw| {
                Some(Candidate {
                    expression: r"^\d{8,17}$".to_string(),
                    description: "bank account number".to_string(),
                    base_confidence: 0.8,
                })
            },
        },
    ]
}

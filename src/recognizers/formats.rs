//! File name and date/time format recognizers.

use crate::Candidate;
use crate::Recognizer;
use crate::catalog::Category;
use crate::normalize::contains_any;
use crate::recognizers::from_catalog;

/// Extensions recognized when mentioned as standalone words.
const KNOWN_EXTENSIONS: &[&str] = &[
    "pdf", "csv", "txt", "jpg", "jpeg", "png", "gif", "doc", "docx", "xls", "xlsx", "json", "xml", "html",
    "yaml", "toml",
];

pub(crate) fn get() -> Vec<Recognizer> {
    vec![
        recognizer! {
            name: "file name",
            required: ["file"],
            optional: ["name", "extension"],
            build: |norm, _raw| {
                let mentioned: Vec<&str> = KNOWN_EXTENSIONS
                    .iter()
                    .copied()
                    .filter(|ext| {
                        norm.split_whitespace()
                            .any(|w| w.trim_matches(|c: char| !c.is_alphanumeric()) == *ext)
                    })
                    .collect();

                let (expression, description) = if mentioned.is_empty() {
                    (r"^[\w\-. ]+\.[A-Za-z0-9]{1,8}$".to_string(), "file name with extension".to_string())
                } else {
                    (
                        format!(r"^[\w\-. ]+\.(?:{})$", mentioned.join("|")),
                        format!("file name with {} extension", mentioned.join("/")),
                    )
                };

                Some(Candidate { expression, description, base_confidence: 0.8 })
            },
        },
        recognizer! {
            name: "date with slashes",
            required: ["date"],
            optional: ["slash", "dd/mm", "mm/dd", "european", "us format"],
            build: |norm, _raw| {
                let description = if contains_any(norm, &["dd/mm", "european"]) {
                    "date (DD/MM/YYYY)"
                } else if contains_any(norm, &["mm/dd", "us format"]) {
                    "date (MM/DD/YYYY)"
                } else {
                    "date with slashes"
                };
                Some(Candidate {
                    expression: r"^\d{2}/\d{2}/\d{4}$".to_string(),
                    description: description.to_string(),
                    base_confidence: 0.85,
                })
            },
        },
        recognizer! {
            name: "date and time",
            required: ["date"],
            optional: ["time", "timestamp", "iso"],
            build: |_norm, _raw| {
                Some(Candidate {
                    expression: r"^\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}(?::\d{2})?$".to_string(),
                    description: "date and time".to_string(),
                    base_confidence: 0.85,
                })
            },
        },
        recognizer! {
            name: "24-hour time",
            required: ["time"],
            optional: ["24 hour", "24-hour", "military"],
            build: |_norm, _raw| {
                Some(Candidate {
                    expression: r"^(?:[01][0-9]|2[0-3]):[0-5][0-9]$".to_string(),
                    description: "24-hour clock time".to_string(),
                    base_confidence: 0.85,
                })
            },
        },
        recognizer! {
            name: "calendar year",
            required: ["year"],
            build: |_norm, _raw| {
                Some(Candidate {
                    expression: r"^(?:19|20)\d{2}$".to_string(),
                    description: "calendar year".to_string(),
                    base_confidence: 0.8,
                })
            },
        },
        recognizer! {
            name: "plain date",
            required: [],
            optional: ["date"],
            build: |_norm, _raw| { from_catalog(Category::Date) },
        },
    ]
}

//! Communication handle recognizers. Mostly catalog-backed: a description
//! mentioning "email" means the canonical email pattern, whatever else it
//! says, unless a more specific recognizer already claimed the text.

use crate::Candidate;
use crate::Recognizer;
use crate::catalog::Category;
use crate::recognizers::from_catalog;

pub(crate) fn get() -> Vec<Recognizer> {
    vec![
        recognizer! {
            name: "email address",
            required: [],
            optional: ["email", "e-mail", "mail address"],
            build: |_norm, _raw| { from_catalog(Category::Email) },
        },
        recognizer! {
            name: "phone number",
            required: [],
            optional: ["phone", "telephone", "mobile"],
            build: |_norm, _raw| { from_catalog(Category::Phone) },
        },
        recognizer! {
            name: "web url",
            required: [],
            optional: ["url", "website", "web address", "link"],
            build: |_norm, _raw| { from_catalog(Category::Url) },
        },
        recognizer! {
            name: "social media handle",
            required: ["social"],
            optional: ["handle", "username", "mention", "profile"],
            build: |_norm, _raw| {
                Some(Candidate {
                    expression: r"^@[A-Za-z0-9_]{1,15}$".to_string(),
                    description: "social media handle".to_string(),
                    base_confidence: 0.8,
                })
            },
        },
    ]
}

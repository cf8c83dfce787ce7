//! Technology identifier recognizers.

use crate::Candidate;
use crate::Recognizer;
use crate::catalog::Category;
use crate::recognizers::from_catalog;

pub(crate) fn get() -> Vec<Recognizer> {
    vec![
        recognizer! {
            name: "ip address",
            required: [],
            optional: ["ip address", "ipv4"],
            build: |_norm, _raw| { from_catalog(Category::Ipv4) },
        },
        recognizer! {
            name: "mac address",
            required: ["mac address"],
            build: |_norm, _raw| { from_catalog(Category::MacAddress) },
        },
        recognizer! {
            name: "semantic version",
            required: ["version"],
            build: |_norm, _raw| { from_catalog(Category::SemVer) },
        },
        recognizer! {
            name: "hostname",
            required: ["hostname"],
            build: |_norm, _raw| {
                Some(Candidate {
                    expression: r"^[a-z0-9]+(?:[.-][a-z0-9]+)*\.[a-z]{2,}$".to_string(),
                    description: "hostname".to_string(),
                    base_confidence: 0.8,
                })
            },
        },
        recognizer! {
            name: "domain name",
            required: ["domain"],
            build: |_norm, _raw| {
                Some(Candidate {
                    expression: r"^[a-z0-9]+(?:[.-][a-z0-9]+)*\.[a-z]{2,}$".to_string(),
                    description: "domain name".to_string(),
                    base_confidence: 0.8,
                })
            },
        },
    ]
}

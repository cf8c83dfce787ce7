//! The recognizer registry.
//!
//! One file per domain, each exposing `get() -> Vec<Recognizer>`; the full
//! registry is the concatenation, lazily built once per process. Evaluation
//! order is NOT the order below (the engine sorts by specificity), so a new
//! recognizer can be added to whichever file fits its domain.
//!
//! Single-feature recognizers (email, phone, url, card, ip, mac, semver)
//! delegate to the catalog descriptor via [`from_catalog`], so a bare keyword
//! resolves to the same canonical expression and description on every path.

pub(crate) mod communication;
pub(crate) mod financial;
pub(crate) mod formats;
pub(crate) mod identifiers;
pub(crate) mod security;
pub(crate) mod technology;
pub(crate) mod text;


use crate::catalog::{self, Category};
use crate::engine::score::HIGH_CONFIDENCE;
use crate::{Candidate, Recognizer};
use once_cell::sync::Lazy;

static REGISTRY: Lazy<Vec<Recognizer>> = Lazy::new(|| {
    let mut all = Vec::new();
    all.extend(identifiers::get());
    all.extend(security::get());
    all.extend(communication::get());
    all.extend(financial::get());
    all.extend(technology::get());
    all.extend(formats::get());
    all.extend(text::get());
    all
});

/// The full recognizer registry, in declaration order.
pub(crate) fn all() -> &'static [Recognizer] {
    &REGISTRY
}

/// Candidate backed by a catalog entry: canonical expression, canonical
/// description, high base confidence.
pub(crate) fn from_catalog(category: Category) -> Option<Candidate> {
    let d = catalog::descriptor(category);
    Some(Candidate {
        expression: d.expression.to_string(),
        description: d.description.to_string(),
        base_confidence: HIGH_CONFIDENCE,
    })
}

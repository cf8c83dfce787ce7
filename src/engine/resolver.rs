//! Recognizer compilation and first-match resolution.
//!
//! Parsing a description is split into two phases:
//!
//! 1. **Compile/index** (this module): take the full recognizer registry and
//!    derive a `CompiledRecognizers` whose evaluation order is an explicit
//!    property of each recognizer (its specificity), not of where it happens
//!    to be declared. Compound recognizers therefore beat single-feature
//!    recognizers on overlapping triggers by construction.
//! 2. **Run**: scan the input for coarse buckets (`trigger.rs`), walk the
//!    ordered registry, and stop at the first recognizer whose triggers hold
//!    and whose builder returns a candidate.
//!
//! ## Invariants
//!
//! - Evaluation order is deterministic: specificity descending, declaration
//!   order as the stable tie-break.
//! - Recognizers are pure and independent; a builder returning `None` must
//!   leave no trace (the walk simply continues).

use super::trigger::{BucketMask, TriggerInfo};
use crate::{Candidate, Recognizer};
use once_cell::sync::Lazy;
use tracing::debug;

/// A recognizer that fired, with the candidate it produced.
#[derive(Debug, Clone)]
pub(crate) struct RecognizerMatch {
    pub name: &'static str,
    pub candidate: Candidate,
}

/// Pre-ordered recognizer registry.
pub(crate) struct CompiledRecognizers<'a> {
    order: Vec<&'a Recognizer>,
}

impl<'a> CompiledRecognizers<'a> {
    /// Order the registry by explicit specificity, descending. The sort is
    /// stable, so equally specific recognizers keep declaration order.
    pub fn new(recognizers: &'a [Recognizer]) -> Self {
        let mut order: Vec<&Recognizer> = recognizers.iter().collect();
        order.sort_by_key(|r| std::cmp::Reverse(r.specificity()));
        CompiledRecognizers { order }
    }

    /// Evaluate recognizers in order against the normalized text; the first
    /// one whose buckets, phrases and builder all succeed wins.
    pub fn first_match(&self, norm: &str, raw: &str) -> Option<RecognizerMatch> {
        let trigger = TriggerInfo::scan(norm);

        for rec in &self.order {
            let required = BucketMask::from_bits_truncate(rec.buckets);
            if !trigger.buckets.contains(required) {
                continue;
            }
            if !rec.triggered_by(norm) {
                continue;
            }
            if let Some(candidate) = (rec.build)(norm, raw) {
                debug!(recognizer = rec.name, expression = %candidate.expression, "recognizer matched");
                return Some(RecognizerMatch { name: rec.name, candidate });
            }
        }

        None
    }

    /// Names in evaluation order (diagnostics and tests).
    pub fn names(&self) -> Vec<&'static str> {
        self.order.iter().map(|r| r.name).collect()
    }
}

static COMPILED: Lazy<CompiledRecognizers<'static>> =
    Lazy::new(|| CompiledRecognizers::new(crate::recognizers::all()));

/// Run the default registry against a normalized/raw input pair.
pub(crate) fn recognize(norm: &str, raw: &str) -> Option<RecognizerMatch> {
    COMPILED.first_match(norm, raw)
}

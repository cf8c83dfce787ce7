//! Resolution engine.
//!
//! This module is the decision core of the crate. Resolving a description is
//! a linear pipeline with one branch point and no cycles:
//!
//! ```text
//! input ── normalize ──┐
//!                      │
//!            TriggerInfo::scan            (trigger.rs)
//!                      │
//!                      v
//!        CompiledRecognizers::first_match (resolver.rs)
//!          - specificity-sorted registry
//!          - bucket + phrase gating
//!          - first Some(Candidate) wins
//!                      │ none
//!                      v
//!            catalog::direct_hit          (../catalog.rs)
//!                      │ none
//!                      v
//!            fallback::construct          (fallback.rs)
//!                      │
//!                      v
//!            score::score + thresholds    (score.rs)
//!            suggest::*                   (suggest.rs)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `trigger.rs`: scans the normalized input for coarse buckets used to
//!   gate recognizer activation cheaply.
//! - `resolver.rs`: compiles the recognizer registry (explicit specificity
//!   order) and runs first-match-wins evaluation.
//! - `fallback.rs`: synthesizes a pattern from structural hint words when no
//!   recognizer or catalog entry matches; degrades to a loose-phrase literal.
//! - `score.rs`: the confidence formula and the threshold constants.
//! - `suggest.rs`: guidance strings and the did-you-mean catalog scan.
//!
//! ## Adding new recognizers
//!
//! New recognizers are added under `src/recognizers/**` and picked up by the
//! registry automatically; their evaluation position follows from their
//! specificity, not from where they are declared. If a new recognizer needs a
//! new coarse trigger, add a `BucketMask` bit and teach `TriggerInfo::scan`
//! to detect it.

#[path = "engine/fallback.rs"]
pub(crate) mod fallback;
#[path = "engine/resolver.rs"]
pub(crate) mod resolver;
#[path = "engine/score.rs"]
pub(crate) mod score;
#[path = "engine/suggest.rs"]
pub(crate) mod suggest;
#[path = "engine/trigger.rs"]
pub(crate) mod trigger;

pub(crate) use resolver::recognize;
pub(crate) use trigger::BucketMask;

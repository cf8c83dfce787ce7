//! Component-based fallback construction.
//!
//! Invoked only when no recognizer fired and no catalog keyword hit. The
//! constructor infers primitive components from structural hint words, each
//! contributing a confidence increment, and concatenates them (components are
//! concatenated, never OR'd). If not even hints are present it degrades to a
//! loose-phrase literal: content words escaped and joined by unbounded
//! wildcard gaps.

use super::score::LOOSE_PHRASE_CONFIDENCE;
use crate::Candidate;
use crate::normalize::{contains_any, first_integer};
use tracing::debug;

struct Component {
    atom: &'static str,
    quant: String,
    hint: &'static str,
    increment: f64,
}

impl Component {
    fn new(atom: &'static str, quant: &str, hint: &'static str, increment: f64) -> Self {
        Component { atom, quant: quant.to_string(), hint, increment }
    }

    fn render(&self) -> String {
        format!("{}{}", self.atom, self.quant)
    }
}

/// Synthesize a pattern from structural hints, or a loose-phrase literal.
/// `None` only when the input has neither hints nor content words.
pub(crate) fn construct(norm: &str) -> Option<Candidate> {
    let mut components: Vec<Component> = Vec::new();

    if contains_any(norm, &["letter", "alphabetic"]) {
        components.push(Component::new("[A-Za-z]", "+", "letters", 0.3));
    }
    if contains_any(norm, &["digit", "number"]) {
        components.push(Component::new(r"\d", "+", "digits", 0.3));
    }
    if contains_any(norm, &["space", "whitespace"]) {
        components.push(Component::new(r"\s", "+", "whitespace", 0.2));
    }
    if contains_any(norm, &["any character", "anything"]) {
        components.push(Component::new(".", "*", "any characters", 0.1));
    }

    // An embedded count plus a quantifier keyword re-quantifies the most
    // recently added component.
    if let (Some(n), Some(last)) = (first_integer(norm), components.last_mut()) {
        if norm.contains("exactly") {
            last.quant = format!("{{{n}}}");
        } else if norm.contains("at least") {
            last.quant = format!("{{{n},}}");
        } else if norm.contains("at most") {
            last.quant = format!("{{0,{n}}}");
        }
    }

    if components.is_empty() {
        return loose_phrase(norm);
    }

    let mut expression = String::new();
    if contains_any(norm, &["start", "beginning"]) {
        expression.push('^');
    }
    for component in &components {
        expression.push_str(&component.render());
    }
    if norm.contains("end") {
        expression.push('$');
    }

    let confidence: f64 = components.iter().map(|c| c.increment).sum::<f64>().min(1.0);
    let hints: Vec<&str> = components.iter().map(|c| c.hint).collect();
    debug!(%expression, confidence, "fallback constructed from hints");

    Some(Candidate {
        expression,
        description: format!("pattern built from structural hints: {}", hints.join(", ")),
        base_confidence: confidence,
    })
}

/// Escaped content words joined by `.*` gaps. Fixed low confidence.
fn loose_phrase(norm: &str) -> Option<Candidate> {
    let words: Vec<String> =
        norm.split_whitespace().filter(|w| w.chars().count() > 2).map(regex::escape).collect();
    if words.is_empty() {
        return None;
    }

    let expression = words.join(".*");
    debug!(%expression, "fallback degraded to loose-phrase literal");

    Some(Candidate {
        expression,
        description: format!("loose phrase match for \"{norm}\""),
        base_confidence: LOOSE_PHRASE_CONFIDENCE,
    })
}

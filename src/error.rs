//! Internal error type.
//!
//! The engine has no fatal error class: the worst outcome of any call is a
//! low-confidence or `success=false` result. The only operation that can fail
//! at all is compiling a constructed expression, and that failure is caught
//! at the pipeline boundary and folded into the result (confidence forced to
//! 0, diagnostic suggestion appended). Nothing here crosses the public API.

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum PatternError {
    #[error("constructed pattern failed to compile: {0}")]
    Compile(#[from] regex::Error),
}

/// Compile an expression produced by a recognizer, the catalog or the
/// fallback constructor.
pub(crate) fn compile(expression: &str) -> Result<Regex, PatternError> {
    Ok(Regex::new(expression)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_accepts_valid_and_rejects_invalid() {
        assert!(compile(r"^\d{4}$").is_ok());
        let err = compile(r"(unclosed").unwrap_err();
        assert!(err.to_string().contains("failed to compile"));
    }
}

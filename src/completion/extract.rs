//! Response extraction
//!
//! Completion output is free-form natural language and may contain zero, one,
//! or several candidate comment blocks. The contract is "first match wins":
//! take the first non-greedy `/** ... */` span verbatim, or fall back to a
//! fixed sentinel.

use regex::Regex;
use std::sync::OnceLock;

/// Sentinel returned when no comment block can be found in the response
pub const NO_COMMENT: &str = "No comment";

fn block_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?s)/\*\*.*?\*/").expect("comment block pattern"))
}

/// Extract the first doc comment block from raw completion text.
///
/// The matched span is returned verbatim, trimmed of surrounding whitespace.
/// Idempotent: running the extractor on its own output returns the same text.
pub fn extract_comment(raw: &str) -> String {
    match block_pattern().find(raw) {
        Some(found) => found.as_str().trim().to_string(),
        None => NO_COMMENT.to_string(),
    }
}

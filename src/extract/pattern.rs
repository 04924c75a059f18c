//! Regex fallback extraction
//!
//! One scan over the whole document for a leading type keyword (or Go's `func`),
//! a name, a parameter list and an opening brace. No scope tracking.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::windowed_record;
use crate::schema::FunctionRecord;

static FUNCTION_HEAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:func\s+|void\s+|int\s+|float\s+|double\s+|char\s+)(\w+)\s*\(([^)]*)\)\s*\{")
        .expect("fallback function regex")
});

/// Extract functions from any curly-brace source. Never fails.
pub fn extract(source: &str) -> Vec<FunctionRecord> {
    let lines: Vec<&str> = source.lines().collect();

    FUNCTION_HEAD
        .captures_iter(source)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let start = source[..whole.start()].matches('\n').count() + 1;
            let params = normalize_whitespace(&caps[2]);
            Some(windowed_record(
                &lines,
                caps[1].to_string(),
                Some(params),
                start,
            ))
        })
        .collect()
}

/// Collapse multi-line parameter lists onto one line
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

//! Function extraction
//!
//! This module turns raw source text into an ordered list of [`FunctionRecord`]s.
//! The strategy is chosen from the document's language hint, or its identifier, by
//! [`Strategy::for_document`]:
//!
//! - `structured`: tree-sitter parse, top-level function declarations only (Python)
//! - `brace`: line scan tracking class/struct scopes and brace depth (C++)
//! - `pattern`: single regex scan for typed function heads (everything else)
//!
//! Brace-tracking and regex records use a fixed lookahead window: the snippet is the
//! matched line plus the next [`SNIPPET_WINDOW`] lines whether or not the body closes
//! there. This approximation is load-bearing for the output shape and is kept as is.

pub mod brace;
pub mod pattern;
pub mod structured;

use tracing::debug;

use crate::error::Result;
use crate::lang::Strategy;
use crate::schema::{FunctionRecord, SourceDocument};

/// Lines captured after the matched line by the windowed strategies
pub const SNIPPET_WINDOW: usize = 20;

/// Extract function records from a document, choosing the strategy from its language
pub fn extract(document: &SourceDocument) -> Result<Vec<FunctionRecord>> {
    let strategy = Strategy::for_document(document);
    debug!(
        "Extracting {} with {} strategy",
        document.identifier,
        strategy.name()
    );
    extract_with(strategy, &document.identifier, &document.text)
}

/// Extract function records with an explicit strategy.
///
/// Only [`Strategy::Structured`] can fail; the other strategies accept any text.
pub fn extract_with(
    strategy: Strategy,
    identifier: &str,
    source: &str,
) -> Result<Vec<FunctionRecord>> {
    match strategy {
        Strategy::Structured => structured::extract(identifier, source),
        Strategy::BraceTracking => Ok(brace::extract(source)),
        Strategy::Regex => Ok(pattern::extract(source)),
    }
}

/// Lines `start..=end` (1-based) joined by `\n`, padded with empty lines past the end
/// of the document so the snippet always spans `end - start + 1` lines.
pub(crate) fn span_snippet(lines: &[&str], start: usize, end: usize) -> String {
    (start..=end)
        .map(|line| lines.get(line - 1).copied().unwrap_or(""))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build a fixed-window record starting at `start` (1-based)
pub(crate) fn windowed_record(
    lines: &[&str],
    name: String,
    params: Option<String>,
    start: usize,
) -> FunctionRecord {
    let end = start + SNIPPET_WINDOW;
    FunctionRecord {
        name,
        start_line: start,
        end_line: end,
        snippet: span_snippet(lines, start, end),
        params,
    }
}

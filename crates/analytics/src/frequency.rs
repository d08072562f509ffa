//! Term frequency table
//!
//! Counts surviving tokens, ranks them by descending count with first-seen
//! insertion order breaking ties, and truncates to the display limit.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One ranked term with its display size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermEntry {
    /// The token text
    pub text: String,

    /// Occurrence count
    pub count: usize,

    /// Display size for the presentation layer, `10 + sqrt(count) * 3`.
    /// Not a statistical artifact.
    pub size: f64,
}

/// Build the ranked frequency table from the token stream.
///
/// Ties resolve to the token seen first in the stream; the sort is stable
/// over insertion order.
pub fn build_frequency_table(tokens: &[String], limit: usize) -> Vec<TermEntry> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }

    let mut entries: Vec<(&str, usize)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(limit);

    entries
        .into_iter()
        .map(|(text, count)| TermEntry {
            text: text.to_string(),
            count,
            size: 10.0 + (count as f64).sqrt() * 3.0,
        })
        .collect()
}

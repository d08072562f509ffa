//! Citation-year timeline
//!
//! Scans the raw document text for 4-digit year-like substrings and
//! aggregates them into an ascending per-year timeline.

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Years before this are treated as noise, not citations
pub const MIN_CITATION_YEAR: i32 = 1980;

/// One timeline bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationYear {
    /// Publication year
    pub year: i32,

    /// Number of occurrences in the document
    pub count: usize,
}

/// Scanner for citation years in raw text
#[derive(Debug, Clone)]
pub struct CitationScanner {
    pattern: Regex,
    max_year: i32,
}

impl CitationScanner {
    /// Create a scanner bounded by the current calendar year
    pub fn new() -> Self {
        use chrono::Datelike;
        Self::with_max_year(chrono::Utc::now().year())
    }

    /// Create a scanner with an explicit upper year bound
    pub fn with_max_year(max_year: i32) -> Self {
        // The pattern is a fixed literal; compilation cannot fail.
        let pattern = Regex::new(r"\b(19|20)\d{2}\b").unwrap();
        Self { pattern, max_year }
    }

    /// Scan raw (untokenized) text and aggregate year counts, ascending.
    ///
    /// Substrings outside `[MIN_CITATION_YEAR, max_year]` are filtered, not
    /// reported.
    pub fn scan(&self, text: &str) -> Vec<CitationYear> {
        let mut counts: HashMap<i32, usize> = HashMap::new();

        for m in self.pattern.find_iter(text) {
            if let Ok(year) = m.as_str().parse::<i32>() {
                if (MIN_CITATION_YEAR..=self.max_year).contains(&year) {
                    *counts.entry(year).or_insert(0) += 1;
                }
            }
        }

        let mut timeline: Vec<CitationYear> = counts
            .into_iter()
            .map(|(year, count)| CitationYear { year, count })
            .collect();

        timeline.sort_by_key(|c| c.year);
        timeline
    }

    /// Total citations across the timeline
    pub fn total(timeline: &[CitationYear]) -> usize {
        timeline.iter().map(|c| c.count).sum()
    }
}

impl Default for CitationScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_aggregation_and_order() {
        let scanner = CitationScanner::with_max_year(2026);
        let timeline = scanner.scan("Cited in 2023, and twice in 1999 and 1999.");

        assert_eq!(
            timeline,
            vec![
                CitationYear { year: 1999, count: 2 },
                CitationYear { year: 2023, count: 1 },
            ]
        );
        assert_eq!(CitationScanner::total(&timeline), 3);
    }

    #[test]
    fn test_out_of_range_years_filtered() {
        let scanner = CitationScanner::with_max_year(2026);
        let timeline = scanner.scan("Founded 1776, revised 1979, cited 1980 and 2099.");

        assert_eq!(timeline, vec![CitationYear { year: 1980, count: 1 }]);
    }

    #[test]
    fn test_word_boundary_required() {
        let scanner = CitationScanner::with_max_year(2026);

        // Digits embedded in longer numbers do not match
        assert!(scanner.scan("id 120230 and 199912").is_empty());
    }

    #[test]
    fn test_empty_text() {
        let scanner = CitationScanner::with_max_year(2026);
        assert!(scanner.scan("").is_empty());
    }
}

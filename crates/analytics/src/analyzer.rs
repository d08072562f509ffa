//! Document analytics facade
//!
//! Composes tokenization, frequency ranking, readability scoring, and the
//! citation timeline into a single `analyze` pass over raw text. All outputs
//! are recomputed from scratch on every call and replaced atomically.

use crate::citations::{CitationScanner, CitationYear};
use crate::frequency::{build_frequency_table, TermEntry};
use crate::lexicon::Lexicon;
use crate::tokenizer::{count_sentences, count_vowel_runs, Tokenizer};
use paperscope_common::config::AnalyticsConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Default number of top frequency terms retained for display
pub const DEFAULT_TOP_TERMS: usize = 30;

/// Default reading speed for the reading-time estimate
pub const DEFAULT_READING_WPM: usize = 200;

/// Quantitative text statistics for one document.
///
/// Percentages are 0-100 floats rounded to one decimal; minutes are whole
/// numbers. Field names are part of the wire contract with existing
/// consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextMetrics {
    /// Tokens surviving stop-word and length filtering
    pub word_count: usize,

    /// Fragments between runs of `.`, `!`, `?`
    pub sentence_count: usize,

    pub avg_words_per_sentence: f64,

    /// Mean character length of surviving tokens
    pub avg_word_length: f64,

    pub unique_word_count: usize,

    /// Unique / total tokens, as a 0-100 percentage
    pub lexical_diversity_percent: f64,

    /// Flesch-Kincaid grade-level approximation (whole-text vowel-run
    /// syllable count, not the published per-word formula)
    pub grade_level: f64,

    /// `ceil(wordCount / 200)`
    pub reading_time_minutes: usize,

    /// Technical-vocabulary tokens / total tokens, as a 0-100 percentage
    pub technical_density_percent: f64,

    /// Sum of all citation-timeline counts
    pub citation_count: usize,
}

/// Full output of one analysis pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAnalytics {
    pub metrics: TextMetrics,

    /// Top terms by frequency, at most the configured display limit
    pub top_terms: Vec<TermEntry>,

    /// Citation years, ascending
    pub citation_timeline: Vec<CitationYear>,
}

/// Stateless analyzer over raw document text
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    tokenizer: Tokenizer,
    scanner: CitationScanner,
    top_terms: usize,
    reading_wpm: usize,
}

impl TextAnalyzer {
    /// Create an analyzer with the given vocabulary and default limits
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            tokenizer: Tokenizer::new(lexicon),
            scanner: CitationScanner::new(),
            top_terms: DEFAULT_TOP_TERMS,
            reading_wpm: DEFAULT_READING_WPM,
        }
    }

    /// Create an analyzer from the shared service configuration
    pub fn from_config(config: &AnalyticsConfig, lexicon: Lexicon) -> Self {
        Self::new(lexicon)
            .with_top_terms(config.top_terms)
            .with_reading_wpm(config.reading_words_per_minute)
    }

    /// Override the top-terms display limit
    pub fn with_top_terms(mut self, top_terms: usize) -> Self {
        self.top_terms = top_terms;
        self
    }

    /// Override the reading speed used for the reading-time estimate
    pub fn with_reading_wpm(mut self, wpm: usize) -> Self {
        self.reading_wpm = wpm.max(1);
        self
    }

    /// Override the citation scanner (tests pin the year bound)
    pub fn with_citation_scanner(mut self, scanner: CitationScanner) -> Self {
        self.scanner = scanner;
        self
    }

    /// Analyze raw document text.
    ///
    /// Never fails: empty input produces all-zero metrics, an empty
    /// frequency table, and an empty timeline.
    pub fn analyze(&self, text: &str) -> DocumentAnalytics {
        let tokens = self.tokenizer.tokenize(text);
        let word_count = tokens.len();

        let top_terms = build_frequency_table(&tokens, self.top_terms);

        let sentence_count = count_sentences(text);
        let avg_words_per_sentence = word_count as f64 / sentence_count.max(1) as f64;

        let total_len: usize = tokens.iter().map(|t| t.len()).sum();
        let avg_word_length = total_len as f64 / word_count.max(1) as f64;

        let unique_word_count = tokens.iter().collect::<HashSet<_>>().len();
        let lexical_diversity = (unique_word_count as f64 / word_count.max(1) as f64) * 100.0;

        // Coarse whole-text syllable approximation feeding Flesch-Kincaid
        let syllables = count_vowel_runs(text);
        let grade_level = (0.39 * avg_words_per_sentence
            + 11.8 * (syllables as f64 / word_count.max(1) as f64)
            - 15.59)
            .max(0.0);

        let technical_count = self.tokenizer.technical_count(&tokens);
        let technical_density = (technical_count as f64 / word_count.max(1) as f64) * 100.0;

        let citation_timeline = self.scanner.scan(text);
        let citation_count = CitationScanner::total(&citation_timeline);

        let reading_time_minutes = word_count.div_ceil(self.reading_wpm);

        debug!(
            input_len = text.len(),
            word_count,
            sentence_count,
            unique_word_count,
            citation_count,
            "Document analyzed"
        );

        DocumentAnalytics {
            metrics: TextMetrics {
                word_count,
                sentence_count,
                avg_words_per_sentence: round1(avg_words_per_sentence),
                avg_word_length: round1(avg_word_length),
                unique_word_count,
                lexical_diversity_percent: round1(lexical_diversity),
                grade_level: round1(grade_level),
                reading_time_minutes,
                technical_density_percent: round1(technical_density),
                citation_count,
            },
            top_terms,
            citation_timeline,
        }
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new(Lexicon::default())
    }
}

/// Round to one decimal place (the wire precision for averages/percentages)
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> TextAnalyzer {
        TextAnalyzer::default().with_citation_scanner(CitationScanner::with_max_year(2026))
    }

    const SAMPLE: &str = "Deep learning models achieve strong accuracy. \
        The neural network architecture uses attention. \
        Training required large datasets from 2019 and 2021. \
        Evaluation shows the approach outperforms baselines from 2019!";

    #[test]
    fn test_empty_input_defaults() {
        let result = analyzer().analyze("");
        let m = &result.metrics;

        assert_eq!(m.word_count, 0);
        assert_eq!(m.sentence_count, 0);
        assert_eq!(m.unique_word_count, 0);
        assert_eq!(m.citation_count, 0);
        assert_eq!(m.reading_time_minutes, 0);
        // Defined numbers, never NaN
        assert_eq!(m.lexical_diversity_percent, 0.0);
        assert_eq!(m.avg_words_per_sentence, 0.0);
        assert_eq!(m.avg_word_length, 0.0);
        assert_eq!(m.grade_level, 0.0);
        assert!(result.top_terms.is_empty());
        assert!(result.citation_timeline.is_empty());
    }

    #[test]
    fn test_unique_never_exceeds_total() {
        for text in ["", SAMPLE, "word word word", "a b c d e f"] {
            let m = analyzer().analyze(text).metrics;
            assert!(m.unique_word_count <= m.word_count);
        }
    }

    #[test]
    fn test_lexical_diversity_bounds() {
        for text in ["", SAMPLE, "echo echo echo echo", "every token here differs wildly"] {
            let m = analyzer().analyze(text).metrics;
            assert!(m.lexical_diversity_percent >= 0.0);
            assert!(m.lexical_diversity_percent <= 100.0);
        }
    }

    #[test]
    fn test_citation_timeline_sorted_and_counted() {
        let result = analyzer().analyze("See 2023 once; 1999 appears in 1999 twice.");

        assert_eq!(
            result.citation_timeline,
            vec![
                CitationYear { year: 1999, count: 2 },
                CitationYear { year: 2023, count: 1 },
            ]
        );
        assert_eq!(result.metrics.citation_count, 3);
    }

    #[test]
    fn test_top_terms_limit() {
        let big: String = (0..500)
            .map(|i| format!("dictionaryterm{} ", i))
            .collect();
        let result = analyzer().analyze(&big);

        assert!(result.top_terms.len() <= 30);
        assert_eq!(result.top_terms.len(), 30);
    }

    #[test]
    fn test_sample_metrics() {
        let result = analyzer().analyze(SAMPLE);
        let m = &result.metrics;

        assert_eq!(m.sentence_count, 4);
        assert!(m.word_count > 0);
        assert!(m.technical_density_percent > 0.0);
        // 2019 twice, 2021 once
        assert_eq!(m.citation_count, 3);
        assert_eq!(result.citation_timeline[0].year, 2019);
        assert_eq!(result.citation_timeline[0].count, 2);
        assert_eq!(m.reading_time_minutes, 1);
    }

    #[test]
    fn test_idempotence() {
        let a = analyzer();
        let first = a.analyze(SAMPLE);
        let second = a.analyze(SAMPLE);

        assert_eq!(first, second);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let text: String = "dictionary ".repeat(201);
        let m = analyzer().analyze(&text).metrics;

        assert_eq!(m.word_count, 201);
        assert_eq!(m.reading_time_minutes, 2);
    }

    #[test]
    fn test_wire_field_names() {
        let result = analyzer().analyze(SAMPLE);
        let json = serde_json::to_value(&result).unwrap();

        let metrics = &json["metrics"];
        for field in [
            "wordCount",
            "sentenceCount",
            "avgWordsPerSentence",
            "avgWordLength",
            "uniqueWordCount",
            "lexicalDiversityPercent",
            "gradeLevel",
            "readingTimeMinutes",
            "technicalDensityPercent",
            "citationCount",
        ] {
            assert!(!metrics[field].is_null(), "missing field {}", field);
        }
        assert!(json["topTerms"].is_array());
        assert!(json["citationTimeline"].is_array());
    }
}

//! Vocabulary configuration for the analytics engine
//!
//! The stop-word set and technical vocabulary are immutable data injected at
//! analyzer construction, so tests can substitute alternate vocabularies.

use std::collections::HashSet;

/// Stop words excluded from the token stream. Includes academic boilerplate
/// ("paper", "proposed", "et", "al") on top of common English function words.
const STOP_WORDS: &[&str] = &[
    "the", "and", "of", "to", "a", "in", "is", "that", "for", "it", "as", "was",
    "with", "on", "by", "are", "be", "this", "an", "at", "from", "or", "which",
    "but", "not", "can", "has", "have", "we", "our", "their", "all", "also",
    "more", "one", "use", "used", "using", "based", "results", "paper",
    "proposed", "method", "system", "et", "al", "these", "such", "each",
    "other", "they", "than", "into", "were", "been", "being", "its", "may",
    "will", "would", "could", "should",
];

/// Domain vocabulary counted toward technical density.
const TECHNICAL_TERMS: &[&str] = &[
    "algorithm", "neural", "network", "machine", "learning", "deep", "model",
    "training", "dataset", "accuracy", "precision", "recall", "optimization",
    "classification", "regression", "detection", "architecture", "framework",
    "implementation", "evaluation", "performance", "analysis", "methodology",
];

/// Injected vocabulary for tokenization and technical-density scoring
#[derive(Debug, Clone)]
pub struct Lexicon {
    stop_words: HashSet<String>,
    technical_terms: HashSet<String>,
}

impl Lexicon {
    /// Create a lexicon from explicit word lists
    pub fn new<S: AsRef<str>>(stop_words: &[S], technical_terms: &[S]) -> Self {
        Self {
            stop_words: stop_words.iter().map(|w| w.as_ref().to_string()).collect(),
            technical_terms: technical_terms
                .iter()
                .map(|w| w.as_ref().to_string())
                .collect(),
        }
    }

    /// Check stop-word membership (expects an already-lowercased token)
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// Check technical-vocabulary membership (expects an already-lowercased token)
    pub fn is_technical(&self, token: &str) -> bool {
        self.technical_terms.contains(token)
    }

    /// Number of stop words
    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }

    /// Number of technical terms
    pub fn technical_term_count(&self) -> usize {
        self.technical_terms.len()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new(STOP_WORDS, TECHNICAL_TERMS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lexicon() {
        let lexicon = Lexicon::default();

        assert!(lexicon.is_stop_word("the"));
        assert!(lexicon.is_stop_word("proposed"));
        assert!(!lexicon.is_stop_word("transformer"));

        assert!(lexicon.is_technical("algorithm"));
        assert!(lexicon.is_technical("neural"));
        assert!(!lexicon.is_technical("banana"));
    }

    #[test]
    fn test_custom_lexicon() {
        let lexicon = Lexicon::new(&["foo"], &["quux"]);

        assert!(lexicon.is_stop_word("foo"));
        assert!(!lexicon.is_stop_word("the"));
        assert!(lexicon.is_technical("quux"));
        assert_eq!(lexicon.stop_word_count(), 1);
        assert_eq!(lexicon.technical_term_count(), 1);
    }
}

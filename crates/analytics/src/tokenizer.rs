//! Tokenization and segmentation primitives
//!
//! Produces the ephemeral lowercase token stream consumed by the frequency
//! and readability computations, plus the punctuation-based sentence split
//! and the vowel-run count used by the grade-level approximation.

use crate::lexicon::Lexicon;

/// Tokens at or below this length are discarded
const MIN_TOKEN_LEN: usize = 3;

/// Tokenizer over raw document text
#[derive(Debug, Clone)]
pub struct Tokenizer {
    lexicon: Lexicon,
}

impl Tokenizer {
    /// Create a tokenizer with the given vocabulary
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Access the underlying lexicon
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Produce the filtered lowercase token stream.
    ///
    /// Lowercases the text, strips every character outside `[a-z0-9\s]`
    /// (punctuation is deleted, not replaced, so "state-of-the-art" becomes
    /// one token), splits on whitespace runs, and drops tokens of length
    /// <= 3 or in the stop-word set.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
            .collect();

        cleaned
            .split_whitespace()
            .filter(|w| w.len() > MIN_TOKEN_LEN && !self.lexicon.is_stop_word(w))
            .map(|w| w.to_string())
            .collect()
    }

    /// Count tokens that belong to the technical vocabulary (with multiplicity)
    pub fn technical_count(&self, tokens: &[String]) -> usize {
        tokens.iter().filter(|t| self.lexicon.is_technical(t)).count()
    }
}

/// Count sentences in the raw (untokenized) text.
///
/// Splits on runs of `.`, `!`, `?` and discards whitespace-only fragments.
pub fn count_sentences(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count()
}

/// Count maximal runs of vowels (`aeiouy`, case-insensitive) across the
/// entire raw text. This is the coarse whole-document syllable approximation
/// the grade-level formula expects; it is intentionally not a per-word
/// syllable counter.
pub fn count_vowel_runs(text: &str) -> usize {
    let mut runs = 0;
    let mut in_run = false;

    for c in text.chars() {
        let is_vowel = matches!(
            c.to_ascii_lowercase(),
            'a' | 'e' | 'i' | 'o' | 'u' | 'y'
        );
        if is_vowel && !in_run {
            runs += 1;
        }
        in_run = is_vowel;
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer() -> Tokenizer {
        Tokenizer::new(Lexicon::default())
    }

    #[test]
    fn test_tokenize_lowercases_and_strips() {
        let tokens = tokenizer().tokenize("Neural-Networks; ACHIEVE 99.2% accuracy!");

        // Hyphen and punctuation are deleted in place
        assert!(tokens.contains(&"neuralnetworks".to_string()));
        assert!(tokens.contains(&"achieve".to_string()));
        assert!(tokens.contains(&"accuracy".to_string()));
        // "99.2%" collapses to "992", too short to survive
        assert!(!tokens.iter().any(|t| t.contains('9')));
    }

    #[test]
    fn test_tokenize_filters_short_and_stop_words() {
        let tokens = tokenizer().tokenize("the cat sat on the transformer architecture");

        assert_eq!(tokens, vec!["transformer", "architecture"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenizer().tokenize("").is_empty());
        assert!(tokenizer().tokenize("   \n\t ").is_empty());
    }

    #[test]
    fn test_count_sentences() {
        assert_eq!(count_sentences("One. Two! Three?"), 3);
        // Runs of terminators produce no empty sentences
        assert_eq!(count_sentences("Wait... what?!"), 2);
        assert_eq!(count_sentences(""), 0);
        assert_eq!(count_sentences("..."), 0);
        assert_eq!(count_sentences("no terminator at all"), 1);
    }

    #[test]
    fn test_count_vowel_runs() {
        assert_eq!(count_vowel_runs(""), 0);
        assert_eq!(count_vowel_runs("rhythm"), 1); // the "y"
        assert_eq!(count_vowel_runs("aba"), 2);
        assert_eq!(count_vowel_runs("queueing"), 1); // "ueuei" is a single run
        assert_eq!(count_vowel_runs("xyzzy"), 2);
    }

    #[test]
    fn test_technical_count() {
        let t = tokenizer();
        let tokens = t.tokenize("The neural network model uses a training algorithm");
        // neural, network, model, training, algorithm
        assert_eq!(t.technical_count(&tokens), 5);
    }
}

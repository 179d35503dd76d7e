//! Stop words filtering for text preprocessing.
//!
//! Stop words are common words ("the", "is", "at") that carry little
//! semantic weight and are removed before modeling.
//!
//! This module provides:
//! - The classic 179-word English list (`ENGLISH_STOP_WORDS`)
//! - `StopWordsFilter` for membership tests and filtering
//! - Loading a list from a one-word-per-line corpus file
//!
//! # Examples
//!
//! ```
//! use noisetext::text::stopwords::StopWordsFilter;
//!
//! let filter = StopWordsFilter::english();
//! let tokens = vec!["the", "quick", "brown", "fox"];
//! let filtered = filter.filter(&tokens);
//! assert_eq!(filtered, vec!["quick", "brown", "fox"]);
//! ```

use crate::error::{NoiseTextError, Result};
use std::collections::HashSet;
use std::path::Path;

/// Stop words filter that removes common words from token lists.
///
/// Matching is case-insensitive: words are stored lowercase and lookups
/// lowercase the query.
#[derive(Debug, Clone)]
pub struct StopWordsFilter {
    stop_words: HashSet<String>,
}

impl StopWordsFilter {
    /// Create a filter from custom stop words (lowercased on insert).
    ///
    /// # Examples
    ///
    /// ```
    /// use noisetext::text::stopwords::StopWordsFilter;
    ///
    /// let filter = StopWordsFilter::new(vec!["foo", "bar"]);
    /// assert_eq!(filter.filter(&["foo", "test", "BAR"]), vec!["test"]);
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = words
            .into_iter()
            .map(|s| s.as_ref().to_lowercase())
            .collect();

        Self { stop_words }
    }

    /// Create a filter with the built-in English stop words.
    #[must_use]
    pub fn english() -> Self {
        Self::new(ENGLISH_STOP_WORDS)
    }

    /// Load stop words from a corpus file with one word per line.
    ///
    /// Blank lines and surrounding whitespace are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseTextError::ResourceUnavailable`] if the file cannot be read.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|_| NoiseTextError::resource_unavailable("stopwords", path))?;

        let filter = Self::new(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        );
        log::debug!("loaded {} stop words from {}", filter.len(), path.display());
        Ok(filter)
    }

    /// Filter stop words out of `tokens`, preserving order and original case.
    pub fn filter<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .map(AsRef::as_ref)
            .filter(|t| !self.is_stop_word(t))
            .map(ToString::to_string)
            .collect()
    }

    /// Filter stop words out of owned tokens without re-allocating survivors.
    #[must_use]
    pub fn filter_owned(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|t| !self.is_stop_word(t))
            .collect()
    }

    /// Check if a word is a stop word (case-insensitive).
    ///
    /// ```
    /// use noisetext::text::stopwords::StopWordsFilter;
    ///
    /// let filter = StopWordsFilter::english();
    /// assert!(filter.is_stop_word("THE"));
    /// assert!(!filter.is_stop_word("classifier"));
    /// ```
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        if self.stop_words.contains(word) {
            return true;
        }
        word.chars().any(char::is_uppercase) && self.stop_words.contains(&word.to_lowercase())
    }

    /// Number of stop words in the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Whether the filter is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopWordsFilter {
    fn default() -> Self {
        Self::english()
    }
}

/// The classic English stop word list (179 words), including clitic
/// fragments such as "s", "t", "ll" and "don't".
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

#[cfg(test)]
#[path = "stopwords_tests.rs"]
mod tests;

//! Text cleaning pipeline for classification experiments.
//!
//! Each text goes through five steps:
//!
//! 1. sentence split, then Penn Treebank word tokenization
//! 2. keep tokens made only of alphabetic characters
//! 3. lowercase
//! 4. drop English stop words
//! 5. lemmatize (noun by default)
//!
//! # Examples
//!
//! ```
//! use noisetext::text::preprocess::{PreprocessConfig, TextPreprocessor};
//! use noisetext::text::resources::LinguisticResources;
//!
//! let resources = LinguisticResources::bundled();
//! let preprocessor = TextPreprocessor::new(&resources)
//!     .with_config(PreprocessConfig::default().with_keep_stopwords(true));
//!
//! let tokens = preprocessor.preprocess("The cats sat.").expect("preprocess");
//! assert_eq!(tokens, vec!["the", "cat", "sat"]);
//! ```

use super::lemmatize::{Lemmatizer, Pos};
use super::resources::LinguisticResources;
use crate::error::Result;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Pipeline knobs. The default reproduces the fixed five-step pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Part of speech used for lemmatization.
    pub pos: Pos,
    /// Skip the stop word step.
    pub keep_stopwords: bool,
    /// Minimum token length in characters, checked after lowercasing.
    pub min_token_len: usize,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            pos: Pos::Noun,
            keep_stopwords: false,
            min_token_len: 1,
        }
    }
}

impl PreprocessConfig {
    /// Set the lemmatization part of speech.
    #[must_use]
    pub fn with_pos(mut self, pos: Pos) -> Self {
        self.pos = pos;
        self
    }

    /// Keep or drop stop words.
    #[must_use]
    pub fn with_keep_stopwords(mut self, keep: bool) -> Self {
        self.keep_stopwords = keep;
        self
    }

    /// Set the minimum token length.
    #[must_use]
    pub fn with_min_token_len(mut self, len: usize) -> Self {
        self.min_token_len = len;
        self
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Runs the cleaning pipeline against a borrowed resource bundle.
#[derive(Debug, Clone, Copy)]
pub struct TextPreprocessor<'a> {
    resources: &'a LinguisticResources,
    config: PreprocessConfig,
}

impl<'a> TextPreprocessor<'a> {
    /// Preprocessor with the default config.
    #[must_use]
    pub fn new(resources: &'a LinguisticResources) -> Self {
        Self {
            resources,
            config: PreprocessConfig::default(),
        }
    }

    /// Replace the config.
    #[must_use]
    pub fn with_config(mut self, config: PreprocessConfig) -> Self {
        self.config = config;
        self
    }

    /// Current config.
    #[must_use]
    pub fn config(&self) -> &PreprocessConfig {
        &self.config
    }

    /// Clean one text into lemmatized content tokens.
    ///
    /// Empty input yields an empty vector. Token order is preserved.
    ///
    /// # Errors
    ///
    /// Infallible with the bundled tokenizer.
    pub fn preprocess(&self, text: &str) -> Result<Vec<String>> {
        let stopwords = self.resources.stopwords();
        let lemmatizer = self.resources.lemmatizer();

        let tokens = self
            .resources
            .tokenizer()
            .words(text)
            .into_iter()
            .filter(|t| !t.is_empty() && t.chars().all(char::is_alphabetic))
            .map(|t| t.to_lowercase())
            .filter(|t| t.chars().count() >= self.config.min_token_len)
            .filter(|t| self.config.keep_stopwords || !stopwords.is_stop_word(t))
            .map(|t| lemmatizer.lemmatize_pos(&t, self.config.pos))
            .collect();

        Ok(tokens)
    }

    /// Clean many texts, one output per input in the same order.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered.
    pub fn preprocess_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Result<Vec<Vec<String>>> {
        log::debug!("preprocessing batch of {} texts", texts.len());

        #[cfg(feature = "parallel")]
        let cleaned: Result<Vec<Vec<String>>> = texts
            .par_iter()
            .map(|t| self.preprocess(t.as_ref()))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let cleaned: Result<Vec<Vec<String>>> =
            texts.iter().map(|t| self.preprocess(t.as_ref())).collect();

        cleaned
    }
}

/// Clean `text` with the default pipeline.
///
/// ```
/// use noisetext::text::preprocess::preprocess_text;
/// use noisetext::text::resources::LinguisticResources;
///
/// let resources = LinguisticResources::bundled();
/// let tokens = preprocess_text("The cats are running quickly!", &resources).unwrap();
/// assert_eq!(tokens[0], "cat");
/// assert!(tokens[1].starts_with("run"));
/// ```
///
/// # Errors
///
/// See [`TextPreprocessor::preprocess`].
pub fn preprocess_text(text: &str, resources: &LinguisticResources) -> Result<Vec<String>> {
    TextPreprocessor::new(resources).preprocess(text)
}

#[cfg(test)]
#[path = "preprocess_tests.rs"]
mod tests;

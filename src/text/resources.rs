//! Linguistic resources for preprocessing.
//!
//! A [`LinguisticResources`] bundle holds everything the cleaning pipeline
//! needs: tokenizer rules, the stop word set and the lemmatizer lexicon.
//! Callers build it once and pass it by reference; nothing is loaded
//! implicitly or kept in global state.
//!
//! Resources come from one of two places:
//!
//! - [`LinguisticResources::bundled`]: compiled into the crate, always available
//! - [`LinguisticResources::load`]: an NLTK-data style directory
//!
//! ```text
//! <root>/corpora/stopwords/english      one stop word per line
//! <root>/corpora/wordnet/index.noun     WordNet index files (noun, verb, adj, adv)
//! <root>/corpora/wordnet/noun.exc       WordNet exception lists (optional)
//! ```

use super::lemmatize::WordNetLemmatizer;
use super::stopwords::StopWordsFilter;
use super::tokenize::WordTokenizer;
use crate::error::{NoiseTextError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where to look for linguistic resources.
///
/// # Examples
///
/// ```
/// use noisetext::text::resources::ResourceConfig;
///
/// let config = ResourceConfig::default()
///     .with_search_path("/usr/share/nltk_data")
///     .with_bundled_fallback(true);
/// assert_eq!(config.search_paths.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Directories tried in order.
    #[serde(default)]
    pub search_paths: Vec<PathBuf>,
    /// Use the bundled resources when no search path loads.
    #[serde(default)]
    pub allow_bundled_fallback: bool,
}

impl ResourceConfig {
    /// Append a search path.
    #[must_use]
    pub fn with_search_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.search_paths.push(path.into());
        self
    }

    /// Enable or disable the bundled fallback.
    #[must_use]
    pub fn with_bundled_fallback(mut self, allow: bool) -> Self {
        self.allow_bundled_fallback = allow;
        self
    }

    /// Parse a config from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseTextError::Serialization`] on malformed JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Tokenizer, stop words and lemmatizer, loaded together.
#[derive(Debug, Clone)]
pub struct LinguisticResources {
    tokenizer: WordTokenizer,
    stopwords: StopWordsFilter,
    lemmatizer: WordNetLemmatizer,
}

impl LinguisticResources {
    /// Assemble a bundle from parts.
    #[must_use]
    pub fn new(
        tokenizer: WordTokenizer,
        stopwords: StopWordsFilter,
        lemmatizer: WordNetLemmatizer,
    ) -> Self {
        Self {
            tokenizer,
            stopwords,
            lemmatizer,
        }
    }

    /// Resources compiled into the crate.
    ///
    /// The stop word list is complete, but the lexicon is a compact English
    /// vocabulary of a few hundred lemmas per part of speech. Regular
    /// plurals of words outside it (e.g. "sentiments") are left unchanged;
    /// use [`LinguisticResources::load`] with a WordNet database for full
    /// coverage.
    #[must_use]
    pub fn bundled() -> Self {
        Self::new(
            WordTokenizer::new(),
            StopWordsFilter::english(),
            WordNetLemmatizer::bundled(),
        )
    }

    /// Load resources from an NLTK-data style directory.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseTextError::ResourceUnavailable`] when `root`, the
    /// stop word list or any WordNet index file is missing, or when an
    /// exception list exists but cannot be read.
    pub fn load(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(NoiseTextError::resource_unavailable("nltk_data", root));
        }

        let corpora = root.join("corpora");
        let stopwords = StopWordsFilter::from_file(&corpora.join("stopwords").join("english"))
            .map_err(|_| {
                NoiseTextError::resource_unavailable(
                    "stopwords/english",
                    &corpora.join("stopwords").join("english"),
                )
            })?;
        let lemmatizer = WordNetLemmatizer::from_wordnet_dir(&corpora.join("wordnet"))?;

        log::debug!(
            "loaded linguistic resources from {} ({} stop words)",
            root.display(),
            stopwords.len()
        );
        Ok(Self::new(WordTokenizer::new(), stopwords, lemmatizer))
    }

    /// Load from the first search path that works.
    ///
    /// # Errors
    ///
    /// Returns the last load error (or a [`NoiseTextError::ResourceUnavailable`]
    /// when no paths are configured), unless the bundled fallback is allowed.
    pub fn discover(config: &ResourceConfig) -> Result<Self> {
        let mut last_error = None;

        for path in &config.search_paths {
            match Self::load(path) {
                Ok(resources) => return Ok(resources),
                Err(e) => {
                    log::debug!("no usable resources at {}: {e}", path.display());
                    last_error = Some(e);
                }
            }
        }

        if config.allow_bundled_fallback {
            log::warn!("no linguistic resources found on the search path, using bundled data");
            return Ok(Self::bundled());
        }

        Err(last_error.unwrap_or_else(|| NoiseTextError::ResourceUnavailable {
            resource: "nltk_data".to_string(),
            path: "<no search paths configured>".to_string(),
        }))
    }

    /// The word tokenizer.
    #[must_use]
    pub fn tokenizer(&self) -> &WordTokenizer {
        &self.tokenizer
    }

    /// The stop word set.
    #[must_use]
    pub fn stopwords(&self) -> &StopWordsFilter {
        &self.stopwords
    }

    /// The lemmatizer.
    #[must_use]
    pub fn lemmatizer(&self) -> &WordNetLemmatizer {
        &self.lemmatizer
    }
}

//! Text processing for classification experiments.
//!
//! - [`tokenize`]: sentence and Penn Treebank word tokenization
//! - [`stopwords`]: English stop word filtering
//! - [`lemmatize`]: WordNet-style morphological lemmatization
//! - [`resources`]: the linguistic resource bundle (stopwords + lexicon)
//! - [`preprocess`]: the full cleaning pipeline
//!
//! # Example
//!
//! ```
//! use noisetext::text::preprocess::preprocess_text;
//! use noisetext::text::resources::LinguisticResources;
//!
//! let resources = LinguisticResources::bundled();
//! let tokens = preprocess_text("The cats are sitting on the mats.", &resources)
//!     .expect("bundled resources are always available");
//! assert_eq!(tokens, vec!["cat", "sitting", "mat"]);
//! ```

pub mod lemmatize;
pub mod preprocess;
pub mod resources;
pub mod stopwords;
pub mod tokenize;

use crate::error::Result;

/// Trait for splitting text into tokens.
pub trait Tokenizer {
    /// Tokenize `text` into a sequence of string tokens.
    ///
    /// # Errors
    ///
    /// Implementations may fail on input they cannot handle.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}

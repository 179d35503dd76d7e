//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use noisetext::prelude::*;
//! ```

pub use crate::error::{NoiseTextError, Result};
pub use crate::synthetic::{
    add_gaussian_noise, add_random_noise, augment_corpus, CodePointPolicy, NoiseConfig,
    NoiseInjector,
};
pub use crate::text::lemmatize::{Lemmatizer, Pos, WordNetLemmatizer};
pub use crate::text::preprocess::{preprocess_text, PreprocessConfig, TextPreprocessor};
pub use crate::text::resources::{LinguisticResources, ResourceConfig};
pub use crate::text::stopwords::StopWordsFilter;
pub use crate::text::tokenize::word_tokenize;
pub use crate::text::Tokenizer;
pub use crate::viz::{get_plot_model, ChartConfig, MetricChart, MetricChartBuilder};

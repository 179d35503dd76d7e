//! noisetext: noise injection, text cleaning and metric charts for
//! text-classification experiments.
//!
//! The crate covers three steps of a robustness study:
//!
//! 1. perturb inputs with character-level noise
//! 2. clean raw text into lemmatized content tokens
//! 3. compare trained models on F1, recall and precision
//!
//! # Quick Start
//!
//! ```
//! use noisetext::prelude::*;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let noisy = add_random_noise(&mut rng, "the cats are running", 0.1).unwrap();
//! assert_eq!(noisy.chars().count(), 20);
//!
//! let resources = LinguisticResources::bundled();
//! let tokens = preprocess_text("The cats are running quickly!", &resources).unwrap();
//! assert_eq!(tokens[0], "cat");
//!
//! let chart = get_plot_model(&["clean", "noisy"], &[0.9, 0.8], &[0.7, 0.6], &[0.5, 0.4], None)
//!     .unwrap();
//! assert_eq!(chart.x_range, (0.0, 1.0));
//! ```
//!
//! # Modules
//!
//! - [`synthetic`]: Gaussian and random-substitution character noise
//! - [`text`]: tokenization, stop words, lemmatization, the cleaning pipeline
//! - [`viz`]: grouped bar chart of classifier metrics
//! - [`error`]: the crate error type

pub mod error;
pub mod prelude;
pub mod synthetic;
pub mod text;
pub mod viz;

pub use error::{NoiseTextError, Result};

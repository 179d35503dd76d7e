//! Synthetic noise for text-classification experiments.
//!
//! Perturbs text samples at the character level, either to probe a
//! classifier's robustness or to augment a training set.
//!
//! # Quick Start
//!
//! ```
//! use noisetext::synthetic::{augment_corpus, NoiseConfig, NoiseInjector};
//!
//! // One sample at a time, with a reproducible random source
//! let mut injector = NoiseInjector::new(NoiseConfig::random(0.2).with_seed(42));
//! let noisy = injector.apply("a perfectly clean sentence").expect("level <= 1");
//! assert_eq!(noisy.chars().count(), 26);
//!
//! // A whole corpus, reproducible regardless of thread count
//! let corpus = ["good movie", "bad movie"];
//! let augmented = augment_corpus(&corpus, &NoiseConfig::gaussian(0.0, 2.0).with_seed(1))
//!     .expect("valid params");
//! assert_eq!(augmented.len(), 2);
//! ```
//!
//! # Noise models
//!
//! - **Gaussian** ([`noise::add_gaussian_noise`]): per-character code-point
//!   shift by a truncated normal sample. See [`CodePointPolicy`] for how
//!   out-of-range results are handled.
//! - **Random substitution** ([`noise::add_random_noise`]): a fraction of
//!   distinct positions overwritten with random ASCII letters.

mod config;
mod corpus;
pub mod noise;

pub use config::{CodePointPolicy, GaussianNoise, NoiseConfig, NoiseKind};
pub use corpus::augment_corpus;
pub use noise::{add_gaussian_noise, add_gaussian_noise_with_policy, add_random_noise, NoiseInjector};

//! Noise configuration types.
//!
//! All configs are plain serde structs with `Default` and `with_*` builders,
//! so an experiment can keep its noise settings next to its results as JSON.

use super::noise::{add_gaussian_noise_with_policy, add_random_noise};
use crate::error::{NoiseTextError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// What to do when Gaussian perturbation lands outside the valid `char` range.
///
/// A Rust `char` is a Unicode scalar value: `0..=0x10FFFF` minus the
/// surrogate block `0xD800..=0xDFFF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodePointPolicy {
    /// Clamp into `0..=0x10FFFF`; surrogates move to `0xD7FF` or `0xE000`,
    /// whichever is nearer.
    #[default]
    Clamp,
    /// Clamp every result into printable ASCII (`0x20..=0x7E`).
    PrintableAscii,
    /// Fail with [`NoiseTextError::RangeOverflow`].
    Reject,
}

impl CodePointPolicy {
    /// Map a perturbed code point to a `char` under this policy.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseTextError::RangeOverflow`] under [`CodePointPolicy::Reject`]
    /// when `code_point` is not a Unicode scalar value.
    pub fn resolve(self, position: usize, code_point: i64) -> Result<char> {
        let overflow = || NoiseTextError::RangeOverflow {
            position,
            code_point,
        };

        let resolved = match self {
            CodePointPolicy::Reject => {
                return u32::try_from(code_point)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(overflow);
            }
            CodePointPolicy::Clamp => match code_point.clamp(0, 0x10_FFFF) {
                0xD800..=0xDBFF => 0xD7FF,
                0xDC00..=0xDFFF => 0xE000,
                cp => cp,
            },
            CodePointPolicy::PrintableAscii => code_point.clamp(0x20, 0x7E),
        };

        if resolved != code_point {
            log::trace!("clamped code point {code_point} at position {position} to {resolved}");
        }

        u32::try_from(resolved)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(overflow)
    }
}

/// Parameters of the Gaussian code-point noise model.
///
/// # Examples
///
/// ```
/// use noisetext::synthetic::GaussianNoise;
///
/// let noise = GaussianNoise::default();
/// assert_eq!(noise.mean, 0.0);
/// assert_eq!(noise.std_dev, 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaussianNoise {
    /// Mean of the per-character noise distribution.
    pub mean: f64,
    /// Standard deviation of the per-character noise distribution.
    pub std_dev: f64,
    /// Out-of-range handling.
    pub policy: CodePointPolicy,
}

impl Default for GaussianNoise {
    fn default() -> Self {
        Self {
            mean: 0.0,
            std_dev: 0.1,
            policy: CodePointPolicy::Clamp,
        }
    }
}

impl GaussianNoise {
    /// Create Gaussian noise parameters with the default policy.
    #[must_use]
    pub fn new(mean: f64, std_dev: f64) -> Self {
        Self {
            mean,
            std_dev,
            ..Self::default()
        }
    }

    /// Set the out-of-range policy.
    #[must_use]
    pub fn with_policy(mut self, policy: CodePointPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Which noise model to apply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NoiseKind {
    /// Per-character Gaussian code-point perturbation.
    Gaussian(GaussianNoise),
    /// Substitute a fraction of characters with random ASCII letters.
    Random {
        /// Fraction of characters to corrupt, nominally in `[0, 1]`.
        noise_level: f64,
    },
}

impl Default for NoiseKind {
    fn default() -> Self {
        NoiseKind::Gaussian(GaussianNoise::default())
    }
}

impl NoiseKind {
    /// Apply this noise model to `text`, drawing randomness from `rng`.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`add_gaussian_noise_with_policy`] and
    /// [`add_random_noise`].
    pub fn apply<R: Rng + ?Sized>(&self, rng: &mut R, text: &str) -> Result<String> {
        match *self {
            NoiseKind::Gaussian(g) => {
                add_gaussian_noise_with_policy(rng, text, g.mean, g.std_dev, g.policy)
            }
            NoiseKind::Random { noise_level } => add_random_noise(rng, text, noise_level),
        }
    }
}

/// Noise injection configuration: the model plus an optional seed.
///
/// The model's fields are flattened into the config, so the JSON form is
/// `{"kind": "random", "noise_level": 0.2, "seed": 7}`.
///
/// # Examples
///
/// ```
/// use noisetext::synthetic::{NoiseConfig, NoiseKind};
///
/// let config = NoiseConfig::random(0.2).with_seed(7);
/// let json = config.to_json().expect("serializes");
/// let back = NoiseConfig::from_json(&json).expect("parses");
/// assert_eq!(back, config);
/// assert!(matches!(back.kind, NoiseKind::Random { .. }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NoiseConfig {
    /// Noise model.
    #[serde(flatten)]
    pub kind: NoiseKind,
    /// Seed for reproducible runs; entropy-seeded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl NoiseConfig {
    /// Gaussian noise with the given mean and standard deviation.
    #[must_use]
    pub fn gaussian(mean: f64, std_dev: f64) -> Self {
        Self {
            kind: NoiseKind::Gaussian(GaussianNoise::new(mean, std_dev)),
            seed: None,
        }
    }

    /// Random letter substitution at the given level.
    #[must_use]
    pub fn random(noise_level: f64) -> Self {
        Self {
            kind: NoiseKind::Random { noise_level },
            seed: None,
        }
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
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

    /// Serialize the config to pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseTextError::Serialization`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

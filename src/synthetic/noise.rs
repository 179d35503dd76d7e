//! Character-level noise injection.
//!
//! Two noise models for robustness testing and augmentation of text
//! classifiers:
//!
//! 1. **Gaussian**: every character's code point is shifted by the truncated
//!    value of an independent `N(mean, std_dev)` sample.
//! 2. **Random substitution**: a fixed fraction of distinct positions is
//!    overwritten with random ASCII letters.
//!
//! Randomness always comes from the caller's `Rng`. Seed it for
//! reproducible experiments.
//!
//! # Example
//!
//! ```
//! use noisetext::synthetic::noise::{add_gaussian_noise, add_random_noise};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let noisy = add_random_noise(&mut rng, "hello world", 0.5).expect("level <= 1");
//! assert_eq!(noisy.chars().count(), 11);
//!
//! let same = add_gaussian_noise(&mut rng, "hello", 0.0, 0.0).expect("valid params");
//! assert_eq!(same, "hello");
//! ```

use super::config::{CodePointPolicy, NoiseConfig};
use crate::error::{NoiseTextError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The 52-symbol alphabet used for substitutions.
pub const ASCII_LETTERS: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Sample `N(mean, std_dev)` with the Box-Muller transform.
fn sample_normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.gen_range(f64::EPSILON..1.0);
    let u2: f64 = rng.gen_range(0.0..1.0);
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + std_dev * z
}

fn validate_gaussian(mean: f64, std_dev: f64) -> Result<()> {
    if !mean.is_finite() {
        return Err(NoiseTextError::invalid_argument("mean", mean, "a finite number"));
    }
    if !std_dev.is_finite() || std_dev < 0.0 {
        return Err(NoiseTextError::invalid_argument(
            "std_dev",
            std_dev,
            "a finite number >= 0",
        ));
    }
    Ok(())
}

/// Add Gaussian code-point noise to `text` using [`CodePointPolicy::Clamp`].
///
/// Output has exactly as many characters as the input. With `mean == 0`
/// and `std_dev == 0` the output equals the input.
///
/// # Errors
///
/// Returns [`NoiseTextError::InvalidArgument`] if `mean` is not finite or
/// `std_dev` is negative or not finite.
pub fn add_gaussian_noise<R: Rng + ?Sized>(
    rng: &mut R,
    text: &str,
    mean: f64,
    std_dev: f64,
) -> Result<String> {
    add_gaussian_noise_with_policy(rng, text, mean, std_dev, CodePointPolicy::default())
}

/// Add Gaussian code-point noise to `text` with an explicit overflow policy.
///
/// Each sample is truncated toward zero before it is added, so `0.9` and
/// `-0.9` both leave the character untouched.
///
/// # Errors
///
/// Returns [`NoiseTextError::InvalidArgument`] on bad distribution
/// parameters, or [`NoiseTextError::RangeOverflow`] under
/// [`CodePointPolicy::Reject`].
pub fn add_gaussian_noise_with_policy<R: Rng + ?Sized>(
    rng: &mut R,
    text: &str,
    mean: f64,
    std_dev: f64,
    policy: CodePointPolicy,
) -> Result<String> {
    validate_gaussian(mean, std_dev)?;

    text.chars()
        .enumerate()
        .map(|(position, c)| {
            let noise = sample_normal(rng, mean, std_dev);
            // `as` saturates for out-of-range floats
            let shift = noise.trunc() as i64;
            let code_point = i64::from(u32::from(c)).saturating_add(shift);
            policy.resolve(position, code_point)
        })
        .collect()
}

/// Number of positions to corrupt: `trunc(len * noise_level)`.
fn sample_size(len: usize, noise_level: f64) -> Result<usize> {
    if !noise_level.is_finite() {
        return Err(NoiseTextError::invalid_argument(
            "noise_level",
            noise_level,
            "a finite number",
        ));
    }

    let raw = (len as f64 * noise_level).trunc();
    if raw < 0.0 {
        return Err(NoiseTextError::invalid_argument(
            "noise_level",
            noise_level,
            "a non-negative sample size",
        ));
    }
    if raw > len as f64 {
        return Err(NoiseTextError::invalid_argument(
            "noise_level",
            noise_level,
            format!("sample size ({raw}) <= population ({len})"),
        ));
    }

    Ok(raw as usize)
}

/// Replace `trunc(len * noise_level)` distinct characters with random ASCII letters.
///
/// When the computed sample size is zero the input is returned unchanged and
/// no randomness is consumed.
///
/// # Errors
///
/// Returns [`NoiseTextError::InvalidArgument`] when the sample size exceeds
/// the text length, is negative, or `noise_level` is not finite. The level is
/// never clamped.
///
/// # Example
///
/// ```
/// use noisetext::synthetic::noise::add_random_noise;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// assert_eq!(add_random_noise(&mut rng, "abc", 0.0).expect("ok"), "abc");
/// assert!(add_random_noise(&mut rng, "abc", 2.0).is_err());
/// ```
pub fn add_random_noise<R: Rng + ?Sized>(
    rng: &mut R,
    text: &str,
    noise_level: f64,
) -> Result<String> {
    let len = text.chars().count();
    let noise_len = sample_size(len, noise_level)?;

    if noise_len == 0 {
        return Ok(text.to_string());
    }

    let mut noisy: Vec<char> = text.chars().collect();
    for idx in rand::seq::index::sample(rng, len, noise_len) {
        let letter = ASCII_LETTERS[rng.gen_range(0..ASCII_LETTERS.len())];
        noisy[idx] = char::from(letter);
    }

    Ok(noisy.into_iter().collect())
}

/// Stateful noise injector owning its random source.
///
/// # Example
///
/// ```
/// use noisetext::synthetic::{NoiseConfig, NoiseInjector};
///
/// let mut a = NoiseInjector::new(NoiseConfig::random(0.3).with_seed(9));
/// let mut b = NoiseInjector::new(NoiseConfig::random(0.3).with_seed(9));
/// assert_eq!(
///     a.apply("reproducible").expect("ok"),
///     b.apply("reproducible").expect("ok"),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct NoiseInjector {
    config: NoiseConfig,
    rng: StdRng,
}

impl Default for NoiseInjector {
    fn default() -> Self {
        Self::new(NoiseConfig::default())
    }
}

impl NoiseInjector {
    /// Create an injector, seeding from `config.seed` or from entropy.
    #[must_use]
    pub fn new(config: NoiseConfig) -> Self {
        let rng = match config.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// The configuration this injector was built from.
    #[must_use]
    pub fn config(&self) -> &NoiseConfig {
        &self.config
    }

    /// Apply the configured noise model.
    ///
    /// # Errors
    ///
    /// See [`NoiseKind::apply`](super::NoiseKind::apply).
    pub fn apply(&mut self, text: &str) -> Result<String> {
        self.config.kind.apply(&mut self.rng, text)
    }

    /// Apply Gaussian noise with explicit parameters.
    ///
    /// # Errors
    ///
    /// See [`add_gaussian_noise`].
    pub fn gaussian(&mut self, text: &str, mean: f64, std_dev: f64) -> Result<String> {
        add_gaussian_noise(&mut self.rng, text, mean, std_dev)
    }

    /// Apply random substitution with an explicit level.
    ///
    /// # Errors
    ///
    /// See [`add_random_noise`].
    pub fn random(&mut self, text: &str, noise_level: f64) -> Result<String> {
        add_random_noise(&mut self.rng, text, noise_level)
    }
}

#[cfg(test)]
#[path = "noise_tests.rs"]
mod tests;

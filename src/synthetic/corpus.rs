//! Batch noise injection over a corpus.

use super::config::NoiseConfig;
use crate::error::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Apply `config.kind` to every text in `texts`.
///
/// Sample `k` draws from its own `StdRng` seeded with `seed + k`, so the
/// result depends only on the seed and the input, never on how the work is
/// scheduled across threads. Without a seed in `config` a base seed is drawn
/// from entropy.
///
/// # Errors
///
/// Returns the first error produced by any sample.
///
/// # Example
///
/// ```
/// use noisetext::synthetic::{augment_corpus, NoiseConfig};
///
/// let texts = ["first review", "second review"];
/// let config = NoiseConfig::random(0.5).with_seed(10);
/// let a = augment_corpus(&texts, &config).expect("ok");
/// let b = augment_corpus(&texts, &config).expect("ok");
/// assert_eq!(a, b);
/// ```
pub fn augment_corpus<S>(texts: &[S], config: &NoiseConfig) -> Result<Vec<String>>
where
    S: AsRef<str> + Sync,
{
    let base_seed = config.seed.unwrap_or_else(rand::random);
    log::debug!(
        "augmenting {} samples with {:?} (base seed {base_seed})",
        texts.len(),
        config.kind
    );

    let augment_one = |(k, text): (usize, &S)| {
        let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(k as u64));
        config.kind.apply(&mut rng, text.as_ref())
    };

    #[cfg(feature = "parallel")]
    let augmented: Result<Vec<String>> = {
        use rayon::prelude::*;
        texts.par_iter().enumerate().map(augment_one).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let augmented: Result<Vec<String>> = texts.iter().enumerate().map(augment_one).collect();

    augmented
}

//! Injectable noise sources.
//!
//! ACT-R perturbs activations with logistic noise. The same source decides
//! coin flips: its distribution is symmetric around zero, so the sign of one
//! sample is an unbiased boolean.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of zero-centred noise.
pub trait NoiseSource {
    /// Draw one sample with the given scale. Positive and negative results
    /// must be equally likely.
    fn noise(&mut self, scale: f64) -> f64;

    /// Fair coin derived from the sign of one sample.
    fn coin(&mut self, scale: f64) -> bool {
        self.noise(scale) > 0.0
    }
}

impl<N: NoiseSource + ?Sized> NoiseSource for Box<N> {
    fn noise(&mut self, scale: f64) -> f64 {
        (**self).noise(scale)
    }
}

/// Logistic noise `s · ln((1 - p) / p)` with `p ~ U(0.001, 0.999)`.
#[derive(Debug, Clone)]
pub struct LogisticNoise<R = StdRng> {
    rng: R,
}

impl<R: Rng> LogisticNoise<R> {
    /// Wrap an existing RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl LogisticNoise<StdRng> {
    /// Seed from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic noise for reproducible runs.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is present, entropy otherwise.
    #[must_use]
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl<R: Rng> NoiseSource for LogisticNoise<R> {
    fn noise(&mut self, scale: f64) -> f64 {
        let p: f64 = self.rng.gen_range(0.001..0.999);
        scale * ((1.0 - p) / p).ln()
    }
}

/// Always returns the same value, whatever the scale.
///
/// Drives deterministic tests and scripted openings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedNoise(pub f64);

impl NoiseSource for FixedNoise {
    fn noise(&mut self, _scale: f64) -> f64 {
        self.0
    }
}

/// A scripted sequence of samples, repeating the last one when exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedNoise {
    samples: Vec<f64>,
    cursor: usize,
}

impl ScriptedNoise {
    /// Create a script from samples in draw order.
    #[must_use]
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples, cursor: 0 }
    }
}

impl NoiseSource for ScriptedNoise {
    fn noise(&mut self, _scale: f64) -> f64 {
        let Some(&last) = self.samples.last() else {
            return 0.0;
        };
        let sample = self.samples.get(self.cursor).copied().unwrap_or(last);
        self.cursor += 1;
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logistic_noise_is_bounded_by_scale() {
        let mut noise = LogisticNoise::seeded(7);
        // ln(0.999 / 0.001) ≈ 6.9
        for _ in 0..1_000 {
            let n = noise.noise(0.25);
            assert!(n.abs() < 0.25 * 7.0);
        }
    }

    #[test]
    fn logistic_coin_is_roughly_fair() {
        let mut noise = LogisticNoise::seeded(42);
        let heads = (0..10_000).filter(|_| noise.coin(1.0)).count();
        assert!((4_700..=5_300).contains(&heads), "heads = {heads}");
    }

    #[test]
    fn seeded_noise_is_reproducible() {
        let mut a = LogisticNoise::seeded(3);
        let mut b = LogisticNoise::seeded(3);
        for _ in 0..10 {
            assert_eq!(a.noise(1.0).to_bits(), b.noise(1.0).to_bits());
        }
    }

    #[test]
    fn scripted_noise_repeats_last_sample() {
        let mut script = ScriptedNoise::new(vec![1.0, -1.0]);
        assert_eq!(script.noise(1.0), 1.0);
        assert_eq!(script.noise(1.0), -1.0);
        assert_eq!(script.noise(1.0), -1.0);
        assert_eq!(ScriptedNoise::default().noise(1.0), 0.0);
    }

    #[test]
    fn fixed_noise_decides_coin() {
        assert!(FixedNoise(1.0).coin(1.0));
        assert!(!FixedNoise(-1.0).coin(1.0));
    }
}

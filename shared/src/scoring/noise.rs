//! Randomness injected into scoring and forecasting
//!
//! Every random draw the engine makes goes through [`NoiseSource`], so tests
//! can pin the noise while production uses a seedable ChaCha stream.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of bounded uniform noise
pub trait NoiseSource {
    /// Draw a value from `[low, high)`
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

/// Noise drawn from any `rand` generator
#[derive(Debug, Clone)]
pub struct RandomNoise<R> {
    rng: R,
}

impl<R: Rng> RandomNoise<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomNoise<ChaCha8Rng> {
    /// Deterministic noise stream for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> NoiseSource for RandomNoise<R> {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if low < high {
            self.rng.gen_range(low..high)
        } else {
            low
        }
    }
}

/// Always returns the centre of the requested range.
///
/// Additive noise becomes 0, the tornado multiplier becomes 1.0 and forecast
/// perturbations vanish.
#[derive(Debug, Clone, Copy, Default)]
pub struct Midpoint;

impl NoiseSource for Midpoint {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        (low + high) / 2.0
    }
}

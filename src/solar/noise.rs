//! Injectable randomness for the sunspot waveform.
//!
//! The sunspot sample carries a uniform noise term; isolating it behind a
//! trait lets production draw from a real generator while tests run with a
//! fixed seed or no noise at all.

use parking_lot::Mutex;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of symmetric uniform noise.
pub trait NoiseSource: Send + Sync {
    /// Draw a sample uniformly from `[-half_width, +half_width]`.
    fn sample(&self, half_width: f64) -> f64;
}

/// Thread-local OS-seeded generator for production use.
#[derive(Debug, Default)]
pub struct ThreadRngNoise;

impl NoiseSource for ThreadRngNoise {
    fn sample(&self, half_width: f64) -> f64 {
        if half_width <= 0.0 {
            return 0.0;
        }
        rand::thread_rng().gen_range(-half_width..=half_width)
    }
}

/// Seedable generator for reproducible runs.
pub struct SeededNoise {
    rng: Mutex<ChaCha8Rng>,
}

impl SeededNoise {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl NoiseSource for SeededNoise {
    fn sample(&self, half_width: f64) -> f64 {
        if half_width <= 0.0 {
            return 0.0;
        }
        self.rng.lock().gen_range(-half_width..=half_width)
    }
}

/// No-op source; makes the whole pipeline deterministic.
#[derive(Debug, Default)]
pub struct ZeroNoise;

impl NoiseSource for ZeroNoise {
    fn sample(&self, _half_width: f64) -> f64 {
        0.0
    }
}

//! Randomness seam for the simulated activity switch.
//!
//! The simulator never talks to a random number generator directly; it draws
//! through [`ActivitySampler`] so tests can substitute a deterministic
//! source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the random draws the simulator makes on each tick.
pub trait ActivitySampler: Send + 'static {
    /// Uniform value in `[0, 1)` deciding whether the activity switches.
    fn switch_roll(&mut self) -> f64;

    /// Uniform index in `[0, len)` choosing the replacement activity.
    ///
    /// `len` must be greater than zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Production sampler backed by a [`StdRng`].
pub struct RngSampler {
    rng: StdRng,
}

impl RngSampler {
    /// Sampler seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Sampler with a fixed seed, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RngSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivitySampler for RngSampler {
    fn switch_roll(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

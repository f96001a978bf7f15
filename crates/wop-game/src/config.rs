//! Configuration for a game session.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for rolls and interactive sessions.
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// RNG seed for reproducible rolls; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Set a fixed RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the RNG: seeded when a seed is set, OS entropy otherwise.
    pub fn build_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

//! Where secret numbers come from.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of secret numbers.
///
/// `draw(max)` must return a value in `1..=max`.
pub trait SecretSource {
    fn draw(&mut self, max: u32) -> u32;
}

/// Uniform draws from any `rand` generator.
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Seeded when `seed` is given, otherwise seeded from the OS.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng)
    }
}

impl<R: Rng> SecretSource for RngSource<R> {
    fn draw(&mut self, max: u32) -> u32 {
        self.rng.gen_range(1..=max.max(1))
    }
}

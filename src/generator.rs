//! Random sources for color generation.
//!
//! [`generate`] uses the calling thread's generator and is fine for one-off
//! colors. [`Generator`] is a seedable handle that is safe to share between
//! threads and reproducible when built with [`Generator::with_seed`].

use std::sync::{Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::{SeedableRng, rngs::StdRng};

use crate::color::Color;
use crate::options::Options;
use crate::resolve::generate_with;

/// Generate one color from the thread-local generator.
pub fn generate(options: &Options) -> Color {
    generate_with(&mut rand::rng(), options)
}

/// A seeded generator that can be shared between threads.
#[derive(Debug)]
pub struct Generator {
    rng: Mutex<StdRng>,
}

impl Generator {
    /// Seed from the system clock's nanoseconds.
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        log::debug!("seeding color generator from clock: {seed}");
        Self::with_seed(seed)
    }

    /// Same seed, same sequence of colors.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn generate(&self, options: &Options) -> Color {
        // A poisoned lock still holds a valid generator state.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        generate_with(&mut *rng, options)
    }

    /// Generate `count` colors under a single lock.
    pub fn generate_many(&self, options: &Options, count: usize) -> Vec<Color> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        (0..count).map(|_| generate_with(&mut *rng, options)).collect()
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

//! Randomness sources for template selection

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

use crate::traits::RandomSource;

/// Thread-local RNG, the production default
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl ThreadRngSource {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRngSource {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Reproducible sequence from a fixed seed
#[derive(Debug)]
pub struct SeededSource {
    rng: Mutex<StdRng>,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededSource {
    fn pick_index(&self, len: usize) -> usize {
        // A poisoned lock still holds a usable RNG
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..len)
    }
}

/// Either source, chosen at startup from configuration
#[derive(Debug)]
pub enum ConfiguredSource {
    Thread(ThreadRngSource),
    Seeded(SeededSource),
}

impl ConfiguredSource {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => ConfiguredSource::Seeded(SeededSource::new(seed)),
            None => ConfiguredSource::Thread(ThreadRngSource::new()),
        }
    }
}

impl RandomSource for ConfiguredSource {
    fn pick_index(&self, len: usize) -> usize {
        match self {
            ConfiguredSource::Thread(source) => source.pick_index(len),
            ConfiguredSource::Seeded(source) => source.pick_index(len),
        }
    }
}

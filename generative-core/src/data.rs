//! Core data types for generative property-based testing.

use rand::RngCore;
use std::fmt;

/// Splittable random source for deterministic test generation.
///
/// A seed is a SplitMix64 state. It implements [`RngCore`], so it can be
/// handed to any [`Arbitrary`](crate::Arbitrary) as its random source, and it
/// can be split to create independent streams, one per trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed(pub u64, pub u64);

impl Seed {
    /// Create a new seed from a single value.
    pub fn from_u64(value: u64) -> Self {
        let state = splitmix64_mix(value);
        let gamma = mix_gamma(state);
        Seed(state, gamma)
    }

    /// Split off an independent seed, advancing this one.
    pub fn split(&mut self) -> Self {
        let output = self.step();
        Seed(output, mix_gamma(output))
    }

    fn step(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(self.1);
        splitmix64_mix(self.0)
    }
}

impl RngCore for Seed {
    fn next_u32(&mut self) -> u32 {
        (self.step() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed({}, {})", self.0, self.1)
    }
}

/// Configuration for property testing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of trials to run.
    pub test_limit: usize,

    /// Maximum number of shrinks to adopt before reporting.
    pub shrink_limit: usize,

    /// Seed for the whole run. A random one is chosen when absent.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            test_limit: 100,
            shrink_limit: 1000,
            seed: None,
        }
    }
}

impl Config {
    /// Create a new config with the given number of tests.
    pub fn with_tests(mut self, tests: usize) -> Self {
        self.test_limit = tests;
        self
    }

    /// Create a new config with the given shrink limit.
    pub fn with_shrinks(mut self, shrinks: usize) -> Self {
        self.shrink_limit = shrinks;
        self
    }

    /// Create a new config that replays the run identified by `seed`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// SplitMix64 mixing function for high-quality output.
fn splitmix64_mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e3779b97f4a7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Generate a good gamma value for SplitMix64 splitting.
fn mix_gamma(mut z: u64) -> u64 {
    z = splitmix64_mix(z);
    // Odd gamma gives the full period.
    (z | 1).wrapping_mul(0x9e3779b97f4a7c15)
}

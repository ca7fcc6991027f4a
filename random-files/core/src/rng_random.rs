// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Random;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::{Range, RangeInclusive};

pub struct RngRandom<R: Rng> {
    rng: R,
}

impl<R: Rng> RngRandom<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngRandom<StdRng> {
    /// Seeds once from operating system entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Random for RngRandom<R> {
    fn usize(&mut self, range: Range<usize>) -> usize {
        self.rng.random_range(range)
    }
    fn u32(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.rng.random_range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = RngRandom::seeded(7);
        let mut b = RngRandom::seeded(7);

        for _ in 0..100 {
            assert_eq!(a.usize(0..26), b.usize(0..26));
            assert_eq!(a.u32(1..=42), b.u32(1..=42));
        }
    }

    #[test]
    fn test_draws_stay_in_range() {
        let mut random = RngRandom::from_entropy();

        for _ in 0..1_000 {
            assert!(random.usize(0..26) < 26);
            let n = random.u32(1..=42);
            assert!((1..=42).contains(&n), "{} out of range", n);
        }
    }

    #[test]
    fn test_inclusive_bounds_are_reachable() {
        let mut random = RngRandom::seeded(1);
        let draws: Vec<u32> = (0..10_000).map(|_| random.u32(1..=42)).collect();

        assert!(draws.contains(&1));
        assert!(draws.contains(&42));
    }
}

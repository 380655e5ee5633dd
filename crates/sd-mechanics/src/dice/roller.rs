//! Random dice rolling.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of die faces.
pub trait Roller {
    /// Roll one die with `sides` faces, returning a value in `1..=sides`.
    fn roll(&mut self, sides: u32) -> u32;

    /// Roll `count` dice with `sides` faces and return their sum.
    fn roll_n(&mut self, count: u32, sides: u32) -> u32 {
        (0..count).map(|_| self.roll(sides)).sum()
    }
}

/// A [`Roller`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngRoller<R = StdRng> {
    rng: R,
}

impl RngRoller<StdRng> {
    /// A roller seeded from the operating system. Results differ between runs.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// A reproducible roller: the same seed always yields the same faces.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RngRoller<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Roller for RngRoller<R> {
    fn roll(&mut self, sides: u32) -> u32 {
        self.rng.random_range(1..=sides.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roll_produces_valid_values() {
        let mut roller = RngRoller::seeded(42);
        for _ in 0..500 {
            let v = roller.roll(20);
            assert!((1..=20).contains(&v));
        }
    }

    #[test]
    fn roll_covers_every_face() {
        let mut roller = RngRoller::seeded(3);
        let mut seen = [false; 4];
        for _ in 0..400 {
            seen[roller.roll(4) as usize - 1] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn roll_deterministic_with_seed() {
        let mut r1 = RngRoller::seeded(99);
        let mut r2 = RngRoller::seeded(99);
        for _ in 0..20 {
            assert_eq!(r1.roll(20), r2.roll(20));
        }
    }

    #[test]
    fn roll_n_sums_within_bounds() {
        let mut roller = RngRoller::seeded(5);
        for _ in 0..100 {
            let total = roller.roll_n(3, 6);
            assert!((3..=18).contains(&total));
        }
        assert_eq!(roller.roll_n(0, 6), 0);
    }

    #[test]
    fn one_sided_die_always_rolls_one() {
        let mut roller = RngRoller::seeded(1);
        assert_eq!(roller.roll(1), 1);
        assert_eq!(roller.roll_n(4, 1), 4);
    }
}

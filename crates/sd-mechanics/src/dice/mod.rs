//! Dice types and rolling.
//!
//! Rolling goes through the [`Roller`] trait so the randomness source can be
//! swapped: [`RngRoller`] wraps a `rand` generator for real play, and
//! [`ScriptedRoller`] replays fixed faces for tests.

pub mod roller;
pub mod scripted;

pub use roller::{RngRoller, Roller};
pub use scripted::ScriptedRoller;

use serde::{Deserialize, Serialize};

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die (bless and bane).
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die (saving throws).
    D20,
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
        }
    }

    /// Roll this die once.
    pub fn roll<R: Roller + ?Sized>(self, roller: &mut R) -> u32 {
        let value = roller.roll(self.sides());
        tracing::trace!(die = %self, value, "rolled");
        value
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

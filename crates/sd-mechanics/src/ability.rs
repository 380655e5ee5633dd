//! The six ability scores and their derived modifiers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MechError;

/// One of the six abilities a creature can make a saving throw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Ability {
    /// Strength.
    Str,
    /// Dexterity.
    Dex,
    /// Constitution.
    Con,
    /// Intelligence.
    Int,
    /// Wisdom.
    Wis,
    /// Charisma.
    Cha,
}

impl Ability {
    /// All abilities in stat-block order.
    pub const ALL: [Ability; 6] = [
        Self::Str,
        Self::Dex,
        Self::Con,
        Self::Int,
        Self::Wis,
        Self::Cha,
    ];

    /// Position of this ability in a stat block.
    pub fn index(self) -> usize {
        match self {
            Self::Str => 0,
            Self::Dex => 1,
            Self::Con => 2,
            Self::Int => 3,
            Self::Wis => 4,
            Self::Cha => 5,
        }
    }

    /// Three-letter abbreviation, e.g. `"DEX"`.
    pub fn abbrev(self) -> &'static str {
        match self {
            Self::Str => "STR",
            Self::Dex => "DEX",
            Self::Con => "CON",
            Self::Int => "INT",
            Self::Wis => "WIS",
            Self::Cha => "CHA",
        }
    }
}

impl FromStr for Ability {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.abbrev().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| MechError::UnknownAbility(s.to_string()))
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// The modifier for an ability score: `floor((score - 10) / 2)`.
pub fn modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// A creature's six ability scores in STR, DEX, CON, INT, WIS, CHA order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores([i32; 6]);

impl AbilityScores {
    /// Build from scores in stat-block order.
    pub fn new(scores: [i32; 6]) -> Self {
        Self(scores)
    }

    /// The score for one ability.
    pub fn get(&self, ability: Ability) -> i32 {
        self.0[ability.index()]
    }

    /// The modifier for one ability.
    pub fn modifier(&self, ability: Ability) -> i32 {
        modifier(self.get(ability))
    }

    /// All six modifiers in stat-block order.
    pub fn modifiers(&self) -> [i32; 6] {
        self.0.map(modifier)
    }
}

impl TryFrom<&[i32]> for AbilityScores {
    type Error = MechError;

    fn try_from(scores: &[i32]) -> Result<Self, Self::Error> {
        let scores: [i32; 6] = scores.try_into().map_err(|_| {
            MechError::InvalidInput(format!(
                "expected 6 ability scores (STR, DEX, CON, INT, WIS, CHA), got {}",
                scores.len()
            ))
        })?;
        Ok(Self(scores))
    }
}

//! Creatures that can be caught in an area effect.

use crate::ability::{Ability, AbilityScores};
use crate::error::{MechError, MechResult};

/// A named creature with ability scores and its own bless/bane state.
///
/// Modifiers are derived once at construction and never change.
#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    name: String,
    scores: AbilityScores,
    modifiers: [i32; 6],
    bless: bool,
    bane: bool,
}

impl Creature {
    /// Create a creature with no bless or bane.
    pub fn new(name: impl Into<String>, scores: AbilityScores) -> MechResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MechError::InvalidInput(
                "creature name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            name,
            modifiers: scores.modifiers(),
            scores,
            bless: false,
            bane: false,
        })
    }

    /// Set whether this creature is blessed.
    pub fn with_bless(mut self, bless: bool) -> Self {
        self.bless = bless;
        self
    }

    /// Set whether this creature is baned.
    pub fn with_bane(mut self, bane: bool) -> Self {
        self.bane = bane;
        self
    }

    /// The creature's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The creature's ability scores.
    pub fn scores(&self) -> &AbilityScores {
        &self.scores
    }

    /// The modifier for one ability.
    pub fn modifier(&self, ability: Ability) -> i32 {
        self.modifiers[ability.index()]
    }

    /// Whether the creature carries its own bless.
    pub fn is_blessed(&self) -> bool {
        self.bless
    }

    /// Whether the creature carries its own bane.
    pub fn is_baned(&self) -> bool {
        self.bane
    }
}

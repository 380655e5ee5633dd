//! A deterministic roller that replays a fixed sequence of faces.

use super::Roller;
use crate::error::{MechError, MechResult};

/// Replays a scripted sequence of faces, starting over once exhausted.
///
/// Faces larger than the die being rolled are clamped to its face count.
#[derive(Debug, Clone)]
pub struct ScriptedRoller {
    faces: Vec<u32>,
    next: usize,
}

impl ScriptedRoller {
    /// Create a roller from a non-empty list of faces, each at least 1.
    pub fn new(faces: impl IntoIterator<Item = u32>) -> MechResult<Self> {
        let faces: Vec<u32> = faces.into_iter().collect();
        if faces.is_empty() {
            return Err(MechError::InvalidInput(
                "scripted roller needs at least one face".to_string(),
            ));
        }
        if faces.contains(&0) {
            return Err(MechError::InvalidInput(
                "scripted faces must be at least 1".to_string(),
            ));
        }
        Ok(Self { faces, next: 0 })
    }

    /// How many faces have been consumed so far.
    pub fn consumed(&self) -> usize {
        self.next
    }
}

impl Roller for ScriptedRoller {
    fn roll(&mut self, sides: u32) -> u32 {
        let face = self.faces[self.next % self.faces.len()];
        self.next += 1;
        face.min(sides.max(1))
    }
}

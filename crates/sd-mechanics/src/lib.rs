//! Saving throw mechanics for area damage spells.
//!
//! Provides dice rolling behind a swappable [`Roller`], creatures with
//! ability scores and modifiers, a save resolver that turns a DC and a list
//! of damage amounts into per-creature damage, roster loading from YAML or
//! JSON, and a fixed-width text report.

pub mod ability;
pub mod creature;
pub mod dice;
pub mod error;
pub mod report;
pub mod roster;
pub mod save;

pub use ability::{Ability, AbilityScores, modifier};
pub use creature::Creature;
pub use dice::{Die, RngRoller, Roller, ScriptedRoller};
pub use error::{MechError, MechResult};
pub use report::{ReportLayout, format_report};
pub use roster::{Roster, RosterFormat};
pub use save::{BuffSource, SaveEntry, SaveOutcome, SaveRequest, resolve_all, resolve_save};

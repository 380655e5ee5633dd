//! Error types for the mechanics engine.

use std::path::PathBuf;

/// Errors that can occur while loading creatures or resolving saves.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A saving throw or roster referenced an ability that does not exist.
    #[error("unknown ability: {0} (expected one of STR, DEX, CON, INT, WIS, CHA)")]
    UnknownAbility(String),

    /// Run parameters failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The roster file could not be read.
    #[error("cannot read roster '{}': {source}", path.display())]
    RosterIo {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The roster file is not valid YAML/JSON or does not match the schema.
    #[error("malformed roster: {0}")]
    RosterParse(String),

    /// A roster record parsed but describes an invalid creature.
    #[error("invalid creature #{index}: {reason}")]
    InvalidCreature {
        /// One-based position of the record in the roster.
        index: usize,
        /// What is wrong with the record.
        reason: String,
    },

    /// The roster has no creatures in it.
    #[error("roster contains no creatures")]
    EmptyRoster,
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;

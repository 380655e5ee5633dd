//! Loading creature rosters from YAML or JSON.
//!
//! A roster is a list of records:
//!
//! ```yaml
//! - name: Goblin Boss
//!   stats: [10, 14, 10, 10, 8, 10]
//!   bless: true
//! - name: Goblin
//!   stats: [8, 14, 10, 10, 8, 8]
//! ```
//!
//! `bless` and `bane` are optional and accept `true`/`false`, `1`/`0` or the
//! strings `true`/`True`/`TRUE` (and the matching `false` spellings). They are
//! coerced to plain booleans here so nothing downstream sees the loose forms.

use std::path::Path;

use serde::Deserialize;

use crate::ability::AbilityScores;
use crate::creature::Creature;
use crate::error::{MechError, MechResult};

/// File formats a roster can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    /// YAML (the default).
    Yaml,
    /// JSON.
    Json,
}

impl RosterFormat {
    /// Pick a format from a file extension; anything but `.json` is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RosterRecord {
    name: String,
    stats: Vec<i32>,
    #[serde(default)]
    bless: Option<FlagValue>,
    #[serde(default)]
    bane: Option<FlagValue>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FlagValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl FlagValue {
    fn to_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Int(1) => Some(true),
            Self::Int(0) => Some(false),
            Self::Int(_) => None,
            Self::Text(s) => match s.as_str() {
                "true" | "True" | "TRUE" => Some(true),
                "false" | "False" | "FALSE" => Some(false),
                _ => None,
            },
        }
    }
}

impl std::fmt::Display for FlagValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "\"{s}\""),
        }
    }
}

/// The creatures caught in an area effect, in file order.
#[derive(Debug, Clone)]
pub struct Roster {
    creatures: Vec<Creature>,
}

impl Roster {
    /// Build a roster from already-validated creatures. Fails if empty.
    pub fn new(creatures: Vec<Creature>) -> MechResult<Self> {
        if creatures.is_empty() {
            return Err(MechError::EmptyRoster);
        }
        Ok(Self { creatures })
    }

    /// Read and validate a roster file, choosing the format by extension.
    pub fn load(path: &Path) -> MechResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| MechError::RosterIo {
            path: path.to_path_buf(),
            source,
        })?;
        let format = RosterFormat::from_path(path);
        tracing::debug!(path = %path.display(), ?format, "loading roster");
        Self::parse(&text, format)
    }

    /// Parse roster text in the given format.
    pub fn parse(text: &str, format: RosterFormat) -> MechResult<Self> {
        let records: Vec<RosterRecord> = match format {
            RosterFormat::Yaml => {
                serde_yaml::from_str(text).map_err(|e| MechError::RosterParse(e.to_string()))?
            }
            RosterFormat::Json => {
                serde_json::from_str(text).map_err(|e| MechError::RosterParse(e.to_string()))?
            }
        };

        let creatures = records
            .into_iter()
            .enumerate()
            .map(|(i, record)| build_creature(i + 1, record))
            .collect::<MechResult<Vec<_>>>()?;

        tracing::debug!(count = creatures.len(), "roster loaded");
        Self::new(creatures)
    }

    /// The creatures in file order.
    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    /// Number of creatures.
    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    /// Always false for a constructed roster; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }
}

fn build_creature(index: usize, record: RosterRecord) -> MechResult<Creature> {
    let invalid = |reason: String| MechError::InvalidCreature { index, reason };

    let scores = AbilityScores::try_from(record.stats.as_slice())
        .map_err(|e| invalid(format!("'{}': {}", record.name, reason(e))))?;
    let bless = flag(record.bless.as_ref()).map_err(|v| {
        invalid(format!("'{}': bless must be true or false, got {v}", record.name))
    })?;
    let bane = flag(record.bane.as_ref()).map_err(|v| {
        invalid(format!("'{}': bane must be true or false, got {v}", record.name))
    })?;

    Ok(Creature::new(record.name, scores)
        .map_err(|e| invalid(reason(e)))?
        .with_bless(bless)
        .with_bane(bane))
}

fn reason(err: MechError) -> String {
    match err {
        MechError::InvalidInput(msg) => msg,
        other => other.to_string(),
    }
}

fn flag(value: Option<&FlagValue>) -> Result<bool, String> {
    match value {
        None => Ok(false),
        Some(v) => v.to_bool().ok_or_else(|| v.to_string()),
    }
}

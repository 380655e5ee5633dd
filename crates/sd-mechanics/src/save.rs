//! Saving throws against area damage.
//!
//! A [`SaveRequest`] carries the run-wide parameters (ability, DC, damage
//! list, success factor, bless/bane). [`resolve_save`] rolls one save per
//! damage entry for a single creature and returns an immutable
//! [`SaveOutcome`]; the creature itself is never modified.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ability::Ability;
use crate::creature::Creature;
use crate::dice::{Die, Roller};
use crate::error::{MechError, MechResult};

/// Which flags decide whether bless or bane applies to a creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuffSource {
    /// Run-level flag OR the creature's own flag.
    #[default]
    Either,
    /// Only the run-level flag.
    Run,
    /// Only the creature's own flag.
    Creature,
}

impl BuffSource {
    /// Whether the effect applies given the run-level and creature flags.
    pub fn applies(self, run: bool, creature: bool) -> bool {
        match self {
            Self::Either => run || creature,
            Self::Run => run,
            Self::Creature => creature,
        }
    }
}

impl FromStr for BuffSource {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "either" => Ok(Self::Either),
            "run" => Ok(Self::Run),
            "creature" => Ok(Self::Creature),
            other => Err(MechError::InvalidInput(format!(
                "unknown buff source '{other}' (expected either, run, or creature)"
            ))),
        }
    }
}

impl std::fmt::Display for BuffSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Either => write!(f, "either"),
            Self::Run => write!(f, "run"),
            Self::Creature => write!(f, "creature"),
        }
    }
}

/// Run-wide parameters for one area effect.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    ability: Ability,
    dc: i32,
    damage: Vec<u32>,
    success_factor: f64,
    bless: bool,
    bane: bool,
    buff_source: BuffSource,
}

impl SaveRequest {
    /// Fraction of damage taken on a successful save by default.
    pub const HALF_DAMAGE: f64 = 0.5;
    /// Fraction of damage taken on a successful save when evading.
    pub const EVADE: f64 = 0.0;

    /// A half-damage save with no bless or bane.
    ///
    /// Fails if `damage` is empty.
    pub fn new(ability: Ability, dc: i32, damage: Vec<u32>) -> MechResult<Self> {
        if damage.is_empty() {
            return Err(MechError::InvalidInput(
                "at least one damage amount is required".to_string(),
            ));
        }
        Ok(Self {
            ability,
            dc,
            damage,
            success_factor: Self::HALF_DAMAGE,
            bless: false,
            bane: false,
            buff_source: BuffSource::default(),
        })
    }

    /// Set the fraction of damage taken on a successful save (0.0 to 1.0).
    pub fn with_success_factor(mut self, factor: f64) -> MechResult<Self> {
        if !(0.0..=1.0).contains(&factor) {
            return Err(MechError::InvalidInput(format!(
                "success factor must be between 0 and 1, got {factor}"
            )));
        }
        self.success_factor = factor;
        Ok(self)
    }

    /// Set the run-level bless flag.
    pub fn with_bless(mut self, bless: bool) -> Self {
        self.bless = bless;
        self
    }

    /// Set the run-level bane flag.
    pub fn with_bane(mut self, bane: bool) -> Self {
        self.bane = bane;
        self
    }

    /// Choose which flags trigger bless and bane.
    pub fn with_buff_source(mut self, source: BuffSource) -> Self {
        self.buff_source = source;
        self
    }

    /// The ability used for the save.
    pub fn ability(&self) -> Ability {
        self.ability
    }

    /// The difficulty class a roll must exceed.
    pub fn dc(&self) -> i32 {
        self.dc
    }

    /// The damage amounts, one save each.
    pub fn damage(&self) -> &[u32] {
        &self.damage
    }

    /// Fraction of damage taken on a successful save.
    pub fn success_factor(&self) -> f64 {
        self.success_factor
    }

    /// Whether bless applies to `creature` under this request.
    pub fn blesses(&self, creature: &Creature) -> bool {
        self.buff_source.applies(self.bless, creature.is_blessed())
    }

    /// Whether bane applies to `creature` under this request.
    pub fn banes(&self, creature: &Creature) -> bool {
        self.buff_source.applies(self.bane, creature.is_baned())
    }
}

/// The save made against one damage entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveEntry {
    /// Incoming damage before the save.
    pub damage: u32,
    /// Final save roll including modifier, bless and bane.
    pub roll: i32,
    /// Whether the roll beat the DC.
    pub saved: bool,
    /// Multiplier applied to the damage.
    pub factor: f64,
    /// `floor(factor * damage)`.
    pub damage_taken: u64,
}

/// Everything one creature rolled and took from one area effect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveOutcome {
    /// Name of the creature that made the saves.
    pub creature: String,
    /// One entry per damage amount, in request order.
    pub entries: Vec<SaveEntry>,
    /// Sum of damage taken across all entries.
    pub total_damage: u64,
}

impl SaveOutcome {
    /// The save rolls in damage order.
    pub fn rolls(&self) -> Vec<i32> {
        self.entries.iter().map(|e| e.roll).collect()
    }

    /// The damage factors in damage order.
    pub fn factors(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.factor).collect()
    }

    /// How many saves succeeded.
    pub fn saves_made(&self) -> usize {
        self.entries.iter().filter(|e| e.saved).count()
    }
}

/// Roll one saving throw per damage entry for `creature`.
///
/// Each entry rolls a d20 plus the ability modifier, then a d4 added for
/// bless and a d4 subtracted for bane when they apply. A roll strictly above
/// the DC takes the success factor; anything else takes full damage. Each
/// entry is floored on its own before summing.
pub fn resolve_save<R: Roller + ?Sized>(
    creature: &Creature,
    request: &SaveRequest,
    roller: &mut R,
) -> SaveOutcome {
    let modifier = creature.modifier(request.ability);
    let blessed = request.blesses(creature);
    let baned = request.banes(creature);

    let mut entries = Vec::with_capacity(request.damage.len());
    for &damage in &request.damage {
        let mut roll = Die::D20.roll(roller) as i32 + modifier;
        if blessed {
            roll += Die::D4.roll(roller) as i32;
        }
        if baned {
            roll -= Die::D4.roll(roller) as i32;
        }

        let saved = roll > request.dc;
        let factor = if saved { request.success_factor } else { 1.0 };
        let damage_taken = (factor * f64::from(damage)).floor() as u64;

        entries.push(SaveEntry {
            damage,
            roll,
            saved,
            factor,
            damage_taken,
        });
    }

    let total_damage = entries.iter().map(|e| e.damage_taken).sum();
    tracing::debug!(
        creature = creature.name(),
        ability = %request.ability,
        dc = request.dc,
        blessed,
        baned,
        total_damage,
        "resolved saves"
    );

    SaveOutcome {
        creature: creature.name().to_string(),
        entries,
        total_damage,
    }
}

/// Resolve the same area effect for every creature, in roster order.
pub fn resolve_all<R: Roller + ?Sized>(
    creatures: &[Creature],
    request: &SaveRequest,
    roller: &mut R,
) -> Vec<SaveOutcome> {
    creatures
        .iter()
        .map(|c| resolve_save(c, request, roller))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::AbilityScores;
    use crate::dice::{RngRoller, ScriptedRoller};
    use proptest::prelude::*;

    fn rogue() -> Creature {
        Creature::new("Rogue", AbilityScores::new([10, 14, 10, 10, 10, 10])).unwrap()
    }

    fn dex_save(dc: i32, damage: Vec<u32>) -> SaveRequest {
        SaveRequest::new(Ability::Dex, dc, damage).unwrap()
    }

    fn script(faces: &[u32]) -> ScriptedRoller {
        ScriptedRoller::new(faces.iter().copied()).unwrap()
    }

    #[test]
    fn natural_twenty_saves_for_half() {
        let outcome = resolve_save(&rogue(), &dex_save(15, vec![10]), &mut script(&[20]));
        assert_eq!(outcome.rolls(), vec![22]);
        assert_eq!(outcome.factors(), vec![0.5]);
        assert!(outcome.entries[0].saved);
        assert_eq!(outcome.total_damage, 5);
    }

    #[test]
    fn natural_one_takes_full_damage() {
        let outcome = resolve_save(&rogue(), &dex_save(15, vec![10]), &mut script(&[1]));
        assert_eq!(outcome.rolls(), vec![3]);
        assert_eq!(outcome.factors(), vec![1.0]);
        assert_eq!(outcome.total_damage, 10);
    }

    #[test]
    fn entries_resolve_independently() {
        let outcome = resolve_save(
            &rogue(),
            &dex_save(15, vec![13, 17]),
            &mut script(&[20, 1]),
        );
        assert_eq!(outcome.rolls(), vec![22, 3]);
        assert_eq!(outcome.entries[0].damage_taken, 6);
        assert_eq!(outcome.entries[1].damage_taken, 17);
        assert_eq!(outcome.total_damage, 23);
        assert_eq!(outcome.saves_made(), 1);
    }

    #[test]
    fn each_entry_floors_separately() {
        let outcome = resolve_save(&rogue(), &dex_save(5, vec![3, 3]), &mut script(&[20, 20]));
        assert_eq!(outcome.total_damage, 2);
    }

    #[test]
    fn tie_with_dc_fails() {
        // 10 + 2 == 12
        let outcome = resolve_save(&rogue(), &dex_save(12, vec![8]), &mut script(&[10]));
        assert_eq!(outcome.rolls(), vec![12]);
        assert!(!outcome.entries[0].saved);
        assert_eq!(outcome.total_damage, 8);
    }

    #[test]
    fn evade_takes_nothing_on_success() {
        let request = dex_save(10, vec![40])
            .with_success_factor(SaveRequest::EVADE)
            .unwrap();
        let outcome = resolve_save(&rogue(), &request, &mut script(&[15]));
        assert_eq!(outcome.factors(), vec![0.0]);
        assert_eq!(outcome.total_damage, 0);
    }

    #[test]
    fn negative_modifier_applies() {
        let clumsy = Creature::new("Ogre", AbilityScores::new([19, 8, 16, 5, 7, 7])).unwrap();
        let outcome = resolve_save(&clumsy, &dex_save(10, vec![6]), &mut script(&[11]));
        assert_eq!(outcome.rolls(), vec![10]);
        assert_eq!(outcome.total_damage, 6);
    }

    #[test]
    fn bless_and_bane_both_roll() {
        let request = dex_save(15, vec![10]).with_bless(true).with_bane(true);
        let mut roller = script(&[10, 3, 2]);
        let outcome = resolve_save(&rogue(), &request, &mut roller);
        assert_eq!(outcome.rolls(), vec![13]);
        assert_eq!(roller.consumed(), 3);
    }

    #[test]
    fn creature_bless_applies_without_run_flag() {
        let blessed = rogue().with_bless(true);
        let mut roller = script(&[12, 4]);
        let outcome = resolve_save(&blessed, &dex_save(15, vec![10]), &mut roller);
        assert_eq!(outcome.rolls(), vec![18]);
        assert!(outcome.entries[0].saved);
    }

    #[test]
    fn bless_rolls_once_when_both_flags_set() {
        let blessed = rogue().with_bless(true);
        let request = dex_save(15, vec![10]).with_bless(true);
        let mut roller = script(&[12, 4, 4]);
        let outcome = resolve_save(&blessed, &request, &mut roller);
        assert_eq!(outcome.rolls(), vec![18]);
        assert_eq!(roller.consumed(), 2);
    }

    #[test]
    fn creature_bane_subtracts() {
        let baned = rogue().with_bane(true);
        let outcome = resolve_save(&baned, &dex_save(15, vec![10]), &mut script(&[14, 3]));
        assert_eq!(outcome.rolls(), vec![13]);
        assert_eq!(outcome.total_damage, 10);
    }

    #[test]
    fn run_source_ignores_creature_flags() {
        let blessed = rogue().with_bless(true);
        let request = dex_save(15, vec![10]).with_buff_source(BuffSource::Run);
        let mut roller = script(&[12, 4]);
        let outcome = resolve_save(&blessed, &request, &mut roller);
        assert_eq!(outcome.rolls(), vec![14]);
        assert_eq!(roller.consumed(), 1);
    }

    #[test]
    fn creature_source_ignores_run_flags() {
        let request = dex_save(15, vec![10])
            .with_bane(true)
            .with_buff_source(BuffSource::Creature);
        let mut roller = script(&[12, 4]);
        let outcome = resolve_save(&rogue(), &request, &mut roller);
        assert_eq!(outcome.rolls(), vec![14]);
        assert_eq!(roller.consumed(), 1);
    }

    #[test]
    fn buff_source_parsing() {
        assert_eq!("either".parse::<BuffSource>().unwrap(), BuffSource::Either);
        assert_eq!("RUN".parse::<BuffSource>().unwrap(), BuffSource::Run);
        assert_eq!("creature".parse::<BuffSource>().unwrap(), BuffSource::Creature);
        assert!("both".parse::<BuffSource>().is_err());
        assert_eq!(BuffSource::Creature.to_string(), "creature");
    }

    #[test]
    fn empty_damage_rejected() {
        let err = SaveRequest::new(Ability::Dex, 10, Vec::new()).unwrap_err();
        assert!(matches!(err, MechError::InvalidInput(_)));
    }

    #[test]
    fn success_factor_range_checked() {
        assert!(dex_save(10, vec![1]).with_success_factor(1.5).is_err());
        assert!(dex_save(10, vec![1]).with_success_factor(-0.1).is_err());
        assert!(dex_save(10, vec![1]).with_success_factor(f64::NAN).is_err());
        assert!(dex_save(10, vec![1]).with_success_factor(0.25).is_ok());
    }

    #[test]
    fn resolve_all_keeps_roster_order() {
        let creatures = vec![
            rogue(),
            Creature::new("Ogre", AbilityScores::new([19, 8, 16, 5, 7, 7])).unwrap(),
        ];
        let outcomes = resolve_all(&creatures, &dex_save(15, vec![10]), &mut script(&[20, 1]));
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].creature, "Rogue");
        assert_eq!(outcomes[0].total_damage, 5);
        assert_eq!(outcomes[1].creature, "Ogre");
        assert_eq!(outcomes[1].total_damage, 10);
    }

    proptest! {
        #[test]
        fn factors_are_success_or_full(
            seed in any::<u64>(),
            dc in 0i32..30,
            damage in proptest::collection::vec(0u32..200, 1..6),
            evade in any::<bool>(),
            bless in any::<bool>(),
            bane in any::<bool>(),
        ) {
            let factor = if evade { SaveRequest::EVADE } else { SaveRequest::HALF_DAMAGE };
            let request = dex_save(dc, damage.clone())
                .with_success_factor(factor)
                .unwrap()
                .with_bless(bless)
                .with_bane(bane);
            let outcome = resolve_save(&rogue(), &request, &mut RngRoller::seeded(seed));

            prop_assert_eq!(outcome.entries.len(), damage.len());
            let mut expected_total = 0u64;
            for (entry, dmg) in outcome.entries.iter().zip(&damage) {
                prop_assert!(entry.factor == factor || entry.factor == 1.0);
                prop_assert_eq!(entry.saved, entry.roll > dc);
                prop_assert_eq!(entry.damage, *dmg);
                expected_total += (entry.factor * f64::from(*dmg)).floor() as u64;
            }
            prop_assert_eq!(outcome.total_damage, expected_total);
        }
    }
}

//! Attribute category tables: which development profile an attribute
//! follows, and the per-life-phase odds and magnitudes for each profile.

use crate::models::{MENTAL_ATTRIBUTES, PHYSICAL_ATTRIBUTES};
use crate::progression::age_category::AgeCategory;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Age at which mental attributes switch to the super-veteran phase.
pub const SUPER_VETERAN_AGE: u8 = 35;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AttributeCategory {
    Physical,
    Mental,
    Technique,
}

/// Classify an attribute by name. Anything unrecognized is a learned
/// skill and develops as technique.
pub fn categorize(name: &str) -> AttributeCategory {
    if PHYSICAL_ATTRIBUTES.contains(&name) {
        AttributeCategory::Physical
    } else if MENTAL_ATTRIBUTES.contains(&name) {
        AttributeCategory::Mental
    } else {
        AttributeCategory::Technique
    }
}

/// Life phase used to index the parameter tables. Super-veteran exists
/// only for mental attributes; everything else tops out at veteran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifePhase {
    Young,
    Prime,
    Veteran,
    SuperVeteran,
}

impl LifePhase {
    pub fn for_attribute(category: AttributeCategory, age_category: AgeCategory, age: u8) -> Self {
        match age_category {
            AgeCategory::Young => LifePhase::Young,
            AgeCategory::Prime => LifePhase::Prime,
            AgeCategory::Veteran => {
                if category == AttributeCategory::Mental && age >= SUPER_VETERAN_AGE {
                    LifePhase::SuperVeteran
                } else {
                    LifePhase::Veteran
                }
            }
        }
    }
}

/// Inclusive magnitude band for one roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagnitudeRange {
    pub lo: u8,
    pub hi: u8,
}

impl MagnitudeRange {
    pub const fn new(lo: u8, hi: u8) -> Self {
        Self { lo, hi }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        rng.gen_range(self.lo..=self.hi.max(self.lo))
    }

    /// Element-wise max: widen an improvement band.
    pub fn widened_to(&self, other: MagnitudeRange) -> Self {
        Self { lo: self.lo.max(other.lo), hi: self.hi.max(other.hi) }
    }
}

/// Probabilities and magnitudes for one category in one phase.
/// The three chances sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseParams {
    pub improve_chance: f32,
    pub stable_chance: f32,
    pub decline_chance: f32,
    pub improve: MagnitudeRange,
    pub decline: MagnitudeRange,
}

const fn params(
    improve_chance: f32,
    stable_chance: f32,
    decline_chance: f32,
    improve: (u8, u8),
    decline: (u8, u8),
) -> PhaseParams {
    PhaseParams {
        improve_chance,
        stable_chance,
        decline_chance,
        improve: MagnitudeRange::new(improve.0, improve.1),
        decline: MagnitudeRange::new(decline.0, decline.1),
    }
}

pub fn phase_params(category: AttributeCategory, phase: LifePhase) -> PhaseParams {
    match (category, phase) {
        (AttributeCategory::Physical, LifePhase::Young) => {
            params(0.55, 0.35, 0.10, (1, 3), (1, 1))
        }
        (AttributeCategory::Physical, LifePhase::Prime) => {
            params(0.20, 0.60, 0.20, (1, 2), (1, 2))
        }
        (AttributeCategory::Physical, LifePhase::Veteran | LifePhase::SuperVeteran) => {
            params(0.05, 0.25, 0.70, (1, 1), (2, 4))
        }
        (AttributeCategory::Mental, LifePhase::Young) => {
            params(0.60, 0.35, 0.05, (1, 3), (1, 1))
        }
        (AttributeCategory::Mental, LifePhase::Prime) => {
            params(0.35, 0.55, 0.10, (1, 2), (1, 1))
        }
        (AttributeCategory::Mental, LifePhase::Veteran) => {
            params(0.20, 0.60, 0.20, (1, 1), (1, 2))
        }
        (AttributeCategory::Mental, LifePhase::SuperVeteran) => {
            params(0.05, 0.55, 0.40, (1, 1), (1, 3))
        }
        (AttributeCategory::Technique, LifePhase::Young) => {
            params(0.50, 0.40, 0.10, (1, 3), (1, 1))
        }
        (AttributeCategory::Technique, LifePhase::Prime) => {
            params(0.30, 0.50, 0.20, (1, 2), (1, 2))
        }
        (AttributeCategory::Technique, LifePhase::Veteran | LifePhase::SuperVeteran) => {
            params(0.10, 0.40, 0.50, (1, 1), (1, 3))
        }
    }
}

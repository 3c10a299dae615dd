//! Archetype model: declarative per-role rating templates.
//!
//! Archetypes are loaded once at startup into an [`ArchetypeRegistry`]
//! owned by the caller and passed by reference into the generation and
//! development components. Definitions that fail validation are dropped
//! with a logged warning, never a hard error.

pub mod registry;

pub use registry::ArchetypeRegistry;

use crate::models::Position;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sampling window for one attribute: hard bounds plus the Gaussian the
/// generator draws from inside them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttributeRange {
    pub min: u8,
    pub max: u8,
    pub mean: f32,
    pub std_dev: f32,
}

impl AttributeRange {
    /// `40 <= min <= mean <= max <= 99`.
    pub fn is_valid(&self) -> bool {
        self.min >= 40
            && self.max <= 99
            && self.min <= self.max
            && self.mean >= self.min as f32
            && self.mean <= self.max as f32
            && self.std_dev >= 0.0
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        crate::sampling::bounded_normal(
            rng,
            self.mean,
            self.std_dev,
            self.min as f32,
            self.max as f32,
        )
        .round() as u8
    }
}

/// How fast a player's growth and decline run relative to the norm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DevelopmentCurve {
    Early,
    Normal,
    Late,
}

impl DevelopmentCurve {
    pub fn growth_modifier(&self) -> f32 {
        match self {
            DevelopmentCurve::Early => 1.25,
            DevelopmentCurve::Normal => 1.0,
            DevelopmentCurve::Late => 0.75,
        }
    }

    pub fn decline_modifier(&self) -> f32 {
        match self {
            DevelopmentCurve::Early => 1.0,
            DevelopmentCurve::Normal => 1.0,
            DevelopmentCurve::Late => 0.80,
        }
    }
}

impl Default for DevelopmentCurve {
    fn default() -> Self {
        DevelopmentCurve::Normal
    }
}

/// Ages between which a player of this mold holds his best form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakAgeWindow {
    pub start: u8,
    pub end: u8,
}

impl PeakAgeWindow {
    pub fn is_valid(&self) -> bool {
        self.start >= 20 && self.end <= 35 && self.start <= self.end
    }
}

/// A reusable statistical template for one role within a position:
/// "pocket passer", "edge rusher", "return-ready slot receiver", etc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Archetype {
    pub id: String,
    pub position: Position,
    /// Relative selection weight within the position, in `[0, 1]`.
    pub frequency: f32,
    #[serde(default)]
    pub curve: DevelopmentCurve,
    pub peak_ages: PeakAgeWindow,
    /// Band the finished player's overall is expected to land in.
    pub overall: AttributeRange,
    pub physical: BTreeMap<String, AttributeRange>,
    pub mental: BTreeMap<String, AttributeRange>,
    pub position_specific: BTreeMap<String, AttributeRange>,
}

impl Archetype {
    /// Check every contained range plus the scalar fields. Returns the
    /// first problem found; the loader reports it and drops the entry.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.is_empty() {
            return Err("empty id".to_string());
        }
        if !(0.0..=1.0).contains(&self.frequency) {
            return Err(format!("frequency {} outside [0, 1]", self.frequency));
        }
        if !self.peak_ages.is_valid() {
            return Err(format!(
                "peak ages {}-{} outside [20, 35]",
                self.peak_ages.start, self.peak_ages.end
            ));
        }
        if !self.overall.is_valid() {
            return Err("overall range violates 40 <= min <= mean <= max <= 99".to_string());
        }
        for (group, ranges) in [
            ("physical", &self.physical),
            ("mental", &self.mental),
            ("position_specific", &self.position_specific),
        ] {
            for (name, range) in ranges {
                if !range.is_valid() {
                    return Err(format!(
                        "{} attribute {} violates 40 <= min <= mean <= max <= 99",
                        group, name
                    ));
                }
            }
        }
        Ok(())
    }
}

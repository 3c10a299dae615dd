//! Season-over-season player development.

pub mod age_category;
pub mod algorithm;
pub mod attribute_category;
pub mod batch;
pub mod peak_age;

pub use age_category::AgeCategory;
pub use algorithm::{AgeWeightedDevelopment, DevelopmentAlgorithm, ProgressionInput};
pub use attribute_category::{categorize, AttributeCategory, LifePhase, MagnitudeRange};
pub use batch::{
    AttributeUpdate, BatchSummary, DepthChartGenerator, DevelopmentHistory, ProgressionRecord,
    RosterStore, SeasonProgression,
};
pub use peak_age::PositionRates;

use crate::archetype::DevelopmentCurve;
use crate::models::{AttributeMap, Position, POTENTIAL_KEY};
use serde::{Deserialize, Serialize};

/// One attribute's movement in one season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeChange {
    pub name: String,
    pub old_value: u8,
    pub new_value: u8,
    pub delta: i8,
}

/// The full outcome of one development pass for one player. Produced by
/// the orchestrator, consumed immediately; never persisted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerDevelopmentResult {
    pub player_id: String,
    pub age: u8,
    pub age_category: AgeCategory,
    pub old_overall: u8,
    pub new_overall: u8,
    pub changes: Vec<AttributeChange>,
    pub potential: u8,
    pub curve: DevelopmentCurve,
}

impl PlayerDevelopmentResult {
    pub fn overall_delta(&self) -> i16 {
        self.new_overall as i16 - self.old_overall as i16
    }
}

/// Recompute a player's overall after development. A plain weighted
/// average over the position-relevant attributes with awareness counted
/// half again; the stored overall survives when nothing relevant exists.
pub fn recalculate_overall(
    position: Option<Position>,
    attributes: &AttributeMap,
    previous: u8,
) -> u8 {
    let relevant: Vec<&str> = match position {
        Some(position) => position.relevant_attributes(),
        None => attributes
            .keys()
            .map(|name| name.as_str())
            .filter(|name| *name != POTENTIAL_KEY)
            .collect(),
    };

    let mut weighted_sum = 0.0f32;
    let mut weight_sum = 0.0f32;
    for name in relevant {
        if let Some(&value) = attributes.get(name) {
            let weight = if name == "awareness" { 1.5 } else { 1.0 };
            weighted_sum += value as f32 * weight;
            weight_sum += weight;
        }
    }

    if weight_sum > 0.0 {
        (weighted_sum / weight_sum).round().clamp(40.0, 99.0) as u8
    } else {
        previous
    }
}

//! Age category resolution: archetype window, then position table, then
//! a generic fallback. Lookup failures degrade silently down the chain.

use crate::archetype::{ArchetypeRegistry, PeakAgeWindow};
use crate::models::Position;
use crate::progression::peak_age::PositionRates;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AgeCategory {
    Young,
    Prime,
    Veteran,
}

impl AgeCategory {
    pub fn from_window(age: u8, window: PeakAgeWindow) -> Self {
        if age < window.start {
            AgeCategory::Young
        } else if age <= window.end {
            AgeCategory::Prime
        } else {
            AgeCategory::Veteran
        }
    }

    /// Position-agnostic fallback.
    pub fn generic(age: u8) -> Self {
        if age < 26 {
            AgeCategory::Young
        } else if age <= 30 {
            AgeCategory::Prime
        } else {
            AgeCategory::Veteran
        }
    }
}

impl fmt::Display for AgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AgeCategory::Young => "YOUNG",
            AgeCategory::Prime => "PRIME",
            AgeCategory::Veteran => "VETERAN",
        };
        f.write_str(label)
    }
}

/// Resolve the category for a player, preferring the most specific peak
/// window available.
pub fn resolve(
    registry: &ArchetypeRegistry,
    age: u8,
    position: Option<Position>,
    archetype_id: Option<&str>,
) -> AgeCategory {
    if let Some(archetype) = archetype_id.and_then(|id| registry.by_id(id)) {
        return AgeCategory::from_window(age, archetype.peak_ages);
    }
    if let Some(position) = position {
        return AgeCategory::from_window(age, PositionRates::for_position(position).peak);
    }
    AgeCategory::generic(age)
}

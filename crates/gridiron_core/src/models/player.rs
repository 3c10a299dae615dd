//! Player records exchanged with the roster layer.

use crate::models::position::Position;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Rating values keyed by attribute name. A `BTreeMap` keeps iteration
/// order stable so seeded runs reproduce byte-for-byte.
pub type AttributeMap = BTreeMap<String, u8>;

/// Reserved key inside the attribute map for the development ceiling.
pub const POTENTIAL_KEY: &str = "potential";

/// Where a freshly generated player is entering the league from.
/// Draft contexts constrain the permitted overall band; veterans do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum GenerationContext {
    DraftProspect { round: u8 },
    UndraftedFreeAgent,
    Veteran,
}

impl GenerationContext {
    /// Overall band the generated player must land in, if any.
    pub fn overall_band(&self) -> Option<(u8, u8)> {
        match self {
            GenerationContext::DraftProspect { round } => Some(match round {
                1 => (68, 92),
                2 => (64, 84),
                3 => (61, 80),
                4 => (58, 77),
                5 => (55, 74),
                6 => (52, 71),
                _ => (50, 69),
            }),
            GenerationContext::UndraftedFreeAgent => Some((45, 66)),
            GenerationContext::Veteran => None,
        }
    }

    pub fn draft_round(&self) -> Option<u8> {
        match self {
            GenerationContext::DraftProspect { round } => Some(*round),
            _ => None,
        }
    }
}

/// A complete new player, ready for insertion by the roster persistence
/// layer. Owned by that layer once handed over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPlayer {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub position: Position,
    pub age: u8,
    /// All ratings including the `potential` ceiling.
    pub attributes: AttributeMap,
    pub overall: u8,
    pub archetype_id: String,
    pub context: GenerationContext,
    pub draft_round: Option<u8>,
    pub draft_pick: Option<u16>,
}

impl GeneratedPlayer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn potential(&self) -> Option<u8> {
        self.attributes.get(POTENTIAL_KEY).copied()
    }
}

/// A player as supplied by the external roster collaborator for one
/// development pass. Position stays a raw string here; it is parsed (and
/// unknown slots degrade to default handling) inside the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterPlayer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub team: String,
    pub position: String,
    pub attributes: AttributeMap,
    pub birthdate: NaiveDate,
    pub overall: u8,
    #[serde(default)]
    pub potential: Option<u8>,
    #[serde(default)]
    pub archetype_id: Option<String>,
}

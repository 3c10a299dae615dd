//! Core data model: positions and player records.

pub mod player;
pub mod position;

pub use player::{AttributeMap, GeneratedPlayer, GenerationContext, RosterPlayer, POTENTIAL_KEY};
pub use position::{Position, MENTAL_ATTRIBUTES, PHYSICAL_ATTRIBUTES};

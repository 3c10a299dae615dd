//! # gridiron_core - Player Generation & Development Engine
//!
//! Simulates a multi-decade population of football players: archetype-
//! driven attribute generation with statistical correlation, and an
//! age/position/category-aware progression pass that mutates ratings
//! season over season.
//!
//! ## Features
//! - Deterministic under a seeded RNG (same seed = same league)
//! - Declarative archetype templates, embedded or loaded from a directory
//! - Pluggable development algorithm behind a small trait
//! - Batch orchestration against external roster/history/depth-chart
//!   collaborators

pub mod archetype;
pub mod error;
pub mod generation;
pub mod models;
pub mod progression;
pub mod sampling;

pub use archetype::{Archetype, ArchetypeRegistry, AttributeRange, DevelopmentCurve, PeakAgeWindow};
pub use error::{CoreError, Result};
pub use generation::{
    generate_draft_class, DraftClass, GenerationRequest, PlayerGenerator,
};
pub use models::{
    AttributeMap, GeneratedPlayer, GenerationContext, Position, RosterPlayer, POTENTIAL_KEY,
};
pub use progression::{
    AgeCategory, AgeWeightedDevelopment, AttributeChange, AttributeUpdate, BatchSummary,
    DepthChartGenerator, DevelopmentAlgorithm, DevelopmentHistory, PlayerDevelopmentResult,
    PositionRates, ProgressionInput, ProgressionRecord, RosterStore, SeasonProgression,
};

//! Player generation: archetype-driven attribute rolls, overalls,
//! potential ceilings, and full draft classes.

pub mod attributes;
pub mod draft;
pub mod generator;
pub mod names;
pub mod overall;
pub mod potential;

pub use attributes::generate_attributes;
pub use draft::{generate_draft_class, DraftClass, PICKS_PER_ROUND, ROUNDS};
pub use generator::{GenerationRequest, PlayerGenerator};
pub use overall::{calculate_overall, overall_weights};
pub use potential::calculate_potential;

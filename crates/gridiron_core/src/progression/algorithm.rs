//! The age-weighted development algorithm.
//!
//! One season of change for one player: every position-relevant
//! attribute rolls improve/stable/decline against its category's phase
//! parameters, with the ranges blended toward the position's growth or
//! regression rate when the player is off-peak.

use crate::archetype::{ArchetypeRegistry, DevelopmentCurve};
use crate::models::{AttributeMap, Position, POTENTIAL_KEY};
use crate::progression::age_category::{self, AgeCategory};
use crate::progression::attribute_category::{
    categorize, phase_params, AttributeCategory, LifePhase, MagnitudeRange,
};
use crate::progression::peak_age::PositionRates;
use rand::{Rng, RngCore};
use std::collections::BTreeMap;

/// Value at which further improvement comes hard.
const DIMINISHING_RETURNS_THRESHOLD: u8 = 90;
/// No rating ever drops below this.
const RATING_FLOOR: u8 = 40;
/// Off-peak distance multiplier grows 10% per year, capped at +50%.
const DISTANCE_STEP: f32 = 0.1;
const DISTANCE_CAP: f32 = 0.5;

/// Everything the algorithm needs for one player. Attributes are read
/// only; the caller applies the returned deltas.
#[derive(Debug, Clone)]
pub struct ProgressionInput<'a> {
    pub age: u8,
    pub position: Option<Position>,
    pub attributes: &'a AttributeMap,
    pub potential: Option<u8>,
    pub archetype_id: Option<&'a str>,
}

/// A season-development model. The batch orchestrator takes this as a
/// trait object so alternate models can be injected.
pub trait DevelopmentAlgorithm {
    /// Per-attribute deltas for one season. Zero-delta entries are
    /// omitted. Pure in (input, RNG state).
    fn develop(&self, rng: &mut dyn RngCore, input: &ProgressionInput<'_>) -> BTreeMap<String, i8>;
}

/// The standard model: age category, position rates, archetype curve.
pub struct AgeWeightedDevelopment<'a> {
    registry: &'a ArchetypeRegistry,
}

impl<'a> AgeWeightedDevelopment<'a> {
    pub fn new(registry: &'a ArchetypeRegistry) -> Self {
        Self { registry }
    }

    fn distance_multiplier(age_category: AgeCategory, age: u8, rates: &PositionRates) -> f32 {
        let years = match age_category {
            AgeCategory::Young => rates.peak.start.saturating_sub(age),
            AgeCategory::Veteran => age.saturating_sub(rates.peak.end),
            AgeCategory::Prime => 0,
        };
        1.0 + (DISTANCE_STEP * years as f32).min(DISTANCE_CAP)
    }

    /// Magnitude band derived from a position rate. The {1x, 3x} span
    /// mirrors the category tables' narrowest/widest single-season move.
    fn rate_derived(rate: f32) -> MagnitudeRange {
        let lo = rate.round().max(1.0) as u8;
        let hi = (rate * 3.0).round().max(1.0) as u8;
        MagnitudeRange::new(lo, hi.max(lo))
    }
}

impl DevelopmentAlgorithm for AgeWeightedDevelopment<'_> {
    fn develop(&self, rng: &mut dyn RngCore, input: &ProgressionInput<'_>) -> BTreeMap<String, i8> {
        let age_category =
            age_category::resolve(self.registry, input.age, input.position, input.archetype_id);
        let rates = PositionRates::resolve(input.position);
        let curve = input
            .archetype_id
            .and_then(|id| self.registry.by_id(id))
            .map(|archetype| archetype.curve)
            .unwrap_or(DevelopmentCurve::Normal);
        let distance = Self::distance_multiplier(age_category, input.age, &rates);

        let relevant: Vec<String> = match input.position {
            Some(position) => {
                position.relevant_attributes().iter().map(|s| s.to_string()).collect()
            }
            None => input
                .attributes
                .keys()
                .filter(|name| name.as_str() != POTENTIAL_KEY)
                .cloned()
                .collect(),
        };

        let ceiling = input.potential.unwrap_or(99);
        let mut deltas = BTreeMap::new();

        for name in relevant {
            let Some(&current) = input.attributes.get(&name) else {
                continue;
            };

            let category = categorize(&name);
            let phase = LifePhase::for_attribute(category, age_category, input.age);
            let params = phase_params(category, phase);

            // Off-peak blending: young improve bands widen toward the
            // growth-rate band, veteran decline bands toward the
            // regression-rate band. Element-wise, keeping the stronger
            // endpoint of the two bands.
            let improve = match age_category {
                AgeCategory::Young => params.improve.widened_to(Self::rate_derived(
                    rates.growth_rate * curve.growth_modifier() * distance,
                )),
                _ => params.improve,
            };
            let decline = match age_category {
                AgeCategory::Veteran => params.decline.widened_to(Self::rate_derived(
                    rates.regression_rate * curve.decline_modifier() * distance,
                )),
                _ => params.decline,
            };

            let roll: f32 = rng.gen();
            if roll < params.improve_chance {
                let mut amount = improve.sample(rng) as i16;
                // Diminishing returns halve the gain before the ceiling
                // clamp, never after.
                if current >= DIMINISHING_RETURNS_THRESHOLD {
                    amount = (amount / 2).max(1);
                }
                let new_value = (current as i16 + amount).min(ceiling as i16).max(current as i16);
                let delta = (new_value - current as i16) as i8;
                if delta > 0 {
                    deltas.insert(name, delta);
                }
            } else if roll < params.improve_chance + params.decline_chance {
                let amount = decline.sample(rng) as i16;
                let new_value = (current as i16 - amount).max(RATING_FLOOR as i16);
                let delta = (new_value - current as i16).max(i8::MIN as i16) as i8;
                if delta < 0 {
                    deltas.insert(name, delta);
                }
            }
        }

        deltas
    }
}

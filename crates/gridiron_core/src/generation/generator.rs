//! Player generation: archetype resolution through finished record.

use crate::archetype::{Archetype, ArchetypeRegistry};
use crate::error::{CoreError, Result};
use crate::generation::attributes::generate_attributes;
use crate::generation::names::random_name;
use crate::generation::overall::calculate_overall;
use crate::generation::potential::calculate_potential;
use crate::models::{GeneratedPlayer, GenerationContext, Position, POTENTIAL_KEY};
use crate::sampling::weighted_choice;
use rand::Rng;
use uuid::Uuid;

/// Rookie entry ages and their draw weights.
const ROOKIE_AGES: [(u8, f32); 3] = [(21, 0.50), (22, 0.35), (23, 0.15)];

/// One generation request. The archetype resolves explicit template →
/// id lookup → frequency-weighted pick for the position; if all three
/// fail the call fails.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    pub position: Option<Position>,
    pub archetype: Option<Archetype>,
    pub archetype_id: Option<String>,
    pub context: Option<GenerationContext>,
}

impl GenerationRequest {
    pub fn for_position(position: Position, context: GenerationContext) -> Self {
        Self { position: Some(position), context: Some(context), ..Default::default() }
    }
}

pub struct PlayerGenerator<'a> {
    registry: &'a ArchetypeRegistry,
}

impl<'a> PlayerGenerator<'a> {
    pub fn new(registry: &'a ArchetypeRegistry) -> Self {
        Self { registry }
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        request: &GenerationRequest,
    ) -> Result<GeneratedPlayer> {
        let archetype = self.resolve_archetype(rng, request)?;
        let context = request.context.unwrap_or(GenerationContext::Veteran);

        let mut attributes = generate_attributes(rng, &archetype);
        let mut overall = calculate_overall(archetype.position, &attributes);

        // Pull the whole profile toward the permitted band when the raw
        // roll lands outside it, then recompute once.
        if let Some((low, high)) = context.overall_band() {
            if overall < low || overall > high {
                let target = overall.clamp(low, high);
                let factor = target as f32 / overall.max(1) as f32;
                for value in attributes.values_mut() {
                    *value = ((*value as f32 * factor).round()).clamp(40.0, 99.0) as u8;
                }
                overall = calculate_overall(archetype.position, &attributes);
            }
        }

        let age = self.roll_age(rng, context);
        let potential =
            calculate_potential(rng, overall, age, &archetype, context.draft_round());
        attributes.insert(POTENTIAL_KEY.to_string(), potential);

        let (first_name, last_name) = random_name(rng);

        Ok(GeneratedPlayer {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            position: archetype.position,
            age,
            attributes,
            overall,
            archetype_id: archetype.id.clone(),
            context,
            draft_round: context.draft_round(),
            draft_pick: None,
        })
    }

    fn resolve_archetype<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        request: &GenerationRequest,
    ) -> Result<Archetype> {
        if let Some(archetype) = &request.archetype {
            return Ok(archetype.clone());
        }
        if let Some(id) = &request.archetype_id {
            return self
                .registry
                .by_id(id)
                .cloned()
                .ok_or_else(|| CoreError::ArchetypeNotFound(id.clone()));
        }
        if let Some(position) = request.position {
            return self
                .registry
                .select_random(rng, position)
                .cloned()
                .ok_or_else(|| CoreError::ArchetypeNotFound(position.to_string()));
        }
        Err(CoreError::ArchetypeNotFound("unspecified request".to_string()))
    }

    fn roll_age<R: Rng + ?Sized>(&self, rng: &mut R, context: GenerationContext) -> u8 {
        match context {
            GenerationContext::DraftProspect { .. } | GenerationContext::UndraftedFreeAgent => {
                weighted_choice(rng, &ROOKIE_AGES).copied().unwrap_or(22)
            }
            GenerationContext::Veteran => rng.gen_range(24..=32),
        }
    }
}

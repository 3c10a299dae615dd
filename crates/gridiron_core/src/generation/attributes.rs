//! Attribute generation passes.
//!
//! Order matters: size anchors the physical pass, and position-specific
//! skills may correlate against any physical value already on the board.

use crate::archetype::Archetype;
use crate::models::{AttributeMap, PHYSICAL_ATTRIBUTES};
use crate::sampling::{apply_correlation, coefficient};
use rand::Rng;

const SIZE: &str = "size";

/// Run the physical, mental, and position-specific passes for one
/// archetype and return the finished map (no potential yet).
pub fn generate_attributes<R: Rng + ?Sized>(rng: &mut R, archetype: &Archetype) -> AttributeMap {
    let mut attributes = AttributeMap::new();

    // Physical pass: size first, everything else leans on it.
    if let Some(size_range) = archetype.physical.get(SIZE) {
        attributes.insert(SIZE.to_string(), size_range.sample(rng));
    }
    for (name, range) in &archetype.physical {
        if name == SIZE {
            continue;
        }
        let value = match (archetype.physical.get(SIZE), attributes.get(SIZE)) {
            (Some(size_range), Some(&size_value)) if coefficient(name, SIZE) != 0.0 => {
                apply_correlation(rng, name, SIZE, size_value as f32, size_range, range)
            }
            _ => range.sample(rng),
        };
        attributes.insert(name.clone(), value);
    }

    // Mental pass: independent draws.
    for (name, range) in &archetype.mental {
        attributes.insert(name.clone(), range.sample(rng));
    }

    // Position-specific pass: correlate against the first physical
    // attribute with a defined coefficient, in fixed table order.
    for (name, range) in &archetype.position_specific {
        let base = PHYSICAL_ATTRIBUTES.iter().copied().find(|physical| {
            coefficient(name, physical) != 0.0
                && attributes.contains_key(*physical)
                && archetype.physical.contains_key(*physical)
        });
        let value = match base {
            Some(physical) => {
                let base_range = &archetype.physical[physical];
                let base_value = attributes[physical] as f32;
                apply_correlation(rng, name, physical, base_value, base_range, range)
            }
            None => range.sample(rng),
        };
        attributes.insert(name.clone(), value);
    }

    attributes
}

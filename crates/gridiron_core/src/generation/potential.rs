//! Potential ceiling assignment, including late-round sleepers.

use crate::archetype::Archetype;
use rand::Rng;

const SLEEPER_MID_ROUND_CHANCE: f32 = 0.08;
const SLEEPER_LATE_ROUND_CHANCE: f32 = 0.05;

/// Ceiling overall a player can develop toward. Young players get a
/// bonus that grows with distance to the archetype's peak-age start;
/// players already at peak get only a token margin.
pub fn calculate_potential<R: Rng + ?Sized>(
    rng: &mut R,
    overall: u8,
    age: u8,
    archetype: &Archetype,
    draft_round: Option<u8>,
) -> u8 {
    let bonus = if age >= archetype.peak_ages.start {
        rng.gen_range(0..=3)
    } else {
        let years_to_peak = (archetype.peak_ages.start - age) as u32;
        rng.gen_range(3..=8 + years_to_peak.min(5))
    } as u8;

    let floor = overall.max(archetype.overall.max.saturating_sub(10));
    let mut potential = overall.saturating_add(bonus).min(99).max(floor);

    // Late-round sleeper: a small chance the scouting consensus missed.
    // Only ever raises the computed ceiling.
    if let Some(round) = draft_round {
        let sleeper_floor = match round {
            4 | 5 if rng.gen::<f32>() < SLEEPER_MID_ROUND_CHANCE => {
                Some(rng.gen_range(85..=92))
            }
            6 | 7 if rng.gen::<f32>() < SLEEPER_LATE_ROUND_CHANCE => {
                Some(rng.gen_range(88..95))
            }
            _ => None,
        };
        if let Some(value) = sleeper_floor {
            potential = potential.max(value);
        }
    }

    potential
}

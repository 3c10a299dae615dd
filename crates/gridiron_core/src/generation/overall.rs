//! Position-weighted overall calculation for freshly generated players.

use crate::models::{AttributeMap, Position, POTENTIAL_KEY};

/// Curated attribute weights per position. Each table sums to 1.0;
/// attributes missing from the map renormalize rather than count as zero.
pub fn overall_weights(position: Position) -> &'static [(&'static str, f32)] {
    match position {
        Position::QB => &[
            ("throw_accuracy", 0.25),
            ("throw_power", 0.15),
            ("awareness", 0.20),
            ("pocket_presence", 0.10),
            ("composure", 0.10),
            ("throw_on_run", 0.10),
            ("speed", 0.05),
            ("agility", 0.05),
        ],
        Position::RB => &[
            ("speed", 0.15),
            ("acceleration", 0.10),
            ("agility", 0.10),
            ("carrying", 0.10),
            ("break_tackle", 0.15),
            ("elusiveness", 0.15),
            ("vision", 0.15),
            ("awareness", 0.10),
        ],
        Position::WR => &[
            ("speed", 0.15),
            ("acceleration", 0.10),
            ("agility", 0.10),
            ("catching", 0.20),
            ("route_running", 0.20),
            ("release", 0.10),
            ("catch_in_traffic", 0.05),
            ("awareness", 0.10),
        ],
        Position::TE => &[
            ("catching", 0.20),
            ("route_running", 0.15),
            ("run_blocking", 0.20),
            ("strength", 0.10),
            ("speed", 0.10),
            ("size", 0.10),
            ("awareness", 0.15),
        ],
        Position::OL => &[
            ("run_blocking", 0.25),
            ("pass_blocking", 0.25),
            ("anchor", 0.15),
            ("strength", 0.15),
            ("awareness", 0.15),
            ("agility", 0.05),
        ],
        Position::DL => &[
            ("pass_rush", 0.25),
            ("block_shedding", 0.20),
            ("run_defense", 0.15),
            ("pursuit", 0.10),
            ("strength", 0.15),
            ("speed", 0.05),
            ("awareness", 0.10),
        ],
        Position::LB => &[
            ("tackling", 0.20),
            ("pursuit", 0.15),
            ("run_defense", 0.15),
            ("zone_coverage", 0.15),
            ("speed", 0.10),
            ("strength", 0.10),
            ("awareness", 0.15),
        ],
        Position::DB => &[
            ("man_coverage", 0.20),
            ("zone_coverage", 0.15),
            ("ball_skills", 0.15),
            ("press", 0.05),
            ("speed", 0.15),
            ("acceleration", 0.05),
            ("agility", 0.10),
            ("awareness", 0.15),
        ],
        Position::K => &[
            ("kick_power", 0.40),
            ("kick_accuracy", 0.45),
            ("composure", 0.15),
        ],
        Position::P => &[
            ("punt_power", 0.35),
            ("punt_accuracy", 0.35),
            ("hang_time", 0.15),
            ("composure", 0.15),
        ],
    }
}

/// Weighted overall over the curated subset. Falls back to an unweighted
/// mean of everything (potential excluded) when no weighted attribute is
/// present.
pub fn calculate_overall(position: Position, attributes: &AttributeMap) -> u8 {
    let weights = overall_weights(position);

    let mut weighted_sum = 0.0f32;
    let mut weight_sum = 0.0f32;
    for (name, weight) in weights {
        if let Some(&value) = attributes.get(*name) {
            weighted_sum += value as f32 * weight;
            weight_sum += weight;
        }
    }

    if weight_sum > 0.0 {
        return (weighted_sum / weight_sum).round().clamp(40.0, 99.0) as u8;
    }

    unweighted_mean(attributes)
}

fn unweighted_mean(attributes: &AttributeMap) -> u8 {
    let values: Vec<f32> = attributes
        .iter()
        .filter(|(name, _)| name.as_str() != POTENTIAL_KEY)
        .map(|(_, &value)| value as f32)
        .collect();
    if values.is_empty() {
        return 40;
    }
    (values.iter().sum::<f32>() / values.len() as f32).round().clamp(40.0, 99.0) as u8
}

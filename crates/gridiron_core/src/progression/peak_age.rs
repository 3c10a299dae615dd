//! Per-position development rate parameters.

use crate::archetype::PeakAgeWindow;
use crate::models::Position;
use serde::{Deserialize, Serialize};

/// Peak window plus how fast this position group rises into it and
/// falls out of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionRates {
    pub peak: PeakAgeWindow,
    pub growth_rate: f32,
    pub regression_rate: f32,
}

impl PositionRates {
    pub fn for_position(position: Position) -> Self {
        let (start, end, growth_rate, regression_rate) = match position {
            Position::QB => (27, 32, 1.00, 0.75),
            Position::RB => (23, 27, 1.20, 1.50),
            Position::WR => (24, 28, 1.10, 1.10),
            Position::TE => (25, 29, 1.00, 1.00),
            Position::OL => (26, 31, 0.90, 0.80),
            Position::DL => (25, 29, 1.00, 1.00),
            Position::LB => (25, 29, 1.00, 1.00),
            Position::DB => (24, 28, 1.10, 1.20),
            Position::K => (28, 34, 0.80, 0.50),
            Position::P => (28, 34, 0.80, 0.50),
        };
        Self { peak: PeakAgeWindow { start, end }, growth_rate, regression_rate }
    }

    /// Fallback for roster slots that do not parse to a known group.
    pub fn fallback() -> Self {
        Self {
            peak: PeakAgeWindow { start: 25, end: 29 },
            growth_rate: 1.0,
            regression_rate: 1.0,
        }
    }

    pub fn resolve(position: Option<Position>) -> Self {
        position.map(Self::for_position).unwrap_or_else(Self::fallback)
    }
}

//! Position taxonomy shared by generation and development.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roster position groups. Individual depth-chart slots (LT, RG, FS, ...)
/// collapse into their group before any rating math runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    OL,
    DL,
    LB,
    DB,
    K,
    P,
}

/// Attributes every player carries regardless of position.
pub const PHYSICAL_ATTRIBUTES: [&str; 7] =
    ["size", "speed", "acceleration", "agility", "strength", "stamina", "jumping"];

pub const MENTAL_ATTRIBUTES: [&str; 5] =
    ["awareness", "composure", "discipline", "leadership", "work_ethic"];

impl Position {
    pub const ALL: [Position; 10] = [
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::OL,
        Position::DL,
        Position::LB,
        Position::DB,
        Position::K,
        Position::P,
    ];

    /// Position-specific skill attributes generated for this group.
    pub fn specific_attributes(&self) -> &'static [&'static str] {
        match self {
            Position::QB => &["throw_power", "throw_accuracy", "throw_on_run", "pocket_presence"],
            Position::RB => &["carrying", "break_tackle", "elusiveness", "vision"],
            Position::WR => &["catching", "route_running", "release", "catch_in_traffic"],
            Position::TE => &["catching", "route_running", "run_blocking"],
            Position::OL => &["run_blocking", "pass_blocking", "anchor"],
            Position::DL => &["pass_rush", "block_shedding", "run_defense", "pursuit"],
            Position::LB => &["tackling", "pursuit", "run_defense", "zone_coverage"],
            Position::DB => &["man_coverage", "zone_coverage", "ball_skills", "press", "tackling"],
            Position::K => &["kick_power", "kick_accuracy"],
            Position::P => &["punt_power", "punt_accuracy", "hang_time"],
        }
    }

    /// Every attribute development touches for this group: the shared
    /// physical and mental sets plus the position-specific skills.
    /// Overall recalculation after a season averages over the same list.
    pub fn relevant_attributes(&self) -> Vec<&'static str> {
        PHYSICAL_ATTRIBUTES
            .iter()
            .chain(MENTAL_ATTRIBUTES.iter())
            .copied()
            .chain(self.specific_attributes().iter().copied())
            .collect()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::OL => "OL",
            Position::DL => "DL",
            Position::LB => "LB",
            Position::DB => "DB",
            Position::K => "K",
            Position::P => "P",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "QB" | "QUARTERBACK" => Ok(Position::QB),
            "RB" | "HB" | "FB" | "RUNNING_BACK" => Ok(Position::RB),
            "WR" | "WIDE_RECEIVER" => Ok(Position::WR),
            "TE" | "TIGHT_END" => Ok(Position::TE),
            "OL" | "LT" | "LG" | "C" | "RG" | "RT" | "OFFENSIVE_LINE" => Ok(Position::OL),
            "DL" | "DE" | "DT" | "NT" | "DEFENSIVE_LINE" => Ok(Position::DL),
            "LB" | "OLB" | "ILB" | "MLB" | "LINEBACKER" => Ok(Position::LB),
            "DB" | "CB" | "FS" | "SS" | "S" | "DEFENSIVE_BACK" => Ok(Position::DB),
            "K" | "KICKER" => Ok(Position::K),
            "P" | "PUNTER" => Ok(Position::P),
            _ => Err(format!("Invalid position: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_chart_slots_collapse_to_groups() {
        assert_eq!("LT".parse::<Position>().unwrap(), Position::OL);
        assert_eq!("ss".parse::<Position>().unwrap(), Position::DB);
        assert_eq!("MLB".parse::<Position>().unwrap(), Position::LB);
        assert!("XX".parse::<Position>().is_err());
    }

    #[test]
    fn test_relevant_attributes_cover_shared_sets() {
        for position in Position::ALL {
            let relevant = position.relevant_attributes();
            for name in PHYSICAL_ATTRIBUTES.iter().chain(MENTAL_ATTRIBUTES.iter()) {
                assert!(relevant.contains(name), "{} missing {}", position, name);
            }
            for name in position.specific_attributes() {
                assert!(relevant.contains(name), "{} missing {}", position, name);
            }
        }
    }
}

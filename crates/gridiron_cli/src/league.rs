//! In-memory league backing the CLI: roster store, history, and
//! depth-chart collaborators with no persistence behind them.

use chrono::NaiveDate;
use gridiron_core::{
    AttributeUpdate, CoreError, DepthChartGenerator, DevelopmentHistory, GeneratedPlayer,
    ProgressionRecord, RosterPlayer, RosterStore,
};
use std::collections::HashMap;

pub const TEAMS: [&str; 8] = [
    "Armadillos",
    "Bisons",
    "Comets",
    "Dreadnoughts",
    "Emperors",
    "Foxes",
    "Grizzlies",
    "Huskies",
];

#[derive(Default)]
pub struct MemoryRoster {
    players: Vec<RosterPlayer>,
}

impl MemoryRoster {
    /// Spread a generated class across the league's teams and convert
    /// each player into the roster representation.
    pub fn add_class(&mut self, season: u16, players: &[GeneratedPlayer]) {
        for (index, player) in players.iter().enumerate() {
            let team = TEAMS[index % TEAMS.len()];
            // Birthday placed before opening day so the derived age
            // matches the generated one in the signing season.
            let birth_year = season as i32 - player.age as i32;
            let birthdate = NaiveDate::from_ymd_opt(birth_year, 4, 15)
                .unwrap_or(NaiveDate::MIN);
            self.players.push(RosterPlayer {
                id: player.id.to_string(),
                first_name: player.first_name.clone(),
                last_name: player.last_name.clone(),
                team: team.to_string(),
                position: player.position.to_string(),
                attributes: player.attributes.clone(),
                birthdate,
                overall: player.overall,
                potential: player.potential(),
                archetype_id: Some(player.archetype_id.clone()),
            });
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn name_of(&self, player_id: &str) -> Option<String> {
        self.players
            .iter()
            .find(|player| player.id == player_id)
            .map(|player| format!("{} {}", player.first_name, player.last_name))
    }
}

impl RosterStore for MemoryRoster {
    fn players(&self) -> gridiron_core::Result<Vec<RosterPlayer>> {
        Ok(self.players.clone())
    }

    fn commit_updates(&mut self, updates: &[AttributeUpdate]) -> gridiron_core::Result<()> {
        let mut by_id: HashMap<&str, usize> = HashMap::new();
        for (index, player) in self.players.iter().enumerate() {
            by_id.insert(player.id.as_str(), index);
        }

        // Resolve everything before touching a single player so the
        // batch stays all-or-nothing.
        let mut resolved = Vec::with_capacity(updates.len());
        for update in updates {
            let Some(&index) = by_id.get(update.player_id.as_str()) else {
                return Err(CoreError::Store(format!("unknown player {}", update.player_id)));
            };
            resolved.push((index, update.attributes.clone()));
        }
        for (index, attributes) in resolved {
            self.players[index].attributes = attributes;
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryHistory {
    records: Vec<ProgressionRecord>,
}

impl DevelopmentHistory for MemoryHistory {
    fn record(&mut self, record: ProgressionRecord) -> gridiron_core::Result<()> {
        self.records.push(record);
        Ok(())
    }

    fn recent_for_player(&self, player_id: &str, limit: usize) -> Vec<ProgressionRecord> {
        let mut matches: Vec<ProgressionRecord> = self
            .records
            .iter()
            .filter(|record| record.player_id == player_id)
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.season.cmp(&a.season));
        matches.truncate(limit);
        matches
    }

    fn for_season(&self, season: u16) -> Vec<ProgressionRecord> {
        let mut matches: Vec<ProgressionRecord> = self
            .records
            .iter()
            .filter(|record| record.season == season)
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.overall_delta.cmp(&a.overall_delta));
        matches
    }

    fn delete_for_player(&mut self, player_id: &str) {
        self.records.retain(|record| record.player_id != player_id);
    }
}

#[derive(Default)]
pub struct MemoryDepthCharts {
    pub regenerated: usize,
}

impl DepthChartGenerator for MemoryDepthCharts {
    fn regenerate(&mut self, _team: &str) -> gridiron_core::Result<()> {
        self.regenerated += 1;
        Ok(())
    }
}

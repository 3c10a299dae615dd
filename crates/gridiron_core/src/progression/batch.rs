//! Season batch orchestration.
//!
//! Runs the development algorithm over everything the roster
//! collaborator supplies, commits attribute updates in one transaction,
//! then fans out to the best-effort history and depth-chart
//! collaborators.

use crate::archetype::{ArchetypeRegistry, DevelopmentCurve};
use crate::error::Result;
use crate::models::{AttributeMap, Position, RosterPlayer, POTENTIAL_KEY};
use crate::progression::age_category::AgeCategory;
use crate::progression::algorithm::{DevelopmentAlgorithm, ProgressionInput};
use crate::progression::{age_category, recalculate_overall, AttributeChange, PlayerDevelopmentResult};
use chrono::{Datelike, NaiveDate};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Keyed attribute-map update handed to the roster store. The whole
/// batch commits as one all-or-nothing transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeUpdate {
    pub player_id: String,
    pub attributes: AttributeMap,
}

/// One development-history record per changed player per season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionRecord {
    pub player_id: String,
    pub season: u16,
    pub age: u8,
    pub position: String,
    pub team: String,
    pub age_category: AgeCategory,
    pub overall_before: u8,
    pub overall_after: u8,
    pub overall_delta: i16,
    pub attribute_deltas: BTreeMap<String, i8>,
}

/// Supplies the in-scope player population and accepts the committed
/// attribute updates.
pub trait RosterStore {
    fn players(&self) -> Result<Vec<RosterPlayer>>;
    /// All-or-nothing: either every update lands or none do.
    fn commit_updates(&mut self, updates: &[AttributeUpdate]) -> Result<()>;
}

/// Development-history sink and query surface.
pub trait DevelopmentHistory {
    fn record(&mut self, record: ProgressionRecord) -> Result<()>;
    /// Newest first, at most `limit` records.
    fn recent_for_player(&self, player_id: &str, limit: usize) -> Vec<ProgressionRecord>;
    /// Whole season, ordered by overall delta descending.
    fn for_season(&self, season: u16) -> Vec<ProgressionRecord>;
    fn delete_for_player(&mut self, player_id: &str);
}

/// Rebuilds one team's depth chart from current ratings.
pub trait DepthChartGenerator {
    fn regenerate(&mut self, team: &str) -> Result<()>;
}

/// Aggregated outcome of one season batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchSummary {
    pub season: u16,
    pub players_processed: usize,
    pub improved: usize,
    pub declined: usize,
    pub unchanged: usize,
    pub by_age_category: BTreeMap<AgeCategory, usize>,
    /// (player id, overall delta), best first, at most ten.
    pub top_gainers: Vec<(String, i16)>,
    /// (player id, overall delta), worst first, at most ten.
    pub top_decliners: Vec<(String, i16)>,
    /// Non-fatal per-team failures: (team, message).
    pub depth_chart_failures: Vec<(String, String)>,
}

/// Drives one season of development for an entire population.
pub struct SeasonProgression<'a> {
    registry: &'a ArchetypeRegistry,
    algorithm: &'a dyn DevelopmentAlgorithm,
}

impl<'a> SeasonProgression<'a> {
    pub fn new(registry: &'a ArchetypeRegistry, algorithm: &'a dyn DevelopmentAlgorithm) -> Self {
        Self { registry, algorithm }
    }

    /// Age on the season's opening day (September 1).
    fn age_at_season(birthdate: NaiveDate, season: u16) -> u8 {
        let opening_day = NaiveDate::from_ymd_opt(season as i32, 9, 1)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(season as i32, 1, 1).unwrap_or(birthdate));
        let mut age = opening_day.year() - birthdate.year();
        if (opening_day.month(), opening_day.day()) < (birthdate.month(), birthdate.day()) {
            age -= 1;
        }
        age.clamp(0, u8::MAX as i32) as u8
    }

    pub fn run(
        &self,
        rng: &mut dyn RngCore,
        season: u16,
        roster: &mut dyn RosterStore,
        history: &mut dyn DevelopmentHistory,
        depth_charts: &mut dyn DepthChartGenerator,
    ) -> Result<BatchSummary> {
        let players = roster.players()?;
        log::info!("season {}: developing {} players", season, players.len());

        let mut summary = BatchSummary { season, ..Default::default() };
        let mut updates = Vec::new();
        let mut records = Vec::new();
        let mut teams = Vec::new();

        for player in &players {
            let result = self.develop_player(rng, player, season);

            summary.players_processed += 1;
            *summary.by_age_category.entry(result.age_category).or_insert(0) += 1;
            match result.overall_delta() {
                delta if delta > 0 => summary.improved += 1,
                delta if delta < 0 => summary.declined += 1,
                _ => summary.unchanged += 1,
            }

            if !teams.contains(&player.team) {
                teams.push(player.team.clone());
            }

            if result.changes.is_empty() {
                continue;
            }

            let mut attributes = player.attributes.clone();
            for change in &result.changes {
                attributes.insert(change.name.clone(), change.new_value);
            }
            updates.push(AttributeUpdate { player_id: player.id.clone(), attributes });

            records.push(ProgressionRecord {
                player_id: player.id.clone(),
                season,
                age: result.age,
                position: player.position.clone(),
                team: player.team.clone(),
                age_category: result.age_category,
                overall_before: result.old_overall,
                overall_after: result.new_overall,
                overall_delta: result.overall_delta(),
                attribute_deltas: result
                    .changes
                    .iter()
                    .map(|change| (change.name.clone(), change.delta))
                    .collect(),
            });

            log::debug!(
                "player {}: {} changes, overall {} -> {}",
                player.id,
                result.changes.len(),
                result.old_overall,
                result.new_overall
            );
        }

        // Top movers, by overall delta.
        let mut movers: Vec<(String, i16)> = records
            .iter()
            .map(|record| (record.player_id.clone(), record.overall_delta))
            .collect();
        movers.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        summary.top_gainers =
            movers.iter().filter(|(_, delta)| *delta > 0).take(10).cloned().collect();
        summary.top_decliners = movers
            .iter()
            .rev()
            .filter(|(_, delta)| *delta < 0)
            .take(10)
            .cloned()
            .collect();

        // The one blocking side effect. Failure here aborts the season
        // before any history or depth-chart work happens.
        roster.commit_updates(&updates)?;
        log::info!(
            "season {}: committed {} attribute updates ({} improved / {} declined / {} unchanged)",
            season,
            updates.len(),
            summary.improved,
            summary.declined,
            summary.unchanged
        );

        // History is best effort; a failed write must not undo the
        // committed updates.
        for record in records {
            let player_id = record.player_id.clone();
            if let Err(err) = history.record(record) {
                log::warn!("history write failed for player {}: {}", player_id, err);
            }
        }

        for team in teams {
            if let Err(err) = depth_charts.regenerate(&team) {
                summary.depth_chart_failures.push((team, err.to_string()));
            }
        }

        Ok(summary)
    }

    fn develop_player(
        &self,
        rng: &mut dyn RngCore,
        player: &RosterPlayer,
        season: u16,
    ) -> PlayerDevelopmentResult {
        let age = Self::age_at_season(player.birthdate, season);
        let position = Position::from_str(&player.position).ok();
        let potential = player
            .potential
            .or_else(|| player.attributes.get(POTENTIAL_KEY).copied())
            .unwrap_or_else(|| player.overall.saturating_add(5).min(99));
        let archetype_id = player.archetype_id.as_deref();

        let input = ProgressionInput {
            age,
            position,
            attributes: &player.attributes,
            potential: Some(potential),
            archetype_id,
        };
        let deltas = self.algorithm.develop(rng, &input);

        let mut updated = player.attributes.clone();
        let mut changes = Vec::with_capacity(deltas.len());
        for (name, delta) in deltas {
            let old_value = player.attributes.get(&name).copied().unwrap_or(0);
            let new_value = (old_value as i16 + delta as i16).clamp(0, 99) as u8;
            updated.insert(name.clone(), new_value);
            changes.push(AttributeChange { name, old_value, new_value, delta });
        }

        let new_overall = recalculate_overall(position, &updated, player.overall);
        let age_category =
            age_category::resolve(self.registry, age, position, archetype_id);
        let curve = archetype_id
            .and_then(|id| self.registry.by_id(id))
            .map(|archetype| archetype.curve)
            .unwrap_or(DevelopmentCurve::Normal);

        PlayerDevelopmentResult {
            player_id: player.id.clone(),
            age,
            age_category,
            old_overall: player.overall,
            new_overall,
            changes,
            potential,
            curve,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::progression::algorithm::AgeWeightedDevelopment;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[derive(Default)]
    struct MemoryRoster {
        players: Vec<RosterPlayer>,
        committed: Vec<AttributeUpdate>,
        fail_commit: bool,
        commits: usize,
    }

    impl RosterStore for MemoryRoster {
        fn players(&self) -> Result<Vec<RosterPlayer>> {
            Ok(self.players.clone())
        }

        fn commit_updates(&mut self, updates: &[AttributeUpdate]) -> Result<()> {
            if self.fail_commit {
                return Err(CoreError::Store("disk full".to_string()));
            }
            self.commits += 1;
            self.committed = updates.to_vec();
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryHistory {
        records: Vec<ProgressionRecord>,
        fail_writes: bool,
    }

    impl DevelopmentHistory for MemoryHistory {
        fn record(&mut self, record: ProgressionRecord) -> Result<()> {
            if self.fail_writes {
                return Err(CoreError::History("unreachable".to_string()));
            }
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
    struct MemoryDepthCharts {
        regenerated: Vec<String>,
        failing_team: Option<String>,
    }

    impl DepthChartGenerator for MemoryDepthCharts {
        fn regenerate(&mut self, team: &str) -> Result<()> {
            if self.failing_team.as_deref() == Some(team) {
                return Err(CoreError::DepthChart("no healthy starters".to_string()));
            }
            self.regenerated.push(team.to_string());
            Ok(())
        }
    }

    fn roster_player(id: &str, team: &str, position: &str, birth_year: i32) -> RosterPlayer {
        let parsed: Position = position.parse().unwrap_or(Position::WR);
        let attributes: AttributeMap = parsed
            .relevant_attributes()
            .into_iter()
            .map(|name| (name.to_string(), 72u8))
            .collect();
        RosterPlayer {
            id: id.to_string(),
            first_name: "Test".to_string(),
            last_name: id.to_string(),
            team: team.to_string(),
            position: position.to_string(),
            attributes,
            birthdate: NaiveDate::from_ymd_opt(birth_year, 4, 15).unwrap(),
            overall: 72,
            potential: Some(88),
            archetype_id: None,
        }
    }

    fn fixture_roster() -> MemoryRoster {
        MemoryRoster {
            players: vec![
                roster_player("young_rb", "Ravens", "RB", 2004),
                roster_player("prime_qb", "Ravens", "QB", 1996),
                roster_player("old_dl", "Jets", "DL", 1991),
                roster_player("old_wr", "Jets", "WR", 1992),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_batch_commits_once_and_aggregates() {
        let registry = ArchetypeRegistry::builtin();
        let algorithm = AgeWeightedDevelopment::new(&registry);
        let progression = SeasonProgression::new(&registry, &algorithm);
        let mut roster = fixture_roster();
        let mut history = MemoryHistory::default();
        let mut depth_charts = MemoryDepthCharts::default();
        let mut rng = ChaCha8Rng::seed_from_u64(127);

        let summary = progression
            .run(&mut rng, 2025, &mut roster, &mut history, &mut depth_charts)
            .unwrap();

        assert_eq!(summary.season, 2025);
        assert_eq!(summary.players_processed, 4);
        assert_eq!(summary.improved + summary.declined + summary.unchanged, 4);
        assert_eq!(roster.commits, 1);
        assert_eq!(roster.committed.len(), history.records.len());
        assert!(summary.by_age_category.values().sum::<usize>() == 4);

        // Both teams got a depth-chart rebuild, exactly once each.
        assert_eq!(depth_charts.regenerated.len(), 2);
        assert!(depth_charts.regenerated.contains(&"Ravens".to_string()));
        assert!(depth_charts.regenerated.contains(&"Jets".to_string()));
        assert!(summary.depth_chart_failures.is_empty());

        // Committed updates never violate the rating scale or ceiling.
        for update in &roster.committed {
            for (name, value) in &update.attributes {
                if name == POTENTIAL_KEY {
                    continue;
                }
                assert!((40..=99).contains(value), "{} = {}", name, value);
                assert!(*value <= 88);
            }
        }
    }

    #[test]
    fn test_commit_failure_rolls_back_everything_downstream() {
        let registry = ArchetypeRegistry::builtin();
        let algorithm = AgeWeightedDevelopment::new(&registry);
        let progression = SeasonProgression::new(&registry, &algorithm);
        let mut roster = fixture_roster();
        roster.fail_commit = true;
        let mut history = MemoryHistory::default();
        let mut depth_charts = MemoryDepthCharts::default();
        let mut rng = ChaCha8Rng::seed_from_u64(131);

        let outcome =
            progression.run(&mut rng, 2025, &mut roster, &mut history, &mut depth_charts);

        assert!(outcome.is_err());
        assert!(roster.committed.is_empty());
        assert!(history.records.is_empty(), "history written despite failed commit");
        assert!(depth_charts.regenerated.is_empty());
    }

    #[test]
    fn test_history_failure_is_non_fatal() {
        let registry = ArchetypeRegistry::builtin();
        let algorithm = AgeWeightedDevelopment::new(&registry);
        let progression = SeasonProgression::new(&registry, &algorithm);
        let mut roster = fixture_roster();
        let mut history = MemoryHistory { fail_writes: true, ..Default::default() };
        let mut depth_charts = MemoryDepthCharts::default();
        let mut rng = ChaCha8Rng::seed_from_u64(137);

        let summary = progression
            .run(&mut rng, 2025, &mut roster, &mut history, &mut depth_charts)
            .unwrap();

        assert_eq!(roster.commits, 1, "attribute commit must survive history failure");
        assert!(history.records.is_empty());
        assert_eq!(summary.depth_chart_failures.len(), 0);
    }

    #[test]
    fn test_depth_chart_failures_collected_not_raised() {
        let registry = ArchetypeRegistry::builtin();
        let algorithm = AgeWeightedDevelopment::new(&registry);
        let progression = SeasonProgression::new(&registry, &algorithm);
        let mut roster = fixture_roster();
        let mut history = MemoryHistory::default();
        let mut depth_charts =
            MemoryDepthCharts { failing_team: Some("Jets".to_string()), ..Default::default() };
        let mut rng = ChaCha8Rng::seed_from_u64(139);

        let summary = progression
            .run(&mut rng, 2025, &mut roster, &mut history, &mut depth_charts)
            .unwrap();

        assert_eq!(summary.depth_chart_failures.len(), 1);
        assert_eq!(summary.depth_chart_failures[0].0, "Jets");
        assert_eq!(depth_charts.regenerated, vec!["Ravens".to_string()]);
    }

    #[test]
    fn test_history_queries_order_and_limit() {
        let mut history = MemoryHistory::default();
        for (season, delta) in [(2023u16, 1i16), (2024, -2), (2025, 3)] {
            history
                .record(ProgressionRecord {
                    player_id: "p1".to_string(),
                    season,
                    age: 25,
                    position: "RB".to_string(),
                    team: "Bears".to_string(),
                    age_category: AgeCategory::Prime,
                    overall_before: 70,
                    overall_after: (70i16 + delta) as u8,
                    overall_delta: delta,
                    attribute_deltas: BTreeMap::new(),
                })
                .unwrap();
        }

        let recent = history.recent_for_player("p1", 2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].season, 2025);
        assert_eq!(recent[1].season, 2024);

        history.delete_for_player("p1");
        assert!(history.recent_for_player("p1", 10).is_empty());
    }

    #[test]
    fn test_age_derivation_counts_birthday_before_opening_day() {
        // Born April 15: birthday has passed by September 1.
        let birthdate = NaiveDate::from_ymd_opt(2000, 4, 15).unwrap();
        assert_eq!(SeasonProgression::age_at_season(birthdate, 2025), 25);

        // Born December 1: birthday still ahead on September 1.
        let late_birthdate = NaiveDate::from_ymd_opt(2000, 12, 1).unwrap();
        assert_eq!(SeasonProgression::age_at_season(late_birthdate, 2025), 24);
    }
}


//! Gridiron CLI
//!
//! Demo driver for the engine: roll a draft class, or seed a small
//! league and watch it develop season over season.

mod league;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gridiron_core::progression::recalculate_overall;
use gridiron_core::{
    generate_draft_class, AgeWeightedDevelopment, ArchetypeRegistry, SeasonProgression,
};
use league::{MemoryDepthCharts, MemoryHistory, MemoryRoster};
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "gridiron")]
#[command(about = "Generate players and simulate development seasons", long_about = None)]
struct Cli {
    /// Extra archetype definitions layered over the built-in set
    #[arg(long)]
    archetypes: Option<PathBuf>,

    /// RNG seed; identical seeds reproduce identical leagues
    #[arg(long, default_value_t = 7)]
    seed: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one draft class and print the first round
    Draft {
        #[arg(long, default_value_t = 2025)]
        season: u16,
    },
    /// Seed a league from a draft class and run development seasons
    Develop {
        #[arg(long, default_value_t = 2025)]
        start_season: u16,

        #[arg(long, default_value_t = 5)]
        seasons: u16,
    },
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    let mut registry = ArchetypeRegistry::builtin();
    if let Some(dir) = &cli.archetypes {
        let added = registry.load_from_dir(dir)?;
        info!("loaded {} extra archetypes from {}", added, dir.display());
    }

    let mut rng = gridiron_core::sampling::seeded(cli.seed);

    match cli.command {
        Commands::Draft { season } => run_draft(&mut rng, &registry, season),
        Commands::Develop { start_season, seasons } => {
            run_develop(&mut rng, &registry, start_season, seasons)
        }
    }
}

fn run_draft(rng: &mut ChaCha8Rng, registry: &ArchetypeRegistry, season: u16) -> Result<()> {
    let class = generate_draft_class(rng, registry, season)?;
    info!("{} draft class: {} players", class.season, class.players.len());

    println!("Round 1, {}:", class.season);
    for player in class.players.iter().filter(|p| p.draft_round == Some(1)) {
        println!(
            "  {:>3}. {:<22} {:>2}  ovr {:>2}  pot {:>2}  ({})",
            player.draft_pick.unwrap_or(0),
            player.full_name(),
            player.position,
            player.overall,
            player.potential().unwrap_or(player.overall),
            player.archetype_id,
        );
    }

    let sleepers: Vec<_> = class
        .players
        .iter()
        .filter(|p| {
            p.draft_round.unwrap_or(0) >= 4
                && p.potential().unwrap_or(0) >= p.overall.saturating_add(15)
        })
        .collect();
    println!("\n{} late-round sleepers:", sleepers.len());
    for player in sleepers {
        println!(
            "  round {}: {} ({}) ovr {} pot {}",
            player.draft_round.unwrap_or(0),
            player.full_name(),
            player.position,
            player.overall,
            player.potential().unwrap_or(0),
        );
    }

    Ok(())
}

fn run_develop(
    rng: &mut ChaCha8Rng,
    registry: &ArchetypeRegistry,
    start_season: u16,
    seasons: u16,
) -> Result<()> {
    let mut roster = MemoryRoster::default();
    let class = generate_draft_class(rng, registry, start_season)?;
    roster.add_class(start_season, &class.players);
    info!("seeded {} players across {} teams", roster.len(), league::TEAMS.len());

    let algorithm = AgeWeightedDevelopment::new(registry);
    let progression = SeasonProgression::new(registry, &algorithm);
    let mut history = MemoryHistory::default();
    let mut depth_charts = MemoryDepthCharts::default();

    for season in start_season..start_season + seasons {
        let summary =
            progression.run(rng, season, &mut roster, &mut history, &mut depth_charts)?;

        println!(
            "season {}: {} improved / {} declined / {} unchanged",
            summary.season, summary.improved, summary.declined, summary.unchanged
        );
        for (category, count) in &summary.by_age_category {
            println!("  {:<8} {}", category.to_string(), count);
        }
        if let Some((player_id, delta)) = summary.top_gainers.first() {
            let name = roster.name_of(player_id).unwrap_or_else(|| player_id.clone());
            println!("  biggest riser: {} (+{})", name, delta);
        }
        if let Some((player_id, delta)) = summary.top_decliners.first() {
            let name = roster.name_of(player_id).unwrap_or_else(|| player_id.clone());
            println!("  steepest fall: {} ({})", name, delta);
        }
    }

    print_final_board(&roster)?;
    Ok(())
}

fn print_final_board(roster: &MemoryRoster) -> Result<()> {
    use gridiron_core::{Position, RosterStore};

    let mut players = roster.players()?;
    players.sort_by(|a, b| {
        let a_overall = recalculate_overall(
            Position::from_str(&a.position).ok(),
            &a.attributes,
            a.overall,
        );
        let b_overall = recalculate_overall(
            Position::from_str(&b.position).ok(),
            &b.attributes,
            b.overall,
        );
        b_overall.cmp(&a_overall)
    });

    println!("\ntop of the board after development:");
    for player in players.iter().take(10) {
        let overall = recalculate_overall(
            Position::from_str(&player.position).ok(),
            &player.attributes,
            player.overall,
        );
        println!(
            "  {:<22} {:>2}  {:<12} ovr {}",
            format!("{} {}", player.first_name, player.last_name),
            player.position,
            player.team,
            overall,
        );
    }
    Ok(())
}

//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series -- --games 10 --depth1 3 --depth2 2`
//! A depth of 0 selects the random engine for that player.

use chess_logic::engines::engine_minimax::MinimaxEngine;
use chess_logic::engines::engine_random::RandomEngine;
use chess_logic::engines::engine_trait::Engine;
use chess_logic::errors::EngineError;
use chess_logic::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Play a seeded series of engine-vs-engine games")]
struct Args {
    #[arg(long, default_value_t = 10)]
    games: u16,

    #[arg(long, default_value_t = 1234)]
    seed: u64,

    #[arg(long, default_value_t = 200)]
    max_plies: u16,

    #[arg(long, default_value_t = 4)]
    opening_plies: u8,

    /// Search depth for player 1 (0 = random mover).
    #[arg(long, default_value_t = 3)]
    depth1: u8,

    /// Search depth for player 2 (0 = random mover).
    #[arg(long, default_value_t = 2)]
    depth2: u8,

    /// Log every game result.
    #[arg(short, long)]
    verbose: bool,
}

fn engine_for(depth: u8) -> Box<dyn Engine> {
    if depth == 0 {
        Box::new(RandomEngine::new())
    } else {
        Box::new(MinimaxEngine::new(depth))
    }
}

fn main() -> Result<(), EngineError> {
    let args = Args::parse();
    let default_level = if args.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let stats = play_engine_match_series(
        || engine_for(args.depth1),
        || engine_for(args.depth2),
        MatchSeriesConfig {
            games: args.games,
            base_seed: args.seed,
            per_game: MatchConfig {
                max_plies: args.max_plies,
                opening_random_plies: args.opening_plies,
                ..MatchConfig::default()
            },
        },
    )?;

    println!("{}", stats.report());
    println!("winners: {:?}", stats.winners);
    Ok(())
}

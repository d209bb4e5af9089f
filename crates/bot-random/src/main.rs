//! Random move bot - plays random legal games against itself.

use bot_random::{play_game, SelfPlayConfig};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Plays random legal chess games and reports how they ended.
#[derive(Parser, Debug)]
#[command(name = "bot-random", version)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value_os_t = SelfPlayConfig::default_path())]
    config: PathBuf,

    /// Number of games to play (overrides the config file).
    #[arg(short, long)]
    games: Option<u32>,

    /// Ply limit per game (overrides the config file).
    #[arg(long)]
    max_plies: Option<u32>,

    /// Seed for reproducible games (overrides the config file).
    #[arg(long)]
    seed: Option<u64>,

    /// Print one JSON summary per game on stdout.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match SelfPlayConfig::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(games) = args.games {
        config.games = games;
    }
    if let Some(max_plies) = args.max_plies {
        config.max_plies = max_plies;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    tracing::info!(?config, "starting self-play");

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for number in 1..=config.games {
        let summary = play_game(number, config.max_plies, &mut rng);
        if args.json {
            match serde_json::to_string(&summary) {
                Ok(line) => println!("{}", line),
                Err(e) => {
                    tracing::error!("Failed to serialize summary: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    ExitCode::SUCCESS
}

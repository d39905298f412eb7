//! # Platforms & Programmers Main Entry Point
//!
//! Parses the command line, sets up logging, assembles the band and hands the
//! game to either the terminal engine or the headless auto engine.

use clap::Parser;
use log::{info, LevelFilter};
use pnp::{
    config, AutoEngine, CsvLeaderboard, Game, GameConfig, LoopExit, Player, PnpError, PnpResult,
    RunExit, ScoringPolicy, TerminalEngine,
};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

/// Names handed out to minions, in order.
const MINION_NAMES: [&str; 5] = ["Kevin", "Stuart", "Bob", "Dave", "Jerry"];

/// The band's product manager.
const MANAGER_NAME: &str = "Sir Tan Lee Knot";

/// Command line arguments for Platforms & Programmers.
#[derive(Parser, Debug)]
#[command(name = "pnp")]
#[command(about = "A band of developers will attempt to survive against PRODUCTION")]
#[command(version)]
struct Args {
    /// Random seed for the game (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Leaderboard CSV file
    #[arg(long, default_value = config::DEFAULT_LEADERBOARD_PATH)]
    leaderboard: PathBuf,

    /// Number of minions in the band
    #[arg(short, long, default_value_t = config::DEFAULT_MINIONS)]
    minions: usize,

    /// Leave the product manager at home
    #[arg(long)]
    no_manager: bool,

    /// Full rounds the band must survive to win (default: play until you quit)
    #[arg(long)]
    rounds_to_win: Option<u32>,

    /// How the score is recomputed every turn
    #[arg(long, value_enum, default_value_t = ScoringPolicy::Progress)]
    scoring: ScoringPolicy,

    /// Let the computer play without a terminal UI
    #[arg(long)]
    auto: bool,

    /// Band name used in auto mode
    #[arg(long, default_value = config::DEFAULT_BAND_NAME)]
    band_name: String,

    /// Turns played in auto mode
    #[arg(long, default_value_t = 50)]
    max_turns: u64,

    /// Print one JSON game snapshot per turn in auto mode
    #[arg(long)]
    json: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> PnpResult<()> {
    initialize_logging(args)?;

    info!("Starting Platforms & Programmers v{}", pnp::VERSION);

    let seed = args.seed.unwrap_or_else(rand::random);
    let game_config = GameConfig {
        seed,
        starting_coins: config::STARTING_COINS,
        scoring: args.scoring,
        rounds_to_win: args.rounds_to_win,
    };
    let mut game = Game::with_config(assemble_band(args.minions, !args.no_manager), game_config)?;
    let store = CsvLeaderboard::new(&args.leaderboard);

    info!("Seed {}, leaderboard at {}", seed, store.path().display());

    let exit = if args.auto {
        let mut engine = AutoEngine::new(args.band_name.clone(), args.max_turns, seed);
        if args.json {
            engine = engine.with_snapshots(Box::new(std::io::stdout()));
        }
        let exit = game.run(&mut engine, &store);
        if !args.json {
            for line in &engine.transcript {
                println!("{line}");
            }
        }
        exit
    } else {
        let mut engine = TerminalEngine::new(seed)?;
        let exit = game.run(&mut engine, &store);
        engine.restore()?;
        exit
    };

    match exit {
        RunExit::NoBand => println!("No band, no game."),
        RunExit::Finished(reason) => {
            let ending = match reason {
                LoopExit::Declined => "left the stage",
                LoopExit::GameOver => "was wiped out",
                LoopExit::GameWon => "survived PRODUCTION",
            };
            println!(
                "{} {} after {} turns with a score of {}",
                game.band_name, ending, game.turns_played, game.score
            );
        }
    }

    Ok(())
}

/// Builds the band: `minions` minions followed by the product manager.
fn assemble_band(minions: usize, with_manager: bool) -> Vec<Player> {
    let mut band: Vec<Player> = (0..minions)
        .map(|i| {
            let name = MINION_NAMES[i % MINION_NAMES.len()];
            if i < MINION_NAMES.len() {
                Player::minion(name)
            } else {
                Player::minion(format!("{} {}", name, i / MINION_NAMES.len() + 1))
            }
        })
        .collect();
    if with_manager {
        band.push(Player::manager(MANAGER_NAME));
    }
    band
}

/// Initializes logging. The terminal UI owns stdout and stderr, so
/// interactive games only log when a log file is given.
fn initialize_logging(args: &Args) -> PnpResult<()> {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(&args.log_level);

    match &args.log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None if args.auto => {
            builder.target(env_logger::Target::Stderr);
        }
        None => {
            builder.filter_level(LevelFilter::Off);
        }
    }

    builder
        .try_init()
        .map_err(|e| PnpError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pnp::Role;

    #[test]
    fn test_assemble_band_puts_manager_last() {
        let band = assemble_band(2, true);
        assert_eq!(band.len(), 3);
        assert_eq!(band[0].name, "Kevin");
        assert_eq!(band[1].name, "Stuart");
        assert_eq!(band[2].role, Role::ProductManager);
    }

    #[test]
    fn test_assemble_band_numbers_repeated_names() {
        let band = assemble_band(6, false);
        assert_eq!(band.len(), 6);
        assert_eq!(band[5].name, "Kevin 2");
        assert!(band.iter().all(|p| p.role == Role::Minion));
    }

    #[test]
    fn test_args_parse_defaults() {
        let args = Args::parse_from(["pnp"]);
        assert_eq!(args.minions, config::DEFAULT_MINIONS);
        assert_eq!(args.scoring, ScoringPolicy::Progress);
        assert!(!args.auto);
        assert_eq!(args.leaderboard, PathBuf::from(config::DEFAULT_LEADERBOARD_PATH));
    }

    #[test]
    fn test_args_parse_auto_mode() {
        let args = Args::parse_from([
            "pnp",
            "--auto",
            "--seed",
            "7",
            "--scoring",
            "random",
            "--rounds-to-win",
            "3",
        ]);
        assert!(args.auto);
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.scoring, ScoringPolicy::Random);
        assert_eq!(args.rounds_to_win, Some(3));
    }
}

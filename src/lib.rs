//! # Platforms & Programmers
//!
//! A small turn-based terminal game in which a band of developers takes turns
//! choosing actions against an escalating PRODUCTION.
//!
//! ## Architecture Overview
//!
//! The crate keeps game rules apart from presentation:
//!
//! - **Game**: the turn engine, owning coins, players, score and production mood
//! - **Players & Actions**: tagged player roles producing fresh action menus each turn
//! - **Engine**: the presentation contract the turn loop calls into
//! - **Leaderboard**: a CSV-backed score store consulted at the start and end of a run
//! - **Rendering**: a ratatui terminal engine implementing [`Engine`]

pub mod engine;
pub mod game;
pub mod input;
pub mod leaderboard;
pub mod rendering;

pub use engine::*;
pub use game::*;
pub use input::*;
pub use leaderboard::*;
pub use rendering::*;

/// Core error type for the Platforms & Programmers game.
#[derive(thiserror::Error, Debug)]
pub enum PnpError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// The game was set up in a way it cannot be played
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Terminal setup or drawing failed
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Logger could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type used throughout the crate.
pub type PnpResult<T> = Result<T, PnpError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Coins the band starts every run with
    pub const STARTING_COINS: u32 = 10;

    /// Number of leaderboard entries shown on the welcome screen
    pub const LEADERBOARD_SIZE: usize = 10;

    /// Exclusive upper bound of the legacy random score draw
    pub const RANDOM_SCORE_CEILING: u64 = 10_000;

    /// Band name used when the player leaves the prompt blank
    pub const DEFAULT_BAND_NAME: &str = "Cool Band";

    /// Leaderboard file used when none is given on the command line
    pub const DEFAULT_LEADERBOARD_PATH: &str = "allscores.csv";

    /// Minions joining the manager when the band is assembled from the CLI
    pub const DEFAULT_MINIONS: usize = 2;
}

//! # Engine Module
//!
//! The contract between the turn loop and whatever presents the game.
//!
//! The game asks, the engine answers. Every prompting method returns the
//! player's answer once it exists; returning `None` or `false` declines the
//! prompt and ends the run.

pub mod auto;

pub use auto::*;

use crate::game::{Action, Game, Outcome, Player};
use crate::leaderboard::ScoreEntry;

/// Presentation and interaction collaborator driven by [`Game::run`].
pub trait Engine {
    /// Shows the leaderboard and asks for a band name.
    ///
    /// Returns `None` when the player leaves instead.
    fn welcome(&mut self, leaderboard: &[ScoreEntry]) -> Option<String>;

    /// Shows the game as it stands at the start of a turn.
    fn render_game(&mut self, game: &Game);

    /// Lets `player` pick one of `actions`, returning its index.
    ///
    /// `actions` is never empty. Returns `None` to stop playing.
    fn select_action(&mut self, game: &Game, player: &Player, actions: &[Action])
        -> Option<usize>;

    /// Shows the outcome of the chosen action and waits for acknowledgement.
    ///
    /// Returns `false` to stop playing.
    fn render_outcome(&mut self, outcome: &Outcome) -> bool;

    /// Announces that the band has been wiped out.
    fn game_over(&mut self, game: &Game);

    /// Announces that the band survived.
    fn game_won(&mut self, game: &Game);
}

//! # Auto Engine
//!
//! Headless engine that plays the game on its own. Used for AI player mode
//! from the command line and for driving the turn loop in tests.

use crate::engine::Engine;
use crate::game::{Action, Game, Outcome, Player};
use crate::leaderboard::ScoreEntry;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;

/// Engine that answers every prompt by itself.
///
/// Picks uniformly among the offered actions and stops after a fixed number
/// of completed turns.
///
/// # Examples
///
/// ```
/// use pnp::{AutoEngine, Game, GameConfig, LoopExit, Player};
///
/// let mut game = Game::with_config(vec![Player::minion("Kevin")], GameConfig::for_testing(3)).unwrap();
/// let mut engine = AutoEngine::new("Bots", 5, 3);
/// assert_eq!(game.main_loop(&mut engine), LoopExit::Declined);
/// assert_eq!(game.turns_played, 5);
/// ```
pub struct AutoEngine {
    /// Band name given on the welcome screen
    pub band_name: String,
    /// Completed turns after which the engine stops selecting actions
    pub max_turns: u64,
    /// Turns acknowledged so far
    pub turns: u64,
    /// Everything the engine was told, in order
    pub transcript: Vec<String>,
    /// Leaderboard shown on the welcome screen
    pub leaderboard_seen: Vec<ScoreEntry>,
    rng: StdRng,
    snapshots: Option<Box<dyn Write>>,
}

impl AutoEngine {
    /// Creates an engine that plays `max_turns` turns as `band_name`.
    pub fn new(band_name: impl Into<String>, max_turns: u64, seed: u64) -> Self {
        Self {
            band_name: band_name.into(),
            max_turns,
            turns: 0,
            transcript: Vec::new(),
            leaderboard_seen: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
            snapshots: None,
        }
    }

    /// Writes one JSON snapshot line per rendered turn to `sink`.
    pub fn with_snapshots(mut self, sink: Box<dyn Write>) -> Self {
        self.snapshots = Some(sink);
        self
    }

    fn write_snapshot(&mut self, game: &Game) {
        let Some(sink) = self.snapshots.as_mut() else {
            return;
        };
        let written = serde_json::to_writer(&mut *sink, &game.snapshot())
            .map_err(crate::PnpError::from)
            .and_then(|()| writeln!(sink).map_err(crate::PnpError::from));
        if let Err(e) = written {
            warn!("Dropping snapshot output: {}", e);
            self.snapshots = None;
        }
    }
}

impl Engine for AutoEngine {
    fn welcome(&mut self, leaderboard: &[ScoreEntry]) -> Option<String> {
        self.leaderboard_seen = leaderboard.to_vec();
        self.transcript.push(format!("welcome: {}", self.band_name));
        Some(self.band_name.clone())
    }

    fn render_game(&mut self, game: &Game) {
        self.write_snapshot(game);
    }

    fn select_action(
        &mut self,
        _game: &Game,
        player: &Player,
        actions: &[Action],
    ) -> Option<usize> {
        if self.turns >= self.max_turns || actions.is_empty() {
            return None;
        }
        let choice = self.rng.gen_range(0..actions.len());
        info!("{} picks '{}'", player, actions[choice]);
        Some(choice)
    }

    fn render_outcome(&mut self, outcome: &Outcome) -> bool {
        self.turns += 1;
        self.transcript.push(outcome.to_string());
        true
    }

    fn game_over(&mut self, game: &Game) {
        self.transcript
            .push(format!("game over: {} scored {}", game.band_name, game.score));
    }

    fn game_won(&mut self, game: &Game) {
        self.transcript
            .push(format!("game won: {} scored {}", game.band_name, game.score));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, LoopExit};

    #[test]
    fn test_auto_engine_stops_after_max_turns() {
        let mut game = Game::with_config(
            vec![Player::minion("Kevin"), Player::minion("Stuart")],
            GameConfig::for_testing(11),
        )
        .unwrap();
        let mut engine = AutoEngine::new("Bots", 7, 11);

        assert_eq!(game.main_loop(&mut engine), LoopExit::Declined);
        assert_eq!(engine.turns, 7);
        assert_eq!(engine.transcript.len(), 7);
        assert_eq!(game.turns_played, 7);
        assert_eq!(game.current_player, 1);
    }

    #[test]
    fn test_zero_turns_declines_immediately() {
        let mut game =
            Game::with_config(vec![Player::minion("Kevin")], GameConfig::for_testing(2)).unwrap();
        let mut engine = AutoEngine::new("Bots", 0, 2);
        assert_eq!(game.main_loop(&mut engine), LoopExit::Declined);
        assert_eq!(game.turns_played, 0);
        assert!(engine.transcript.is_empty());
    }

    #[test]
    fn test_same_seed_same_transcript() {
        let play = || {
            let mut game = Game::with_config(
                vec![Player::minion("Kevin"), Player::manager("Boss")],
                GameConfig::for_testing(5),
            )
            .unwrap();
            let mut engine = AutoEngine::new("Bots", 20, 5);
            game.main_loop(&mut engine);
            engine.transcript
        };
        assert_eq!(play(), play());
    }
}

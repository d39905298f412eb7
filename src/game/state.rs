//! # Game State Module
//!
//! The [`Game`] aggregate and the knobs it is created with.
//!
//! A game is created once per run with a fixed band of players, mutated by
//! one action per turn, and thrown away after its score has been persisted.

use crate::config;
use crate::game::{Player, ProductionState};
use crate::leaderboard::ScoreEntry;
use crate::{PnpError, PnpResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// How the per-turn score is recomputed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum ScoringPolicy {
    /// Score reflects turns survived, coins kept and band members still standing
    #[default]
    Progress,
    /// Uniform draw in `[0, RANDOM_SCORE_CEILING)` from the game's generator
    Random,
}

/// Configuration a game is created with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the game's random number generator
    pub seed: u64,
    /// Coins in the band's purse at the start of the run
    pub starting_coins: u32,
    /// Score recomputation rule
    pub scoring: ScoringPolicy,
    /// Full rounds the band must survive to win; `None` plays until the engine stops
    pub rounds_to_win: Option<u32>,
}

impl GameConfig {
    /// Creates the standard configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use pnp::{GameConfig, ScoringPolicy};
    ///
    /// let config = GameConfig::new(42);
    /// assert_eq!(config.starting_coins, 10);
    /// assert_eq!(config.scoring, ScoringPolicy::Progress);
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            starting_coins: config::STARTING_COINS,
            scoring: ScoringPolicy::Progress,
            rounds_to_win: None,
        }
    }

    /// Creates a configuration for tests with the given seed.
    pub fn for_testing(seed: u64) -> Self {
        Self::new(seed)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

/// Where the run stands after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// The band keeps going
    Playing,
    /// The band survived the required number of rounds
    Won,
    /// Nobody in the band is left standing
    Lost,
}

/// A Platforms & Programmers game: a band of players taking on PRODUCTION.
#[derive(Debug, Clone)]
pub struct Game {
    /// Name the band chose on the welcome screen
    pub band_name: String,
    /// The band, in turn order
    pub players: Vec<Player>,
    /// Coins in the band's purse
    pub coins: u32,
    /// Index of the player whose turn it is
    pub current_player: usize,
    /// How upset PRODUCTION is
    pub production: ProductionState,
    /// Score as of the start of the current turn
    pub score: u64,
    /// Completed turns since the run started
    pub turns_played: u64,
    /// Configuration the game was created with
    pub config: GameConfig,
    rng: StdRng,
}

impl Game {
    /// Creates a game with a freshly seeded generator.
    ///
    /// # Errors
    ///
    /// Returns [`PnpError::InvalidConfiguration`] when `players` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use pnp::{Game, Player, ProductionState};
    ///
    /// let game = Game::new(vec![Player::minion("Kevin"), Player::manager("Boss")]).unwrap();
    /// assert_eq!(game.coins, 10);
    /// assert_eq!(game.current_player, 0);
    /// assert_eq!(game.production, ProductionState::Calm);
    ///
    /// assert!(Game::new(Vec::new()).is_err());
    /// ```
    pub fn new(players: Vec<Player>) -> PnpResult<Self> {
        Self::with_config(players, GameConfig::new(rand::random()))
    }

    /// Creates a game from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PnpError::InvalidConfiguration`] when `players` is empty or
    /// a win condition of zero rounds is requested.
    pub fn with_config(players: Vec<Player>, config: GameConfig) -> PnpResult<Self> {
        if players.is_empty() {
            return Err(PnpError::InvalidConfiguration(
                "a band needs at least one player".to_string(),
            ));
        }
        if config.rounds_to_win == Some(0) {
            return Err(PnpError::InvalidConfiguration(
                "rounds to win must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            band_name: String::new(),
            players,
            coins: config.starting_coins,
            current_player: 0,
            production: ProductionState::Calm,
            score: 0,
            turns_played: 0,
            rng: StdRng::seed_from_u64(config.seed),
            config,
        })
    }

    /// The player whose turn it is.
    pub fn current(&self) -> &Player {
        &self.players[self.current_player]
    }

    /// Moves the turn to the next player, wrapping around the band.
    pub fn advance_player(&mut self) {
        self.current_player = (self.current_player + 1) % self.players.len();
        self.turns_played += 1;
    }

    /// Number of players still in the game.
    pub fn alive_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_alive()).count()
    }

    /// Returns true when no player is left standing.
    pub fn all_players_dead(&self) -> bool {
        self.players.iter().all(|p| !p.is_alive())
    }

    /// Full rounds completed, where a round gives every player one turn.
    pub fn rounds_completed(&self) -> u64 {
        self.turns_played / self.players.len() as u64
    }

    /// Checks the end conditions against the current state.
    pub fn status(&self) -> GameStatus {
        if self.all_players_dead() {
            return GameStatus::Lost;
        }
        match self.config.rounds_to_win {
            Some(rounds) if self.rounds_completed() >= u64::from(rounds) => GameStatus::Won,
            _ => GameStatus::Playing,
        }
    }

    /// Score the band has earned so far under [`ScoringPolicy::Progress`].
    pub fn progress_score(&self) -> u64 {
        let earned = self.turns_played * 100
            + u64::from(self.coins) * 10
            + self.alive_count() as u64 * 50;
        earned.saturating_sub(self.production.level() * 100)
    }

    /// Recomputes [`Game::score`] according to the configured policy.
    pub fn recompute_score(&mut self) -> u64 {
        self.score = match self.config.scoring {
            ScoringPolicy::Progress => self.progress_score(),
            ScoringPolicy::Random => self.rng.gen_range(0..config::RANDOM_SCORE_CEILING),
        };
        self.score
    }

    /// The leaderboard record for this run.
    pub fn score_entry(&self) -> ScoreEntry {
        ScoreEntry::new(self.band_name.clone(), self.score)
    }

    /// Read-only view of the game for rendering and export.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            band_name: self.band_name.clone(),
            players: self
                .players
                .iter()
                .map(|p| PlayerView {
                    name: p.name.clone(),
                    role: p.role,
                    alive: p.alive,
                    art: p.ascii_art().to_string(),
                })
                .collect(),
            current_player: self.current_player,
            production: self.production,
            coins: self.coins,
            score: self.score,
            turns_played: self.turns_played,
        }
    }
}

/// How one player looks to the outside world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub name: String,
    pub role: crate::game::Role,
    pub alive: bool,
    pub art: String,
}

/// Owned, serializable picture of a game between turns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub band_name: String,
    pub players: Vec<PlayerView>,
    pub current_player: usize,
    pub production: ProductionState,
    pub coins: u32,
    pub score: u64,
    pub turns_played: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn duo(config: GameConfig) -> Game {
        Game::with_config(vec![Player::minion("Kevin"), Player::manager("Boss")], config).unwrap()
    }

    #[test]
    fn test_new_game_defaults() {
        let game = duo(GameConfig::for_testing(1));
        assert_eq!(game.coins, 10);
        assert_eq!(game.current_player, 0);
        assert_eq!(game.score, 0);
        assert_eq!(game.turns_played, 0);
        assert_eq!(game.production, ProductionState::Calm);
        assert!(game.band_name.is_empty());
    }

    #[test]
    fn test_empty_band_is_rejected() {
        let err = Game::with_config(Vec::new(), GameConfig::default()).unwrap_err();
        assert!(matches!(err, PnpError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_zero_rounds_to_win_is_rejected() {
        let config = GameConfig {
            rounds_to_win: Some(0),
            ..GameConfig::default()
        };
        let err = Game::with_config(vec![Player::minion("Kevin")], config).unwrap_err();
        assert!(matches!(err, PnpError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_advance_wraps_around() {
        let mut game = duo(GameConfig::default());
        game.advance_player();
        assert_eq!(game.current_player, 1);
        game.advance_player();
        assert_eq!(game.current_player, 0);
        assert_eq!(game.turns_played, 2);
        assert_eq!(game.rounds_completed(), 1);
    }

    #[test]
    fn test_status_lost_when_everyone_is_out() {
        let mut game = Game::with_config(vec![Player::manager("Boss")], GameConfig::default())
            .unwrap();
        assert_eq!(game.status(), GameStatus::Playing);
        game.players[0].alive = false;
        assert_eq!(game.status(), GameStatus::Lost);
    }

    #[test]
    fn test_status_won_after_enough_rounds() {
        let mut game = duo(GameConfig {
            rounds_to_win: Some(1),
            ..GameConfig::default()
        });
        game.advance_player();
        assert_eq!(game.status(), GameStatus::Playing);
        game.advance_player();
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn test_progress_score() {
        let mut game = duo(GameConfig::default());
        // 10 coins, two players standing
        assert_eq!(game.recompute_score(), 100 + 100);

        game.advance_player();
        game.production = ProductionState::Enraged;
        assert_eq!(game.recompute_score(), 100 + 100 + 100 - 200);
    }

    #[test]
    fn test_progress_score_saturates_at_zero() {
        let mut game = Game::with_config(vec![Player::manager("Boss")], GameConfig::default())
            .unwrap();
        game.coins = 0;
        game.players[0].alive = false;
        game.production = ProductionState::Legacy;
        assert_eq!(game.recompute_score(), 0);
    }

    #[test]
    fn test_random_score_is_seeded() {
        let config = GameConfig {
            scoring: ScoringPolicy::Random,
            ..GameConfig::for_testing(99)
        };
        let mut first = duo(config.clone());
        let mut second = duo(config);
        for _ in 0..10 {
            let score = first.recompute_score();
            assert!(score < config::RANDOM_SCORE_CEILING);
            assert_eq!(score, second.recompute_score());
        }
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut game = duo(GameConfig::default());
        game.band_name = "The Segfaults".to_string();
        game.players[1].alive = false;
        let snapshot = game.snapshot();
        assert_eq!(snapshot.band_name, "The Segfaults");
        assert_eq!(snapshot.players.len(), 2);
        assert!(!snapshot.players[1].alive);
        assert_eq!(snapshot.coins, 10);
    }
}

//! Shared test doubles for driving the turn engine.

#![allow(dead_code)]

use pnp::{Action, Engine, Game, Outcome, Player, PnpError, PnpResult, ScoreEntry, ScoreStore};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Engine that answers from a script and records everything it is shown.
#[derive(Debug, Default)]
pub struct ScriptedEngine {
    /// Answer to the welcome prompt
    pub band_name: Option<String>,
    /// Action indices to pick, in order; declines once empty
    pub picks: VecDeque<usize>,
    /// Acknowledgements to give, in order; acknowledges once empty
    pub acks: VecDeque<bool>,
    pub leaderboard_seen: Vec<ScoreEntry>,
    /// (current player, score, coins) at every render
    pub renders: Vec<(usize, u64, u32)>,
    /// Menu descriptions offered at every selection
    pub offered: Vec<Vec<String>>,
    pub outcomes: Vec<String>,
    pub endings: Vec<&'static str>,
}

impl ScriptedEngine {
    pub fn new(band_name: &str, picks: &[usize]) -> Self {
        Self {
            band_name: Some(band_name.to_string()),
            picks: picks.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl Engine for ScriptedEngine {
    fn welcome(&mut self, leaderboard: &[ScoreEntry]) -> Option<String> {
        self.leaderboard_seen = leaderboard.to_vec();
        self.band_name.clone()
    }

    fn render_game(&mut self, game: &Game) {
        self.renders
            .push((game.current_player, game.score, game.coins));
    }

    fn select_action(&mut self, _game: &Game, _player: &Player, actions: &[Action]) -> Option<usize> {
        self.offered
            .push(actions.iter().map(|a| a.description.clone()).collect());
        self.picks.pop_front()
    }

    fn render_outcome(&mut self, outcome: &Outcome) -> bool {
        self.outcomes.push(outcome.to_string());
        self.acks.pop_front().unwrap_or(true)
    }

    fn game_over(&mut self, _game: &Game) {
        self.endings.push("game over");
    }

    fn game_won(&mut self, _game: &Game) {
        self.endings.push("game won");
    }
}

/// Score store kept in memory, optionally failing every call.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub entries: RefCell<Vec<ScoreEntry>>,
    pub broken: bool,
}

impl MemoryStore {
    pub fn with(entries: Vec<ScoreEntry>) -> Self {
        Self {
            entries: RefCell::new(entries),
            broken: false,
        }
    }

    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    fn check(&self) -> PnpResult<()> {
        if self.broken {
            return Err(PnpError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "store offline",
            )));
        }
        Ok(())
    }
}

impl ScoreStore for MemoryStore {
    fn top(&self, n: usize) -> PnpResult<Vec<ScoreEntry>> {
        self.check()?;
        Ok(pnp::rank(self.entries.borrow().clone(), n))
    }

    fn persist(&self, entry: &ScoreEntry) -> PnpResult<()> {
        self.check()?;
        self.entries.borrow_mut().push(entry.clone());
        Ok(())
    }
}

//! # Turn Engine
//!
//! Drives the band through turns. Each turn walks the same three phases:
//! render the game, wait for the current player to pick an action, then wait
//! for the outcome to be acknowledged before handing the turn on.
//!
//! The loop is flat: every engine request returns its answer directly, and a
//! declined request (no band name, no selection, no acknowledgement) ends the run.

use crate::config;
use crate::engine::Engine;
use crate::game::{Action, Game, GameStatus, Outcome};
use crate::leaderboard::ScoreStore;
use log::{debug, info, warn};

/// Where the current turn is waiting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnPhase {
    /// Score is recomputed and the game is shown
    Rendering,
    /// The current player is choosing an action
    AwaitingAction,
    /// The outcome is on screen until acknowledged
    AwaitingAck(Outcome),
}

/// Why the turn loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// The engine stopped answering
    Declined,
    /// Every player was taken out
    GameOver,
    /// The band survived long enough
    GameWon,
}

/// How a whole run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunExit {
    /// The welcome screen was left without choosing a band name
    NoBand,
    /// The turn loop ran and stopped for the given reason
    Finished(LoopExit),
}

impl Game {
    /// Plays a full run: welcome, turn loop, then persisting the score.
    ///
    /// Leaderboard failures never stop the game; they are logged and the run
    /// carries on with an empty leaderboard or an unsaved score.
    pub fn run<E, S>(&mut self, engine: &mut E, store: &S) -> RunExit
    where
        E: Engine + ?Sized,
        S: ScoreStore + ?Sized,
    {
        let leaderboard = store.top(config::LEADERBOARD_SIZE).unwrap_or_else(|e| {
            warn!("Leaderboard unavailable: {}", e);
            Vec::new()
        });

        let Some(band_name) = engine.welcome(&leaderboard) else {
            info!("No band name chosen, leaving");
            return RunExit::NoBand;
        };
        self.band_name = if band_name.trim().is_empty() {
            config::DEFAULT_BAND_NAME.to_string()
        } else {
            band_name.trim().to_string()
        };
        info!(
            "Band '{}' takes on PRODUCTION with {} players",
            self.band_name,
            self.players.len()
        );

        let exit = self.main_loop(engine);

        // Exit hook: the run is over however the loop ended.
        let entry = self.score_entry();
        match store.persist(&entry) {
            Ok(()) => info!("Persisted score {} for '{}'", entry.score, entry.band_name),
            Err(e) => warn!("Could not persist score for '{}': {}", entry.band_name, e),
        }

        RunExit::Finished(exit)
    }

    /// Runs turns until the engine declines a request or the game ends.
    pub fn main_loop<E>(&mut self, engine: &mut E) -> LoopExit
    where
        E: Engine + ?Sized,
    {
        let mut phase = TurnPhase::Rendering;
        loop {
            phase = match phase {
                TurnPhase::Rendering => {
                    self.recompute_score();
                    debug!(
                        "Turn {}: {} to play, score {}",
                        self.turns_played,
                        self.current(),
                        self.score
                    );
                    engine.render_game(self);
                    TurnPhase::AwaitingAction
                }
                TurnPhase::AwaitingAction => {
                    let actions = self.legal_actions();
                    let player = self.current().clone();
                    match engine.select_action(self, &player, &actions) {
                        None => return LoopExit::Declined,
                        Some(choice) => match actions.get(choice) {
                            Some(action) => {
                                debug!("{} chose '{}'", player, action);
                                TurnPhase::AwaitingAck(action.execute(self))
                            }
                            None => {
                                warn!(
                                    "Engine picked action {} of {}, asking again",
                                    choice,
                                    actions.len()
                                );
                                TurnPhase::AwaitingAction
                            }
                        },
                    }
                }
                TurnPhase::AwaitingAck(outcome) => {
                    if !engine.render_outcome(&outcome) {
                        return LoopExit::Declined;
                    }
                    self.advance_player();
                    match self.status() {
                        GameStatus::Playing => TurnPhase::Rendering,
                        GameStatus::Lost => {
                            info!("Band '{}' has nobody left", self.band_name);
                            engine.game_over(self);
                            return LoopExit::GameOver;
                        }
                        GameStatus::Won => {
                            info!("Band '{}' survived PRODUCTION", self.band_name);
                            engine.game_won(self);
                            return LoopExit::GameWon;
                        }
                    }
                }
            };
        }
    }

    /// The current player's menu, with a placeholder when they have nothing to do.
    pub fn legal_actions(&self) -> Vec<Action> {
        let actions = self.current().possible_actions(self, self.current_player);
        if actions.is_empty() {
            vec![Action::idle()]
        } else {
            actions
        }
    }
}

//! # Action System
//!
//! Actions are the menu entries a player picks from on their turn. They are
//! rebuilt from the live game every turn and only touch the game once executed.

use crate::game::Game;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Narrated result of executing one action.
///
/// Outcomes carry no structure; they exist to be shown to the band.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome(String);

impl Outcome {
    /// Creates an outcome from any text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The narrated text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Outcome {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Outcome {
    fn from(text: String) -> Self {
        Self(text)
    }
}

/// What an action does once selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Spend one coin on a banana
    BuyBanana,
    /// Ship a bug, upsetting PRODUCTION by one step
    AddBug,
    /// Pay every band member; the payer is fired if the band cannot afford it
    PayWages {
        /// Position of the paying player in the band
        payer: usize,
    },
    /// Offered when a player has nothing else to do
    Idle,
}

/// A selectable, described unit of choice.
///
/// # Examples
///
/// ```
/// use pnp::{Action, Game, Player};
///
/// let mut game = Game::new(vec![Player::minion("Kevin")]).unwrap();
/// let outcome = Action::add_bug().execute(&mut game);
/// assert_eq!(outcome.as_str(), game.production.describe());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Menu text shown to the player
    pub description: String,
    /// Effect applied when the action is executed
    pub kind: ActionKind,
}

impl Action {
    /// Creates an action with the given menu text and effect.
    pub fn new(description: impl Into<String>, kind: ActionKind) -> Self {
        Self {
            description: description.into(),
            kind,
        }
    }

    /// The minion's coin-spending snack.
    pub fn buy_banana() -> Self {
        Self::new(
            "Buy a banana and eat it (costs 1 gold coin)",
            ActionKind::BuyBanana,
        )
    }

    /// The minion's signature move.
    pub fn add_bug() -> Self {
        Self::new("Add a bug to the code", ActionKind::AddBug)
    }

    /// The manager's only move, paid by the player at `payer`.
    pub fn pay_wages(payer: usize) -> Self {
        Self::new("Pay wages", ActionKind::PayWages { payer })
    }

    /// Placeholder offered when a player has no legal actions.
    pub fn idle() -> Self {
        Self::new("What are we even doing?", ActionKind::Idle)
    }

    /// Applies this action to the live game and narrates what happened.
    ///
    /// Rule violations such as an empty purse are reported as outcomes,
    /// never as errors.
    pub fn execute(&self, game: &mut Game) -> Outcome {
        match self.kind {
            ActionKind::BuyBanana => {
                if game.coins == 0 {
                    return Outcome::new("No coins left. The banana stays on the shelf.");
                }
                game.coins -= 1;
                Outcome::new("You ate a banana")
            }
            ActionKind::AddBug => Outcome::new(game.production.upset()),
            ActionKind::PayWages { payer } => {
                let wages = game.players.len() as u64;
                if u64::from(game.coins) < wages {
                    if let Some(player) = game.players.get_mut(payer) {
                        player.alive = false;
                    }
                    return Outcome::new("Not enough coins to pay wages. PM was fired!");
                }
                game.coins -= wages as u32;
                Outcome::new("Wages paid")
            }
            ActionKind::Idle => Outcome::new("So sad to have no actions against PRODUCTION."),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, Player, ProductionState};

    fn band() -> Game {
        Game::with_config(
            vec![Player::minion("Kevin"), Player::manager("Sir Tan Lee Knot")],
            GameConfig::for_testing(7),
        )
        .unwrap()
    }

    #[test]
    fn test_banana_costs_one_coin() {
        let mut game = band();
        let outcome = Action::buy_banana().execute(&mut game);
        assert_eq!(outcome.as_str(), "You ate a banana");
        assert_eq!(game.coins, 9);
    }

    #[test]
    fn test_banana_guards_empty_purse() {
        let mut game = band();
        game.coins = 0;
        Action::buy_banana().execute(&mut game);
        assert_eq!(game.coins, 0);
    }

    #[test]
    fn test_bug_upsets_production() {
        let mut game = band();
        let outcome = Action::add_bug().execute(&mut game);
        assert_eq!(game.production, ProductionState::Annoyed);
        assert_eq!(outcome.as_str(), ProductionState::Annoyed.describe());
    }

    #[test]
    fn test_wages_paid_when_solvent() {
        let mut game = band();
        let outcome = Action::pay_wages(1).execute(&mut game);
        assert_eq!(outcome.as_str(), "Wages paid");
        assert_eq!(game.coins, 8);
        assert!(game.players[1].alive);
    }

    #[test]
    fn test_wages_fire_payer_when_broke() {
        let mut game = band();
        game.coins = 1;
        let outcome = Action::pay_wages(1).execute(&mut game);
        assert!(outcome.as_str().contains("fired"));
        assert_eq!(game.coins, 1);
        assert!(!game.players[1].alive);
        assert!(game.players[0].alive);
    }

    #[test]
    fn test_idle_outcome() {
        let mut game = band();
        let outcome = Action::idle().execute(&mut game);
        assert_eq!(
            outcome.as_str(),
            "So sad to have no actions against PRODUCTION."
        );
        assert_eq!(game.coins, 10);
    }
}

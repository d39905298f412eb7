//! # Band Members
//!
//! Every member of the band is a [`Player`] tagged with a [`Role`]. The role
//! decides the art and the menu of actions; liveness is an explicit flag that
//! starts out true for everyone.

use crate::game::{Action, Game};
use crate::rendering::art;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of developer a player is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Eats bananas and ships bugs
    Minion,
    /// Pays the wages, or gets fired trying
    ProductManager,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Minion => f.write_str("Minion"),
            Role::ProductManager => f.write_str("Product Manager"),
        }
    }
}

/// A member of the band.
///
/// Players are identified by their position in [`Game::players`].
///
/// # Examples
///
/// ```
/// use pnp::{Game, Player};
///
/// let game = Game::new(vec![Player::minion("Kevin")]).unwrap();
/// let actions = game.players[0].possible_actions(&game, 0);
/// assert_eq!(actions.len(), 2); // banana and bug
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display label
    pub name: String,
    /// What kind of developer this is
    pub role: Role,
    /// False once the player has been taken out of the game
    pub alive: bool,
}

impl Player {
    /// Creates a living player.
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            alive: true,
        }
    }

    /// Creates a minion.
    pub fn minion(name: impl Into<String>) -> Self {
        Self::new(name, Role::Minion)
    }

    /// Creates a product manager.
    pub fn manager(name: impl Into<String>) -> Self {
        Self::new(name, Role::ProductManager)
    }

    /// Returns true while the player is still in the game.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// ASCII art portrait for this player's role.
    pub fn ascii_art(&self) -> &'static str {
        match self.role {
            Role::Minion => art::MINION,
            Role::ProductManager => art::MANAGER,
        }
    }

    /// Builds the actions this player may take right now.
    ///
    /// `index` is this player's position in the band; actions that act on
    /// their owner capture it.
    pub fn possible_actions(&self, game: &Game, index: usize) -> Vec<Action> {
        match self.role {
            Role::Minion => {
                let mut actions = Vec::with_capacity(2);
                if game.coins > 0 {
                    actions.push(Action::buy_banana());
                }
                actions.push(Action::add_bug());
                actions
            }
            Role::ProductManager => vec![Action::pay_wages(index)],
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

//! # Game Module
//!
//! Core game rules and the turn engine.
//!
//! This module contains the building blocks of Platforms & Programmers:
//! - The [`Game`] aggregate and its configuration
//! - Band members and the actions they can take
//! - PRODUCTION's escalating mood
//! - The turn loop that drives an [`Engine`](crate::Engine)

pub mod actions;
pub mod players;
pub mod production;
pub mod state;
pub mod turn;

pub use actions::*;
pub use players::*;
pub use production::*;
pub use state::*;
pub use turn::*;

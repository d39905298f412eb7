//! # Rendering Module
//!
//! Terminal-based rendering using ratatui on top of crossterm.

pub mod art;
pub mod terminal;

pub use terminal::*;

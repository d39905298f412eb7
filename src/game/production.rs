//! # Production Mood
//!
//! The escalating adversary. PRODUCTION only ever gets worse: every bug the
//! band ships pushes it one step further until it settles into `Legacy`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How upset PRODUCTION currently is.
///
/// Variants are ordered, so `Calm < Annoyed < Enraged < Legacy`.
///
/// # Examples
///
/// ```
/// use pnp::ProductionState;
///
/// let mut prod = ProductionState::default();
/// assert_eq!(prod, ProductionState::Calm);
///
/// prod.upset();
/// assert_eq!(prod, ProductionState::Annoyed);
/// assert!(prod > ProductionState::Calm);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ProductionState {
    #[default]
    Calm,
    Annoyed,
    Enraged,
    Legacy,
}

impl ProductionState {
    /// Every state in escalation order.
    pub const ALL: [ProductionState; 4] = [
        ProductionState::Calm,
        ProductionState::Annoyed,
        ProductionState::Enraged,
        ProductionState::Legacy,
    ];

    /// Returns the state one step worse, saturating at `Legacy`.
    pub fn next(self) -> Self {
        match self {
            ProductionState::Calm => ProductionState::Annoyed,
            ProductionState::Annoyed => ProductionState::Enraged,
            ProductionState::Enraged | ProductionState::Legacy => ProductionState::Legacy,
        }
    }

    /// Escalates PRODUCTION by one step and describes the resulting mood.
    ///
    /// Upsetting a `Legacy` production leaves it where it is.
    pub fn upset(&mut self) -> String {
        *self = self.next();
        self.describe()
    }

    /// Returns true once nothing can make things worse.
    pub fn is_terminal(self) -> bool {
        self == ProductionState::Legacy
    }

    /// Escalation level, 0 for `Calm` up to 3 for `Legacy`.
    pub fn level(self) -> u64 {
        match self {
            ProductionState::Calm => 0,
            ProductionState::Annoyed => 1,
            ProductionState::Enraged => 2,
            ProductionState::Legacy => 3,
        }
    }

    /// Human-readable sentence about the current mood.
    pub fn describe(self) -> String {
        match self {
            ProductionState::Calm => "PRODUCTION is calm. For now.".to_string(),
            ProductionState::Annoyed => "PRODUCTION is annoyed. Someone noticed the bug.".to_string(),
            ProductionState::Enraged => {
                "PRODUCTION is enraged! Pagers are going off everywhere.".to_string()
            }
            ProductionState::Legacy => {
                "PRODUCTION has become legacy code. Nobody dares touch it anymore.".to_string()
            }
        }
    }
}

impl fmt::Display for ProductionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProductionState::Calm => "calm",
            ProductionState::Annoyed => "annoyed",
            ProductionState::Enraged => "enraged",
            ProductionState::Legacy => "legacy",
        };
        f.write_str(label)
    }
}

//! # Leaderboard Module
//!
//! Score persistence. The game reads the top entries when a run starts and
//! appends one entry when it ends; nothing else touches the store.

pub mod file;

pub use file::*;

use crate::PnpResult;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One finished run on the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Name of the band that played
    pub band_name: String,
    /// Final score of the run
    pub score: u64,
}

impl ScoreEntry {
    /// Creates a leaderboard entry.
    pub fn new(band_name: impl Into<String>, score: u64) -> Self {
        Self {
            band_name: band_name.into(),
            score,
        }
    }

    /// Leaderboard order: higher scores first.
    pub fn rank_cmp(&self, other: &ScoreEntry) -> Ordering {
        other.score.cmp(&self.score)
    }
}

/// Somewhere scores can be read from and written to.
pub trait ScoreStore {
    /// Returns up to `n` entries, best score first.
    fn top(&self, n: usize) -> PnpResult<Vec<ScoreEntry>>;

    /// Appends an entry. Duplicates are allowed.
    fn persist(&self, entry: &ScoreEntry) -> PnpResult<()>;
}

/// Sorts entries best first, keeping file order among equal scores, and
/// keeps at most `n` of them.
pub fn rank(mut entries: Vec<ScoreEntry>, n: usize) -> Vec<ScoreEntry> {
    entries.sort_by(ScoreEntry::rank_cmp);
    entries.truncate(n);
    entries
}

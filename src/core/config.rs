//! Session configuration.

use serde::{Deserialize, Serialize};

use super::error::{DominoError, Result};

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;
/// Largest supported table.
pub const MAX_PLAYERS: usize = 4;

/// Configuration supplied once when a session starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seats at the table, human included (2-4).
    pub player_count: usize,

    /// Seed for the deal RNG. Same seed produces the same sequence of rounds.
    pub seed: u64,

    /// Deal a new round with the same player count once a round has ended.
    pub restart_on_end: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            seed: 42,
            restart_on_end: false,
        }
    }
}

impl SessionConfig {
    /// Config for the given player count with default seed and no restart.
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable restart-on-end.
    pub fn with_restart_on_end(mut self, restart: bool) -> Self {
        self.restart_on_end = restart;
        self
    }

    /// Reject player counts outside 2-4.
    pub fn validate(&self) -> Result<()> {
        validate_player_count(self.player_count)
    }
}

/// Reject player counts outside 2-4.
pub fn validate_player_count(player_count: usize) -> Result<()> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        Ok(())
    } else {
        Err(DominoError::Configuration { player_count })
    }
}

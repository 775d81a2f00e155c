//! Core plumbing: seats, RNG, configuration, errors.
//!
//! Nothing in here knows about tiles or the board beyond the error payloads.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{validate_player_count, SessionConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{DominoError, IllegalMove, Result};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;

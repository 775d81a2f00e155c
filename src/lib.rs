//! # domino-engine
//!
//! Rules engine and turn sequencing for 2-4 player dominoes: one human seat,
//! the rest computer-controlled.
//!
//! ## Design Principles
//!
//! 1. **Rules are pure**: legality, orientation and scoring are functions of
//!    the board and hands, with no knowledge of whose turn it is.
//!
//! 2. **Explicit state machine**: the turn controller models every phase,
//!    including the human's pending two-ended placement, as an enum variant.
//!
//! 3. **The caller owns time**: the engine advances one ply per call and never
//!    sleeps. Renderers pace bots and animate from snapshots and events.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, configuration, errors
//! - `tiles`: Tiles, the undealt set, hands, draw pool, dealing
//! - `board`: The line of play and its open ends
//! - `rules`: Legal moves, placement, outcomes
//! - `turn`: Turn state machine, bot policy, events
//! - `session`: Session lifecycle, events, snapshots
//!
//! ## Example
//!
//! ```
//! use domino_engine::{GameSession, SessionConfig, TurnPhase};
//!
//! let mut session = GameSession::new(SessionConfig::new(2).with_seed(3)).unwrap();
//! assert_eq!(session.phase(), TurnPhase::AwaitingHumanMove);
//!
//! // Any tile opens an empty board.
//! session.submit_human_move(0, None).unwrap();
//! session.advance_bots();
//! assert!(!session.board().is_empty());
//! ```

pub mod board;
pub mod core;
pub mod rules;
pub mod session;
pub mod tiles;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{DominoError, GameRng, IllegalMove, PlayerId, PlayerMap, Result, SessionConfig};

pub use crate::tiles::{deal_round, Deal, DrawPool, Hand, Pip, Tile, TileSet};

pub use crate::board::{Board, BoardEnds, PlacedTile, Side};

pub use crate::rules::{
    legal_move_count, legal_sides, place, resolve_placement, Outcome, OutcomeKind, OutcomeReport, Placement,
};

pub use crate::turn::{BotPolicy, FirstLegal, Ply, Table, TurnController, TurnPhase};

pub use crate::session::{GameEvent, GameSession, HandView, SessionSnapshot};

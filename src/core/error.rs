//! Error types for the engine.
//!
//! Every error is recoverable at the session boundary: a rejected operation
//! leaves the board, hands and turn state exactly as they were.

use crate::board::Side;
use crate::core::PlayerId;
use crate::tiles::Tile;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DominoError>;

/// Why a submitted move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMove {
    /// The tile matches neither open end.
    #[display("{} matches neither open end", _0)]
    NoLegalPlacement(Tile),

    /// The tile fits both ends and no side was given.
    #[display("{} fits both ends; choose a side", _0)]
    SideRequired(Tile),

    /// The requested end does not carry a pip the tile can touch.
    #[display("{} cannot attach to the {} end", tile, side)]
    SideMismatch {
        /// Tile that was offered.
        tile: Tile,
        /// End that was requested.
        side: Side,
    },

    /// The tile is not in the acting player's hand.
    #[display("{} is not in hand", _0)]
    TileNotInHand(Tile),

    /// No tile at that hand position.
    #[display("no tile at hand position {}", _0)]
    NoSuchPosition(usize),

    /// Drawing is only allowed with no playable tile.
    #[display("a playable tile is still in hand")]
    DrawWhilePlayable,

    /// There is nothing left to draw.
    #[display("the draw pool is empty")]
    PoolEmpty,

    /// A side was chosen with no placement proposal open.
    #[display("no placement is waiting for a side")]
    NothingPending,
}

/// Engine error taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum DominoError {
    /// Player count outside 2-4.
    #[display("invalid player count {} (expected 2-4)", player_count)]
    Configuration {
        /// Rejected count.
        player_count: usize,
    },

    /// A deal asked for more tiles than remain. Unreachable with the fixed
    /// inventory; treat as an invariant violation.
    #[display("cannot deal {} tiles, only {} remain", requested, remaining)]
    InsufficientTiles {
        /// Tiles asked for.
        requested: usize,
        /// Tiles left in the set.
        remaining: usize,
    },

    /// An arranged table holds the same tile more than once.
    #[display("{} appears more than once on the table", tile)]
    DuplicateTile {
        /// First repeated tile found.
        tile: Tile,
    },

    /// An arranged table gives a seat no tiles to start with.
    #[display("{} would start the round with an empty hand", player)]
    EmptyHand {
        /// Seat with no tiles.
        player: PlayerId,
    },

    /// The move breaks the rules.
    #[display("illegal move: {}", _0)]
    IllegalMove(IllegalMove),

    /// Input arrived while the engine was not waiting on the human.
    #[display("not your turn ({} to act)", current)]
    NotYourTurn {
        /// Seat the engine is waiting on.
        current: PlayerId,
    },
}

impl std::error::Error for IllegalMove {}

impl std::error::Error for DominoError {}

impl From<IllegalMove> for DominoError {
    fn from(reason: IllegalMove) -> Self {
        DominoError::IllegalMove(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = DominoError::Configuration { player_count: 5 };
        assert_eq!(err.to_string(), "invalid player count 5 (expected 2-4)");

        let err: DominoError = IllegalMove::SideRequired(Tile::new(4, 4)).into();
        assert_eq!(err.to_string(), "illegal move: [4|4] fits both ends; choose a side");

        let err = DominoError::DuplicateTile { tile: Tile::new(2, 6) };
        assert_eq!(err.to_string(), "[2|6] appears more than once on the table");

        let err = DominoError::NotYourTurn { current: PlayerId::new(1) };
        assert_eq!(err.to_string(), "not your turn (Bot 1 to act)");
    }
}

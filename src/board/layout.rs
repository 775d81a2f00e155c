//! The line of play.
//!
//! Tiles are stored left to right in the orientation they were laid, so for
//! every adjacent pair `tiles[i].b() == tiles[i + 1].a()`. The left open end is
//! the first tile's `a`, the right open end the last tile's `b`.
//!
//! Backed by `im::Vector`: head inserts are cheap and snapshots are O(1) clones.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{IllegalMove, Result};
use crate::tiles::{Pip, Tile};

/// One end of the line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Head of the line (insert before the first tile).
    Left,
    /// Tail of the line (append after the last tile).
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Pips showing at the two open ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardEnds {
    /// Pip at the head of the line.
    pub left: Pip,
    /// Pip at the tail of the line.
    pub right: Pip,
}

impl BoardEnds {
    /// Pip at the given end.
    #[must_use]
    pub fn pip(self, side: Side) -> Pip {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// A tile on the board plus presentation flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedTile {
    /// Tile in board orientation.
    pub tile: Tile,
    /// End it was attached to.
    pub side: Side,
    /// The most recent placement.
    pub is_last_played: bool,
    /// Highlighted as a candidate end while the human picks a side.
    pub is_pending_double_play: bool,
}

/// The line of placed tiles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    tiles: Vector<PlacedTile>,
}

impl Board {
    /// Empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Board laid out from an already-oriented chain, left to right.
    ///
    /// No tile is flagged as last played.
    pub fn from_chain(tiles: impl IntoIterator<Item = Tile>) -> Result<Self> {
        let mut board = Self::new();
        for tile in tiles {
            if let Some(ends) = board.ends() {
                if ends.right != tile.a() {
                    return Err(IllegalMove::SideMismatch { tile, side: Side::Right }.into());
                }
            }
            board.tiles.push_back(PlacedTile {
                tile,
                side: Side::Right,
                is_last_played: false,
                is_pending_double_play: false,
            });
        }
        Ok(board)
    }

    /// No tiles placed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of tiles placed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Open-end pips, or `None` on an empty board.
    #[must_use]
    pub fn ends(&self) -> Option<BoardEnds> {
        let left = self.tiles.front()?.tile.a();
        let right = self.tiles.back()?.tile.b();
        Some(BoardEnds { left, right })
    }

    /// Placed tiles, left to right.
    pub fn iter(&self) -> impl Iterator<Item = &PlacedTile> {
        self.tiles.iter()
    }

    /// Tiles only, left to right, in board orientation.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tiles.iter().map(|p| p.tile)
    }

    /// The most recently placed tile.
    #[must_use]
    pub fn last_played(&self) -> Option<&PlacedTile> {
        self.tiles.iter().find(|p| p.is_last_played)
    }

    /// Every touching pair of pips matches.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.tiles
            .iter()
            .zip(self.tiles.iter().skip(1))
            .all(|(left, right)| left.tile.b() == right.tile.a())
    }

    /// Attach an already-oriented tile. Callers must have checked the match.
    pub(crate) fn attach(&mut self, tile: Tile, side: Side) {
        for placed in self.tiles.iter_mut() {
            placed.is_last_played = false;
            placed.is_pending_double_play = false;
        }

        let placed = PlacedTile {
            tile,
            side,
            is_last_played: true,
            is_pending_double_play: false,
        };
        match side {
            Side::Left => self.tiles.push_front(placed),
            Side::Right => self.tiles.push_back(placed),
        }
        debug_assert!(self.is_consistent());
    }

    /// Flag (or clear) both end tiles as candidate targets.
    pub(crate) fn set_pending_ends(&mut self, pending: bool) {
        for placed in self.tiles.iter_mut() {
            placed.is_pending_double_play = false;
        }
        if !pending || self.tiles.is_empty() {
            return;
        }
        let last = self.tiles.len() - 1;
        for index in [0, last] {
            if let Some(placed) = self.tiles.get_mut(index) {
                placed.is_pending_double_play = true;
            }
        }
    }
}

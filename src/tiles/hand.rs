//! Tiles held by one seat, and the shared draw pool.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::tile::Tile;

/// A seat's held tiles. Order is display order only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    tiles: Vec<Tile>,
}

impl Hand {
    /// Empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand holding `tiles` in the given order.
    #[must_use]
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Add a tile at the end of the hand.
    pub fn draw(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Remove a tile, returning it in its held orientation.
    pub fn remove(&mut self, tile: Tile) -> Option<Tile> {
        let index = self.position(tile)?;
        Some(self.tiles.remove(index))
    }

    /// Whether the hand holds `tile` (either orientation).
    #[must_use]
    pub fn contains(&self, tile: Tile) -> bool {
        self.tiles.contains(&tile)
    }

    /// Hand position of `tile`.
    #[must_use]
    pub fn position(&self, tile: Tile) -> Option<usize> {
        self.tiles.iter().position(|t| *t == tile)
    }

    /// Tile at a hand position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Tile> {
        self.tiles.get(index).copied()
    }

    /// Number of tiles held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// No tiles left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in hand order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Iterate tiles in hand order.
    pub fn iter(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tiles.iter().copied()
    }

    /// Sum of every pip in hand. Used for blocked rounds and scoring.
    #[must_use]
    pub fn pip_total(&self) -> u32 {
        self.tiles.iter().map(|t| t.pip_total()).sum()
    }

    /// Number of doubles held.
    #[must_use]
    pub fn double_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_double()).count()
    }
}

/// Undealt reserve in 2-player rounds. Draws come off the front.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawPool {
    tiles: VecDeque<Tile>,
}

impl DrawPool {
    /// Pool holding `tiles`, first tile drawn first.
    #[must_use]
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles: tiles.into() }
    }

    /// Take the next tile.
    pub fn draw(&mut self) -> Option<Tile> {
        self.tiles.pop_front()
    }

    /// Tiles remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Nothing left to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate remaining tiles in draw order.
    pub fn iter(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tiles.iter().copied()
    }
}

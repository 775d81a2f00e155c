//! The undealt tile inventory for one round.

use serde::{Deserialize, Serialize};

use super::tile::{Tile, MAX_PIP};
use crate::core::{validate_player_count, DominoError, GameRng, Result};

/// Tiles in a full double-six set.
pub const FULL_SET_SIZE: usize = 28;

/// Tiles set aside as the draw pool in a 2-player round.
pub const DRAW_POOL_SIZE: usize = 14;

/// Starting tiles per hand.
///
/// Seven for 2 or 4 players, nine for 3 players.
#[must_use]
pub fn hand_size(player_count: usize) -> usize {
    if player_count == 3 {
        9
    } else {
        7
    }
}

/// Ordered, unique set of tiles awaiting the deal.
///
/// Deal order is the current sequence order, so shuffle before dealing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSet {
    tiles: Vec<Tile>,
}

impl TileSet {
    /// Build every tile `(a, b)` with `a <= b`.
    ///
    /// A 3-player table drops the `[0|0]` so 27 tiles split evenly three ways.
    pub fn generate(player_count: usize) -> Result<Self> {
        validate_player_count(player_count)?;

        let tiles = (0..=MAX_PIP)
            .flat_map(|a| (a..=MAX_PIP).map(move |b| Tile::new(a, b)))
            .filter(|tile| player_count != 3 || *tile != Tile::new(0, 0))
            .collect();

        Ok(Self { tiles })
    }

    /// Uniform random permutation.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.tiles);
    }

    /// Remove and return the first `n` tiles.
    ///
    /// Fails without removing anything if fewer than `n` remain.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Tile>> {
        if n > self.tiles.len() {
            return Err(DominoError::InsufficientTiles {
                requested: n,
                remaining: self.tiles.len(),
            });
        }
        Ok(self.tiles.drain(..n).collect())
    }

    /// Tiles not yet dealt.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// All tiles dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Remaining tiles in deal order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

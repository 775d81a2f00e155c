//! How computer-controlled seats pick a tile.

use crate::board::Board;
use crate::rules::legal_move_count;
use crate::tiles::{Hand, Tile};

/// Tile selection for bot seats.
///
/// The controller decides the end (right on a tie) and handles drawing and
/// passing; a policy only answers "which tile".
pub trait BotPolicy: Send + Sync {
    /// A playable tile from `hand`, or `None` if nothing fits.
    fn choose_tile(&self, hand: &Hand, board: &Board) -> Option<Tile>;
}

/// First tile in hand order with a legal placement. No ranking.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLegal;

impl BotPolicy for FirstLegal {
    fn choose_tile(&self, hand: &Hand, board: &Board) -> Option<Tile> {
        hand.iter().find(|&tile| legal_move_count(tile, board) > 0)
    }
}

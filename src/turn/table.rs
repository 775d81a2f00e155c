//! Everything on the table during a round: board, hands, draw pool.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{validate_player_count, DominoError, PlayerMap, Result};
use crate::tiles::{Deal, DrawPool, Hand, Tile};

/// Mutable round state shared by the rules and the turn controller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Line of play.
    pub board: Board,
    /// One hand per seat, human first.
    pub hands: PlayerMap<Hand>,
    /// Draw pool; `None` outside 2-player rounds.
    pub pool: Option<DrawPool>,
}

impl Table {
    /// Table with an empty board.
    pub fn new(hands: PlayerMap<Hand>, pool: Option<DrawPool>) -> Result<Self> {
        Self::with_board(Board::new(), hands, pool)
    }

    /// Table with tiles already on the board.
    ///
    /// Every seat must hold at least one tile, and no tile may appear twice
    /// across board, hands and pool.
    pub fn with_board(board: Board, hands: PlayerMap<Hand>, pool: Option<DrawPool>) -> Result<Self> {
        validate_player_count(hands.player_count())?;
        if let Some((player, _)) = hands.iter().find(|(_, hand)| hand.is_empty()) {
            return Err(DominoError::EmptyHand { player });
        }

        let table = Self { board, hands, pool };
        let mut seen = FxHashSet::default();
        if let Some(tile) = table.all_tiles().find(|&tile| !seen.insert(tile)) {
            return Err(DominoError::DuplicateTile { tile });
        }
        Ok(table)
    }

    /// Fresh table from a deal.
    #[must_use]
    pub fn from_deal(deal: Deal) -> Self {
        Self {
            board: Board::new(),
            hands: deal.hands,
            pool: deal.pool,
        }
    }

    /// Seats at the table.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.hands.player_count()
    }

    /// Tiles left in the draw pool (0 when there is none).
    #[must_use]
    pub fn pool_len(&self) -> usize {
        self.pool.as_ref().map_or(0, DrawPool::len)
    }

    /// A draw is possible.
    #[must_use]
    pub fn can_draw(&self) -> bool {
        self.pool_len() > 0
    }

    /// Every tile in play, wherever it sits.
    #[must_use]
    pub fn census(&self) -> FxHashSet<Tile> {
        self.all_tiles().collect()
    }

    /// Count of tiles in play, duplicates included.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        let hands: usize = self.hands.iter().map(|(_, hand)| hand.len()).sum();
        self.board.len() + hands + self.pool_len()
    }

    fn all_tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        let pool = self.pool.iter().flat_map(DrawPool::iter);
        let hands = self.hands.iter().flat_map(|(_, hand)| hand.iter());
        self.board.tiles().chain(hands).chain(pool)
    }
}

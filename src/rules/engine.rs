//! Legal-move determination and placement.
//!
//! ## Orientation
//!
//! A tile attached on the left must show the matching pip on its trailing half
//! (`b`), a tile attached on the right on its leading half (`a`). The engine
//! flips the tile when the offered orientation is backwards.
//!
//! ## Ambiguity
//!
//! When a tile fits both ends the caller has to say which one. The human does
//! this through a two-step propose/disambiguate exchange; bots break the tie
//! towards the right end via [`infer_side`].

use smallvec::SmallVec;

use crate::board::{Board, Side};
use crate::core::{IllegalMove, Result};
use crate::tiles::{Hand, Tile};

/// Ends a tile may attach to, in `[Left, Right]` order.
pub type LegalSides = SmallVec<[Side; 2]>;

/// Where and how a tile goes on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Tile in the orientation it will be laid.
    pub tile: Tile,
    /// End it attaches to.
    pub side: Side,
}

/// Number of legal placements for `tile`: 0, 1 or 2.
///
/// Any tile may open an empty board, which counts as one move. Otherwise each
/// open end whose pip the tile carries counts once, so both ends showing the
/// same pip count twice.
#[must_use]
pub fn legal_move_count(tile: Tile, board: &Board) -> usize {
    match board.ends() {
        None => 1,
        Some(ends) => usize::from(tile.contains(ends.left)) + usize::from(tile.contains(ends.right)),
    }
}

/// The ends `tile` may attach to. An empty board reports `[Right]`.
#[must_use]
pub fn legal_sides(tile: Tile, board: &Board) -> LegalSides {
    let mut sides = LegalSides::new();
    match board.ends() {
        None => sides.push(Side::Right),
        Some(ends) => {
            if tile.contains(ends.left) {
                sides.push(Side::Left);
            }
            if tile.contains(ends.right) {
                sides.push(Side::Right);
            }
        }
    }
    sides
}

/// Whether any tile in `hand` can be played.
#[must_use]
pub fn has_legal_move(hand: &Hand, board: &Board) -> bool {
    hand.iter().any(|tile| legal_move_count(tile, board) > 0)
}

/// Orient `tile` for the requested end.
///
/// With no side given the end is inferred when only one is legal; a tile that
/// fits both ends needs an explicit side. An empty board ignores the hint.
pub fn resolve_placement(tile: Tile, side: Option<Side>, board: &Board) -> Result<Placement> {
    let Some(ends) = board.ends() else {
        return Ok(Placement { tile, side: Side::Right });
    };

    let sides = legal_sides(tile, board);
    let side = match (side, sides.as_slice()) {
        (_, []) => return Err(IllegalMove::NoLegalPlacement(tile).into()),
        (Some(side), legal) if legal.contains(&side) => side,
        (Some(side), _) => return Err(IllegalMove::SideMismatch { tile, side }.into()),
        (None, [only]) => *only,
        (None, _) => return Err(IllegalMove::SideRequired(tile).into()),
    };

    let pip = ends.pip(side);
    let oriented = match side {
        Side::Left if tile.b() != pip => tile.flipped(),
        Side::Right if tile.a() != pip => tile.flipped(),
        _ => tile,
    };

    Ok(Placement { tile: oriented, side })
}

/// Pick an end for a tile, breaking a two-way tie towards `tie_break`.
///
/// Returns `None` when the tile fits nowhere.
#[must_use]
pub fn infer_side(tile: Tile, board: &Board, tie_break: Side) -> Option<Side> {
    let sides = legal_sides(tile, board);
    match sides.as_slice() {
        [] => None,
        [only] => Some(*only),
        _ => Some(tie_break),
    }
}

/// Resolve, attach and remove `tile` from `hand` in one step.
///
/// Nothing changes if the tile is not held or cannot go where asked.
pub fn place(tile: Tile, side: Option<Side>, board: &mut Board, hand: &mut Hand) -> Result<Placement> {
    if !hand.contains(tile) {
        return Err(IllegalMove::TileNotInHand(tile).into());
    }
    let placement = resolve_placement(tile, side, board)?;

    hand.remove(tile);
    board.attach(placement.tile, placement.side);
    Ok(placement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardEnds;
    use crate::core::DominoError;

    fn board(chain: &[(u8, u8)]) -> Board {
        Board::from_chain(chain.iter().map(|&(a, b)| Tile::new(a, b))).unwrap()
    }

    #[test]
    fn test_empty_board_allows_any_tile() {
        let empty = Board::new();
        assert_eq!(legal_move_count(Tile::new(2, 6), &empty), 1);
        assert_eq!(legal_sides(Tile::new(2, 6), &empty).as_slice(), &[Side::Right]);

        let placement = resolve_placement(Tile::new(2, 6), Some(Side::Left), &empty).unwrap();
        assert_eq!(placement.side, Side::Right);
        assert_eq!(placement.tile.pips(), (2, 6));
    }

    #[test]
    fn test_double_matching_one_end() {
        // Ends (3, 5): the [3|3] only fits on the left
        let board = board(&[(3, 1), (1, 5)]);
        let tile = Tile::new(3, 3);

        assert_eq!(legal_move_count(tile, &board), 1);
        let placement = resolve_placement(tile, None, &board).unwrap();
        assert_eq!(placement.side, Side::Left);
    }

    #[test]
    fn test_double_on_matching_single_tile_board() {
        let board = board(&[(4, 4)]);
        let tile = Tile::new(4, 4);

        assert_eq!(legal_move_count(tile, &board), 2);
        assert_eq!(
            resolve_placement(tile, None, &board),
            Err(DominoError::IllegalMove(IllegalMove::SideRequired(tile)))
        );
        assert!(resolve_placement(tile, Some(Side::Left), &board).is_ok());
    }

    #[test]
    fn test_tile_bridging_both_ends() {
        let board = board(&[(3, 1), (1, 5)]);
        let tile = Tile::new(5, 3);
        assert_eq!(legal_move_count(tile, &board), 2);

        let left = resolve_placement(tile, Some(Side::Left), &board).unwrap();
        assert_eq!(left.tile.pips(), (5, 3));

        let right = resolve_placement(tile, Some(Side::Right), &board).unwrap();
        assert_eq!(right.tile.pips(), (5, 3));
    }

    #[test]
    fn test_flip_for_each_end() {
        let board = board(&[(2, 6)]);

        // Left end is 2: matching pip must end up trailing
        let left = resolve_placement(Tile::new(2, 0), None, &board).unwrap();
        assert_eq!((left.side, left.tile.pips()), (Side::Left, (0, 2)));

        // Right end is 6: matching pip must end up leading
        let right = resolve_placement(Tile::new(4, 6), None, &board).unwrap();
        assert_eq!((right.side, right.tile.pips()), (Side::Right, (6, 4)));
    }

    #[test]
    fn test_no_match_and_wrong_side() {
        let board = board(&[(2, 6)]);

        assert_eq!(legal_move_count(Tile::new(1, 3), &board), 0);
        assert_eq!(
            resolve_placement(Tile::new(1, 3), None, &board),
            Err(DominoError::IllegalMove(IllegalMove::NoLegalPlacement(Tile::new(1, 3))))
        );
        assert_eq!(
            resolve_placement(Tile::new(2, 3), Some(Side::Right), &board),
            Err(DominoError::IllegalMove(IllegalMove::SideMismatch {
                tile: Tile::new(2, 3),
                side: Side::Right,
            }))
        );
    }

    #[test]
    fn test_infer_side_tie_break() {
        let board = board(&[(4, 4)]);
        assert_eq!(infer_side(Tile::new(4, 1), &board, Side::Right), Some(Side::Right));
        assert_eq!(infer_side(Tile::new(4, 1), &board, Side::Left), Some(Side::Left));
        assert_eq!(infer_side(Tile::new(0, 1), &board, Side::Right), None);

        let board = self::board(&[(2, 6)]);
        assert_eq!(infer_side(Tile::new(2, 1), &board, Side::Right), Some(Side::Left));
    }

    #[test]
    fn test_place_updates_board_and_hand() {
        let mut board = board(&[(2, 6)]);
        let mut hand = Hand::from_tiles(vec![Tile::new(6, 1), Tile::new(0, 0)]);

        let placement = place(Tile::new(1, 6), None, &mut board, &mut hand).unwrap();

        assert_eq!(placement.side, Side::Right);
        assert_eq!(board.ends(), Some(BoardEnds { left: 2, right: 1 }));
        assert_eq!(hand.tiles(), &[Tile::new(0, 0)]);
        assert_eq!(board.last_played().map(|p| p.tile), Some(Tile::new(6, 1)));
    }

    #[test]
    fn test_place_failure_is_atomic() {
        let mut board = board(&[(2, 6)]);
        let mut hand = Hand::from_tiles(vec![Tile::new(0, 0)]);
        let before = (board.clone(), hand.clone());

        assert!(place(Tile::new(0, 0), None, &mut board, &mut hand).is_err());
        assert!(place(Tile::new(2, 2), None, &mut board, &mut hand).is_err());
        assert_eq!((board, hand), before);
    }

    #[test]
    fn test_has_legal_move() {
        let board = board(&[(2, 6)]);
        assert!(has_legal_move(&Hand::from_tiles(vec![Tile::new(0, 1), Tile::new(6, 6)]), &board));
        assert!(!has_legal_move(&Hand::from_tiles(vec![Tile::new(0, 1)]), &board));
        assert!(!has_legal_move(&Hand::new(), &board));
    }
}

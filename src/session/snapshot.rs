//! Read-only view of a session for renderers.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::PlayerId;
use crate::rules::OutcomeReport;
use crate::tiles::Tile;
use crate::turn::{Table, TurnController, TurnPhase};

/// An opponent's hand as the human may see it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandView {
    /// Seat.
    pub player: PlayerId,
    /// Tiles held.
    pub count: usize,
    /// Face-up tiles, only once the round is over.
    pub tiles: Option<Vec<Tile>>,
}

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// 1-based round number.
    pub round: u32,
    /// Line of play with last-played and pending flags.
    pub board: Board,
    /// The human's tiles in hand order.
    pub human_hand: Vec<Tile>,
    /// Bot hands, seat order.
    pub opponents: Vec<HandView>,
    /// Tiles left to draw.
    pub pool_count: usize,
    /// Seat to act.
    pub current_player: PlayerId,
    /// Phase of the turn machine.
    pub phase: TurnPhase,
    /// Passes since the last placement.
    pub consecutive_passes: usize,
    /// Set once the round is over.
    pub outcome: Option<OutcomeReport>,
}

impl SessionSnapshot {
    pub(crate) fn capture(round: u32, table: &Table, turn: &TurnController) -> Self {
        let revealed = turn.phase().is_terminal();
        let opponents = table
            .hands
            .bots()
            .map(|(player, hand)| HandView {
                player,
                count: hand.len(),
                tiles: revealed.then(|| hand.tiles().to_vec()),
            })
            .collect();

        Self {
            round,
            board: table.board.clone(),
            human_hand: table.hands[PlayerId::HUMAN].tiles().to_vec(),
            opponents,
            pool_count: table.pool_len(),
            current_player: turn.current_player(),
            phase: turn.phase(),
            consecutive_passes: turn.consecutive_passes(),
            outcome: turn.outcome().map(|o| o.report()),
        }
    }
}

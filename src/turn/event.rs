//! Change notifications for the presentation layer.
//!
//! The engine never animates or waits. It records what happened and the
//! renderer decides how (and how slowly) to show it, e.g. fading a
//! "PASS" banner on [`GameEvent::PassOccurred`].

use serde::{Deserialize, Serialize};

use crate::board::Side;
use crate::core::PlayerId;
use crate::rules::OutcomeReport;
use crate::tiles::Tile;

/// Something observable changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new round was dealt.
    RoundStarted {
        /// 1-based round number within the session.
        round: u32,
        /// Seats at the table.
        player_count: usize,
    },

    /// The deal was thrown away because a hand held too many doubles.
    Redealt {
        /// Deals discarded before the accepted one.
        redeals: u32,
    },

    /// A tile went on the board.
    TilePlayed {
        /// Who played it.
        player: PlayerId,
        /// Tile in board orientation.
        tile: Tile,
        /// End it was attached to.
        side: Side,
    },

    /// The human's tile fits both ends; waiting for a side.
    DisambiguationRequired {
        /// The proposed tile.
        tile: Tile,
    },

    /// The human withdrew a pending proposal.
    ProposalCancelled,

    /// A seat took a tile from the draw pool.
    TileDrawn {
        /// Who drew.
        player: PlayerId,
    },

    /// A seat could not play and the pool was empty.
    PassOccurred {
        /// Who passed.
        player: PlayerId,
    },

    /// Play moved to another seat.
    TurnChanged {
        /// Seat now acting.
        player: PlayerId,
    },

    /// The round is over.
    RoundEnded {
        /// `{result, score}` payload.
        report: OutcomeReport,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Outcome;

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::PassOccurred { player: PlayerId::new(2) };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"PassOccurred","player":2}"#);

        let ended = GameEvent::RoundEnded {
            report: Outcome::Won { score: 7 }.report(),
        };
        let back: GameEvent = serde_json::from_str(&serde_json::to_string(&ended).unwrap()).unwrap();
        assert_eq!(back, ended);
    }
}

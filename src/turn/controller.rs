//! Turn state machine.
//!
//! ```text
//!                      select (2 legal, no side)
//!   AwaitingHumanMove ───────────────────────────▶ AwaitingDisambiguation
//!        │   ▲   ◀──────── cancel ─────────────────────    │
//!        │   │                                              │ choose_side
//!        │   └──────── next seat is human ◀─────────┐       │
//!        ▼ play / forced pass                        │       ▼
//!     BotTurn(i) ── bot ply ──▶ BotTurn(i+1) ... ────┘   (advance)
//!        │
//!        └── hand empty / everyone passed ──▶ RoundEnded(outcome)
//! ```
//!
//! ## Drawing
//!
//! A seat with no playable tile draws while the pool has tiles; drawing never
//! ends the turn. Bots draw and retry inside a single ply. The human draws one
//! tile per `draw_for_human` call. With nothing to draw the seat passes.
//!
//! ## Blocking
//!
//! Every placement resets the pass counter. When consecutive passes reach the
//! number of seats nobody can move and the round is scored on pip totals.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::event::GameEvent;
use super::policy::BotPolicy;
use super::table::Table;
use crate::board::Side;
use crate::core::{DominoError, IllegalMove, PlayerId, Result};
use crate::rules::{self, blocked_outcome, domino_outcome, has_legal_move, infer_side, Outcome, Placement};
use crate::tiles::{DrawPool, Tile};

/// Where the round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for the human to pick a tile or draw.
    AwaitingHumanMove,
    /// The human proposed a tile that fits both ends; waiting for a side.
    AwaitingDisambiguation {
        /// The proposed tile.
        tile: Tile,
    },
    /// A bot is due to play.
    BotTurn(PlayerId),
    /// Terminal.
    RoundEnded(Outcome),
}

impl TurnPhase {
    /// The engine is waiting on human input.
    #[must_use]
    pub fn is_human_turn(self) -> bool {
        matches!(self, TurnPhase::AwaitingHumanMove | TurnPhase::AwaitingDisambiguation { .. })
    }

    /// The round has ended.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, TurnPhase::RoundEnded(_))
    }
}

/// One completed action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ply {
    /// A tile was placed after `drawn` draws.
    Played {
        /// Who played.
        player: PlayerId,
        /// Oriented tile and end.
        placement: Placement,
        /// Tiles drawn before finding a play.
        drawn: u32,
    },
    /// The human proposed a tile that needs a side.
    Proposed {
        /// The proposed tile.
        tile: Tile,
    },
    /// The human drew a tile; still their turn.
    Drew {
        /// Tile added to the human's hand.
        tile: Tile,
    },
    /// Nothing playable and nothing to draw.
    Passed {
        /// Who passed.
        player: PlayerId,
        /// Tiles drawn before giving up.
        drawn: u32,
    },
}

/// Whose turn it is, how many seats have passed in a row, and the phase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnController {
    player_count: usize,
    current: PlayerId,
    consecutive_passes: usize,
    phase: TurnPhase,
}

impl TurnController {
    /// Controller for a fresh round. The human always opens.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            current: PlayerId::HUMAN,
            consecutive_passes: 0,
            phase: TurnPhase::AwaitingHumanMove,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Seat to act.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Passes since the last placement.
    #[must_use]
    pub fn consecutive_passes(&self) -> usize {
        self.consecutive_passes
    }

    /// Terminal outcome, if reached.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            TurnPhase::RoundEnded(outcome) => Some(outcome),
            _ => None,
        }
    }

    // === Human input ===

    /// The human offers `tile`, optionally naming an end.
    ///
    /// A tile that fits both ends with no side opens a proposal instead of
    /// playing. Offering a new tile while a proposal is open replaces it.
    pub fn select_tile(
        &mut self,
        table: &mut Table,
        tile: Tile,
        side: Option<Side>,
        events: &mut Vec<GameEvent>,
    ) -> Result<Ply> {
        self.ensure_human_turn()?;

        let hand = &table.hands[PlayerId::HUMAN];
        if !hand.contains(tile) {
            return Err(IllegalMove::TileNotInHand(tile).into());
        }

        match rules::legal_move_count(tile, &table.board) {
            0 => Err(IllegalMove::NoLegalPlacement(tile).into()),
            2 if side.is_none() => {
                debug!(%tile, "tile fits both ends, waiting for a side");
                self.phase = TurnPhase::AwaitingDisambiguation { tile };
                table.board.set_pending_ends(true);
                events.push(GameEvent::DisambiguationRequired { tile });
                Ok(Ply::Proposed { tile })
            }
            _ => {
                let placement = self.play(table, PlayerId::HUMAN, tile, side, events)?;
                Ok(Ply::Played {
                    player: PlayerId::HUMAN,
                    placement,
                    drawn: 0,
                })
            }
        }
    }

    /// Place the pending proposal on `side`.
    pub fn choose_side(&mut self, table: &mut Table, side: Side, events: &mut Vec<GameEvent>) -> Result<Ply> {
        self.ensure_human_turn()?;
        let TurnPhase::AwaitingDisambiguation { tile } = self.phase else {
            return Err(IllegalMove::NothingPending.into());
        };

        let placement = self.play(table, PlayerId::HUMAN, tile, Some(side), events)?;
        Ok(Ply::Played {
            player: PlayerId::HUMAN,
            placement,
            drawn: 0,
        })
    }

    /// Withdraw the pending proposal.
    pub fn cancel_pending(&mut self, table: &mut Table, events: &mut Vec<GameEvent>) -> Result<()> {
        self.ensure_human_turn()?;
        if !matches!(self.phase, TurnPhase::AwaitingDisambiguation { .. }) {
            return Err(IllegalMove::NothingPending.into());
        }

        self.phase = TurnPhase::AwaitingHumanMove;
        table.board.set_pending_ends(false);
        events.push(GameEvent::ProposalCancelled);
        Ok(())
    }

    /// The human draws one tile. Only allowed with nothing playable.
    pub fn draw_for_human(&mut self, table: &mut Table, events: &mut Vec<GameEvent>) -> Result<Ply> {
        self.ensure_human_turn()?;
        if has_legal_move(&table.hands[PlayerId::HUMAN], &table.board) {
            return Err(IllegalMove::DrawWhilePlayable.into());
        }

        let tile = table
            .pool
            .as_mut()
            .and_then(DrawPool::draw)
            .ok_or(DominoError::IllegalMove(IllegalMove::PoolEmpty))?;

        table.hands[PlayerId::HUMAN].draw(tile);
        debug!(%tile, pool = table.pool_len(), "human drew");
        events.push(GameEvent::TileDrawn { player: PlayerId::HUMAN });
        Ok(Ply::Drew { tile })
    }

    // === Automatic plies ===

    /// Take one automatic ply: a bot's turn, or the human's forced pass.
    ///
    /// Returns `None` when the human has a choice to make or the round is over.
    pub fn step(&mut self, table: &mut Table, policy: &dyn BotPolicy, events: &mut Vec<GameEvent>) -> Option<Ply> {
        match self.phase {
            TurnPhase::BotTurn(bot) => Some(self.bot_ply(table, bot, policy, events)),
            TurnPhase::AwaitingHumanMove if self.human_must_pass(table) => {
                Some(self.pass(table, PlayerId::HUMAN, 0, events))
            }
            _ => None,
        }
    }

    /// The human can neither play nor draw.
    #[must_use]
    pub fn human_must_pass(&self, table: &Table) -> bool {
        !has_legal_move(&table.hands[PlayerId::HUMAN], &table.board) && !table.can_draw()
    }

    fn bot_ply(&mut self, table: &mut Table, bot: PlayerId, policy: &dyn BotPolicy, events: &mut Vec<GameEvent>) -> Ply {
        let mut drawn = 0;
        loop {
            let choice = policy.choose_tile(&table.hands[bot], &table.board);
            if let Some(tile) = choice {
                let side = infer_side(tile, &table.board, Side::Right);
                match self.play(table, bot, tile, side, events) {
                    Ok(placement) => {
                        return Ply::Played {
                            player: bot,
                            placement,
                            drawn,
                        }
                    }
                    Err(err) => warn!(%bot, %tile, %err, "bot policy chose an unplayable tile"),
                }
            }

            match table.pool.as_mut().and_then(DrawPool::draw) {
                Some(tile) => {
                    table.hands[bot].draw(tile);
                    drawn += 1;
                    events.push(GameEvent::TileDrawn { player: bot });
                }
                None => return self.pass(table, bot, drawn, events),
            }
        }
    }

    // === Transitions ===

    fn ensure_human_turn(&self) -> Result<()> {
        if self.phase.is_human_turn() {
            Ok(())
        } else {
            Err(DominoError::NotYourTurn { current: self.current })
        }
    }

    fn play(
        &mut self,
        table: &mut Table,
        player: PlayerId,
        tile: Tile,
        side: Option<Side>,
        events: &mut Vec<GameEvent>,
    ) -> Result<Placement> {
        let placement = rules::place(tile, side, &mut table.board, &mut table.hands[player])?;
        debug!(%player, tile = %placement.tile, side = %placement.side, "placed");

        self.consecutive_passes = 0;
        events.push(GameEvent::TilePlayed {
            player,
            tile: placement.tile,
            side: placement.side,
        });

        if table.hands[player].is_empty() {
            self.finish(domino_outcome(player, &table.hands), events);
        } else {
            self.advance(events);
        }
        Ok(placement)
    }

    fn pass(&mut self, table: &mut Table, player: PlayerId, drawn: u32, events: &mut Vec<GameEvent>) -> Ply {
        self.consecutive_passes += 1;
        debug!(%player, passes = self.consecutive_passes, "pass");
        events.push(GameEvent::PassOccurred { player });

        if self.consecutive_passes >= self.player_count {
            self.finish(blocked_outcome(&table.hands), events);
        } else {
            self.advance(events);
        }
        Ply::Passed { player, drawn }
    }

    fn advance(&mut self, events: &mut Vec<GameEvent>) {
        self.current = self.current.next(self.player_count);
        self.phase = if self.current.is_human() {
            TurnPhase::AwaitingHumanMove
        } else {
            TurnPhase::BotTurn(self.current)
        };
        events.push(GameEvent::TurnChanged { player: self.current });
    }

    fn finish(&mut self, outcome: Outcome, events: &mut Vec<GameEvent>) {
        info!(%outcome, passes = self.consecutive_passes, "round ended");
        self.phase = TurnPhase::RoundEnded(outcome);
        events.push(GameEvent::RoundEnded { report: outcome.report() });
    }
}

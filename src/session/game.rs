//! The caller-owned game session.
//!
//! `GameSession` is the only thing that mutates round state. It deals rounds,
//! forwards human input to the turn controller, and runs bot plies when
//! asked. It never sleeps: the caller decides pacing by choosing when to call
//! [`GameSession::step`] or [`GameSession::advance_bots`].

use tracing::{info, instrument, warn};

use super::snapshot::SessionSnapshot;
use crate::board::{Board, Side};
use crate::core::{validate_player_count, DominoError, GameRng, IllegalMove, PlayerId, Result, SessionConfig};
use crate::rules::Outcome;
use crate::tiles::{deal_round, Hand, Tile};
use crate::turn::{BotPolicy, FirstLegal, GameEvent, Ply, Table, TurnController, TurnPhase};

/// One human against 1-3 bots, across any number of rounds.
pub struct GameSession {
    config: SessionConfig,
    rng: GameRng,
    table: Table,
    turn: TurnController,
    policy: Box<dyn BotPolicy>,
    events: Vec<GameEvent>,
    round: u32,
    results: Vec<Outcome>,
    recorded: bool,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("config", &self.config)
            .field("round", &self.round)
            .field("phase", &self.turn.phase())
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}

impl GameSession {
    /// Create a session and deal its first round.
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = GameRng::new(config.seed);
        let deal = deal_round(config.player_count, &mut rng)?;
        let redeals = deal.attempts - 1;

        let mut session = Self {
            rng,
            table: Table::from_deal(deal),
            turn: TurnController::new(config.player_count),
            policy: Box::new(FirstLegal),
            events: Vec::new(),
            round: 0,
            results: Vec::new(),
            recorded: false,
            config,
        };
        session.announce_round(redeals);
        Ok(session)
    }

    /// Create a session whose first round starts from an arranged table.
    ///
    /// The table is checked when it is built (see [`Table::with_board`]).
    /// The human moves first. Later rounds (restart-on-end or
    /// [`GameSession::start_round`]) are dealt normally.
    pub fn with_table(config: SessionConfig, table: Table) -> Result<Self> {
        config.validate()?;
        if table.player_count() != config.player_count {
            return Err(DominoError::Configuration {
                player_count: table.player_count(),
            });
        }

        let player_count = config.player_count;
        let mut session = Self {
            rng: GameRng::new(config.seed),
            turn: TurnController::new(player_count),
            table,
            policy: Box::new(FirstLegal),
            events: Vec::new(),
            round: 1,
            results: Vec::new(),
            recorded: false,
            config,
        };
        session.events.push(GameEvent::RoundStarted { round: 1, player_count });
        Ok(session)
    }

    /// Replace the bot tile-selection policy.
    #[must_use]
    pub fn with_policy(mut self, policy: impl BotPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    // === Round lifecycle ===

    /// Deal a new round, abandoning whatever was in progress.
    ///
    /// An invalid player count is rejected before anything changes.
    #[instrument(skip(self))]
    pub fn start_round(&mut self, player_count: usize) -> Result<()> {
        validate_player_count(player_count)?;

        let deal = deal_round(player_count, &mut self.rng)?;
        let redeals = deal.attempts - 1;

        self.config.player_count = player_count;
        self.table = Table::from_deal(deal);
        self.turn = TurnController::new(player_count);
        self.announce_round(redeals);
        Ok(())
    }

    fn announce_round(&mut self, redeals: u32) {
        let player_count = self.config.player_count;
        self.round += 1;
        self.recorded = false;

        info!(round = self.round, player_count, redeals, "round started");
        self.events.push(GameEvent::RoundStarted {
            round: self.round,
            player_count,
        });
        if redeals > 0 {
            self.events.push(GameEvent::Redealt { redeals });
        }
    }

    // === Human input ===

    /// Play the tile at `position` in the human's hand.
    #[instrument(skip(self))]
    pub fn submit_human_move(&mut self, position: usize, side: Option<Side>) -> Result<Ply> {
        self.ensure_human_turn()?;
        let tile = self.table.hands[PlayerId::HUMAN]
            .get(position)
            .ok_or(DominoError::IllegalMove(IllegalMove::NoSuchPosition(position)))?;
        self.select_tile(PlayerId::HUMAN, tile, side)
    }

    /// Input-adapter entry: `owner` offers `tile`, optionally naming an end.
    ///
    /// Only the human's hand accepts input; a tile from a bot's hand is not
    /// in the human's hand.
    #[instrument(skip(self))]
    pub fn select_tile(&mut self, owner: PlayerId, tile: Tile, side: Option<Side>) -> Result<Ply> {
        if !owner.is_human() {
            return Err(IllegalMove::TileNotInHand(tile).into());
        }
        let ply = self.turn.select_tile(&mut self.table, tile, side, &mut self.events)?;
        self.record_outcome();
        Ok(ply)
    }

    /// Resolve a pending proposal onto `side`.
    #[instrument(skip(self))]
    pub fn choose_side(&mut self, side: Side) -> Result<Ply> {
        let ply = self.turn.choose_side(&mut self.table, side, &mut self.events)?;
        self.record_outcome();
        Ok(ply)
    }

    /// Withdraw a pending proposal.
    pub fn cancel_pending(&mut self) -> Result<()> {
        self.turn.cancel_pending(&mut self.table, &mut self.events)
    }

    /// Draw one tile for the human.
    #[instrument(skip(self))]
    pub fn draw_from_pool(&mut self) -> Result<Ply> {
        self.turn.draw_for_human(&mut self.table, &mut self.events)
    }

    // === Automatic play ===

    /// Run one automatic ply.
    ///
    /// With restart-on-end set, a call after the round ended deals the next
    /// round first.
    pub fn step(&mut self) -> Option<Ply> {
        if self.turn.phase().is_terminal() && self.config.restart_on_end {
            if let Err(err) = self.start_round(self.config.player_count) {
                warn!(%err, "restart failed");
                return None;
            }
        }

        let ply = self.turn.step(&mut self.table, self.policy.as_ref(), &mut self.events);
        self.record_outcome();
        ply
    }

    /// Run plies until the human must act or the round ends.
    ///
    /// Stops on the ply that ends a round, so the outcome is observable
    /// before any restart.
    #[instrument(skip(self))]
    pub fn advance_bots(&mut self) -> Vec<Ply> {
        let mut plies = Vec::new();
        while let Some(ply) = self.step() {
            plies.push(ply);
            if self.turn.phase().is_terminal() {
                break;
            }
        }
        plies
    }

    // === Observation ===

    /// Terminal outcome of the current round.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.turn.outcome()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.turn.phase()
    }

    /// Seat to act.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.turn.current_player()
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// 1-based number of the current round.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Full round state.
    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The line of play.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.table.board
    }

    /// A seat's hand.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.table.hands[player]
    }

    /// Outcomes of finished rounds, oldest first.
    #[must_use]
    pub fn results(&self) -> &[Outcome] {
        &self.results
    }

    /// Points the human has won across all finished rounds.
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.results.iter().map(|o| o.score()).sum()
    }

    /// Renderer view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(self.round, &self.table, &self.turn)
    }

    /// Take the notifications emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn ensure_human_turn(&self) -> Result<()> {
        if self.turn.phase().is_human_turn() {
            Ok(())
        } else {
            Err(DominoError::NotYourTurn {
                current: self.turn.current_player(),
            })
        }
    }

    /// Remember the round's outcome the first time it shows up.
    fn record_outcome(&mut self) {
        if let Some(outcome) = self.turn.outcome() {
            if !self.recorded {
                self.results.push(outcome);
                self.recorded = true;
            }
        }
    }
}

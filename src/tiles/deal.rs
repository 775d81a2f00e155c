//! Round setup: shuffle, deal hands, set aside the draw pool.
//!
//! A deal where any hand holds [`REDEAL_DOUBLES`] or more doubles is thrown
//! away and redone from a fresh shuffle. With 9 tiles from 27 the chance of
//! that is under 1%, so the loop almost always finishes on the first attempt.

use tracing::debug;

use super::hand::{DrawPool, Hand};
use super::tileset::{hand_size, TileSet, DRAW_POOL_SIZE};
use crate::core::{GameRng, PlayerMap, Result};

/// Doubles in one hand that force a redeal.
pub const REDEAL_DOUBLES: usize = 5;

/// Outcome of setting up a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deal {
    /// One hand per seat, human first.
    pub hands: PlayerMap<Hand>,
    /// Draw pool (2-player rounds only).
    pub pool: Option<DrawPool>,
    /// Shuffles it took to get an acceptable deal (1 = no redeal).
    pub attempts: u32,
}

/// Deal a round for `player_count` seats, redealing double-heavy hands.
pub fn deal_round(player_count: usize, rng: &mut GameRng) -> Result<Deal> {
    let mut attempts = 0;
    loop {
        attempts += 1;
        let (hands, pool) = deal_once(player_count, rng)?;

        if let Some((seat, hand)) = hands.iter().find(|(_, h)| needs_redeal(h)) {
            debug!(attempt = attempts, %seat, doubles = hand.double_count(), "redealing");
            continue;
        }

        return Ok(Deal { hands, pool, attempts });
    }
}

/// Whether a starting hand is too double-heavy to keep.
#[must_use]
pub fn needs_redeal(hand: &Hand) -> bool {
    hand.double_count() >= REDEAL_DOUBLES
}

fn deal_once(player_count: usize, rng: &mut GameRng) -> Result<(PlayerMap<Hand>, Option<DrawPool>)> {
    let mut set = TileSet::generate(player_count)?;
    set.shuffle(rng);

    let size = hand_size(player_count);
    let mut hands = Vec::with_capacity(player_count);
    for _ in 0..player_count {
        hands.push(Hand::from_tiles(set.deal(size)?));
    }

    let pool = if player_count == 2 {
        Some(DrawPool::from_tiles(set.deal(DRAW_POOL_SIZE)?))
    } else {
        None
    };

    // Whatever is left is out of play for the round.
    debug_assert!(set.is_empty());

    Ok((PlayerMap::from_vec(hands), pool))
}

//! Seat identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! Seat index at the table. Seat 0 is always the human; seats 1..N are bots.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by `Vec` for O(1) access, indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier. Seat 0 is the human player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The human's seat.
    pub const HUMAN: PlayerId = PlayerId(0);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// True for seat 0.
    #[must_use]
    pub const fn is_human(self) -> bool {
        self.0 == 0
    }

    /// The seat that plays after this one.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all seats for a table of `player_count`.
    ///
    /// ```
    /// use domino_engine::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId::HUMAN, PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_human() {
            write!(f, "You")
        } else {
            write!(f, "Bot {}", self.0)
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// ```
/// use domino_engine::core::{PlayerId, PlayerMap};
///
/// let mut passes: PlayerMap<u32> = PlayerMap::from_vec(vec![0; 4]);
/// passes[PlayerId::new(2)] += 1;
/// assert_eq!(passes[PlayerId::new(2)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build from one value per seat, in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");
        Self { data }
    }

    /// Get the number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the seats other than the human's.
    pub fn bots(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.iter().filter(|(p, _)| !p.is_human())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

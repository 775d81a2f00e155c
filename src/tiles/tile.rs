//! A single domino.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Pip value on one half of a tile.
pub type Pip = u8;

/// Highest pip value in a double-six set.
pub const MAX_PIP: Pip = 6;

/// A domino: two pip values.
///
/// The pip order is orientation only. Two tiles are equal when their
/// unordered pip pairs match, so `[2|5] == [5|2]`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawTile")]
pub struct Tile {
    a: Pip,
    b: Pip,
}

/// Unchecked wire form; pips are range-checked on the way in.
#[derive(Deserialize)]
struct RawTile {
    a: Pip,
    b: Pip,
}

impl TryFrom<RawTile> for Tile {
    type Error = String;

    fn try_from(raw: RawTile) -> Result<Self, Self::Error> {
        if raw.a > MAX_PIP || raw.b > MAX_PIP {
            return Err(format!("pip values must be 0-{}, got [{}|{}]", MAX_PIP, raw.a, raw.b));
        }
        Ok(Self { a: raw.a, b: raw.b })
    }
}

impl Tile {
    /// Create a tile. Panics if either pip exceeds [`MAX_PIP`].
    #[must_use]
    pub fn new(a: Pip, b: Pip) -> Self {
        assert!(a <= MAX_PIP && b <= MAX_PIP, "pip values must be 0-{}", MAX_PIP);
        Self { a, b }
    }

    /// Leading pip in the current orientation.
    #[must_use]
    pub fn a(self) -> Pip {
        self.a
    }

    /// Trailing pip in the current orientation.
    #[must_use]
    pub fn b(self) -> Pip {
        self.b
    }

    /// Both pips, in orientation order.
    #[must_use]
    pub fn pips(self) -> (Pip, Pip) {
        (self.a, self.b)
    }

    /// Both halves carry the same pip.
    #[must_use]
    pub fn is_double(self) -> bool {
        self.a == self.b
    }

    /// Either half carries `pip`.
    #[must_use]
    pub fn contains(self, pip: Pip) -> bool {
        self.a == pip || self.b == pip
    }

    /// Sum of both pips.
    #[must_use]
    pub fn pip_total(self) -> u32 {
        u32::from(self.a) + u32::from(self.b)
    }

    /// Swap pip order in place.
    pub fn flip(&mut self) {
        std::mem::swap(&mut self.a, &mut self.b);
    }

    /// Copy with the pip order swapped.
    #[must_use]
    pub fn flipped(mut self) -> Self {
        self.flip();
        self
    }

    /// Pips with the lower value first. Identity of the tile.
    #[must_use]
    pub fn canonical(self) -> (Pip, Pip) {
        (self.a.min(self.b), self.a.max(self.b))
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl PartialOrd for Tile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tile {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().cmp(&other.canonical())
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}|{}]", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_equality_ignores_orientation() {
        assert_eq!(Tile::new(2, 5), Tile::new(5, 2));
        assert_ne!(Tile::new(2, 5), Tile::new(2, 4));

        let mut set = FxHashSet::default();
        set.insert(Tile::new(1, 3));
        assert!(set.contains(&Tile::new(3, 1)));
    }

    #[test]
    fn test_flip_keeps_identity() {
        let mut tile = Tile::new(1, 6);
        tile.flip();
        assert_eq!(tile.pips(), (6, 1));
        assert_eq!(tile, Tile::new(1, 6));
        assert_eq!(tile.flipped().pips(), (1, 6));
    }

    #[test]
    fn test_double_and_totals() {
        assert!(Tile::new(4, 4).is_double());
        assert!(!Tile::new(4, 3).is_double());
        assert_eq!(Tile::new(6, 5).pip_total(), 11);
        assert!(Tile::new(0, 3).contains(0));
        assert!(!Tile::new(0, 3).contains(2));
    }

    #[test]
    fn test_display() {
        assert_eq!(Tile::new(3, 0).to_string(), "[3|0]");
    }

    #[test]
    fn test_deserialize_checks_pips() {
        let tile: Tile = serde_json::from_str(r#"{"a":6,"b":2}"#).unwrap();
        assert_eq!(tile.pips(), (6, 2));
        assert_eq!(serde_json::to_string(&tile).unwrap(), r#"{"a":6,"b":2}"#);

        let err = serde_json::from_str::<Tile>(r#"{"a":9,"b":9}"#).unwrap_err();
        assert!(err.to_string().contains("pip values must be 0-6"));
    }

    #[test]
    #[should_panic(expected = "pip values must be 0-6")]
    fn test_out_of_range_pip() {
        let _ = Tile::new(7, 1);
    }
}

//! Board (layout) of played tiles and its two open ends.

pub mod layout;

pub use layout::{Board, BoardEnds, PlacedTile, Side};

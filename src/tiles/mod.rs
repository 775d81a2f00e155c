//! Tiles, the undealt set, hands and the draw pool.

pub mod deal;
pub mod hand;
pub mod tile;
pub mod tileset;

pub use deal::{deal_round, needs_redeal, Deal, REDEAL_DOUBLES};
pub use hand::{DrawPool, Hand};
pub use tile::{Pip, Tile, MAX_PIP};
pub use tileset::{hand_size, TileSet, DRAW_POOL_SIZE, FULL_SET_SIZE};

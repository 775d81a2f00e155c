//! Turn sequencing: whose move it is, drawing, passing, round end.

pub mod controller;
pub mod event;
pub mod policy;
pub mod table;

pub use controller::{Ply, TurnController, TurnPhase};
pub use event::GameEvent;
pub use policy::{BotPolicy, FirstLegal};
pub use table::Table;

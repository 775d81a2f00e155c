//! Session orchestration and the boundary renderers/CLIs consume.
//!
//! - `GameSession`: setup, human input, bot autoplay, restart
//! - `GameEvent`: change notifications (defined in `turn`)
//! - `SessionSnapshot`: read-only frame for drawing

pub mod game;
pub mod snapshot;

pub use crate::turn::GameEvent;
pub use game::GameSession;
pub use snapshot::{HandView, SessionSnapshot};

//! Dominoes rules: what may be played, how it is laid, who won.
//!
//! The functions here are pure with respect to turn order; sequencing lives
//! in [`crate::turn`].

pub mod engine;
pub mod outcome;

pub use engine::{
    has_legal_move, infer_side, legal_move_count, legal_sides, place, resolve_placement, LegalSides, Placement,
};
pub use outcome::{blocked_outcome, domino_outcome, opponents_pip_total, Outcome, OutcomeKind, OutcomeReport};

//! Rule providers for the two agent classes.
//!
//! `GameState` dispatches by index: agent 0 goes to a `ControlledRules`,
//! every other agent to an `AdversaryRules`. The adversary provider also
//! owns the post-move collision check, which runs after every move.

pub mod engine;
mod ghost;
mod pacman;

pub use engine::{AdversaryRules, ControlledRules};
pub use ghost::GhostRules;
pub use pacman::PacmanRules;

//! # pacman-core
//!
//! Copy-on-transition game state for a grid-world Pacman game, built as a
//! substrate for tree search and RL rollouts.
//!
//! ## Design Principles
//!
//! 1. **Never Mutate the Parent**: `generate_successor` copies the state,
//!    mutates the copy and returns it. Sibling branches share nothing
//!    mutable, so they can be expanded on any thread without locks.
//!
//! 2. **Index 0 Is Special**: Pacman is always agent 0. Dispatch between
//!    the controlled and adversary rules is an explicit index comparison.
//!
//! 3. **Terminal Is Absorbing**: a won or lost state has no legal actions
//!    and no successors.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: food grids are `im` vectors, so a
//!   successor shares untouched chunks with its parent.
//!
//! - **Shared Statics**: `Layout` and `RulesConfig` sit behind `Arc`s and
//!   are never written after construction.
//!
//! ## Modules
//!
//! - `core`: Layout, grids, agents, state data, `GameState`, errors, RNG
//! - `rules`: Rule provider traits and the classic Pacman / ghost rules
//! - `agents`: Random and directional agents, episode rollouts

pub mod agents;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ActionList, AgentState, Configuration, Direction, GameError, GameRng, GameState, Grid, Layout,
    LayoutError, Outcome, Position, RulesConfig, StateData, MAX_GHOSTS, PACMAN_INDEX, TIME_PENALTY,
};

pub use crate::rules::{AdversaryRules, ControlledRules, GhostRules, PacmanRules};

pub use crate::agents::{run_episode, Agent, DirectionalGhost, Episode, RandomAgent};

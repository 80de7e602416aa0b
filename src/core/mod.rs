//! Core engine types: layout, grids, agents, state data and the game state.
//!
//! `GameState` is the entry point. Everything else here is either shared
//! read-only data (`Layout`, `RulesConfig`) or the value it owns
//! (`StateData`).

pub mod agent;
pub mod config;
pub mod data;
pub mod direction;
pub mod error;
pub mod grid;
pub mod layout;
pub mod rng;
pub mod state;

pub use agent::{AgentState, Configuration, Position};
pub use config::{RulesConfig, TIME_PENALTY};
pub use data::{Outcome, StateData, MAX_GHOSTS};
pub use direction::{possible_actions, ActionList, Direction};
pub use error::{GameError, LayoutError, Result};
pub use grid::Grid;
pub use layout::{AgentMarker, Layout};
pub use rng::GameRng;
pub use state::{GameState, PACMAN_INDEX};

//! Simple stochastic agents and episode rollouts.
//!
//! These drive a `GameState` forward for RL rollouts and tests. They pick
//! one action per call and never search; tree search lives with the
//! caller.
//!
//! ## Components
//!
//! - `Agent`: anything that picks an action for one agent index
//! - `RandomAgent`: uniform over legal actions
//! - `DirectionalGhost`: chases Pacman, flees while scared
//! - `run_episode`: plays agents in index order until the game ends

mod directional;
mod random;
mod rollout;

pub use directional::DirectionalGhost;
pub use random::RandomAgent;
pub use rollout::{run_episode, Episode};

use crate::core::{Direction, GameState};

/// A policy for one agent.
pub trait Agent {
    /// Agent index this policy controls.
    fn index(&self) -> usize;

    /// Pick an action, or `None` if the agent has nothing legal to do.
    fn get_action(&mut self, state: &GameState) -> Option<Direction>;
}

//! Rule provider traits.
//!
//! `GameState` never interprets movement, eating or collisions itself. It
//! picks a provider by agent index (0 = controlled, anything else =
//! adversary) and hands it the freshly copied `StateData` to mutate.
//!
//! ## Implementation Notes
//!
//! - `legal_actions`: order is preserved by the caller; search code may
//!   break ties on it.
//! - `apply_action`: must be deterministic and must not touch the outcome;
//!   terminal outcomes are decided in `check_death`.
//! - `check_death`: runs after every move, whichever agent made it.

use crate::core::agent::AgentState;
use crate::core::data::StateData;
use crate::core::direction::{ActionList, Direction};
use crate::core::error::Result;

/// Rules for the controlled agent (index 0).
pub trait ControlledRules {
    /// Legal actions for agent 0.
    fn legal_actions(&self, data: &StateData) -> ActionList;

    /// Move agent 0 and apply eating effects, accumulating `score_change`.
    fn apply_action(&self, data: &mut StateData, action: Direction) -> Result<()>;
}

/// Rules for adversary agents (index >= 1), plus the shared post-move checks.
pub trait AdversaryRules {
    /// Legal actions for adversary `agent_index`.
    fn legal_actions(&self, data: &StateData, agent_index: usize) -> ActionList;

    /// Move adversary `agent_index`.
    fn apply_action(&self, data: &mut StateData, action: Direction, agent_index: usize) -> Result<()>;

    /// Advance one adversary's per-turn timers.
    fn decrement_timer(&self, agent: &mut AgentState);

    /// Resolve collisions and board-clear after a move by `agent_index`.
    ///
    /// May set the outcome, mark ghosts eaten and adjust `score_change`.
    fn check_death(&self, data: &mut StateData, agent_index: usize);
}

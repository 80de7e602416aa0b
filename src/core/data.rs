//! The mutable value behind every `GameState`.
//!
//! `StateData` holds everything that changes from turn to turn. The layout
//! and rule constants are shared behind `Arc`s and never written; food is
//! an `im`-backed grid, so a clone costs a handful of pointer copies plus
//! the agent vector.
//!
//! ## Per-transition fields
//!
//! `score_change`, `agent_moved`, `food_eaten` and `capsule_eaten` describe
//! the single move that produced this value. `successor_copy` resets them;
//! `deep_copy` keeps them.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::agent::{AgentState, Configuration, Position};
use super::config::RulesConfig;
use super::direction::Direction;
use super::grid::Grid;
use super::layout::Layout;

/// Use every ghost marker the layout defines.
pub const MAX_GHOSTS: usize = usize::MAX;

/// Whether the game is still running.
///
/// Terminal outcomes are absorbing: `set_win` and `set_lose` only act on an
/// `Active` game, so a branch can never leave `Win` or `Lose`, and never
/// holds both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Active,
    Win,
    Lose,
}

impl Outcome {
    /// True for `Win` and `Lose`.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != Outcome::Active
    }
}

/// Per-turn mutable game data.
#[derive(Clone, Debug, Default)]
pub struct StateData {
    /// Index 0 is Pacman, the rest are ghosts.
    pub agent_states: Vec<AgentState>,

    /// Remaining food.
    pub food: Grid<bool>,

    /// Remaining capsules.
    pub capsules: Vec<Position>,

    /// Accumulated score.
    pub score: i64,

    /// Score delta of the current transition, committed once at its end.
    pub score_change: i64,

    /// Ghosts eaten during the current Pacman round.
    pub eaten: Vec<bool>,

    /// Agent whose move produced this value.
    pub agent_moved: Option<usize>,

    /// Action that produced this value.
    pub last_action: Option<Direction>,

    /// Food cell consumed by the move that produced this value.
    pub food_eaten: Option<(usize, usize)>,

    /// Capsule consumed by the move that produced this value.
    pub capsule_eaten: Option<Position>,

    outcome: Outcome,
    layout: Arc<Layout>,
    config: Arc<RulesConfig>,
}

impl StateData {
    /// Populate from a layout, keeping at most `num_ghost_agents` ghosts.
    ///
    /// Agents start facing `Stop`. Score is zero and the game is active.
    pub fn initialize(&mut self, layout: Arc<Layout>, num_ghost_agents: usize, config: Arc<RulesConfig>) {
        let mut num_ghosts = 0;
        let mut agent_states = Vec::with_capacity(layout.agent_positions().len());

        for marker in layout.agent_positions() {
            if !marker.is_pacman {
                if num_ghosts == num_ghost_agents {
                    continue;
                }
                num_ghosts += 1;
            }
            let start = Configuration::new(marker.pos, Direction::Stop);
            agent_states.push(AgentState::new(start, marker.is_pacman));
        }

        self.food = layout.food().clone();
        self.capsules = layout.capsules().to_vec();
        self.eaten = vec![false; agent_states.len()];
        self.agent_states = agent_states;
        self.score = 0;
        self.score_change = 0;
        self.agent_moved = None;
        self.last_action = None;
        self.food_eaten = None;
        self.capsule_eaten = None;
        self.outcome = Outcome::Active;
        self.layout = layout;
        self.config = config;
    }

    /// Exact, independently owned copy.
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }

    /// Copy used as the starting point of a transition.
    ///
    /// Persistent fields are copied; per-transition fields start empty.
    #[must_use]
    pub fn successor_copy(&self) -> Self {
        Self {
            score_change: 0,
            agent_moved: None,
            food_eaten: None,
            capsule_eaten: None,
            ..self.clone()
        }
    }

    /// Shared layout.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Shared rule constants.
    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Current outcome.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Mark the game won. No effect unless the game is active.
    pub fn set_win(&mut self) -> bool {
        self.finish(Outcome::Win)
    }

    /// Mark the game lost. No effect unless the game is active.
    pub fn set_lose(&mut self) -> bool {
        self.finish(Outcome::Lose)
    }

    fn finish(&mut self, outcome: Outcome) -> bool {
        if self.outcome.is_terminal() {
            return false;
        }
        log::debug!("game ended: {:?} (score {})", outcome, self.score + self.score_change);
        self.outcome = outcome;
        true
    }

    /// Pacman's current position.
    ///
    /// # Panics
    ///
    /// If the data was never initialized from a layout with a Pacman start.
    #[must_use]
    pub fn pacman_position(&self) -> Position {
        self.agent_states[0].get_position()
    }
}

// Equality covers what a search algorithm observes; per-transition
// diagnostics and the shared layout are ignored.
impl PartialEq for StateData {
    fn eq(&self, other: &Self) -> bool {
        self.agent_states == other.agent_states
            && self.food == other.food
            && self.capsules == other.capsules
            && self.score == other.score
            && self.outcome == other.outcome
    }
}

impl Eq for StateData {}

impl Hash for StateData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.agent_states.hash(state);
        self.food.hash(state);
        self.capsules.hash(state);
        self.score.hash(state);
        self.outcome.hash(state);
    }
}

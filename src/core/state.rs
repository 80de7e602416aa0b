//! Game state: the transition and query engine.
//!
//! ## GameState
//!
//! A `GameState` is a handle over exactly one `StateData`. It is never
//! mutated after construction except by `initialize`; transitions read
//! `self` and write into a fresh copy:
//!
//! 1. Copy the data (per-transition fields reset)
//! 2. Dispatch the move by index: 0 to the controlled rules, else adversary
//! 3. Time penalty (Pacman) or timer tick (ghost)
//! 4. Collision / board-clear check, whoever moved
//! 5. Commit: record the mover, fold `score_change` into `score` once
//!
//! Siblings never alias: every successor owns its data, and persistent
//! containers copy on write.
//!
//! ```
//! use std::sync::Arc;
//! use pacman_core::{Direction, GameState, Layout, MAX_GHOSTS};
//!
//! let layout: Layout = "%%%%%\n%P  %\n%%%%%".parse().unwrap();
//! let state = GameState::from_layout(Arc::new(layout), MAX_GHOSTS);
//!
//! let next = state.generate_successor(0, Direction::East).unwrap();
//! assert_eq!(state.get_score(), 0.0);
//! assert_eq!(next.get_score(), -1.0);
//! ```

use std::sync::Arc;

use super::agent::{AgentState, Position};
use super::config::{RulesConfig, TIME_PENALTY};
use super::data::{Outcome, StateData};
use super::direction::{ActionList, Direction};
use super::error::{GameError, Result};
use super::grid::Grid;
use super::layout::Layout;
use crate::rules::{AdversaryRules, ControlledRules, GhostRules, PacmanRules};

/// Index of the controlled agent.
pub const PACMAN_INDEX: usize = 0;

/// Immutable handle over one game position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GameState {
    data: StateData,
}

impl GameState {
    /// Create an uninitialized state. Call `initialize` before use.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state from a layout with the classic rule constants.
    #[must_use]
    pub fn from_layout(layout: Arc<Layout>, num_ghost_agents: usize) -> Self {
        Self::with_config(layout, num_ghost_agents, RulesConfig::default())
    }

    /// Create a state from a layout with custom rule constants.
    #[must_use]
    pub fn with_config(layout: Arc<Layout>, num_ghost_agents: usize, config: RulesConfig) -> Self {
        let mut state = Self::new();
        state.initialize_with_config(layout, num_ghost_agents, config);
        state
    }

    /// Populate from a layout (`MAX_GHOSTS` keeps every ghost marker).
    pub fn initialize(&mut self, layout: Arc<Layout>, num_ghost_agents: usize) {
        self.initialize_with_config(layout, num_ghost_agents, RulesConfig::default());
    }

    /// Populate from a layout with custom rule constants.
    pub fn initialize_with_config(&mut self, layout: Arc<Layout>, num_ghost_agents: usize, config: RulesConfig) {
        self.data.initialize(layout, num_ghost_agents, Arc::new(config));
    }

    /// Exact, independently owned copy (per-transition fields included).
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        Self {
            data: self.data.deep_copy(),
        }
    }

    /// Read-only view of the underlying data.
    #[must_use]
    pub fn data(&self) -> &StateData {
        &self.data
    }

    fn check_agent_index(&self, index: usize) -> Result<()> {
        if index >= self.get_num_agents() {
            return Err(GameError::InvalidAgentIndex {
                index,
                num_agents: self.get_num_agents(),
            });
        }
        Ok(())
    }

    // === Transitions ===

    /// Legal actions for an agent under the classic rules.
    ///
    /// Empty for any index once the game is over.
    pub fn get_legal_actions(&self, agent_index: usize) -> Result<ActionList> {
        self.get_legal_actions_with(&PacmanRules, &GhostRules, agent_index)
    }

    /// Legal actions for Pacman.
    #[must_use]
    pub fn get_legal_pacman_actions(&self) -> ActionList {
        self.get_legal_actions(PACMAN_INDEX).unwrap_or_default()
    }

    /// Legal actions for an agent under the given rule providers.
    pub fn get_legal_actions_with<C, A>(&self, controlled: &C, adversary: &A, agent_index: usize) -> Result<ActionList>
    where
        C: ControlledRules + ?Sized,
        A: AdversaryRules + ?Sized,
    {
        if self.is_terminal() {
            return Ok(ActionList::new());
        }
        self.check_agent_index(agent_index)?;

        if agent_index == PACMAN_INDEX {
            Ok(controlled.legal_actions(&self.data))
        } else {
            Ok(adversary.legal_actions(&self.data, agent_index))
        }
    }

    /// State after `agent_index` takes `action`, under the classic rules.
    pub fn generate_successor(&self, agent_index: usize, action: Direction) -> Result<GameState> {
        self.generate_successor_with(&PacmanRules, &GhostRules, agent_index, action)
    }

    /// State after Pacman takes `action`.
    pub fn generate_pacman_successor(&self, action: Direction) -> Result<GameState> {
        self.generate_successor(PACMAN_INDEX, action)
    }

    /// State after `agent_index` takes `action`, under the given rule providers.
    ///
    /// `self` is left untouched; the providers only ever see the copy.
    pub fn generate_successor_with<C, A>(
        &self,
        controlled: &C,
        adversary: &A,
        agent_index: usize,
        action: Direction,
    ) -> Result<GameState>
    where
        C: ControlledRules + ?Sized,
        A: AdversaryRules + ?Sized,
    {
        if self.is_terminal() {
            return Err(GameError::TerminalState);
        }
        self.check_agent_index(agent_index)?;

        let mut state = GameState::from(self);
        let data = &mut state.data;

        if agent_index == PACMAN_INDEX {
            data.eaten.iter_mut().for_each(|eaten| *eaten = false);
            controlled.apply_action(data, action)?;
            data.score_change -= TIME_PENALTY;
        } else {
            adversary.apply_action(data, action, agent_index)?;
            adversary.decrement_timer(&mut data.agent_states[agent_index]);
        }

        adversary.check_death(data, agent_index);

        data.agent_moved = Some(agent_index);
        data.score += data.score_change;
        data.last_action = Some(action);

        log::trace!(
            "agent {} took {}: score {} ({:+})",
            agent_index,
            action,
            data.score,
            data.score_change
        );
        Ok(state)
    }

    // === Termination ===

    /// Current outcome.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.data.outcome()
    }

    /// True when Pacman cleared the board.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.outcome() == Outcome::Win
    }

    /// True when a ghost caught Pacman.
    #[must_use]
    pub fn is_lose(&self) -> bool {
        self.outcome() == Outcome::Lose
    }

    /// True when the game is over either way.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_terminal()
    }

    // === Agents ===

    /// Copy of Pacman's state.
    ///
    /// # Panics
    ///
    /// If the state has no agents: a `GameState::new()` that was never
    /// initialized, or one initialized from `Layout::default()`.
    #[must_use]
    pub fn get_pacman_state(&self) -> AgentState {
        self.data.agent_states[PACMAN_INDEX]
    }

    /// Pacman's position.
    ///
    /// # Panics
    ///
    /// Under the same conditions as `get_pacman_state`.
    #[must_use]
    pub fn get_pacman_position(&self) -> Position {
        self.data.pacman_position()
    }

    /// State of ghost `agent_index` (1 ..= num_agents - 1).
    pub fn get_ghost_state(&self, agent_index: usize) -> Result<&AgentState> {
        if agent_index == PACMAN_INDEX || agent_index >= self.get_num_agents() {
            return Err(GameError::InvalidAgentIndex {
                index: agent_index,
                num_agents: self.get_num_agents(),
            });
        }
        Ok(&self.data.agent_states[agent_index])
    }

    /// States of every ghost, in index order.
    #[must_use]
    pub fn get_ghost_states(&self) -> &[AgentState] {
        self.data.agent_states.get(1..).unwrap_or_default()
    }

    /// Position of ghost `agent_index`.
    pub fn get_ghost_position(&self, agent_index: usize) -> Result<Position> {
        self.get_ghost_state(agent_index).map(AgentState::get_position)
    }

    /// Positions of every ghost, in index order.
    #[must_use]
    pub fn get_ghost_positions(&self) -> Vec<Position> {
        self.get_ghost_states().iter().map(AgentState::get_position).collect()
    }

    /// Number of agents, Pacman included. Fixed for the whole game.
    #[must_use]
    pub fn get_num_agents(&self) -> usize {
        self.data.agent_states.len()
    }

    /// All agent states; index 0 is Pacman.
    #[must_use]
    pub fn get_agent_states(&self) -> &[AgentState] {
        &self.data.agent_states
    }

    /// Agent whose move produced this state.
    #[must_use]
    pub fn get_agent_moved(&self) -> Option<usize> {
        self.data.agent_moved
    }

    /// Action that produced this state.
    #[must_use]
    pub fn get_last_action(&self) -> Option<Direction> {
        self.data.last_action
    }

    // === Score ===

    /// Accumulated score.
    #[must_use]
    pub fn get_score(&self) -> f64 {
        self.data.score as f64
    }

    /// Score delta of the move that produced this state.
    #[must_use]
    pub fn get_score_change(&self) -> i64 {
        self.data.score_change
    }

    // === Board ===

    /// Remaining food.
    #[must_use]
    pub fn get_food(&self) -> &Grid<bool> {
        &self.data.food
    }

    /// Coordinates of remaining food, ordered by `x` then `y`.
    #[must_use]
    pub fn get_food_sources(&self) -> Vec<(usize, usize)> {
        self.data.food.as_list()
    }

    /// Remaining food count.
    #[must_use]
    pub fn get_num_food(&self) -> usize {
        self.data.food.count()
    }

    /// Whether food remains at `(x, y)`.
    #[must_use]
    pub fn has_food(&self, x: usize, y: usize) -> bool {
        self.data.food.get(x, y).copied().unwrap_or(false)
    }

    /// Remaining capsules.
    #[must_use]
    pub fn get_capsules(&self) -> &[Position] {
        &self.data.capsules
    }

    /// Wall mask (shared with every state of the game).
    #[must_use]
    pub fn get_walls(&self) -> &Grid<bool> {
        self.data.layout().walls()
    }

    /// Whether `(x, y)` is a wall.
    #[must_use]
    pub fn has_wall(&self, x: usize, y: usize) -> bool {
        self.data.layout().is_wall(x, y)
    }

    /// Occupancy grid with 1 on Pacman's cell.
    ///
    /// Coordinates are truncated toward zero, so a half-way position counts
    /// as the lower cell.
    #[must_use]
    pub fn get_pacman_matrix(&self) -> Grid<u8> {
        let pacman = self.get_pacman_state();
        self.occupancy(std::iter::once(pacman).filter(|a| a.is_pacman))
    }

    /// Occupancy grid with 1 on every non-Pacman agent's cell.
    #[must_use]
    pub fn get_ghost_matrix(&self) -> Grid<u8> {
        self.occupancy(self.data.agent_states.iter().copied().filter(|a| !a.is_pacman))
    }

    fn occupancy(&self, agents: impl Iterator<Item = AgentState>) -> Grid<u8> {
        let walls = self.get_walls();
        let mut matrix = Grid::new(walls.width(), walls.height(), 0u8);
        for agent in agents {
            let (x, y) = agent.get_position().truncated();
            if let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) {
                matrix.set(x, y, 1);
            }
        }
        matrix
    }
}

impl From<&GameState> for GameState {
    /// Successor copy: persistent fields copied, per-transition fields reset.
    fn from(previous: &GameState) -> Self {
        Self {
            data: previous.data.successor_copy(),
        }
    }
}

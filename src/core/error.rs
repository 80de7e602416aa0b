//! Error types.
//!
//! Every `GameError` is a contract violation by the caller: asking a
//! finished game for successors, addressing an agent that does not exist,
//! or applying an action the rules reject. None of them are retried.

use thiserror::Error;

use super::direction::Direction;

/// Errors raised by state transitions and queries.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A successor was requested from a Win or Lose state.
    #[error("can't generate a successor of a terminal state")]
    TerminalState,

    /// A ghost accessor got Pacman's index, or an index past the last agent.
    #[error("invalid agent index {index} (game has {num_agents} agents)")]
    InvalidAgentIndex { index: usize, num_agents: usize },

    /// A rule provider rejected the action.
    #[error("illegal action {action} for agent {agent_index}")]
    IllegalAction { action: Direction, agent_index: usize },
}

/// Errors raised while parsing a layout.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout has no rows")]
    Empty,

    #[error("layout row {row} has width {found}, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown layout marker {marker:?} at ({x}, {y})")]
    UnknownMarker { marker: char, x: usize, y: usize },

    #[error("layout has no Pacman start")]
    MissingPacman,

    #[error("layout grid is {found_width}x{found_height}, expected {width}x{height}")]
    GridSize {
        width: usize,
        height: usize,
        found_width: usize,
        found_height: usize,
    },
}

/// Result alias for state operations.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            GameError::TerminalState.to_string(),
            "can't generate a successor of a terminal state"
        );
        assert_eq!(
            GameError::InvalidAgentIndex { index: 0, num_agents: 3 }.to_string(),
            "invalid agent index 0 (game has 3 agents)"
        );
        assert_eq!(
            GameError::IllegalAction { action: Direction::North, agent_index: 1 }.to_string(),
            "illegal action North for agent 1"
        );
        assert_eq!(
            LayoutError::UnknownMarker { marker: 'x', x: 2, y: 1 }.to_string(),
            "unknown layout marker 'x' at (2, 1)"
        );
    }
}

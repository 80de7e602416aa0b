//! Agent positions, configurations and per-agent state.
//!
//! Positions are continuous: a scared ghost moves at half speed and spends
//! alternate turns between grid points. Anything that needs a cell index
//! goes through `nearest_point` (round half up) or `truncated` (toward zero).

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::direction::Direction;

/// Continuous board coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Position of grid cell `(x, y)`.
    #[must_use]
    pub fn from_cell(x: usize, y: usize) -> Self {
        Self::new(x as f64, y as f64)
    }

    /// The grid point this position rounds to (`int(v + 0.5)` per axis).
    #[must_use]
    pub fn nearest_point(self) -> Self {
        Self::new(
            (self.x + 0.5) as i64 as f64,
            (self.y + 0.5) as i64 as f64,
        )
    }

    /// Cell indices truncated toward zero.
    #[must_use]
    pub fn truncated(self) -> (i64, i64) {
        (self.x as i64, self.y as i64)
    }

    /// Manhattan distance to another position.
    #[must_use]
    pub fn manhattan_distance(self, other: Position) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Translate by a displacement.
    #[must_use]
    pub fn offset(self, (dx, dy): (f64, f64)) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

// Positions are always finite; -0.0 is folded into 0.0 so Hash agrees with Eq.
impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.x + 0.0).to_bits().hash(state);
        (self.y + 0.0).to_bits().hash(state);
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Where an agent is and which way it faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Configuration {
    pub pos: Position,
    pub direction: Direction,
}

impl Configuration {
    /// Create a new configuration.
    #[must_use]
    pub const fn new(pos: Position, direction: Direction) -> Self {
        Self { pos, direction }
    }

    /// Configuration after moving by `vector`.
    ///
    /// The agent faces the direction of travel; a zero vector keeps the
    /// current facing.
    #[must_use]
    pub fn generate_successor(&self, vector: (f64, f64)) -> Self {
        let direction = match Direction::from_vector(vector.0, vector.1) {
            Direction::Stop => self.direction,
            moved => moved,
        };
        Self::new(self.pos.offset(vector), direction)
    }
}

/// Per-agent state owned by `StateData`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentState {
    /// Spawn configuration; eaten ghosts return here.
    pub start: Configuration,

    /// Current configuration.
    pub configuration: Configuration,

    /// True for the controlled agent.
    pub is_pacman: bool,

    /// Turns of fright left. Zero when the ghost is dangerous.
    pub scared_timer: u32,
}

impl AgentState {
    /// Create an agent at its start configuration.
    #[must_use]
    pub const fn new(start: Configuration, is_pacman: bool) -> Self {
        Self {
            start,
            configuration: start,
            is_pacman,
            scared_timer: 0,
        }
    }

    /// Current position.
    #[must_use]
    pub fn get_position(&self) -> Position {
        self.configuration.pos
    }

    /// Current facing.
    #[must_use]
    pub fn get_direction(&self) -> Direction {
        self.configuration.direction
    }

    /// Whether the agent is currently frightened.
    #[must_use]
    pub fn is_scared(&self) -> bool {
        self.scared_timer > 0
    }
}

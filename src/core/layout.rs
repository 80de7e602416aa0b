//! Static map description.
//!
//! A `Layout` is parsed once and shared (behind an `Arc`) by every state of
//! the game. Nothing writes to it after construction.
//!
//! ## Text format
//!
//! ```text
//! %%%%%%%
//! %P . G%
//! %o%%%.%
//! %%%%%%%
//! ```
//!
//! `%` wall, `.` food, `o` capsule, `P` Pacman, `G` ghost, `1`-`4`
//! numbered ghosts, space empty. The first text row is the top of the
//! map (highest `y`).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::agent::Position;
use super::error::LayoutError;
use super::grid::Grid;

/// Initial placement of one agent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentMarker {
    pub is_pacman: bool,
    pub pos: Position,
}

/// Immutable map: walls, initial food and capsules, agent starts.
///
/// Deserialization runs the same checks as parsing: a layout read back from
/// serde always has Pacman first and grids of its stated size. `Default` is
/// the empty map with no agents.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLayout")]
pub struct Layout {
    width: usize,
    height: usize,
    walls: Grid<bool>,
    food: Grid<bool>,
    capsules: Vec<Position>,
    agent_positions: Vec<AgentMarker>,
    num_ghosts: usize,
}

impl Layout {
    /// Parse a layout from its text rows.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, LayoutError> {
        let rows: Vec<Vec<char>> = lines
            .iter()
            .map(|line| line.as_ref().trim_end_matches('\r').chars().collect())
            .filter(|row: &Vec<char>| !row.is_empty())
            .collect();

        let height = rows.len();
        let width = rows.first().map(Vec::len).ok_or(LayoutError::Empty)?;

        let mut walls = Grid::new(width, height, false);
        let mut food = Grid::new(width, height, false);
        let mut capsules = Vec::new();
        // (marker number, x, y, position)
        let mut markers: Vec<(u32, usize, usize, Position)> = Vec::new();

        for (row, chars) in rows.iter().enumerate() {
            if chars.len() != width {
                return Err(LayoutError::Ragged {
                    row,
                    expected: width,
                    found: chars.len(),
                });
            }
            let y = height - 1 - row;
            for (x, &marker) in chars.iter().enumerate() {
                let pos = Position::from_cell(x, y);
                match marker {
                    '%' => {
                        walls.set(x, y, true);
                    }
                    '.' => {
                        food.set(x, y, true);
                    }
                    'o' => capsules.push(pos),
                    'P' => markers.push((0, x, y, pos)),
                    'G' => markers.push((1, x, y, pos)),
                    '1'..='4' => {
                        let number = marker.to_digit(10).unwrap_or(1);
                        markers.push((number, x, y, pos));
                    }
                    ' ' => {}
                    _ => return Err(LayoutError::UnknownMarker { marker, x, y }),
                }
            }
        }

        if !markers.iter().any(|&(number, ..)| number == 0) {
            return Err(LayoutError::MissingPacman);
        }

        markers.sort_by_key(|&(number, x, y, _)| (number, x, y));
        let agent_positions: Vec<AgentMarker> = markers
            .into_iter()
            .enumerate()
            .map(|(i, (_, _, _, pos))| AgentMarker { is_pacman: i == 0, pos })
            .collect();
        let num_ghosts = agent_positions.iter().filter(|m| !m.is_pacman).count();

        log::debug!(
            "parsed {}x{} layout with {} food, {} capsules, {} ghosts",
            width,
            height,
            food.count(),
            capsules.len(),
            num_ghosts
        );

        Ok(Self {
            width,
            height,
            walls,
            food,
            capsules,
            agent_positions,
            num_ghosts,
        })
    }

    /// Map width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Map height.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Wall mask.
    #[must_use]
    pub fn walls(&self) -> &Grid<bool> {
        &self.walls
    }

    /// Initial food.
    #[must_use]
    pub fn food(&self) -> &Grid<bool> {
        &self.food
    }

    /// Initial capsule positions, in scan order.
    #[must_use]
    pub fn capsules(&self) -> &[Position] {
        &self.capsules
    }

    /// Agent starts; index 0 is Pacman.
    ///
    /// Ordered by marker number (`P`, then `G` and `1`, then `2` ..), with
    /// ties broken by `x` and then `y`.
    #[must_use]
    pub fn agent_positions(&self) -> &[AgentMarker] {
        &self.agent_positions
    }

    /// Number of ghost markers.
    #[must_use]
    pub fn num_ghosts(&self) -> usize {
        self.num_ghosts
    }

    /// Whether `(x, y)` is a wall. Off the map is solid.
    #[must_use]
    pub fn is_wall(&self, x: usize, y: usize) -> bool {
        self.walls.get(x, y).copied().unwrap_or(true)
    }

    /// Initial pellet count.
    #[must_use]
    pub fn total_food(&self) -> usize {
        self.food.count()
    }
}

/// Unchecked serde form of `Layout`.
#[derive(Deserialize)]
struct RawLayout {
    width: usize,
    height: usize,
    walls: Grid<bool>,
    food: Grid<bool>,
    capsules: Vec<Position>,
    agent_positions: Vec<AgentMarker>,
}

impl TryFrom<RawLayout> for Layout {
    type Error = LayoutError;

    fn try_from(raw: RawLayout) -> Result<Self, Self::Error> {
        let size = (raw.width, raw.height);
        for grid in [&raw.walls, &raw.food] {
            if (grid.width(), grid.height()) != size {
                return Err(LayoutError::GridSize {
                    width: raw.width,
                    height: raw.height,
                    found_width: grid.width(),
                    found_height: grid.height(),
                });
            }
        }

        match raw.agent_positions.split_first() {
            Some((first, rest)) if first.is_pacman && rest.iter().all(|m| !m.is_pacman) => {}
            _ => return Err(LayoutError::MissingPacman),
        }

        Ok(Self {
            width: raw.width,
            height: raw.height,
            num_ghosts: raw.agent_positions.len() - 1,
            walls: raw.walls,
            food: raw.food,
            capsules: raw.capsules,
            agent_positions: raw.agent_positions,
        })
    }
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = text.lines().collect();
        Self::from_lines(&lines)
    }
}

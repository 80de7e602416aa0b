//! Directions and the movement arithmetic shared by every agent kind.
//!
//! Actions are directions: an agent picks one of the four compass
//! directions or `Stop` each turn. Legal actions are always enumerated in
//! `Direction::ALL` order (North, South, East, West, Stop), and callers
//! may rely on that order for tie-breaking.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::agent::{Configuration, Position};
use super::grid::Grid;

/// Positions closer than this to a grid point count as "on" the point.
const GRID_TOLERANCE: f64 = 0.001;

/// Legal action list. At most five directions, so it never allocates.
pub type ActionList = SmallVec<[Direction; 5]>;

/// A movement direction (the action type of every agent).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Stop,
}

impl Direction {
    /// All directions in legal-action enumeration order.
    pub const ALL: [Direction; 5] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Stop,
    ];

    /// The opposite direction. `Stop` reverses to itself.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Stop => Direction::Stop,
        }
    }

    /// Displacement for one move at the given speed.
    #[must_use]
    pub fn to_vector(self, speed: f64) -> (f64, f64) {
        let (dx, dy) = self.unit();
        (dx as f64 * speed, dy as f64 * speed)
    }

    /// Direction a displacement points in.
    ///
    /// Vertical components win over horizontal ones; a zero vector is `Stop`.
    #[must_use]
    pub fn from_vector(dx: f64, dy: f64) -> Self {
        if dy > 0.0 {
            Direction::North
        } else if dy < 0.0 {
            Direction::South
        } else if dx < 0.0 {
            Direction::West
        } else if dx > 0.0 {
            Direction::East
        } else {
            Direction::Stop
        }
    }

    /// Integer unit step for this direction.
    #[must_use]
    pub const fn unit(self) -> (i64, i64) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::Stop => (0, 0),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
            Direction::Stop => "Stop",
        };
        f.write_str(name)
    }
}

/// Directions an agent in `config` could take given the wall mask.
///
/// An agent between grid points (mid-move at fractional speed) can only keep
/// going the way it faces. Otherwise every direction whose target cell is
/// open is possible, including `Stop`. Cells off the grid count as walls.
#[must_use]
pub fn possible_actions(config: &Configuration, walls: &Grid<bool>) -> ActionList {
    let Position { x, y } = config.pos;
    let nearest = config.pos.nearest_point();

    if (x - nearest.x).abs() + (y - nearest.y).abs() > GRID_TOLERANCE {
        let mut only = ActionList::new();
        only.push(config.direction);
        return only;
    }

    let (x_int, y_int) = (nearest.x as i64, nearest.y as i64);
    Direction::ALL
        .iter()
        .copied()
        .filter(|dir| {
            let (dx, dy) = dir.unit();
            !walls.blocked(x_int + dx, y_int + dy)
        })
        .collect()
}

//! Dense 2-D grids for walls, food and occupancy matrices.
//!
//! Cells are addressed `(x, y)` with `x` the column and `y` the row counted
//! from the bottom of the map. Storage is an `im::Vector` in column-major
//! order, so cloning a grid is O(1) and a write only copies the touched
//! chunk. Successor states share untouched food chunks with their parent
//! while never observing each other's writes.

use im::Vector;
use serde::{Deserialize, Serialize};

/// A `width x height` grid of cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid<T: Clone> {
    width: usize,
    height: usize,
    cells: Vector<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `value`.
    #[must_use]
    pub fn new(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            cells: std::iter::repeat(value).take(width * height).collect(),
        }
    }

    /// Create a grid from a per-cell factory `f(x, y)`.
    pub fn from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let cells = (0..width)
            .flat_map(|x| (0..height).map(move |y| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        Self { width, height, cells }
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| x * self.height + y)
    }

    /// Get a cell, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.offset(x, y).and_then(|i| self.cells.get(i))
    }

    /// Set a cell. Returns false (and changes nothing) when out of bounds.
    pub fn set(&mut self, x: usize, y: usize, value: T) -> bool {
        match self.offset(x, y) {
            Some(i) => {
                self.cells.set(i, value);
                true
            }
            None => false,
        }
    }

    /// Iterate `((x, y), &cell)` in column-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        let height = self.height;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i / height.max(1), i % height.max(1)), cell))
    }
}

impl Grid<bool> {
    /// Whether a cell is set, treating everything off the grid as set.
    ///
    /// Signed coordinates, so a neighbour of column 0 can be asked about.
    #[must_use]
    pub fn blocked(&self, x: i64, y: i64) -> bool {
        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(x), Ok(y)) => self.get(x, y).copied().unwrap_or(true),
            _ => true,
        }
    }

    /// Number of set cells.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Coordinates of set cells, ordered by `x` then `y`.
    #[must_use]
    pub fn as_list(&self) -> Vec<(usize, usize)> {
        self.iter()
            .filter(|&(_, &cell)| cell)
            .map(|(pos, _)| pos)
            .collect()
    }
}

impl<T: Clone + Default> Default for Grid<T> {
    fn default() -> Self {
        Self::new(0, 0, T::default())
    }
}

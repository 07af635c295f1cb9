//! Grid geometry: positions, bounds, and per-direction traversal order.
//!
//! ## Position
//!
//! A typed `(row, col)` cell address. Row 0 is the top edge, column 0 the
//! left edge.
//!
//! ## Direction and traversal order
//!
//! Each move direction maps to a `Traversal`: the near-edge index where
//! the line resolution starts and the signed step toward the far edge.
//! Resolution proceeds far-edge-first, which is what makes a chain of
//! equal tiles merge pairwise starting nearest the direction of travel.

use serde::{Deserialize, Serialize};

/// Board side length. The grid is `GRID_SIZE` × `GRID_SIZE` cells.
pub const GRID_SIZE: usize = 4;

/// A cell address on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check that this position lies on the grid.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    /// Iterate every cell in row-major order.
    ///
    /// ```
    /// use rust_2048::{Position, GRID_SIZE};
    ///
    /// let cells: Vec<_> = Position::all().collect();
    /// assert_eq!(cells.len(), GRID_SIZE * GRID_SIZE);
    /// assert_eq!(cells[0], Position::new(0, 0));
    /// assert_eq!(cells[1], Position::new(0, 1));
    /// ```
    pub fn all() -> impl Iterator<Item = Position> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Position { row, col }))
    }

    /// Number of cells between two positions on the same row or column.
    ///
    /// Returns `None` when the positions share neither axis. Display
    /// layers use this for travel distances; the engine never needs it.
    #[must_use]
    pub fn distance(self, other: Position) -> Option<usize> {
        if self.row == other.row {
            Some(self.col.abs_diff(other.col))
        } else if self.col == other.col {
            Some(self.row.abs_diff(other.row))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The axis a move slides along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// Tiles travel along rows (left/right moves).
    Horizontal,
    /// Tiles travel along columns (up/down moves).
    Vertical,
}

/// Line-resolution parameters for one move direction.
///
/// `start` is the near-edge index where the recursive descent begins;
/// `step` is the direction of travel. The far edge is where `start + k * step`
/// leaves the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Traversal {
    pub start: usize,
    pub step: isize,
}

/// The four move directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    #[must_use]
    pub const fn all() -> [Direction; 4] {
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
    }

    /// The axis this direction slides along.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }

    /// Resolution parameters for this direction.
    ///
    /// ```
    /// use rust_2048::Direction;
    ///
    /// // Tiles moving right travel toward column 3; resolution is seeded
    /// // at column 0 and unwinds from the right edge back.
    /// let t = Direction::Right.traversal();
    /// assert_eq!((t.start, t.step), (0, 1));
    /// ```
    #[must_use]
    pub const fn traversal(self) -> Traversal {
        match self {
            Direction::Right | Direction::Down => Traversal { start: 0, step: 1 },
            Direction::Left | Direction::Up => Traversal {
                start: GRID_SIZE - 1,
                step: -1,
            },
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        write!(f, "{name}")
    }
}

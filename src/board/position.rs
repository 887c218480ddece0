//! Grid coordinates and jump directions.
//!
//! Positions are signed `(row, col)` pairs. Coordinates are signed so
//! that jump candidates computed near the board edge (e.g. two cells
//! above row 1) are representable; the board treats anything outside
//! `0..size` as `Invalid` rather than rejecting it up front.
//!
//! A jump always displaces exactly 2 cells along one axis, removing
//! the marble on the cell it crosses. `Direction` enumerates the four
//! legal axes.

use serde::{Deserialize, Serialize};

/// A `(row, col)` coordinate on the board grid.
///
/// ```
/// use marble_solitaire::Position;
///
/// let from = Position::new(3, 1);
/// let to = Position::new(3, 3);
/// assert_eq!(from.midpoint(to), Position::new(3, 2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Create a position from row and column.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Component-wise midpoint between this position and another.
    ///
    /// Only meaningful when the two positions are an even displacement
    /// apart, as jump endpoints always are.
    #[must_use]
    pub const fn midpoint(self, other: Self) -> Self {
        Self {
            row: (self.row + other.row) / 2,
            col: (self.col + other.col) / 2,
        }
    }

    /// The adjacent cell one step in `direction` (the jumped cell).
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.offset();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// The landing cell two steps in `direction` (the jump destination).
    #[must_use]
    pub const fn jump(self, direction: Direction) -> Self {
        let (dr, dc) = direction.offset();
        Self {
            row: self.row + 2 * dr,
            col: self.col + 2 * dc,
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four axis-aligned jump directions.
///
/// Diagonal and variable-distance jumps do not exist in this game;
/// every legal move is `from.jump(d)` for exactly one `Direction`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed enumeration order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit `(row, col)` offset for this direction.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

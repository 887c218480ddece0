//! The board grid and the cross-shaped starting layout.
//!
//! ## Layout
//!
//! A cell `(r, c)` is playable iff `r` or `c` falls in the 3-wide band
//! centered on the midline. On the default 7×7 grid that is the classic
//! English cross: 33 playable cells, corners invalid.
//!
//! ```text
//! X X O O O X X
//! X X O O O X X
//! O O O O O O O
//! O O O . O O O
//! O O O O O O O
//! X X O O O X X
//! X X O O O X X
//! ```
//!
//! The starting position places a marble on every playable cell except
//! the center, which begins empty.
//!
//! ## Bounds
//!
//! All queries are total: out-of-bounds coordinates yield
//! `Cell::Invalid`, never an error. Mutation is crate-internal; hosts
//! change the board only through validated `Game` commands.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::position::Position;

/// An `N×N` grid of cells, `N` odd and at least 5.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: i32,
    /// Row-major, `size * size` entries.
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board in the starting position.
    ///
    /// # Panics
    ///
    /// Panics if `size` is even or smaller than 5; the cross layout
    /// needs a well-defined center cell.
    #[must_use]
    pub fn new(size: i32) -> Self {
        assert!(size >= 5, "Board size must be at least 5");
        assert!(size % 2 == 1, "Board size must be odd");

        let mut board = Self {
            size,
            cells: vec![Cell::Invalid; (size * size) as usize],
        };
        board.reset();
        board
    }

    /// Rebuild the cross-shaped starting layout in place.
    ///
    /// Every playable cell gets a marble except the center, which
    /// starts empty.
    pub fn reset(&mut self) {
        let mid = self.size / 2;
        let in_band = |x: i32| (mid - 1..=mid + 1).contains(&x);

        for row in 0..self.size {
            for col in 0..self.size {
                let pos = Position::new(row, col);
                let cell = if in_band(row) || in_band(col) {
                    Cell::Occupied
                } else {
                    Cell::Invalid
                };
                self.set(pos, cell);
            }
        }
        self.set(self.center(), Cell::Empty);
    }

    /// Board dimension `N`.
    #[must_use]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// The center cell (empty in the starting position).
    #[must_use]
    pub fn center(&self) -> Position {
        Position::new(self.size / 2, self.size / 2)
    }

    /// Check whether a position lies within the grid.
    #[must_use]
    pub fn in_bounds(&self, pos: Position) -> bool {
        (0..self.size).contains(&pos.row) && (0..self.size).contains(&pos.col)
    }

    /// Cell state at a position; `Invalid` for out-of-bounds.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Cell {
        if self.in_bounds(pos) {
            self.cells[(pos.row * self.size + pos.col) as usize]
        } else {
            Cell::Invalid
        }
    }

    /// Check whether a position is in bounds and part of the cross.
    #[must_use]
    pub fn is_playable(&self, pos: Position) -> bool {
        self.cell(pos).is_playable()
    }

    /// Count marbles by scanning the grid.
    ///
    /// The engine tracks the count incrementally; this full recount is
    /// the ground truth it must agree with.
    #[must_use]
    pub fn occupied_count(&self) -> u32 {
        self.cells.iter().filter(|c| c.is_occupied()).count() as u32
    }

    /// Count playable cells (occupied or empty).
    #[must_use]
    pub fn playable_count(&self) -> u32 {
        self.cells.iter().filter(|c| c.is_playable()).count() as u32
    }

    /// Set a cell. Callers are responsible for keeping the playable
    /// region fixed; only occupancy ever changes after `reset`.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        debug_assert!(self.in_bounds(pos));
        self.cells[(pos.row * self.size + pos.col) as usize] = cell;
    }
}

impl Default for Board {
    /// The standard 7×7 board.
    fn default() -> Self {
        Self::new(7)
    }
}

impl std::fmt::Display for Board {
    /// ASCII grid dump: `X` invalid, `O` marble, `.` empty.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cell(Position::new(row, col)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

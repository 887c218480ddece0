//! Move records.
//!
//! A `Move` is the unit of mutation and the unit of undo/redo: the
//! source cell, the destination two cells away, and the jumped cell
//! between them. The record stores all three so reversal needs no
//! recomputation.

use serde::{Deserialize, Serialize};

use crate::board::Position;

/// One committed (or committable) jump.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Cell the marble left (occupied before, empty after).
    pub from: Position,
    /// Cell the marble landed on (empty before, occupied after).
    pub to: Position,
    /// Cell whose marble was removed (midpoint of `from` and `to`).
    pub jumped: Position,
}

impl Move {
    /// Build the move between two endpoints, if the geometry is a jump.
    ///
    /// Returns `None` unless the displacement is exactly 2 cells along
    /// exactly one axis. Occupancy is not checked here; that is the
    /// engine's legality check.
    ///
    /// ```
    /// use marble_solitaire::{Move, Position};
    ///
    /// let jump = Move::between(Position::new(3, 1), Position::new(3, 3)).unwrap();
    /// assert_eq!(jump.jumped, Position::new(3, 2));
    ///
    /// // Diagonal, too short, too long: not jumps.
    /// assert!(Move::between(Position::new(3, 1), Position::new(5, 3)).is_none());
    /// assert!(Move::between(Position::new(3, 1), Position::new(3, 2)).is_none());
    /// assert!(Move::between(Position::new(3, 1), Position::new(3, 5)).is_none());
    /// ```
    #[must_use]
    pub fn between(from: Position, to: Position) -> Option<Self> {
        let row_diff = to.row - from.row;
        let col_diff = to.col - from.col;

        let horizontal = row_diff == 0 && col_diff.abs() == 2;
        let vertical = col_diff == 0 && row_diff.abs() == 2;
        if !horizontal && !vertical {
            return None;
        }

        Some(Self {
            from,
            to,
            jumped: from.midpoint(to),
        })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} over {}", self.from, self.to, self.jumped)
    }
}

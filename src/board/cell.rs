//! Cell states.
//!
//! Every grid square is in exactly one of three states:
//! - `Invalid`: not part of the playable cross (the corner blocks).
//! - `Empty`: playable, no marble.
//! - `Occupied`: playable, holds a marble.
//!
//! `Invalid` doubles as the out-of-bounds sentinel: querying a cell
//! outside the grid yields `Invalid` rather than an error.

use serde::{Deserialize, Serialize};

/// State of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Not part of the playable region (also returned for out-of-bounds queries).
    #[default]
    Invalid,
    /// Playable, no marble.
    Empty,
    /// Playable, holds a marble.
    Occupied,
}

impl Cell {
    /// Check whether this cell is part of the playable region.
    ///
    /// ```
    /// use marble_solitaire::Cell;
    ///
    /// assert!(Cell::Empty.is_playable());
    /// assert!(Cell::Occupied.is_playable());
    /// assert!(!Cell::Invalid.is_playable());
    /// ```
    #[must_use]
    pub const fn is_playable(self) -> bool {
        !matches!(self, Cell::Invalid)
    }

    /// Check whether this cell holds a marble.
    #[must_use]
    pub const fn is_occupied(self) -> bool {
        matches!(self, Cell::Occupied)
    }

    /// Check whether this cell is playable and vacant.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let glyph = match self {
            Cell::Invalid => 'X',
            Cell::Empty => '.',
            Cell::Occupied => 'O',
        };
        write!(f, "{glyph}")
    }
}

//! Typed results for the click state machine and the end-of-game read.

use serde::{Deserialize, Serialize};

/// Which transition a click produced.
///
/// Every variant except `Moved` and `Rejected` only changes the
/// selection; `Rejected` changes nothing at all. The input layer can
/// ignore the value or use it to drive feedback (highlighting, sounds).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    /// A marble was selected (no prior selection).
    Selected,
    /// The selection switched to a different marble.
    Reselected,
    /// The selected marble was clicked again and deselected.
    Deselected,
    /// A legal jump was applied from the selection to the clicked cell.
    Moved,
    /// The click was a no-op: invalid cell, empty cell with nothing
    /// selected, or an illegal move attempt (selection kept).
    Rejected,
}

impl ClickOutcome {
    /// Check whether the click changed any state.
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        !matches!(self, ClickOutcome::Rejected)
    }
}

/// Where the game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// At least one legal jump remains.
    InProgress,
    /// A single marble remains.
    Won,
    /// No legal jump remains and more than one marble is left.
    Stuck,
}

impl GameStatus {
    /// Check whether the game has ended (won or stuck).
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

//! Undo/redo history.
//!
//! Two stacks of `Move`: the undo stack holds applied moves
//! (most-recent on top), the redo stack holds undone moves. Recording
//! a brand-new move clears the redo stack — standard linear-undo
//! semantics, no branching timeline.
//!
//! Backed by `im::Vector` so cloning a game (and its full history) is
//! O(1) via structural sharing.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::record::Move;

/// Undo and redo stacks.
///
/// The history only stores and transfers records; applying or
/// reversing them on the board is the engine's job.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    /// Applied moves, most-recent at the back.
    undo: Vector<Move>,
    /// Undone moves, most-recent at the back.
    redo: Vector<Move>,
}

impl MoveHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a freshly applied move.
    ///
    /// Invalidates any pending redo history.
    pub fn record(&mut self, mv: Move) {
        self.undo.push_back(mv);
        self.redo.clear();
    }

    /// Pop the most recent move for undoing.
    ///
    /// The move transfers to the redo stack. Returns `None` if there
    /// is nothing to undo.
    pub fn undo(&mut self) -> Option<Move> {
        let mv = self.undo.pop_back()?;
        self.redo.push_back(mv);
        Some(mv)
    }

    /// Pop the most recently undone move for re-applying.
    ///
    /// The move transfers back to the undo stack. Returns `None` if
    /// there is nothing to redo.
    pub fn redo(&mut self) -> Option<Move> {
        let mv = self.redo.pop_back()?;
        self.undo.push_back(mv);
        Some(mv)
    }

    /// Check whether any move can be undone.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Check whether any move can be redone.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of applied moves.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Number of undone moves awaiting redo.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Drop all history.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Position;

    fn sample_move(col: i32) -> Move {
        Move::between(Position::new(3, col), Position::new(3, col + 2)).unwrap()
    }

    #[test]
    fn test_empty_history() {
        let mut history = MoveHistory::new();

        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), None);
    }

    #[test]
    fn test_record_then_undo_redo() {
        let mut history = MoveHistory::new();
        let mv = sample_move(1);

        history.record(mv);
        assert!(history.can_undo());
        assert!(!history.can_redo());

        assert_eq!(history.undo(), Some(mv));
        assert!(!history.can_undo());
        assert!(history.can_redo());

        assert_eq!(history.redo(), Some(mv));
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_stack_order_is_lifo() {
        let mut history = MoveHistory::new();
        let first = sample_move(0);
        let second = sample_move(2);

        history.record(first);
        history.record(second);

        assert_eq!(history.undo(), Some(second));
        assert_eq!(history.undo(), Some(first));
        assert_eq!(history.redo(), Some(first));
        assert_eq!(history.redo(), Some(second));
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = MoveHistory::new();
        history.record(sample_move(0));
        history.record(sample_move(2));
        history.undo();
        assert_eq!(history.redo_depth(), 1);

        history.record(sample_move(4));

        assert!(!history.can_redo());
        assert_eq!(history.undo_depth(), 2);
    }

    #[test]
    fn test_clear() {
        let mut history = MoveHistory::new();
        history.record(sample_move(0));
        history.record(sample_move(2));
        history.undo();

        history.clear();

        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.undo_depth(), 0);
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut history = MoveHistory::new();
        history.record(sample_move(0));

        let snapshot = history.clone();
        history.record(sample_move(2));

        assert_eq!(snapshot.undo_depth(), 1);
        assert_eq!(history.undo_depth(), 2);
    }

    #[test]
    fn test_serialization() {
        let mut history = MoveHistory::new();
        history.record(sample_move(0));
        history.record(sample_move(2));
        history.undo();

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: MoveHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(history, deserialized);
    }
}

//! The solitaire engine.
//!
//! `Game` owns the board, the selection cursor, and the undo/redo
//! history, and is the single entry point for both the input layer
//! (clicks, undo/redo commands) and the renderer (read-only queries).
//!
//! ## Interaction model
//!
//! `handle_click` is a two-state machine over the selection:
//!
//! - No selection: clicking a marble selects it; anything else is a
//!   no-op.
//! - Selected: clicking the same marble deselects; clicking another
//!   marble switches the selection; clicking an empty cell attempts
//!   the jump. A failed jump keeps the selection so the player can
//!   pick another destination.
//!
//! ## Failure taxonomy
//!
//! Nothing in here panics or errors. Out-of-bounds queries return
//! `Cell::Invalid`; illegal commands return `false` (or
//! `ClickOutcome::Rejected`) and leave all state untouched. Every
//! mutation runs its own legality check first, so the engine cannot
//! reach an inconsistent state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, Cell, Direction, Position};
use crate::history::{Move, MoveHistory};

use super::outcome::{ClickOutcome, GameStatus};

/// Destination list for one marble. At most 4 jumps exist, so this
/// never spills to the heap.
pub type Destinations = SmallVec<[Position; 4]>;

/// A game of marble solitaire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    history: MoveHistory,
    /// If set, always points at an `Occupied` cell.
    selection: Option<Position>,
    /// Marble count, maintained incrementally. Always equals
    /// `board.occupied_count()`.
    remaining: u32,
}

impl Game {
    /// Create a game on an `size`×`size` board in the starting position.
    ///
    /// # Panics
    ///
    /// Panics if `size` is even or smaller than 5 (see [`Board::new`]).
    #[must_use]
    pub fn new(size: i32) -> Self {
        let board = Board::new(size);
        let remaining = board.occupied_count();
        Self {
            board,
            history: MoveHistory::new(),
            selection: None,
            remaining,
        }
    }

    /// Restart: rebuild the cross layout, drop all history, clear the
    /// selection.
    pub fn reset(&mut self) {
        self.board.reset();
        self.history.clear();
        self.selection = None;
        self.remaining = self.board.occupied_count();
    }

    // === Queries ===

    /// The board, for rendering.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board dimension `N`.
    #[must_use]
    pub fn board_size(&self) -> i32 {
        self.board.size()
    }

    /// Cell state at `(row, col)`; `Invalid` for out-of-bounds.
    #[must_use]
    pub fn cell_at(&self, row: i32, col: i32) -> Cell {
        self.board.cell(Position::new(row, col))
    }

    /// Number of marbles on the board.
    #[must_use]
    pub fn remaining_count(&self) -> u32 {
        self.remaining
    }

    /// The currently selected marble, if any.
    #[must_use]
    pub fn current_selection(&self) -> Option<Position> {
        self.selection
    }

    /// The undo/redo history.
    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Check whether a move can be undone.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check whether an undone move can be redone.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Check whether no marble has any legal jump left.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        let size = self.board.size();
        for row in 0..size {
            for col in 0..size {
                let pos = Position::new(row, col);
                if self.board.cell(pos).is_occupied() && self.has_moves_from(pos) {
                    return false;
                }
            }
        }
        true
    }

    /// Check whether exactly one marble remains.
    ///
    /// A terminal position with more than one marble is a stuck game,
    /// not a win.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.remaining == 1
    }

    /// Collapse `is_terminal`/`has_won` into a single read.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.has_won() {
            GameStatus::Won
        } else if self.is_terminal() {
            GameStatus::Stuck
        } else {
            GameStatus::InProgress
        }
    }

    /// Destinations reachable by one legal jump from `pos`.
    ///
    /// Empty unless `pos` holds a marble. Used by renderers to
    /// highlight options.
    #[must_use]
    pub fn legal_destinations_from(&self, pos: Position) -> Destinations {
        let mut destinations = Destinations::new();
        if !self.board.cell(pos).is_occupied() {
            return destinations;
        }
        for direction in Direction::ALL {
            let to = pos.jump(direction);
            if self.is_legal_move(pos, to) {
                destinations.push(to);
            }
        }
        destinations
    }

    /// Destinations reachable from the current selection; empty when
    /// nothing is selected.
    #[must_use]
    pub fn legal_destinations(&self) -> Destinations {
        match self.selection {
            Some(pos) => self.legal_destinations_from(pos),
            None => Destinations::new(),
        }
    }

    /// Check whether the marble at `pos` has any legal jump.
    #[must_use]
    pub fn has_moves_from(&self, pos: Position) -> bool {
        self.board.cell(pos).is_occupied()
            && Direction::ALL
                .iter()
                .any(|&d| self.is_legal_move(pos, pos.jump(d)))
    }

    /// The solitaire jump rule.
    ///
    /// Legal iff the displacement is exactly 2 cells along one axis,
    /// `from` holds a marble, `to` is empty, and the crossed cell
    /// holds a marble. `Invalid` and out-of-bounds cells satisfy none
    /// of the occupancy checks, so bounds need no separate test.
    #[must_use]
    pub fn is_legal_move(&self, from: Position, to: Position) -> bool {
        match Move::between(from, to) {
            Some(mv) => self.is_legal(mv),
            None => false,
        }
    }

    fn is_legal(&self, mv: Move) -> bool {
        self.board.cell(mv.from).is_occupied()
            && self.board.cell(mv.to).is_empty()
            && self.board.cell(mv.jumped).is_occupied()
    }

    // === Commands ===

    /// Apply a jump from `from` to `to`.
    ///
    /// Returns `false` without touching any state unless
    /// `is_legal_move(from, to)` holds. On success the jumped marble
    /// is removed, the move is recorded for undo, any redo history is
    /// invalidated, and the selection is cleared.
    pub fn apply_move(&mut self, from: Position, to: Position) -> bool {
        let Some(mv) = Move::between(from, to) else {
            return false;
        };
        if !self.is_legal(mv) {
            return false;
        }

        self.board.set(mv.from, Cell::Empty);
        self.board.set(mv.jumped, Cell::Empty);
        self.board.set(mv.to, Cell::Occupied);
        self.history.record(mv);
        self.selection = None;
        self.remaining -= 1;
        true
    }

    /// Process a click at `(row, col)`. See the module docs for the
    /// state machine.
    pub fn handle_click(&mut self, row: i32, col: i32) -> ClickOutcome {
        let pos = Position::new(row, col);
        let cell = self.board.cell(pos);
        if !cell.is_playable() {
            return ClickOutcome::Rejected;
        }

        match self.selection {
            None => {
                if cell.is_occupied() {
                    self.selection = Some(pos);
                    ClickOutcome::Selected
                } else {
                    ClickOutcome::Rejected
                }
            }
            Some(selected) => {
                if pos == selected {
                    self.selection = None;
                    ClickOutcome::Deselected
                } else if cell.is_occupied() {
                    self.selection = Some(pos);
                    ClickOutcome::Reselected
                } else if self.apply_move(selected, pos) {
                    ClickOutcome::Moved
                } else {
                    // Illegal destination: keep the selection, let the
                    // player try another cell.
                    ClickOutcome::Rejected
                }
            }
        }
    }

    /// Select the marble at `(row, col)`.
    ///
    /// Returns `false` (selection unchanged) unless the cell holds a
    /// marble.
    pub fn select(&mut self, row: i32, col: i32) -> bool {
        let pos = Position::new(row, col);
        if self.board.cell(pos).is_occupied() {
            self.selection = Some(pos);
            true
        } else {
            false
        }
    }

    /// Clear the selection.
    pub fn deselect(&mut self) {
        self.selection = None;
    }

    /// Try to jump the selected marble to `(row, col)`.
    ///
    /// Returns `false` if nothing is selected or the jump is illegal.
    pub fn try_move(&mut self, row: i32, col: i32) -> bool {
        match self.selection {
            Some(from) => self.apply_move(from, Position::new(row, col)),
            None => false,
        }
    }

    /// Reverse the most recent move.
    ///
    /// Restores the source and jumped marbles, vacates the
    /// destination, and makes the move available for redo. Returns
    /// `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(mv) = self.history.undo() else {
            return false;
        };

        self.board.set(mv.from, Cell::Occupied);
        self.board.set(mv.jumped, Cell::Occupied);
        self.board.set(mv.to, Cell::Empty);
        self.selection = None;
        self.remaining += 1;
        true
    }

    /// Re-apply the most recently undone move.
    ///
    /// Exact inverse of `undo`; only available until the next fresh
    /// move invalidates the redo history. Returns `false` if there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(mv) = self.history.redo() else {
            return false;
        };

        self.board.set(mv.from, Cell::Empty);
        self.board.set(mv.jumped, Cell::Empty);
        self.board.set(mv.to, Cell::Occupied);
        self.selection = None;
        self.remaining -= 1;
        true
    }
}

impl Default for Game {
    /// The standard 7×7 game.
    fn default() -> Self {
        Self::new(7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = Game::default();

        assert_eq!(game.board_size(), 7);
        assert_eq!(game.remaining_count(), 32);
        assert_eq!(game.current_selection(), None);
        assert!(!game.can_undo());
        assert!(!game.can_redo());
        assert!(!game.is_terminal());
        assert!(!game.has_won());
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_opening_jump() {
        let mut game = Game::default();

        assert!(game.is_legal_move(Position::new(3, 1), Position::new(3, 3)));
        assert!(game.apply_move(Position::new(3, 1), Position::new(3, 3)));

        assert_eq!(game.cell_at(3, 1), Cell::Empty);
        assert_eq!(game.cell_at(3, 2), Cell::Empty);
        assert_eq!(game.cell_at(3, 3), Cell::Occupied);
        assert_eq!(game.remaining_count(), 31);
        assert!(game.can_undo());
    }

    #[test]
    fn test_illegal_moves_rejected() {
        let mut game = Game::default();
        let before = game.clone();

        // Invalid source (corner), occupied destination, adjacent,
        // diagonal, empty source, out of bounds.
        assert!(!game.apply_move(Position::new(0, 0), Position::new(0, 2)));
        assert!(!game.apply_move(Position::new(3, 0), Position::new(3, 2)));
        assert!(!game.apply_move(Position::new(3, 2), Position::new(3, 3)));
        assert!(!game.apply_move(Position::new(2, 1), Position::new(4, 3)));
        assert!(!game.apply_move(Position::new(3, 3), Position::new(3, 5)));
        assert!(!game.apply_move(Position::new(0, 3), Position::new(-2, 3)));

        // A rejected command mutates nothing.
        assert!(!game.apply_move(Position::new(0, 0), Position::new(0, 2)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_apply_matches_legality() {
        // Exhaustive over every cell pair on the starting board.
        for from_row in -1..8 {
            for from_col in -1..8 {
                for to_row in -1..8 {
                    for to_col in -1..8 {
                        let from = Position::new(from_row, from_col);
                        let to = Position::new(to_row, to_col);
                        let mut game = Game::default();
                        let legal = game.is_legal_move(from, to);
                        assert_eq!(game.apply_move(from, to), legal, "{from} -> {to}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_click_selects_and_deselects() {
        let mut game = Game::default();

        assert_eq!(game.handle_click(3, 1), ClickOutcome::Selected);
        assert_eq!(game.current_selection(), Some(Position::new(3, 1)));

        assert_eq!(game.handle_click(3, 1), ClickOutcome::Deselected);
        assert_eq!(game.current_selection(), None);
        assert_eq!(game.remaining_count(), 32);
    }

    #[test]
    fn test_click_switches_selection() {
        let mut game = Game::default();

        game.handle_click(3, 1);
        assert_eq!(game.handle_click(5, 3), ClickOutcome::Reselected);
        assert_eq!(game.current_selection(), Some(Position::new(5, 3)));
    }

    #[test]
    fn test_click_rejects_non_marble_without_selection() {
        let mut game = Game::default();

        assert_eq!(game.handle_click(3, 3), ClickOutcome::Rejected); // empty center
        assert_eq!(game.handle_click(0, 0), ClickOutcome::Rejected); // invalid corner
        assert_eq!(game.handle_click(-1, 3), ClickOutcome::Rejected); // out of bounds
        assert_eq!(game.current_selection(), None);
    }

    #[test]
    fn test_click_moves_to_empty_cell() {
        let mut game = Game::default();

        game.handle_click(3, 1);
        assert_eq!(game.handle_click(3, 3), ClickOutcome::Moved);

        assert_eq!(game.current_selection(), None);
        assert_eq!(game.remaining_count(), 31);
    }

    #[test]
    fn test_failed_move_click_keeps_selection() {
        let mut game = Game::default();
        game.apply_move(Position::new(3, 1), Position::new(3, 3));

        // (3, 1) is now empty but not reachable from (5, 3).
        game.handle_click(5, 3);
        assert_eq!(game.handle_click(3, 1), ClickOutcome::Rejected);
        assert_eq!(game.current_selection(), Some(Position::new(5, 3)));

        // Invalid cell clicks are no-ops too.
        assert_eq!(game.handle_click(0, 0), ClickOutcome::Rejected);
        assert_eq!(game.current_selection(), Some(Position::new(5, 3)));
    }

    #[test]
    fn test_select_try_move() {
        let mut game = Game::default();

        assert!(!game.try_move(3, 3)); // nothing selected
        assert!(!game.select(3, 3)); // empty cell
        assert!(!game.select(0, 0)); // invalid cell
        assert!(game.select(3, 1));

        assert!(!game.try_move(3, 4)); // not a jump
        assert_eq!(game.current_selection(), Some(Position::new(3, 1)));

        assert!(game.try_move(3, 3));
        assert_eq!(game.current_selection(), None);
        assert_eq!(game.remaining_count(), 31);

        game.select(5, 3);
        game.deselect();
        assert_eq!(game.current_selection(), None);
    }

    #[test]
    fn test_legal_destinations_from() {
        let game = Game::default();

        // Four marbles can make the opening jump into the center.
        for (pos, dest) in [
            (Position::new(3, 1), Position::new(3, 3)),
            (Position::new(3, 5), Position::new(3, 3)),
            (Position::new(1, 3), Position::new(3, 3)),
            (Position::new(5, 3), Position::new(3, 3)),
        ] {
            let destinations = game.legal_destinations_from(pos);
            assert_eq!(destinations.as_slice(), &[dest]);
            assert!(game.has_moves_from(pos));
        }

        // Marbles with no jump, empty cells, invalid cells.
        assert!(game.legal_destinations_from(Position::new(0, 2)).is_empty());
        assert!(game.legal_destinations_from(Position::new(3, 3)).is_empty());
        assert!(game.legal_destinations_from(Position::new(0, 0)).is_empty());
        assert!(!game.has_moves_from(Position::new(3, 3)));
    }

    #[test]
    fn test_legal_destinations_follows_selection() {
        let mut game = Game::default();

        assert!(game.legal_destinations().is_empty());
        game.select(3, 1);
        assert_eq!(
            game.legal_destinations().as_slice(),
            &[Position::new(3, 3)]
        );
    }

    #[test]
    fn test_undo_restores_exact_state() {
        let mut game = Game::default();
        let before = game.clone();

        assert!(game.apply_move(Position::new(3, 1), Position::new(3, 3)));
        assert!(game.undo());

        assert_eq!(game.board(), before.board());
        assert_eq!(game.remaining_count(), 32);
        assert_eq!(game.current_selection(), None);
        assert!(!game.can_undo());
        assert!(game.can_redo());
    }

    #[test]
    fn test_redo_reproduces_move() {
        let mut game = Game::default();
        game.apply_move(Position::new(3, 1), Position::new(3, 3));
        let after_move = game.board().clone();

        game.undo();
        assert!(game.redo());

        assert_eq!(game.board(), &after_move);
        assert_eq!(game.remaining_count(), 31);
        assert!(game.can_undo());
        assert!(!game.can_redo());
    }

    #[test]
    fn test_undo_redo_empty_history() {
        let mut game = Game::default();
        let before = game.clone();

        assert!(!game.undo());
        assert!(!game.redo());
        assert_eq!(game, before);
    }

    #[test]
    fn test_new_move_invalidates_redo() {
        let mut game = Game::default();
        game.apply_move(Position::new(3, 1), Position::new(3, 3));
        game.undo();
        assert!(game.can_redo());

        assert!(game.apply_move(Position::new(5, 3), Position::new(3, 3)));
        assert!(!game.can_redo());
    }

    #[test]
    fn test_undo_clears_selection() {
        let mut game = Game::default();
        game.apply_move(Position::new(3, 1), Position::new(3, 3));
        game.select(5, 3);

        game.undo();
        assert_eq!(game.current_selection(), None);

        game.select(3, 1);
        game.redo();
        assert_eq!(game.current_selection(), None);
    }

    #[test]
    fn test_reset() {
        let mut game = Game::default();
        game.apply_move(Position::new(3, 1), Position::new(3, 3));
        game.undo();
        game.select(5, 3);

        game.reset();

        assert_eq!(game, Game::default());
    }

    #[test]
    fn test_count_matches_recount() {
        let mut game = Game::default();
        assert_eq!(game.remaining_count(), game.board().occupied_count());

        game.apply_move(Position::new(3, 1), Position::new(3, 3));
        assert_eq!(game.remaining_count(), game.board().occupied_count());

        game.undo();
        assert_eq!(game.remaining_count(), game.board().occupied_count());

        game.redo();
        assert_eq!(game.remaining_count(), game.board().occupied_count());
    }
}

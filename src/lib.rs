//! # marble-solitaire
//!
//! A pure rules engine for peg/marble solitaire on the classic English
//! cross board: board state, move legality, selection-driven
//! interaction, undo/redo history, and terminal/win detection.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: no rendering, input handling, timing, or
//!    persistence. A host (GUI, TUI, solver) drives the engine through
//!    a narrow in-process API and reads state back through queries.
//!
//! 2. **Total, non-panicking API**: out-of-bounds queries return
//!    `Cell::Invalid`; illegal commands are silent no-ops reported by
//!    their return value. Nothing in the library panics after
//!    construction.
//!
//! 3. **Explicit ownership**: a `Game` is a plain value. `Clone` is
//!    cheap (persistent history stacks), so hosts can snapshot or fork
//!    state freely. No globals, no interior mutability, no I/O.
//!
//! ## Modules
//!
//! - `board`: `Cell`, `Position`, `Direction`, and the cross-shaped `Board`
//! - `history`: `Move` records and the undo/redo `MoveHistory`
//! - `game`: the `Game` engine facade and its typed outcomes
//!
//! ## Example
//!
//! ```
//! use marble_solitaire::{ClickOutcome, Game};
//!
//! let mut game = Game::default(); // standard 7x7 cross, 32 marbles
//!
//! // Select the marble at (3, 1), jump it over (3, 2) into the center.
//! assert_eq!(game.handle_click(3, 1), ClickOutcome::Selected);
//! assert_eq!(game.handle_click(3, 3), ClickOutcome::Moved);
//! assert_eq!(game.remaining_count(), 31);
//!
//! // Take it back.
//! assert!(game.undo());
//! assert_eq!(game.remaining_count(), 32);
//! ```

pub mod board;
pub mod game;
pub mod history;

// Re-export commonly used types
pub use crate::board::{Board, Cell, Direction, Position};

pub use crate::history::{Move, MoveHistory};

pub use crate::game::{ClickOutcome, Destinations, Game, GameStatus};

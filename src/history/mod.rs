//! Move records and the undo/redo stacks.

pub mod record;
pub mod stacks;

pub use record::Move;
pub use stacks::MoveHistory;

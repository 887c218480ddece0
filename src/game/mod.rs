//! The engine facade and its typed results.

pub mod engine;
pub mod outcome;

pub use engine::{Destinations, Game};
pub use outcome::{ClickOutcome, GameStatus};

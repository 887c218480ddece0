//! Board state: cells, coordinates, and the cross-shaped grid.

pub mod cell;
pub mod grid;
pub mod position;

pub use cell::Cell;
pub use grid::Board;
pub use position::{Direction, Position};

//! Diagonal marks: place numbered marks, then slide them off the board.
//!
//! - Each hit on a cell away from every existing mark places the next
//!   numbered mark there
//! - A hit on or next to an existing mark switches the board to moving,
//!   for good
//! - While moving, every hit shifts all marks one step right and one
//!   row down, wherever it lands
//! - The game ends as soon as any mark reaches column `size` or row `-1`

mod game;

pub use game::{DiagonalMarks, STEP};

//! Headless front end.
//!
//! `BoardView` runs the click → refresh → game-over loop a graphical
//! front end would, keeping one text label per cell. Rendering to a real
//! window is left to the caller.

pub mod board;

pub use board::{BoardView, ClickOutcome, BLANK_LABEL};

//! # grid-marks
//!
//! Game-state engine for a single-player marking/movement game on a
//! square grid.
//!
//! ## Rules
//!
//! 1. **Placing**: each hit on a cell not adjacent to any mark places the
//!    next numbered mark there. Numbers are positions in the mark
//!    sequence, starting at 1.
//!
//! 2. **Moving**: a hit on or next to an existing mark switches the board
//!    to moving for the rest of the game. Every hit from then on shifts
//!    all marks by `(+1, -1)` and ignores where it landed.
//!
//! 3. **Game over**: as soon as any mark reaches column `size` or row
//!    `-1`. Further hits do nothing.
//!
//! ## Modules
//!
//! - `core`: Positions, board configuration, mark state, errors, RNG
//! - `rules`: `MarkRules` trait consumed by front ends
//! - `games`: The diagonal marks engine
//! - `view`: Headless front end keeping one label per cell
//! - `playout`: Seeded random playouts

pub mod core;
pub mod rules;
pub mod games;
pub mod view;
pub mod playout;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, ClickRng, ConfigError, MarkState, Phase, Position,
    DEFAULT_BOARD_SIZE,
};

pub use crate::rules::{HitOutcome, MarkRules};

pub use crate::games::diagonal::{DiagonalMarks, STEP};

pub use crate::view::{BoardView, ClickOutcome, BLANK_LABEL};

pub use crate::playout::{run_playout, PlayoutConfig, PlayoutSummary};

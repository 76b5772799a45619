//! Board configuration.
//!
//! The board is always square: `[0, size) × [0, size)`. The size is fixed
//! when a game is created and validated once, here.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::position::Position;

/// Board size used by the original front end.
pub const DEFAULT_BOARD_SIZE: i32 = 10;

/// Square board dimensions.
///
/// Serializes as the bare size. Deserializing rejects non-positive sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct BoardConfig {
    size: i32,
}

impl BoardConfig {
    /// Create a board of `size × size` cells.
    ///
    /// ```
    /// use grid_marks::core::{BoardConfig, ConfigError};
    ///
    /// let board = BoardConfig::new(10).unwrap();
    /// assert_eq!(board.cell_count(), 100);
    ///
    /// assert_eq!(BoardConfig::new(0), Err(ConfigError::NonPositiveSize(0)));
    /// ```
    pub fn new(size: i32) -> Result<Self, ConfigError> {
        if size <= 0 {
            return Err(ConfigError::NonPositiveSize(size));
        }
        Ok(Self { size })
    }

    /// Side length of the board.
    #[must_use]
    pub const fn size(self) -> i32 {
        self.size
    }

    /// Number of cells on the board.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        let side = self.size as usize;
        side * side
    }

    /// Check whether `pos` lies on the board.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        pos.x() >= 0 && pos.x() < self.size && pos.y() >= 0 && pos.y() < self.size
    }

    /// Iterate over every cell, row by row.
    ///
    /// Row `i` is the outer loop and column `j` the inner one; each cell
    /// is `Position::new(j, i)`.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size).flat_map(move |i| (0..size).map(move |j| Position::new(j, i)))
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
        }
    }
}

impl TryFrom<i32> for BoardConfig {
    type Error = ConfigError;

    fn try_from(size: i32) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<BoardConfig> for i32 {
    fn from(config: BoardConfig) -> Self {
        config.size
    }
}

//! Deterministic click source for playouts.
//!
//! Same seed, same sequence of cells.
//!
//! ```
//! use grid_marks::core::{BoardConfig, ClickRng};
//!
//! let board = BoardConfig::default();
//! let mut a = ClickRng::new(42);
//! let mut b = ClickRng::new(42);
//!
//! assert_eq!(a.next_cell(board), b.next_cell(board));
//! assert!(board.contains(a.next_cell(board)));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::config::BoardConfig;
use super::position::Position;

/// Seeded RNG that picks board cells.
#[derive(Clone, Debug)]
pub struct ClickRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl ClickRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Pick a cell uniformly from the board.
    pub fn next_cell(&mut self, board: BoardConfig) -> Position {
        let x = self.inner.gen_range(0..board.size());
        let y = self.inner.gen_range(0..board.size());
        Position::new(x, y)
    }
}

//! Diagonal marks game implementation.

use tracing::{debug, info};

use crate::core::{BoardConfig, ConfigError, MarkState, Phase, Position};
use crate::rules::MarkRules;

/// Offset applied to every mark on each movement step.
pub const STEP: (i32, i32) = (1, -1);

/// Game engine for the diagonal marks game.
///
/// Created once per game; there is no reset.
///
/// ```
/// use grid_marks::core::Position;
/// use grid_marks::games::diagonal::DiagonalMarks;
/// use grid_marks::rules::MarkRules;
///
/// let mut game = DiagonalMarks::new(10).unwrap();
///
/// assert_eq!(game.hit(Position::new(9, 9)), Some(1));
/// assert!(!game.is_over());
///
/// // Adjacent hit: marks move instead, and (9, 9) lands on (10, 8)
/// assert_eq!(game.hit(Position::new(9, 8)), None);
/// assert!(game.is_over());
/// ```
#[derive(Clone, Debug)]
pub struct DiagonalMarks {
    config: BoardConfig,
    state: MarkState,
}

impl DiagonalMarks {
    /// Create a game on a `size × size` board.
    pub fn new(size: i32) -> Result<Self, ConfigError> {
        BoardConfig::new(size).map(Self::with_config)
    }

    /// Create a game from an already validated board.
    #[must_use]
    pub fn with_config(config: BoardConfig) -> Self {
        Self {
            config,
            state: MarkState::new(),
        }
    }

    /// Active marks in display order.
    pub fn marks(&self) -> impl Iterator<Item = Position> + '_ {
        self.state.iter().copied()
    }

    /// Snapshot of the mark state.
    #[must_use]
    pub fn state(&self) -> &MarkState {
        &self.state
    }

    fn has_exited(&self, pos: Position) -> bool {
        pos.x() == self.config.size() || pos.y() == -1
    }

    fn move_marks(&mut self) {
        self.state.latch_moving();
        self.state.shift_all(STEP.0, STEP.1);
        debug!(phase = %self.state.phase(), marks = self.state.len(), "moved all marks");
    }
}

impl MarkRules for DiagonalMarks {
    fn config(&self) -> &BoardConfig {
        &self.config
    }

    fn phase(&self) -> Phase {
        self.state.phase()
    }

    fn hit(&mut self, pos: Position) -> Option<usize> {
        if self.is_over() {
            info!(%pos, "hit after game over");
            return None;
        }

        if self.state.phase().is_moving() || self.state.any_adjacent(pos) {
            self.move_marks();
            return None;
        }

        let number = self.state.push(pos);
        debug!(%pos, number, "placed mark");
        Some(number)
    }

    fn mark_at(&self, pos: Position) -> Option<usize> {
        self.state.display_number(pos)
    }

    fn is_over(&self) -> bool {
        self.state.iter().any(|&m| self.has_exited(m))
    }
}

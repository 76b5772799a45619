//! Mark state: the ordered marks and the placing/moving latch.
//!
//! ## Display numbers
//!
//! A mark's number is its 1-based index in the sequence, not an identity.
//! Movement keeps every mark at its index, so numbers follow the marks as
//! they shift. Lookups return the *first* matching index because the
//! sequence may hold the same position more than once.
//!
//! ## Phase
//!
//! The state starts in [`Phase::Placing`]. Once latched to
//! [`Phase::Moving`] it never returns.
//!
//! Marks live in an `im::Vector` so snapshots clone in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::position::Position;

/// Engine phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Hits add new marks.
    #[default]
    Placing,
    /// Hits shift every mark. Terminal.
    Moving,
}

impl Phase {
    /// Check whether the latch has been set.
    #[must_use]
    pub const fn is_moving(self) -> bool {
        matches!(self, Phase::Moving)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Placing => write!(f, "Placing"),
            Phase::Moving => write!(f, "Moving"),
        }
    }
}

/// Ordered marks plus the phase latch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkState {
    marks: Vector<Position>,
    phase: Phase,
}

impl MarkState {
    /// Create an empty state in the placing phase.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of active marks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Check if no marks have been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Iterate over marks in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Position> + '_ {
        self.marks.iter()
    }

    /// Display number of the first mark at `pos`.
    ///
    /// ```
    /// use grid_marks::core::{MarkState, Position};
    ///
    /// let mut state = MarkState::new();
    /// state.push(Position::new(1, 1));
    /// state.push(Position::new(3, 3));
    ///
    /// assert_eq!(state.display_number(Position::new(3, 3)), Some(2));
    /// assert_eq!(state.display_number(Position::new(0, 0)), None);
    /// ```
    #[must_use]
    pub fn display_number(&self, pos: Position) -> Option<usize> {
        self.marks.index_of(&pos).map(|i| i + 1)
    }

    /// Check whether any mark is adjacent to `pos` (distance zero included).
    #[must_use]
    pub fn any_adjacent(&self, pos: Position) -> bool {
        self.marks.iter().any(|m| m.is_adjacent(pos))
    }

    /// Append a mark and return its display number.
    pub fn push(&mut self, pos: Position) -> usize {
        self.marks.push_back(pos);
        self.marks.len()
    }

    /// Shift every mark by `(dx, dy)`.
    ///
    /// Builds the new sequence from the old one, so every mark moves from
    /// its pre-shift position and keeps its index.
    pub fn shift_all(&mut self, dx: i32, dy: i32) {
        self.marks = self.marks.iter().map(|m| m.shifted(dx, dy)).collect();
    }

    /// Set the phase to [`Phase::Moving`]. Idempotent.
    pub fn latch_moving(&mut self) {
        self.phase = Phase::Moving;
    }
}

//! Rules trait for mark-based grid games.

use crate::core::config::BoardConfig;
use crate::core::position::Position;
use crate::core::state::Phase;

/// What a single hit did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitOutcome {
    /// A new mark was placed with this display number.
    Placed(usize),
    /// Every mark moved; the hit position was ignored.
    Moved,
    /// The game was already over; nothing changed.
    Ignored,
}

impl HitOutcome {
    /// Classify the result of `hit` on a game that was not over.
    ///
    /// `phase` is the engine's phase after the hit. A `None` result in the
    /// placing phase can only mean the engine ignored the hit.
    ///
    /// ```
    /// use grid_marks::core::Phase;
    /// use grid_marks::rules::HitOutcome;
    ///
    /// assert_eq!(HitOutcome::from_hit(Some(3), Phase::Placing), HitOutcome::Placed(3));
    /// assert_eq!(HitOutcome::from_hit(None, Phase::Moving), HitOutcome::Moved);
    /// assert_eq!(HitOutcome::from_hit(None, Phase::Placing), HitOutcome::Ignored);
    /// ```
    #[must_use]
    pub const fn from_hit(result: Option<usize>, phase: Phase) -> Self {
        match (result, phase) {
            (Some(number), _) => HitOutcome::Placed(number),
            (None, Phase::Moving) => HitOutcome::Moved,
            (None, Phase::Placing) => HitOutcome::Ignored,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `hit`: the only mutating operation; `None` covers both "moved" and
///   "game over"
/// - `mark_at`: must reflect current positions, not placement positions
/// - `is_over`: evaluated from current state on every call
/// - No input is rejected: off-board positions are valid arguments
pub trait MarkRules {
    /// Get the board configuration.
    fn config(&self) -> &BoardConfig;

    /// Current phase.
    fn phase(&self) -> Phase;

    /// Handle a hit on `pos`.
    ///
    /// Returns the new mark's display number when a mark was placed.
    fn hit(&mut self, pos: Position) -> Option<usize>;

    /// Display number of the mark at `pos`, if any.
    fn mark_at(&self, pos: Position) -> Option<usize>;

    /// Check if the game is over.
    fn is_over(&self) -> bool;
}

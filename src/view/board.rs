//! Board view: per-cell labels driven by a `MarkRules` engine.

use rustc_hash::FxHashMap;
use tracing::{info, trace};

use crate::core::Position;
use crate::rules::{HitOutcome, MarkRules};

/// Label shown on a cell with no mark.
pub const BLANK_LABEL: &str = " ";

/// Result of a click on the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Click not forwarded: off the board or input already closed.
    Rejected,
    /// Click handled; the game continues.
    Continue(HitOutcome),
    /// Click handled and the game is now over; input is closed.
    Finished(HitOutcome),
}

impl ClickOutcome {
    /// The engine's outcome, if the click reached it.
    #[must_use]
    pub const fn hit(self) -> Option<HitOutcome> {
        match self {
            ClickOutcome::Rejected => None,
            ClickOutcome::Continue(hit) | ClickOutcome::Finished(hit) => Some(hit),
        }
    }
}

/// Grid of cell labels kept in sync with an engine.
///
/// ```
/// use grid_marks::core::Position;
/// use grid_marks::games::diagonal::DiagonalMarks;
/// use grid_marks::rules::HitOutcome;
/// use grid_marks::view::{BoardView, ClickOutcome};
///
/// let mut view = BoardView::new(DiagonalMarks::new(10).unwrap());
///
/// let outcome = view.click(Position::new(4, 4));
/// assert_eq!(outcome, ClickOutcome::Continue(HitOutcome::Placed(1)));
/// assert_eq!(view.label(Position::new(4, 4)), "1");
/// assert_eq!(view.label(Position::new(5, 5)), " ");
/// ```
#[derive(Clone, Debug)]
pub struct BoardView<R: MarkRules> {
    rules: R,
    labels: FxHashMap<Position, String>,
    accepting: bool,
    clicks: usize,
}

impl<R: MarkRules> BoardView<R> {
    /// Create a view over `rules` with every label computed.
    ///
    /// Input starts open. Game over is only polled after a click, so a
    /// click on an already finished engine is forwarded once and closes
    /// input.
    pub fn new(rules: R) -> Self {
        let mut view = Self {
            rules,
            labels: FxHashMap::default(),
            accepting: true,
            clicks: 0,
        };
        view.refresh();
        view
    }

    /// Handle a click on `pos`.
    ///
    /// Forwards the click, re-reads every cell, then polls for game over
    /// exactly once.
    pub fn click(&mut self, pos: Position) -> ClickOutcome {
        if !self.accepting || !self.rules.config().contains(pos) {
            trace!(%pos, accepting = self.accepting, "click rejected");
            return ClickOutcome::Rejected;
        }

        trace!(%pos, "click");
        self.clicks += 1;
        let result = self.rules.hit(pos);
        let hit = HitOutcome::from_hit(result, self.rules.phase());
        self.refresh();

        if self.rules.is_over() {
            self.accepting = false;
            info!(clicks = self.clicks, "game over, input closed");
            ClickOutcome::Finished(hit)
        } else {
            ClickOutcome::Continue(hit)
        }
    }

    /// Label of the cell at `pos`: the mark's number, or a blank.
    #[must_use]
    pub fn label(&self, pos: Position) -> &str {
        self.labels.get(&pos).map_or(BLANK_LABEL, String::as_str)
    }

    /// Whether clicks are still forwarded to the engine.
    #[must_use]
    pub fn accepting_input(&self) -> bool {
        self.accepting
    }

    /// Number of clicks forwarded to the engine.
    #[must_use]
    pub fn clicks(&self) -> usize {
        self.clicks
    }

    /// The underlying engine.
    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Consume the view and return the engine.
    #[must_use]
    pub fn into_rules(self) -> R {
        self.rules
    }

    /// Render the board as text, one line per row.
    ///
    /// Cells are separated by `|`; empty cells show as `.`.
    #[must_use]
    pub fn render(&self) -> String {
        let size = self.rules.config().size();
        let mut out = String::new();

        for i in 0..size {
            let row: Vec<&str> = (0..size)
                .map(|j| match self.label(Position::new(j, i)) {
                    BLANK_LABEL => ".",
                    label => label,
                })
                .collect();
            out.push_str(&row.join("|"));
            out.push('\n');
        }

        out
    }

    fn refresh(&mut self) {
        let config = *self.rules.config();
        self.labels.clear();
        for cell in config.cells() {
            if let Some(number) = self.rules.mark_at(cell) {
                self.labels.insert(cell, number.to_string());
            }
        }
    }
}

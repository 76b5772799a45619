//! Playout loop.

use tracing::debug;

use crate::core::{BoardConfig, ClickRng, Position};
use crate::games::diagonal::DiagonalMarks;
use crate::rules::HitOutcome;
use crate::view::{BoardView, ClickOutcome};

use super::config::PlayoutConfig;

/// What happened during a playout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayoutSummary {
    /// Clicks forwarded to the engine.
    pub clicks: usize,
    /// Clicks that placed a mark.
    pub placed: usize,
    /// Clicks that moved the marks.
    pub moves: usize,
    /// Whether the game ended within the click budget.
    pub finished: bool,
    /// Marks at the end, in display order.
    pub final_marks: Vec<Position>,
}

/// Play one game with random clicks.
///
/// ```
/// use grid_marks::core::BoardConfig;
/// use grid_marks::playout::{run_playout, PlayoutConfig};
///
/// let summary = run_playout(&PlayoutConfig::default().with_seed(3), BoardConfig::default());
/// assert!(summary.finished);
/// assert_eq!(summary.clicks, summary.placed + summary.moves);
/// ```
pub fn run_playout(config: &PlayoutConfig, board: BoardConfig) -> PlayoutSummary {
    let mut rng = ClickRng::new(config.seed);
    let mut view = BoardView::new(DiagonalMarks::with_config(board));
    let mut placed = 0;
    let mut moves = 0;

    while view.accepting_input() && view.clicks() < config.max_clicks {
        let cell = rng.next_cell(board);
        match view.click(cell).hit() {
            Some(HitOutcome::Placed(_)) => placed += 1,
            Some(HitOutcome::Moved) => moves += 1,
            Some(HitOutcome::Ignored) | None => {}
        }
    }

    let clicks = view.clicks();
    let finished = !view.accepting_input();
    debug!(seed = rng.seed(), clicks, placed, moves, finished, "playout done");

    let game = view.into_rules();
    PlayoutSummary {
        clicks,
        placed,
        moves,
        finished,
        final_marks: game.marks().collect(),
    }
}

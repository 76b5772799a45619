//! Property tests for the diagonal marks engine.
//!
//! Invariants covered:
//! - Hits on mutually non-adjacent cells number marks 1, 2, 3, ...
//! - A placed mark is found at its cell under its number.
//! - A hit within distance 1 of a mark latches moving for good.
//! - Once moving, the hit position has no effect on the result.
//! - `is_over` holds exactly when some mark sits at `x == size` or `y == -1`,
//!   and a finished game never changes again.

use grid_marks::core::{Phase, Position};
use grid_marks::games::diagonal::DiagonalMarks;
use grid_marks::rules::MarkRules;
use proptest::prelude::*;

const SIZE: i32 = 10;

/// Cells with both coordinates even: no two are adjacent.
fn spaced_cells() -> Vec<Position> {
    (0..SIZE / 2)
        .flat_map(|a| (0..SIZE / 2).map(move |b| Position::new(2 * a, 2 * b)))
        .collect()
}

fn spaced_sequence() -> impl Strategy<Value = Vec<Position>> {
    (Just(spaced_cells()).prop_shuffle(), 1usize..=25)
        .prop_map(|(cells, n)| cells.into_iter().take(n).collect())
}

fn any_cell() -> impl Strategy<Value = Position> {
    (-2..SIZE + 2, -2..SIZE + 2).prop_map(|(x, y)| Position::new(x, y))
}

fn board_cell() -> impl Strategy<Value = Position> {
    (0..SIZE, 0..SIZE).prop_map(|(x, y)| Position::new(x, y))
}

fn exited(game: &DiagonalMarks) -> bool {
    game.marks().any(|m| m.x() == SIZE || m.y() == -1)
}

proptest! {
    #[test]
    fn spaced_hits_number_sequentially(cells in spaced_sequence()) {
        let mut game = DiagonalMarks::new(SIZE).unwrap();

        for (i, cell) in cells.iter().enumerate() {
            let number = game.hit(*cell);
            prop_assert_eq!(number, Some(i + 1));
            prop_assert_eq!(game.mark_at(*cell), number);
        }
        prop_assert_eq!(game.phase(), Phase::Placing);
        prop_assert!(!game.is_over());
    }

    #[test]
    fn adjacent_hit_latches_and_shifts(
        cells in spaced_sequence(),
        pick in any::<prop::sample::Index>(),
        dx in -1i32..=1,
        dy in -1i32..=1,
        later in prop::collection::vec(any_cell(), 0..12),
    ) {
        let mut game = DiagonalMarks::new(SIZE).unwrap();
        for cell in &cells {
            game.hit(*cell);
        }

        let target = cells[pick.index(cells.len())].shifted(dx, dy);
        let before: Vec<_> = game.marks().collect();

        prop_assert_eq!(game.hit(target), None);
        prop_assert_eq!(game.phase(), Phase::Moving);
        let after: Vec<_> = game.marks().collect();
        let expected: Vec<_> = before.iter().map(|m| m.shifted(1, -1)).collect();
        prop_assert_eq!(&after, &expected);

        for cell in later {
            let prior: Vec<_> = game.marks().collect();
            let was_over = game.is_over();

            prop_assert_eq!(game.hit(cell), None);
            prop_assert_eq!(game.phase(), Phase::Moving);

            let now: Vec<_> = game.marks().collect();
            if was_over {
                prop_assert_eq!(&now, &prior);
            } else {
                let shifted: Vec<_> = prior.iter().map(|m| m.shifted(1, -1)).collect();
                prop_assert_eq!(&now, &shifted);
            }
        }
    }

    #[test]
    fn moving_ignores_hit_position(
        first in board_cell(),
        a in any_cell(),
        b in any_cell(),
    ) {
        let mut game = DiagonalMarks::new(SIZE).unwrap();
        game.hit(first);
        game.hit(first);
        prop_assert_eq!(game.phase(), Phase::Moving);

        let mut left = game.clone();
        let mut right = game;
        prop_assert_eq!(left.hit(a), right.hit(b));
        prop_assert_eq!(left.state(), right.state());
    }

    #[test]
    fn is_over_matches_exit_rule(hits in prop::collection::vec(any_cell(), 0..40)) {
        let mut game = DiagonalMarks::new(SIZE).unwrap();

        for cell in hits {
            let was_over = game.is_over();
            let before = game.state().clone();

            let result = game.hit(cell);

            if was_over {
                prop_assert_eq!(result, None);
                prop_assert_eq!(game.state(), &before);
            }
            prop_assert_eq!(game.is_over(), exited(&game));
        }
    }

}

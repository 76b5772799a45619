//! Grid coordinates.
//!
//! A `Position` is a plain `(x, y)` pair of integers. Two positions with
//! the same components are the same cell: equality and hashing are
//! structural, so positions work as map keys and in de-duplication.
//!
//! Positions carry no notion of a board. Whether a position lies on the
//! grid is decided by [`BoardConfig::contains`](super::BoardConfig::contains).
//!
//! ## Usage
//!
//! ```
//! use grid_marks::core::Position;
//!
//! let p = Position::new(4, 4);
//! assert_eq!(p.x(), 4);
//! assert_eq!(p.y(), 4);
//!
//! // Neighbours include diagonals and the cell itself
//! assert!(p.is_adjacent(Position::new(5, 5)));
//! assert!(p.is_adjacent(p));
//! assert!(!p.is_adjacent(Position::new(6, 4)));
//!
//! // Transformations produce new values
//! assert_eq!(p.shifted(1, -1), Position::new(5, 3));
//! ```

use serde::{Deserialize, Serialize};

/// A cell coordinate on the grid.
///
/// Immutable once constructed. No range validation is performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    /// Create a position from its components.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Column component.
    #[must_use]
    pub const fn x(self) -> i32 {
        self.x
    }

    /// Row component.
    #[must_use]
    pub const fn y(self) -> i32 {
        self.y
    }

    /// Chebyshev distance: the larger of the two component differences.
    ///
    /// ```
    /// use grid_marks::core::Position;
    ///
    /// let a = Position::new(0, 0);
    /// assert_eq!(a.chebyshev_distance(a), 0);
    /// assert_eq!(a.chebyshev_distance(Position::new(1, 1)), 1);
    /// assert_eq!(a.chebyshev_distance(Position::new(-3, 2)), 3);
    /// ```
    #[must_use]
    pub const fn chebyshev_distance(self, other: Position) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        if dx > dy {
            dx
        } else {
            dy
        }
    }

    /// Check whether `other` is within Chebyshev distance 1.
    ///
    /// Inclusive of distance zero: every position is adjacent to itself.
    #[must_use]
    pub const fn is_adjacent(self, other: Position) -> bool {
        self.chebyshev_distance(other) <= 1
    }

    /// Return a new position offset by `(dx, dy)`.
    ///
    /// Wraps at the `i32` limits instead of panicking.
    #[must_use]
    pub const fn shifted(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_components() {
        let p = Position::new(3, -7);
        assert_eq!(p.x(), 3);
        assert_eq!(p.y(), -7);
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Position::new(2, 5), Position::new(2, 5));
        assert_ne!(Position::new(2, 5), Position::new(5, 2));
        assert_eq!(Position::from((1, 1)), Position::new(1, 1));
    }

    #[test]
    fn test_hash_deduplicates() {
        let mut set = FxHashSet::default();
        set.insert(Position::new(4, 4));
        set.insert(Position::new(4, 4));
        set.insert(Position::new(4, 5));

        assert_eq!(set.len(), 2);
        assert!(set.contains(&Position::new(4, 4)));
    }

    #[test]
    fn test_adjacency_ring() {
        let center = Position::new(4, 4);
        for dx in -1..=1 {
            for dy in -1..=1 {
                assert!(center.is_adjacent(center.shifted(dx, dy)), "({dx}, {dy})");
            }
        }

        assert!(!center.is_adjacent(Position::new(6, 4)));
        assert!(!center.is_adjacent(Position::new(4, 2)));
        assert!(!center.is_adjacent(Position::new(2, 6)));
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let a = Position::new(9, 9);
        let b = Position::new(9, 8);
        assert!(a.is_adjacent(b));
        assert!(b.is_adjacent(a));
    }

    #[test]
    fn test_adjacency_at_extremes() {
        let a = Position::new(i32::MIN, i32::MAX);
        let b = Position::new(i32::MAX, i32::MIN);
        assert!(!a.is_adjacent(b));
        assert_eq!(a.chebyshev_distance(b), u32::MAX);
    }

    #[test]
    fn test_shifted_leaves_original() {
        let p = Position::new(7, 7);
        let q = p.shifted(1, -1);
        assert_eq!(p, Position::new(7, 7));
        assert_eq!(q, Position::new(8, 6));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Position::new(5, 3)), "(5, 3)");
        assert_eq!(format!("{}", Position::new(-1, 0)), "(-1, 0)");
    }

    #[test]
    fn test_serialization() {
        let p = Position::new(6, 2);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"x":6,"y":2}"#);
        let deserialized: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(p, deserialized);
    }
}

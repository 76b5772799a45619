//! Error types.
//!
//! Engine operations never fail: "nothing applicable" is an empty `Option`.
//! The only caller-facing precondition is a valid board configuration.

use thiserror::Error;

/// Invalid board configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The board size must be at least 1.
    #[error("board size must be positive, got {0}")]
    NonPositiveSize(i32),
}

//! Core types: positions, board configuration, mark state, errors, RNG.
//!
//! These are engine-agnostic building blocks. Game rules live in
//! `games`; the contract they implement lives in `rules`.

pub mod position;
pub mod config;
pub mod error;
pub mod state;
pub mod rng;

pub use position::Position;
pub use config::{BoardConfig, DEFAULT_BOARD_SIZE};
pub use error::ConfigError;
pub use state::{MarkState, Phase};
pub use rng::ClickRng;

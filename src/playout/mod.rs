//! Seeded random playouts.
//!
//! Drives a `BoardView` with random on-board clicks until the game ends
//! or the click budget runs out. Useful for soak tests and benchmarks.

pub mod config;
pub mod runner;

pub use config::PlayoutConfig;
pub use runner::{run_playout, PlayoutSummary};

//! The contract between a front end and a game engine.
//!
//! A front end only ever:
//! - forwards a clicked cell to `hit`
//! - re-reads every cell with `mark_at`
//! - polls `is_over` to decide whether to keep accepting input
//!
//! Engines implement `MarkRules`; front ends are generic over it.

pub mod engine;

pub use engine::{HitOutcome, MarkRules};

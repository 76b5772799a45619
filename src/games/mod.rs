//! Game implementations.

pub mod diagonal;

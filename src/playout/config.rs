//! Playout configuration parameters.

use serde::{Deserialize, Serialize};

/// Playout configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayoutConfig {
    /// Maximum clicks before giving up on a game that has not ended.
    pub max_clicks: usize,

    /// Seed for the click RNG.
    /// Same seed produces the same playout.
    pub seed: u64,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_clicks: 500,
            seed: 0,
        }
    }
}

impl PlayoutConfig {
    /// Set the click budget.
    #[must_use]
    pub fn with_max_clicks(mut self, max_clicks: usize) -> Self {
        self.max_clicks = max_clicks;
        self
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

//! Run Statistics
//!
//! Monotonic counters for the current run, copied outward for the HUD and
//! handed to the narrative service at game over.

use serde::{Deserialize, Serialize};

/// Counters that only move forward during a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameStats {
    pub enemies_killed: u32,
    /// Seconds since the run started.
    pub time_survived: f32,
    /// Highest level reached; mirrors the player's level.
    pub level_reached: u32,
}

impl Default for GameStats {
    fn default() -> Self {
        Self {
            enemies_killed: 0,
            time_survived: 0.0,
            level_reached: 1,
        }
    }
}

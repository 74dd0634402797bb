//! Frame Events
//!
//! Gameplay events produced inside one tick and drained by the embedder
//! afterwards. The simulation pushes; it never reacts to its own events.

use crate::entities::EnemyKind;
use crate::stats::GameStats;

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameEvent {
    /// One per level gained; a large pickup can emit several in a row.
    LevelUp { new_level: u32 },
    /// An enemy dropped to zero hp.
    EnemyKilled { kind: EnemyKind },
    /// A gem reached the player.
    GemCollected { value: u32 },
    /// The terminal transition. Fired exactly once per run.
    GameOver { stats: GameStats },
}

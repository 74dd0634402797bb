//! Void Arena Simulation Engine
//!
//! Headless per-frame simulation core for a first-person wave-survival game:
//! a player roams a bounded arena, enemies spawn on a ramping schedule and
//! seek the player, auto-fired projectiles thin them out, and kills drop xp
//! gems that drive a leveling curve until the player falls.
//!
//! The crate owns no window, renderer, or network socket. A presentation
//! layer feeds [`input::PlayerIntent`] and frame deltas into
//! [`world::GameWorld::update`], then reads back [`snapshot`] data to place
//! instanced billboards and draw the HUD. Narrative flavor text (death
//! epitaphs, level-up lines) runs on a detached worker in [`narrative`] and
//! never touches simulation state.

pub mod config;
pub mod entities;
pub mod events;
pub mod input;
pub mod math;
pub mod narrative;
pub mod player;
pub mod pool;
pub mod snapshot;
pub mod stats;
pub mod systems;
pub mod world;

pub use config::{MAX_ENEMIES, MAX_GEMS, MAX_PROJECTILES, SimConfig};
pub use entities::{Enemy, EnemyKind, Gem, Projectile};
pub use events::FrameEvent;
pub use input::{MovementKeys, PlayerIntent};
pub use player::{FireCommand, Player};
pub use pool::{Pool, PoolSlot};
pub use snapshot::{HudSnapshot, InstanceKind, PlayerView, RenderInstance};
pub use stats::GameStats;
pub use world::{GameStatus, GameWorld};

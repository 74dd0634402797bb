//! Per-Tick Entity Systems
//!
//! The four systems the lifecycle driver runs in fixed order each tick:
//! spawner, enemies, projectiles, gems. Each one owns a single concern and
//! operates on the pools it is handed.

pub mod enemies;
pub mod gems;
pub mod projectiles;
pub mod spawner;

pub use enemies::update_enemies;
pub use gems::update_gems;
pub use projectiles::{spawn_projectile, update_projectiles};
pub use spawner::{Spawner, target_count};

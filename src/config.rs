//! Simulation Configuration
//!
//! Centralized gameplay tunables. `Default` returns the values the game
//! ships with; the struct round-trips through JSON so an embedder can tune
//! a run without recompiling. Pool capacities stay compile-time constants
//! so the per-frame scans have a fixed upper bound.

use serde::{Deserialize, Serialize};
use static_assertions::const_assert;

/// Enemy pool capacity. Spawn requests beyond this are dropped.
pub const MAX_ENEMIES: usize = 200;
/// Projectile pool capacity. Fire requests beyond this are dropped.
pub const MAX_PROJECTILES: usize = 50;
/// Gem pool capacity. Drop requests beyond this are dropped.
pub const MAX_GEMS: usize = 100;

const_assert!(MAX_ENEMIES > 0);
const_assert!(MAX_PROJECTILES > 0);
const_assert!(MAX_GEMS > 0);

/// Every gameplay tunable in one place.
///
/// Speeds marked "per tick" are applied once per simulation tick without
/// delta-time scaling; only contact damage and projectile lifetime scale by
/// the frame delta. This matches the feel the numbers were tuned for.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Arena side length. The playable square spans ±`arena_size / 2`.
    pub arena_size: f32,
    /// Margin kept between any entity and the arena wall.
    pub arena_margin: f32,
    /// Camera eye height above the floor.
    pub eye_height: f32,
    /// Projectiles leave from this far below the eye.
    pub muzzle_drop: f32,

    // === Player defaults ===
    /// Starting (and maximum) hit points.
    pub player_max_hp: f32,
    /// Player displacement per tick while a movement key is held.
    pub player_speed: f32,
    /// Damage dealt by one projectile hit.
    pub player_damage: f32,
    /// Shots per second.
    pub fire_rate: f32,
    /// Projectile displacement per tick.
    pub projectile_speed: f32,
    /// Gems inside this planar radius are attracted to the player.
    pub pickup_range: f32,
    /// Xp required for the first level-up.
    pub first_level_xp: u32,

    // === Leveling ===
    /// Damage added per level.
    pub level_damage_bonus: f32,
    /// Fire rate added per level.
    pub level_fire_rate_bonus: f32,
    /// Geometric growth factor for the xp threshold (floored each step).
    pub level_xp_growth: f32,

    // === Spawner ===
    /// Active-enemy target before any time ramp.
    pub spawn_base_count: usize,
    /// Seconds of survival per additional enemy in the target count.
    pub spawn_ramp_interval: f32,
    /// Enemies appear on a circle of this radius around the player.
    pub spawn_distance: f32,
    /// Enemy hp at t = 0.
    pub enemy_base_hp: f32,
    /// Enemy hp gained per second survived.
    pub enemy_hp_per_second: f32,
    /// Enemy displacement per tick at t = 0.
    pub enemy_base_speed: f32,
    /// Enemy speed gained per second survived.
    pub enemy_speed_per_second: f32,
    /// Cap on the time-scaled speed bonus.
    pub enemy_speed_bonus_cap: f32,
    /// Probability a spawn rolls a skeleton instead of a bat.
    pub skeleton_chance: f32,
    /// Probability a skeleton is promoted to a boss.
    pub boss_chance: f32,
    /// Boss max-hp multiplier applied after the time scaling.
    pub boss_hp_multiplier: f32,

    // === Combat ===
    /// Enemies this close (planar) chew on the player.
    pub contact_radius: f32,
    /// Player hp lost per second of enemy contact.
    pub contact_damage_per_second: f32,
    /// Enemies farther than this from the player are culled.
    pub despawn_distance: f32,
    /// Projectile lifetime in seconds.
    pub projectile_lifetime: f32,
    /// Squared 3D distance under which a projectile hits an enemy.
    pub hit_radius_sq: f32,
    /// Assumed enemy center height for the 3D hit test.
    pub enemy_center_height: f32,

    // === Gems ===
    /// Gem displacement per tick while attracted.
    pub gem_attraction_speed: f32,
    /// Gems this close to the player are collected.
    pub gem_collect_radius: f32,
    /// Xp granted by a normal kill.
    pub gem_value_normal: u32,
    /// Xp granted by a boss kill.
    pub gem_value_boss: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena_size: 100.0,
            arena_margin: 1.0,
            eye_height: 1.7,
            muzzle_drop: 0.2,

            player_max_hp: 100.0,
            player_speed: 0.2,
            player_damage: 25.0,
            fire_rate: 4.0,
            projectile_speed: 0.8,
            pickup_range: 4.0,
            first_level_xp: 10,

            level_damage_bonus: 5.0,
            level_fire_rate_bonus: 0.5,
            level_xp_growth: 1.5,

            spawn_base_count: 10,
            spawn_ramp_interval: 1.5,
            spawn_distance: 25.0,
            enemy_base_hp: 20.0,
            enemy_hp_per_second: 2.0,
            enemy_base_speed: 0.05,
            enemy_speed_per_second: 0.001,
            enemy_speed_bonus_cap: 0.1,
            skeleton_chance: 0.3,
            boss_chance: 0.05,
            boss_hp_multiplier: 5.0,

            contact_radius: 1.0,
            contact_damage_per_second: 10.0,
            despawn_distance: 50.0,
            projectile_lifetime: 2.0,
            hit_radius_sq: 1.5,
            enemy_center_height: 1.0,

            gem_attraction_speed: 0.3,
            gem_collect_radius: 0.5,
            gem_value_normal: 10,
            gem_value_boss: 50,
        }
    }
}

impl SimConfig {
    /// Largest coordinate an entity may occupy on either horizontal axis.
    #[inline]
    pub fn arena_limit(&self) -> f32 {
        self.arena_size / 2.0 - self.arena_margin
    }

    /// Parse a config from JSON, filling missing fields from `Default`.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize the config to pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

//! Player Controller
//!
//! Owns the player's kinematic state and progression stats. Movement is
//! yaw-relative on the ground plane, damage latches a one-shot terminal
//! condition, xp drives a compounding level curve, and firing is gated by a
//! cooldown measured on the simulation clock.

use glam::Vec3;

use crate::config::SimConfig;
use crate::events::FrameEvent;
use crate::input::MovementKeys;
use crate::math::{clamp_planar, look_direction, yaw_basis};

/// Spawn request for one projectile, produced by a successful fire.
#[derive(Debug, Clone, Copy)]
pub struct FireCommand {
    /// Muzzle position (slightly below the eye).
    pub origin: Vec3,
    /// Unit aim direction, pitch included.
    pub direction: Vec3,
}

/// Player state and progression. Mutated only by the simulation tick;
/// the presentation layer reads copies via the snapshot module.
#[derive(Debug, Clone)]
pub struct Player {
    /// Feet position on the arena floor.
    pub position: Vec3,
    pub hp: f32,
    pub max_hp: f32,
    pub xp: u32,
    pub level: u32,
    /// Xp threshold for the next level-up. Grows geometrically, uncapped.
    pub next_level_xp: u32,
    /// Displacement per tick while moving.
    pub speed: f32,
    /// Damage per projectile hit.
    pub damage: f32,
    /// Shots per second.
    pub fire_rate: f32,
    /// Projectile displacement per tick.
    pub projectile_speed: f32,
    /// Gems inside this radius are attracted.
    pub pickup_range: f32,
    /// Simulation time of the last successful shot.
    last_shot_time: f32,
    /// Terminal latch; once set, further damage is a no-op.
    dead: bool,
}

impl Player {
    /// Fresh player with the configured default stats.
    pub fn new(config: &SimConfig) -> Self {
        Self {
            position: Vec3::ZERO,
            hp: config.player_max_hp,
            max_hp: config.player_max_hp,
            xp: 0,
            level: 1,
            next_level_xp: config.first_level_xp,
            speed: config.player_speed,
            damage: config.player_damage,
            fire_rate: config.fire_rate,
            projectile_speed: config.projectile_speed,
            pickup_range: config.pickup_range,
            last_shot_time: 0.0,
            dead: false,
        }
    }

    /// Whether the terminal condition has fired.
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Eye position used for aiming and the renderer's camera.
    #[inline]
    pub fn eye_position(&self, config: &SimConfig) -> Vec3 {
        self.position + Vec3::new(0.0, config.eye_height, 0.0)
    }

    /// Move along the yaw-rotated input axes and clamp to the arena.
    ///
    /// Pitch is ignored; walking is ground-plane only. No-op when no key is
    /// held or when opposed keys cancel out.
    pub fn apply_movement(&mut self, keys: &MovementKeys, yaw: f32, config: &SimConfig) {
        if !keys.any() {
            return;
        }
        let (right_axis, forward_axis) = keys.axes();
        let (forward, right) = yaw_basis(yaw);
        let Some(dir) = (forward * forward_axis + right * right_axis).try_normalize() else {
            return;
        };
        self.position += dir * self.speed;
        self.position = clamp_planar(self.position, config.arena_limit());
    }

    /// Subtract hp. Returns `true` exactly once, on the hit that crosses
    /// zero; every later call is a no-op.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if self.dead {
            return false;
        }
        self.hp -= amount;
        if self.hp <= 0.0 {
            self.dead = true;
            return true;
        }
        false
    }

    /// Add xp and resolve every threshold crossing it pays for.
    ///
    /// Each level: +1 level, threshold subtracted from xp, threshold grows
    /// by the configured factor (floored), damage and fire rate improve,
    /// and one `LevelUp` event is pushed. Returns levels gained.
    pub fn gain_xp(&mut self, amount: u32, config: &SimConfig, events: &mut Vec<FrameEvent>) -> u32 {
        self.xp += amount;
        let mut gained = 0;
        while self.xp >= self.next_level_xp {
            self.xp -= self.next_level_xp;
            self.level += 1;
            self.next_level_xp = (self.next_level_xp as f32 * config.level_xp_growth) as u32;
            self.damage += config.level_damage_bonus;
            self.fire_rate += config.level_fire_rate_bonus;
            gained += 1;
            log::debug!("level up -> {} (next threshold {})", self.level, self.next_level_xp);
            events.push(FrameEvent::LevelUp {
                new_level: self.level,
            });
        }
        gained
    }

    /// Fire if the cooldown (`1 / fire_rate` seconds since the last
    /// committed shot) has elapsed. `now` is the simulation clock.
    ///
    /// The cooldown clock is untouched here; the caller commits it with
    /// [`commit_shot`](Self::commit_shot) once the projectile actually
    /// spawned. A command dropped by a full pool costs nothing, so the
    /// request is retried every tick until a slot opens.
    pub fn try_fire(&self, now: f32, yaw: f32, pitch: f32, config: &SimConfig) -> Option<FireCommand> {
        if now - self.last_shot_time <= 1.0 / self.fire_rate {
            return None;
        }
        let origin = self.eye_position(config) - Vec3::new(0.0, config.muzzle_drop, 0.0);
        Some(FireCommand {
            origin,
            direction: look_direction(yaw, pitch),
        })
    }

    /// Start the cooldown for a shot that made it into the projectile pool.
    pub fn commit_shot(&mut self, now: f32) {
        self.last_shot_time = now;
    }
}

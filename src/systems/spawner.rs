//! Enemy Spawner
//!
//! Keeps the active-enemy count tracking a target that ramps with survival
//! time. At most one slot is activated per tick to spread spawn cost across
//! frames; a full pool simply skips the attempt (the target is re-checked
//! next tick anyway).

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SimConfig;
use crate::entities::{Enemy, EnemyKind};
use crate::math::{clamp_planar, random_point_on_circle};
use crate::pool::Pool;

/// Active-enemy target for a given survival time.
#[inline]
pub fn target_count(time_survived: f32, cap: usize, config: &SimConfig) -> usize {
    let ramp = (time_survived / config.spawn_ramp_interval) as usize;
    cap.min(config.spawn_base_count + ramp)
}

/// Spawn scheduler owning its own randomness so runs can be seeded in tests.
pub struct Spawner {
    rng: StdRng,
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spawner {
    /// Spawner seeded from the OS.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministically seeded spawner for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Activate at most one enemy slot if the pool is below target.
    pub fn update(
        &mut self,
        enemies: &mut Pool<Enemy>,
        player_pos: Vec3,
        time_survived: f32,
        config: &SimConfig,
    ) {
        let target = target_count(time_survived, enemies.capacity(), config);
        if enemies.active_count() >= target {
            return;
        }

        let kind = self.roll_kind(config);
        let offset = random_point_on_circle(&mut self.rng, config.spawn_distance);
        let Some(slot) = enemies.acquire() else {
            return;
        };

        let position = clamp_planar(player_pos + offset, config.arena_limit());
        let mut max_hp = config.enemy_base_hp + time_survived * config.enemy_hp_per_second;
        if kind == EnemyKind::Boss {
            max_hp *= config.boss_hp_multiplier;
        }
        let speed = config.enemy_base_speed
            + config
                .enemy_speed_bonus_cap
                .min(time_survived * config.enemy_speed_per_second);

        slot.activate(position, max_hp, speed, kind);
        log::trace!(
            "spawned {:?} at ({:.1}, {:.1}) hp={:.0}",
            kind,
            position.x,
            position.z,
            max_hp
        );
    }

    /// 70% bat / 30% skeleton, with 5% of skeletons promoted to boss.
    fn roll_kind(&mut self, config: &SimConfig) -> EnemyKind {
        if self.rng.gen_range(0.0..1.0f32) < config.skeleton_chance {
            if self.rng.gen_range(0.0..1.0f32) < config.boss_chance {
                EnemyKind::Boss
            } else {
                EnemyKind::Skeleton
            }
        } else {
            EnemyKind::Bat
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_ENEMIES;

    #[test]
    fn test_target_count_ramp() {
        let config = SimConfig::default();
        assert_eq!(target_count(0.0, MAX_ENEMIES, &config), 10);
        assert_eq!(target_count(1.4, MAX_ENEMIES, &config), 10);
        assert_eq!(target_count(1.5, MAX_ENEMIES, &config), 11);
        assert_eq!(target_count(15.0, MAX_ENEMIES, &config), 20);
        // Capped at the pool size
        assert_eq!(target_count(1e6, MAX_ENEMIES, &config), MAX_ENEMIES);
    }

    #[test]
    fn test_one_spawn_per_tick() {
        let config = SimConfig::default();
        let mut spawner = Spawner::with_seed(1);
        let mut enemies: Pool<Enemy> = Pool::new(MAX_ENEMIES);
        spawner.update(&mut enemies, Vec3::ZERO, 0.0, &config);
        assert_eq!(enemies.active_count(), 1);
        for _ in 0..20 {
            spawner.update(&mut enemies, Vec3::ZERO, 0.0, &config);
        }
        // Target at t=0 is 10; never overshoots
        assert_eq!(enemies.active_count(), 10);
    }

    #[test]
    fn test_spawn_stats_scale_with_time() {
        let config = SimConfig::default();
        let mut spawner = Spawner::with_seed(2);
        let mut enemies: Pool<Enemy> = Pool::new(1);
        spawner.update(&mut enemies, Vec3::ZERO, 30.0, &config);
        let enemy = &enemies.slots()[0];
        assert!(enemy.active);
        let expected_hp = if enemy.kind == EnemyKind::Boss {
            (20.0 + 30.0 * 2.0) * 5.0
        } else {
            20.0 + 30.0 * 2.0
        };
        assert_eq!(enemy.max_hp, expected_hp);
        assert_eq!(enemy.hp, enemy.max_hp);
        // speed = 0.05 + min(0.1, 30 * 0.001)
        assert!((enemy.speed - 0.08).abs() < 1e-6);
    }

    #[test]
    fn test_spawn_position_on_circle_and_clamped() {
        let config = SimConfig::default();
        let mut spawner = Spawner::with_seed(3);
        let limit = config.arena_limit();

        // Player in a corner: spawns must still land inside the arena
        let corner = Vec3::new(limit, 0.0, limit);
        let mut enemies: Pool<Enemy> = Pool::new(32);
        for _ in 0..32 {
            spawner.update(&mut enemies, corner, 0.0, &config);
        }
        for enemy in enemies.iter_active() {
            assert!(enemy.position.x.abs() <= limit);
            assert!(enemy.position.z.abs() <= limit);
        }
    }

    #[test]
    fn test_full_pool_skips_attempt() {
        let config = SimConfig::default();
        let mut spawner = Spawner::with_seed(4);
        let mut enemies: Pool<Enemy> = Pool::new(2);
        for _ in 0..5 {
            spawner.update(&mut enemies, Vec3::ZERO, 0.0, &config);
        }
        assert_eq!(enemies.active_count(), 2);
    }

    #[test]
    fn test_kind_distribution() {
        let config = SimConfig::default();
        let mut spawner = Spawner::with_seed(5);
        let mut bats = 0u32;
        let mut skeletons = 0u32;
        let mut bosses = 0u32;
        for _ in 0..2000 {
            match spawner.roll_kind(&config) {
                EnemyKind::Bat => bats += 1,
                EnemyKind::Skeleton => skeletons += 1,
                EnemyKind::Boss => bosses += 1,
            }
        }
        // Rough sanity on the 70 / 28.5 / 1.5 split
        assert!(bats > 1250 && bats < 1550);
        assert!(skeletons > 400 && skeletons < 750);
        assert!(bosses < 80);
    }
}

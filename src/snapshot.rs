//! Presentation Snapshots
//!
//! One-way copy-out of simulation state for the renderer and HUD. Nothing
//! here hands out a mutable reference into pool internals; the renderer
//! gets plain data keyed by stable slot index and hides any index it does
//! not receive this tick.
//!
//! Billboarding (orienting quads toward the camera) is the renderer's job;
//! the feed carries position, scale, and a kind tag for texture selection.

use glam::Vec3;
use serde::Serialize;

use crate::entities::{Enemy, EnemyKind, Gem, Projectile};
use crate::player::Player;
use crate::pool::Pool;
use crate::stats::GameStats;

/// Which texture/material an instance should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InstanceKind {
    Bat,
    Skeleton,
    Boss,
    Projectile,
    Gem,
}

/// Transform data for one active entity, keyed by its pool slot.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RenderInstance {
    /// Stable pool index within the entity's own pool.
    pub index: usize,
    /// World position including the display height convention.
    pub position: Vec3,
    /// Billboard scale.
    pub scale: Vec3,
    pub kind: InstanceKind,
}

/// Read-only player fields the HUD cares about.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlayerView {
    pub position: Vec3,
    pub hp: f32,
    pub max_hp: f32,
    pub xp: u32,
    pub level: u32,
    pub next_level_xp: u32,
}

impl PlayerView {
    pub fn of(player: &Player) -> Self {
        Self {
            position: player.position,
            hp: player.hp,
            max_hp: player.max_hp,
            xp: player.xp,
            level: player.level,
            next_level_xp: player.next_level_xp,
        }
    }
}

/// Coalesced HUD state: player view plus run counters.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HudSnapshot {
    pub player: PlayerView,
    pub stats: GameStats,
}

/// Display heights and scales, matching the sprite sheet the game ships.
mod display {
    /// Regular enemies float at this center height.
    pub const ENEMY_HEIGHT: f32 = 1.0;
    /// Bosses are taller and centered higher.
    pub const BOSS_HEIGHT: f32 = 2.0;
    pub const ENEMY_SCALE: f32 = 2.0;
    pub const BOSS_SCALE: f32 = 4.0;
    /// Gems hover just above the floor.
    pub const GEM_HEIGHT: f32 = 0.5;
    pub const GEM_SCALE: f32 = 0.5;
    pub const PROJECTILE_SCALE: f32 = 0.5;
}

/// Append transforms for every active enemy to `out`.
pub fn enemy_instances(enemies: &Pool<Enemy>, out: &mut Vec<RenderInstance>) {
    for enemy in enemies.iter_active() {
        let (kind, height, scale) = match enemy.kind {
            EnemyKind::Bat => (InstanceKind::Bat, display::ENEMY_HEIGHT, display::ENEMY_SCALE),
            EnemyKind::Skeleton => (
                InstanceKind::Skeleton,
                display::ENEMY_HEIGHT,
                display::ENEMY_SCALE,
            ),
            EnemyKind::Boss => (InstanceKind::Boss, display::BOSS_HEIGHT, display::BOSS_SCALE),
        };
        out.push(RenderInstance {
            index: enemy.id,
            position: Vec3::new(enemy.position.x, height, enemy.position.z),
            scale: Vec3::new(scale, scale, 1.0),
            kind,
        });
    }
}

/// Append transforms for every active projectile to `out`.
pub fn projectile_instances(projectiles: &Pool<Projectile>, out: &mut Vec<RenderInstance>) {
    for proj in projectiles.iter_active() {
        out.push(RenderInstance {
            index: proj.id,
            position: proj.position,
            scale: Vec3::splat(display::PROJECTILE_SCALE),
            kind: InstanceKind::Projectile,
        });
    }
}

/// Append transforms for every active gem to `out`.
pub fn gem_instances(gems: &Pool<Gem>, out: &mut Vec<RenderInstance>) {
    for gem in gems.iter_active() {
        out.push(RenderInstance {
            index: gem.id,
            position: Vec3::new(gem.position.x, display::GEM_HEIGHT, gem.position.z),
            scale: Vec3::splat(display::GEM_SCALE),
            kind: InstanceKind::Gem,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;

    #[test]
    fn test_enemy_instances_follow_display_conventions() {
        let mut enemies: Pool<Enemy> = Pool::new(4);
        enemies
            .acquire()
            .unwrap()
            .activate(Vec3::new(1.0, 0.0, 2.0), 20.0, 0.05, EnemyKind::Bat);
        enemies
            .acquire()
            .unwrap()
            .activate(Vec3::new(-3.0, 0.0, 4.0), 100.0, 0.05, EnemyKind::Boss);

        let mut out = Vec::new();
        enemy_instances(&enemies, &mut out);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].kind, InstanceKind::Bat);
        assert_eq!(out[0].position, Vec3::new(1.0, 1.0, 2.0));
        assert_eq!(out[1].kind, InstanceKind::Boss);
        assert_eq!(out[1].position, Vec3::new(-3.0, 2.0, 4.0));
        assert_eq!(out[1].scale, Vec3::new(4.0, 4.0, 1.0));
    }

    #[test]
    fn test_inactive_slots_are_omitted() {
        let mut gems: Pool<Gem> = Pool::new(4);
        gems.acquire().unwrap().activate(Vec3::ZERO, 10);
        gems.acquire().unwrap().activate(Vec3::ONE, 10);
        gems.release(0);

        let mut out = Vec::new();
        gem_instances(&gems, &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].index, 1);
        assert_eq!(out[0].position.y, 0.5);
    }

    #[test]
    fn test_hud_snapshot_serializes() {
        let config = SimConfig::default();
        let snapshot = HudSnapshot {
            player: PlayerView::of(&Player::new(&config)),
            stats: GameStats::default(),
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"level\":1"));
        assert!(json.contains("\"enemies_killed\":0"));
    }
}

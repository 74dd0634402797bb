//! Pooled Entity Records
//!
//! The three short-lived entity kinds living in fixed pools. Each record
//! carries its stable slot index and an active flag; `activate` methods
//! overwrite the full payload so nothing stale survives reuse.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::pool::PoolSlot;

/// Closed enemy variant tag. Behavior differs only in stat scaling and
/// presentation size, so a tag beats a trait object here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Bat,
    Skeleton,
    Boss,
}

impl EnemyKind {
    /// Xp value of the gem dropped by this kind.
    #[inline]
    pub fn gem_value(self, normal: u32, boss: u32) -> u32 {
        match self {
            Self::Boss => boss,
            _ => normal,
        }
    }
}

/// One enemy pool slot.
#[derive(Debug, Clone)]
pub struct Enemy {
    /// Stable slot index, assigned once at pool construction.
    pub id: usize,
    pub active: bool,
    pub position: Vec3,
    pub hp: f32,
    pub max_hp: f32,
    /// Displacement per tick while seeking.
    pub speed: f32,
    pub kind: EnemyKind,
}

impl Enemy {
    /// Overwrite the payload for a fresh spawn.
    pub fn activate(&mut self, position: Vec3, max_hp: f32, speed: f32, kind: EnemyKind) {
        self.position = position;
        self.hp = max_hp;
        self.max_hp = max_hp;
        self.speed = speed;
        self.kind = kind;
    }
}

impl PoolSlot for Enemy {
    fn inactive(id: usize) -> Self {
        Self {
            id,
            active: false,
            position: Vec3::ZERO,
            hp: 0.0,
            max_hp: 0.0,
            speed: 0.0,
            kind: EnemyKind::Bat,
        }
    }
    fn is_active(&self) -> bool {
        self.active
    }
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// One projectile pool slot.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: usize,
    pub active: bool,
    pub position: Vec3,
    /// Unit travel direction (full 3D, pitch-aware).
    pub direction: Vec3,
    /// Seconds of flight remaining; expires at <= 0.
    pub time_left: f32,
}

impl Projectile {
    /// Overwrite the payload for a fresh shot.
    pub fn activate(&mut self, origin: Vec3, direction: Vec3, lifetime: f32) {
        self.position = origin;
        self.direction = direction;
        self.time_left = lifetime;
    }
}

impl PoolSlot for Projectile {
    fn inactive(id: usize) -> Self {
        Self {
            id,
            active: false,
            position: Vec3::ZERO,
            direction: Vec3::ZERO,
            time_left: 0.0,
        }
    }
    fn is_active(&self) -> bool {
        self.active
    }
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// One xp gem pool slot.
#[derive(Debug, Clone)]
pub struct Gem {
    pub id: usize,
    pub active: bool,
    pub position: Vec3,
    /// Xp granted on collection.
    pub value: u32,
}

impl Gem {
    /// Overwrite the payload for a fresh drop.
    pub fn activate(&mut self, position: Vec3, value: u32) {
        self.position = position;
        self.value = value;
    }
}

impl PoolSlot for Gem {
    fn inactive(id: usize) -> Self {
        Self {
            id,
            active: false,
            position: Vec3::ZERO,
            value: 0,
        }
    }
    fn is_active(&self) -> bool {
        self.active
    }
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gem_value_by_kind() {
        assert_eq!(EnemyKind::Bat.gem_value(10, 50), 10);
        assert_eq!(EnemyKind::Skeleton.gem_value(10, 50), 10);
        assert_eq!(EnemyKind::Boss.gem_value(10, 50), 50);
    }

    #[test]
    fn test_activate_overwrites_full_payload() {
        let mut enemy = Enemy::inactive(3);
        enemy.hp = -5.0; // stale garbage from a previous occupant
        enemy.activate(Vec3::new(1.0, 0.0, 2.0), 40.0, 0.06, EnemyKind::Skeleton);
        assert_eq!(enemy.id, 3);
        assert_eq!(enemy.hp, 40.0);
        assert_eq!(enemy.max_hp, 40.0);
        assert_eq!(enemy.kind, EnemyKind::Skeleton);
    }
}

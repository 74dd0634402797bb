//! Enemy Steering & Combat
//!
//! Per-tick seek toward the player, distance-based culling, and contact
//! damage. The first enemy whose chewing drops the player to zero ends the
//! tick immediately; the caller transitions to game over without touching
//! the remaining entities.

use crate::config::SimConfig;
use crate::entities::Enemy;
use crate::math::planar_delta;
use crate::player::Player;
use crate::pool::Pool;

/// Advance every active enemy one tick. Returns `true` when contact damage
/// tripped the player's terminal condition; the caller must stop the tick.
pub fn update_enemies(
    enemies: &mut Pool<Enemy>,
    player: &mut Player,
    config: &SimConfig,
    dt: f32,
) -> bool {
    let contact_sq = config.contact_radius * config.contact_radius;

    for enemy in enemies.slots_mut() {
        if !enemy.active {
            continue;
        }

        let delta = planar_delta(enemy.position, player.position);
        let dist_sq = delta.length_squared();

        // Cull runaways instead of chasing them across the whole arena
        if dist_sq > config.despawn_distance * config.despawn_distance {
            enemy.active = false;
            continue;
        }

        let dist = dist_sq.sqrt();
        if dist > f32::EPSILON {
            enemy.position += delta / dist * enemy.speed;
        }

        // Contact test uses the pre-move distance, like the hit it gates
        if dist_sq < contact_sq
            && player.take_damage(config.contact_damage_per_second * dt)
        {
            log::debug!("player killed by {:?} (slot {})", enemy.kind, enemy.id);
            return true;
        }
    }

    false
}

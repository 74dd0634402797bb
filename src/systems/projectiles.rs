//! Projectile System
//!
//! Ballistic advance, lifetime expiry, and the enemy hit scan. A projectile
//! tests a squared 3D distance against an assumed enemy center height and
//! stops at the first qualifying enemy in slot order; a kill bumps the
//! counters and requests a gem drop.

use crate::config::SimConfig;
use crate::entities::{Enemy, Gem, Projectile};
use crate::events::FrameEvent;
use crate::player::{FireCommand, Player};
use crate::pool::Pool;
use crate::stats::GameStats;

/// Materialize a fire command into a pool slot. Returns `false` when the
/// pool is exhausted and the shot is dropped.
pub fn spawn_projectile(
    projectiles: &mut Pool<Projectile>,
    cmd: &FireCommand,
    config: &SimConfig,
) -> bool {
    match projectiles.acquire() {
        Some(slot) => {
            slot.activate(cmd.origin, cmd.direction, config.projectile_lifetime);
            true
        }
        None => false,
    }
}

/// Advance every active projectile one tick and resolve enemy hits.
pub fn update_projectiles(
    projectiles: &mut Pool<Projectile>,
    enemies: &mut Pool<Enemy>,
    gems: &mut Pool<Gem>,
    player: &Player,
    stats: &mut GameStats,
    events: &mut Vec<FrameEvent>,
    config: &SimConfig,
    dt: f32,
) {
    for proj in projectiles.slots_mut() {
        if !proj.active {
            continue;
        }

        proj.time_left -= dt;
        if proj.time_left <= 0.0 {
            proj.active = false;
            continue;
        }

        proj.position += proj.direction * player.projectile_speed;

        // Slot order is the tie-break when several enemies are in range
        for enemy in enemies.slots_mut() {
            if !enemy.active {
                continue;
            }
            let dx = proj.position.x - enemy.position.x;
            let dy = proj.position.y - config.enemy_center_height;
            let dz = proj.position.z - enemy.position.z;
            if dx * dx + dy * dy + dz * dz >= config.hit_radius_sq {
                continue;
            }

            enemy.hp -= player.damage;
            proj.active = false;

            if enemy.hp <= 0.0 {
                enemy.active = false;
                stats.enemies_killed += 1;
                events.push(FrameEvent::EnemyKilled { kind: enemy.kind });
                log::trace!("killed {:?} (slot {})", enemy.kind, enemy.id);

                // Drop request is silently discarded on a full gem pool
                if let Some(gem) = gems.acquire() {
                    let value = enemy
                        .kind
                        .gem_value(config.gem_value_normal, config.gem_value_boss);
                    gem.activate(enemy.position, value);
                }
            }
            break;
        }
    }
}

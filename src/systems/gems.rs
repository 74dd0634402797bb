//! Gem (Pickup) System
//!
//! Gems sit where they dropped until the player's pickup range reaches
//! them, then home in at a fixed attraction speed. Crossing the collection
//! threshold consumes the gem and awards its xp, which may cascade into one
//! or more level-ups.

use crate::config::SimConfig;
use crate::entities::Gem;
use crate::events::FrameEvent;
use crate::math::planar_delta;
use crate::player::Player;
use crate::pool::Pool;
use crate::stats::GameStats;

/// Advance every active gem one tick.
pub fn update_gems(
    gems: &mut Pool<Gem>,
    player: &mut Player,
    stats: &mut GameStats,
    events: &mut Vec<FrameEvent>,
    config: &SimConfig,
) {
    let collect_sq = config.gem_collect_radius * config.gem_collect_radius;

    for gem in gems.slots_mut() {
        if !gem.active {
            continue;
        }

        let delta = planar_delta(gem.position, player.position);
        let dist_sq = delta.length_squared();
        if dist_sq >= player.pickup_range * player.pickup_range {
            continue;
        }

        let dist = dist_sq.sqrt();
        if dist > f32::EPSILON {
            gem.position += delta / dist * config.gem_attraction_speed;
        }

        if dist_sq < collect_sq {
            gem.active = false;
            events.push(FrameEvent::GemCollected { value: gem.value });
            player.gain_xp(gem.value, config, events);
            stats.level_reached = stats.level_reached.max(player.level);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn setup() -> (Pool<Gem>, Player, GameStats, SimConfig) {
        let config = SimConfig::default();
        (
            Pool::new(4),
            Player::new(&config),
            GameStats::default(),
            config,
        )
    }

    fn drop_gem(gems: &mut Pool<Gem>, pos: Vec3, value: u32) {
        gems.acquire().unwrap().activate(pos, value);
    }

    #[test]
    fn test_gem_outside_range_stays_put() {
        let (mut gems, mut player, mut stats, config) = setup();
        let pos = Vec3::new(6.0, 0.0, 0.0); // pickup_range is 4
        drop_gem(&mut gems, pos, 10);
        let mut events = Vec::new();
        update_gems(&mut gems, &mut player, &mut stats, &mut events, &config);
        assert_eq!(gems.slots()[0].position, pos);
        assert_eq!(player.xp, 0);
    }

    #[test]
    fn test_gem_in_range_is_attracted() {
        let (mut gems, mut player, mut stats, config) = setup();
        drop_gem(&mut gems, Vec3::new(3.0, 0.0, 0.0), 10);
        let mut events = Vec::new();
        update_gems(&mut gems, &mut player, &mut stats, &mut events, &config);
        let gem = &gems.slots()[0];
        assert!(gem.active);
        assert!((gem.position.x - 2.7).abs() < 1e-5);
    }

    #[test]
    fn test_collection_is_exactly_once() {
        let (mut gems, mut player, mut stats, config) = setup();
        drop_gem(&mut gems, Vec3::new(0.4, 0.0, 0.0), 10);
        let mut events = Vec::new();

        update_gems(&mut gems, &mut player, &mut stats, &mut events, &config);
        assert_eq!(gems.active_count(), 0);
        assert_eq!(player.xp, 10 - 10); // 10 xp hit the first threshold exactly
        assert_eq!(player.level, 2);
        assert_eq!(stats.level_reached, 2);
        assert!(events.contains(&FrameEvent::GemCollected { value: 10 }));
        assert!(events.contains(&FrameEvent::LevelUp { new_level: 2 }));

        // A second pass over the now-inactive slot does nothing
        let xp_before = player.xp;
        events.clear();
        update_gems(&mut gems, &mut player, &mut stats, &mut events, &config);
        assert_eq!(player.xp, xp_before);
        assert!(events.is_empty());
    }

    #[test]
    fn test_big_gem_cascades_levels() {
        let (mut gems, mut player, mut stats, config) = setup();
        drop_gem(&mut gems, Vec3::ZERO, 100);
        let mut events = Vec::new();
        update_gems(&mut gems, &mut player, &mut stats, &mut events, &config);
        assert_eq!(player.level, 5);
        assert_eq!(stats.level_reached, 5);
        let level_ups = events
            .iter()
            .filter(|e| matches!(e, FrameEvent::LevelUp { .. }))
            .count();
        assert_eq!(level_ups, 4);
    }
}

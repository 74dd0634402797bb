//! Run Lifecycle Driver
//!
//! Central state struct that owns the player, the three entity pools, and
//! the spawn scheduler, and advances them in a fixed order once per frame
//! while a run is live. Owns the menu / playing / game-over state machine
//! and guarantees the terminal transition happens exactly once per run.

use crate::config::{MAX_ENEMIES, MAX_GEMS, MAX_PROJECTILES, SimConfig};
use crate::entities::{Enemy, Gem, Projectile};
use crate::events::FrameEvent;
use crate::input::PlayerIntent;
use crate::player::Player;
use crate::pool::Pool;
use crate::snapshot::{self, HudSnapshot, PlayerView, RenderInstance};
use crate::stats::GameStats;
use crate::systems::{self, Spawner};

/// How often (in frames) the coalesced HUD snapshot is due.
const HUD_SYNC_INTERVAL: u64 = 10;

/// Upper bound on one frame delta; protects against huge hitches.
const MAX_FRAME_DELTA: f32 = 0.1;

/// Run lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Initial state; nothing simulates.
    Menu,
    /// A run is live; one tick per rendered frame.
    Playing,
    /// Reserved; no transition currently enters it.
    Paused,
    /// Terminal state until a restart.
    GameOver,
}

/// The whole simulation for one run: player, pools, scheduler, counters.
///
/// The presentation layer drives it: `start()` on the menu button,
/// `update(intent, dt)` once per frame, `drain_events()` afterwards, and
/// the snapshot accessors whenever it redraws.
pub struct GameWorld {
    pub config: SimConfig,
    status: GameStatus,
    pub player: Player,
    pub enemies: Pool<Enemy>,
    pub projectiles: Pool<Projectile>,
    pub gems: Pool<Gem>,
    pub stats: GameStats,
    spawner: Spawner,
    elapsed: f32,
    frame_count: u64,
    run_generation: u64,
    events: Vec<FrameEvent>,
}

impl GameWorld {
    /// World in the menu state with an OS-seeded spawner.
    pub fn new(config: SimConfig) -> Self {
        Self::build(config, Spawner::new())
    }

    /// World with a deterministic spawner, for tests.
    pub fn with_seed(config: SimConfig, seed: u64) -> Self {
        Self::build(config, Spawner::with_seed(seed))
    }

    fn build(config: SimConfig, spawner: Spawner) -> Self {
        let player = Player::new(&config);
        Self {
            config,
            status: GameStatus::Menu,
            player,
            enemies: Pool::new(MAX_ENEMIES),
            projectiles: Pool::new(MAX_PROJECTILES),
            gems: Pool::new(MAX_GEMS),
            stats: GameStats::default(),
            spawner,
            elapsed: 0.0,
            frame_count: 0,
            run_generation: 0,
            events: Vec::new(),
        }
    }

    /// Current lifecycle state.
    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Seconds survived in the current run.
    #[inline]
    pub fn time_survived(&self) -> f32 {
        self.elapsed
    }

    /// Monotonic run counter; bumps on every (re)start. Matches the
    /// generation handed to the narrative worker.
    #[inline]
    pub fn run_generation(&self) -> u64 {
        self.run_generation
    }

    /// Begin a run from the menu or after a game over. Resets the pools,
    /// the player, the counters, and the survival clock.
    pub fn start(&mut self) {
        self.enemies.reset();
        self.projectiles.reset();
        self.gems.reset();
        self.player = Player::new(&self.config);
        self.stats = GameStats::default();
        self.elapsed = 0.0;
        self.frame_count = 0;
        self.events.clear();
        self.run_generation += 1;
        self.status = GameStatus::Playing;
        log::debug!("run {} started", self.run_generation);
    }

    /// Advance one tick. Does nothing unless the status is `Playing`.
    ///
    /// System order is fixed: clock, player movement, spawn, fire, enemy
    /// steering/contact, projectiles, gems. A terminal condition raised by
    /// enemy contact aborts the tick before the later systems run.
    pub fn update(&mut self, intent: &PlayerIntent, dt: f32) {
        if self.status != GameStatus::Playing {
            return;
        }
        let dt = dt.clamp(0.0, MAX_FRAME_DELTA);

        self.frame_count += 1;
        self.elapsed += dt;
        self.stats.time_survived = self.elapsed;
        log::trace!("tick frame={} t={:.2}", self.frame_count, self.elapsed);

        self.player
            .apply_movement(&intent.keys, intent.look_yaw, &self.config);

        self.spawner.update(
            &mut self.enemies,
            self.player.position,
            self.elapsed,
            &self.config,
        );

        if let Some(cmd) =
            self.player
                .try_fire(self.elapsed, intent.look_yaw, intent.look_pitch, &self.config)
        {
            // Only a shot that lands a slot starts the cooldown; a full
            // pool drops the command and the request retries next tick
            if systems::spawn_projectile(&mut self.projectiles, &cmd, &self.config) {
                self.player.commit_shot(self.elapsed);
            }
        }

        let player_died =
            systems::update_enemies(&mut self.enemies, &mut self.player, &self.config, dt);
        if player_died {
            self.game_over();
            return;
        }

        systems::update_projectiles(
            &mut self.projectiles,
            &mut self.enemies,
            &mut self.gems,
            &self.player,
            &mut self.stats,
            &mut self.events,
            &self.config,
            dt,
        );

        systems::update_gems(
            &mut self.gems,
            &mut self.player,
            &mut self.stats,
            &mut self.events,
            &self.config,
        );
    }

    /// The single terminal transition for this run.
    fn game_over(&mut self) {
        self.status = GameStatus::GameOver;
        self.events.push(FrameEvent::GameOver { stats: self.stats });
        log::debug!(
            "run {} over: {:.1}s survived, {} kills, level {}",
            self.run_generation,
            self.stats.time_survived,
            self.stats.enemies_killed,
            self.stats.level_reached
        );
    }

    /// Take this tick's events, leaving the buffer empty.
    pub fn drain_events(&mut self) -> Vec<FrameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Whether the coalesced HUD sync is due this frame.
    #[inline]
    pub fn should_sync_hud(&self) -> bool {
        self.frame_count % HUD_SYNC_INTERVAL == 0
    }

    /// Point-in-time copy of the HUD-facing state.
    pub fn hud_snapshot(&self) -> HudSnapshot {
        HudSnapshot {
            player: PlayerView::of(&self.player),
            stats: self.stats,
        }
    }

    /// Transforms for every active entity, for instanced rendering. The
    /// buffer is cleared first so it can be reused across frames.
    pub fn render_instances(&self, out: &mut Vec<RenderInstance>) {
        out.clear();
        snapshot::enemy_instances(&self.enemies, out);
        snapshot::projectile_instances(&self.projectiles, out);
        snapshot::gem_instances(&self.gems, out);
    }
}

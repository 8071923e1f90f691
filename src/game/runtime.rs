//! Game Runtime
//!
//! `Game` is the single context object for a play session: world, timers,
//! RNG and state. The main loop feeds it one input snapshot per frame and
//! reads back sound cues and the current state. It never touches the window,
//! so whole sessions can be simulated in tests.

use ::rand::rngs::StdRng;
use ::rand::Rng;
use macroquad::math::{vec2, Vec2};

use super::catalog::SpriteCatalog;
use super::collision::{self, CollisionReport};
use super::components::{Explosion, FrameContext, Laser, Meteor, Player};
use super::event::{Events, SoundCue};
use super::input::InputSnapshot;
use super::timer::RepeatingTimer;
use super::world::World;
use crate::config::GameConfig;

/// Why the session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// The window was closed
    Quit,
    /// A meteor hit the ship
    PlayerDestroyed,
}

/// Session state. There is no pause, menu or win condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Running,
    Terminated(TerminationReason),
}

/// One play session
pub struct Game<R: Rng = StdRng> {
    config: GameConfig,
    catalog: SpriteCatalog,
    world: World,
    events: Events,
    spawner: RepeatingTimer,
    rng: R,
    state: GameState,
    started_ms: u64,
    /// Total meteors destroyed by lasers (logged on exit)
    kills: u32,
}

impl<R: Rng> Game<R> {
    /// Set up the starfield and the ship, and arm the meteor spawner at
    /// `now_ms`. The score counts from `started_ms`, which may be earlier
    /// (the clock starts before assets are loaded).
    pub fn new(
        config: GameConfig,
        catalog: SpriteCatalog,
        mut rng: R,
        started_ms: u64,
        now_ms: u64,
    ) -> Self {
        let mut world = World::new();
        let screen = vec2(config.screen_width, config.screen_height);

        for _ in 0..config.star_count {
            let center = vec2(
                rng.gen_range(0..=screen.x as u32) as f32,
                rng.gen_range(0..=screen.y as u32) as f32,
            );
            world.spawn_star(center, catalog.star);
        }

        let player = Player::new(config.player_speed, config.shot_cooldown_ms);
        world.spawn_player(screen * 0.5, catalog.player, player);

        let spawner = RepeatingTimer::new(config.spawn_interval_ms, now_ms);
        log::debug!(
            "session started: {} stars, meteor every {} ms",
            config.star_count,
            spawner.interval_ms()
        );

        Self {
            config,
            catalog,
            world,
            events: Events::new(),
            spawner,
            rng,
            state: GameState::Running,
            started_ms: started_ms.min(now_ms),
            kills: 0,
        }
    }

    /// False once the session has terminated
    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Meteors destroyed by lasers so far
    pub fn kills(&self) -> u32 {
        self.kills
    }

    fn screen(&self) -> Vec2 {
        vec2(self.config.screen_width, self.config.screen_height)
    }

    /// Tenths of a second survived
    pub fn score(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.started_ms) / 100
    }

    /// Sound effects queued since the last drain
    pub fn drain_sounds(&mut self) -> Vec<SoundCue> {
        self.events.sounds.drain().collect()
    }

    /// Spawn one meteor at a random x along the top edge
    pub fn spawn_meteor(&mut self) {
        let x = self.rng.gen_range(0..=self.config.screen_width as u32) as f32;
        let meteor = Meteor::random(&mut self.rng, &self.config, self.catalog.meteor);
        log::trace!("meteor at x={} speed={}", x, meteor.speed());
        self.world.spawn_meteor(vec2(x, 0.0), meteor);
    }

    fn spawn_explosion(&mut self, center: Vec2) {
        let explosion = Explosion::new(self.catalog.explosion_frames, self.config.explosion_fps);
        self.world.spawn_explosion(center, self.catalog.explosion, explosion);
        self.events.sounds.send(SoundCue::Explosion);
    }

    /// Run one frame: events, updates, collisions. Drawing is left to the
    /// caller. Does nothing once the session has terminated.
    pub fn frame(&mut self, input: &InputSnapshot, dt: f32, now_ms: u64) -> GameState {
        if !self.is_running() {
            return self.state;
        }

        // Event queue: quit first, then timer firings
        if input.quit {
            self.state = GameState::Terminated(TerminationReason::Quit);
            return self.state;
        }
        for _ in 0..self.spawner.poll(now_ms) {
            self.spawn_meteor();
        }

        // Update every sprite
        let ctx = FrameContext {
            dt,
            now_ms: now_ms.saturating_sub(self.started_ms),
            screen: self.screen(),
        };
        self.world.update(input, &ctx, &mut self.events);

        let shots: Vec<_> = self.events.shots.drain().collect();
        for shot in shots {
            log::trace!("laser fired at {:?}", shot.origin);
            self.world
                .spawn_laser(shot.origin, self.catalog.laser, Laser::new(self.config.laser_speed));
        }

        // Collisions
        let report = collision::resolve(&mut self.world, &self.catalog);
        self.apply(&report);
        self.state
    }

    fn apply(&mut self, report: &CollisionReport) {
        if report.player_hit {
            self.state = GameState::Terminated(TerminationReason::PlayerDestroyed);
            return;
        }
        self.kills += report.meteors_destroyed as u32;
        if let Some(center) = report.explosion_at {
            log::debug!("{} meteor(s) destroyed, explosion at {:?}", report.meteors_destroyed, center);
            self.spawn_explosion(center);
        }
    }
}

#[cfg(test)]
impl<R: Rng> Game<R> {
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

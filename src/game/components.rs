//! Sprite kinds and their per-frame rules
//!
//! The set of kinds is closed: stars, the player ship, lasers, meteors and
//! explosions. Each sprite is a rectangle plus one `Kind` variant carrying
//! that kind's state; `Sprite::update` dispatches on the variant.

use ::rand::Rng;
use macroquad::math::{vec2, Vec2};

use super::event::{Events, ShotEvent, SoundCue};
use super::input::InputSnapshot;
use super::rect::{rotated_size, FRect};
use super::timer::Cooldown;
use crate::config::GameConfig;

/// Per-frame values every update needs
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    /// Seconds since the previous frame
    pub dt: f32,
    /// Milliseconds since the game started
    pub now_ms: u64,
    /// Canvas size
    pub screen: Vec2,
}

/// Whether a sprite survives its update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Alive,
    Expired,
}

// =============================================================================
// Player
// =============================================================================

/// The ship. Moves with the arrow keys, fires with space.
#[derive(Debug, Clone)]
pub struct Player {
    speed: f32,
    /// Direction used by the last update (unit length or zero)
    direction: Vec2,
    cooldown: Cooldown,
}

impl Player {
    /// Ship moving `speed` pixels per second, firing at most once per
    /// `cooldown_ms`
    pub fn new(speed: f32, cooldown_ms: u64) -> Self {
        Self {
            speed,
            direction: Vec2::ZERO,
            cooldown: Cooldown::new(cooldown_ms),
        }
    }

    /// Pixels per second
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Change the movement speed. Non-finite values are ignored and the
    /// previous speed is kept.
    pub fn set_speed(&mut self, speed: f32) {
        if speed.is_finite() {
            self.speed = speed;
        }
    }

    /// Keep on screen, move, then fire if the trigger was pressed and the
    /// cooldown allows it
    pub fn update(
        &mut self,
        rect: &mut FRect,
        input: &InputSnapshot,
        ctx: &FrameContext,
        events: &mut Events,
    ) {
        clamp_to_screen(rect, ctx.screen);

        self.direction = movement_direction(input);
        rect.translate(self.direction * self.speed * ctx.dt);
        clamp_to_screen(rect, ctx.screen);

        // Cooldown is settled before reading the trigger so a press exactly
        // `duration` after the last shot fires.
        self.cooldown.refresh(ctx.now_ms);
        if input.shoot && self.cooldown.is_ready() {
            events.shots.send(ShotEvent { origin: rect.midtop() });
            events.sounds.send(SoundCue::Laser);
            self.cooldown.trigger(ctx.now_ms);
        }
    }
}

/// Unit-length direction from the arrow keys, or zero when idle.
/// Diagonals are normalized so they are not faster than straight moves.
pub fn movement_direction(input: &InputSnapshot) -> Vec2 {
    input.axes().normalize_or_zero()
}

/// Pull the rectangle back inside [0, screen]
pub fn clamp_to_screen(rect: &mut FRect, screen: Vec2) {
    if rect.left() <= 0.0 {
        rect.set_left(0.0);
    }
    if rect.right() >= screen.x {
        rect.set_right(screen.x);
    }
    if rect.bottom() >= screen.y {
        rect.set_bottom(screen.y);
    }
    if rect.top() <= 0.0 {
        rect.set_top(0.0);
    }
}

// =============================================================================
// Laser
// =============================================================================

#[derive(Debug, Clone)]
pub struct Laser {
    pub speed: f32,
}

impl Laser {
    /// Laser climbing `speed` pixels per second
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }

    /// Move up; expire once fully above the screen
    pub fn update(&mut self, rect: &mut FRect, dt: f32) -> Lifecycle {
        rect.translate(vec2(0.0, -self.speed * dt));
        if rect.bottom() < 0.0 {
            Lifecycle::Expired
        } else {
            Lifecycle::Alive
        }
    }
}

// =============================================================================
// Meteor
// =============================================================================

/// A falling, spinning rock
#[derive(Debug, Clone)]
pub struct Meteor {
    speed: f32,
    direction: Vec2,
    /// Accumulated counter-clockwise rotation in degrees (unbounded)
    rotation: f32,
    /// Degrees per second
    rotation_speed: f32,
    /// Size of the unrotated image
    base_size: Vec2,
}

impl Meteor {
    /// Meteor moving along `direction` scaled by `speed`, spinning
    /// `rotation_speed` degrees per second
    pub fn new(speed: f32, direction: Vec2, rotation_speed: f32, base_size: Vec2) -> Self {
        Self {
            speed,
            direction,
            rotation: 0.0,
            rotation_speed,
            base_size,
        }
    }

    /// Random speed, mostly-downward direction and spin from `config`
    pub fn random<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig, base_size: Vec2) -> Self {
        let (speed_lo, speed_hi) = config.meteor_speed;
        let (spin_lo, spin_hi) = config.meteor_spin;
        let drift = config.meteor_drift;
        let speed = rng.gen_range(speed_lo..=speed_hi) as f32;
        let direction = vec2(rng.gen_range(-drift..=drift), 1.0);
        let rotation_speed = rng.gen_range(spin_lo..=spin_hi) as f32;
        Self::new(speed, direction, rotation_speed, base_size)
    }

    /// Pixels per second along `direction`
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Accumulated rotation in degrees
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Size of the unrotated image
    pub fn base_size(&self) -> Vec2 {
        self.base_size
    }

    /// Fall, spin, and refit the box around the rotated image.
    /// Expires once the top edge reaches the bottom of the screen.
    pub fn update(&mut self, rect: &mut FRect, dt: f32, screen: Vec2) -> Lifecycle {
        rect.translate(self.direction * self.speed * dt);
        let life = if rect.top() >= screen.y {
            Lifecycle::Expired
        } else {
            Lifecycle::Alive
        };

        self.rotation += self.rotation_speed * dt;
        rect.resize_centered(rotated_size(self.base_size, self.rotation));
        life
    }
}

// =============================================================================
// Explosion
// =============================================================================

/// One play-through of the explosion animation
#[derive(Debug, Clone)]
pub struct Explosion {
    frame_count: usize,
    frame_index: f32,
    fps: f32,
}

impl Explosion {
    /// Animation of `frame_count` frames played at `fps`
    pub fn new(frame_count: usize, fps: f32) -> Self {
        Self {
            frame_count,
            frame_index: 0.0,
            fps,
        }
    }

    /// Frame to display
    pub fn frame(&self) -> usize {
        (self.frame_index as usize).min(self.frame_count.saturating_sub(1))
    }

    /// Advance the animation; expires after the last frame has shown
    pub fn update(&mut self, dt: f32) -> Lifecycle {
        self.frame_index += self.fps * dt;
        if self.frame_index < self.frame_count as f32 {
            Lifecycle::Alive
        } else {
            Lifecycle::Expired
        }
    }
}

// =============================================================================
// Sprite
// =============================================================================

/// Kind-specific state
#[derive(Debug, Clone)]
pub enum Kind {
    Star,
    Player(Player),
    Laser(Laser),
    Meteor(Meteor),
    Explosion(Explosion),
}

/// A drawable, updatable entity
#[derive(Debug, Clone)]
pub struct Sprite {
    pub rect: FRect,
    pub kind: Kind,
}

impl Sprite {
    pub fn new(rect: FRect, kind: Kind) -> Self {
        Self { rect, kind }
    }

    /// Run this sprite's per-frame rule
    pub fn update(&mut self, input: &InputSnapshot, ctx: &FrameContext, events: &mut Events) -> Lifecycle {
        match &mut self.kind {
            Kind::Star => Lifecycle::Alive,
            Kind::Player(player) => {
                player.update(&mut self.rect, input, ctx, events);
                Lifecycle::Alive
            }
            Kind::Laser(laser) => laser.update(&mut self.rect, ctx.dt),
            Kind::Meteor(meteor) => meteor.update(&mut self.rect, ctx.dt, ctx.screen),
            Kind::Explosion(explosion) => explosion.update(ctx.dt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::rect::Anchor;
    use ::rand::rngs::StdRng;
    use ::rand::SeedableRng;
    use proptest::prelude::*;

    const SCREEN: Vec2 = Vec2::new(1280.0, 720.0);

    fn ctx(dt: f32, now_ms: u64) -> FrameContext {
        FrameContext { dt, now_ms, screen: SCREEN }
    }

    fn player_rect() -> FRect {
        FRect::anchored(vec2(100.0, 80.0), Anchor::Center, SCREEN * 0.5)
    }

    #[test]
    fn test_diagonal_not_faster() {
        let right = InputSnapshot { right: true, ..Default::default() };
        let diag = InputSnapshot { right: true, down: true, ..Default::default() };
        let a = movement_direction(&right);
        let b = movement_direction(&diag);
        assert!((a.length() - 1.0).abs() < 1e-6);
        assert!((b.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_player_moves_at_speed() {
        let mut player = Player::new(300.0, 400);
        let mut rect = player_rect();
        let start = rect.center();
        let mut events = Events::new();
        let input = InputSnapshot { left: true, ..Default::default() };

        player.update(&mut rect, &input, &ctx(0.5, 0), &mut events);
        assert!((rect.center().x - (start.x - 150.0)).abs() < 1e-3);
        assert_eq!(rect.center().y, start.y);
        assert_eq!(player.direction, vec2(-1.0, 0.0));
    }

    #[test]
    fn test_player_clamped_at_edge() {
        let mut player = Player::new(300.0, 400);
        let mut rect = FRect::new(5.0, 5.0, 100.0, 80.0);
        let mut events = Events::new();
        let input = InputSnapshot { left: true, up: true, ..Default::default() };

        player.update(&mut rect, &input, &ctx(1.0, 0), &mut events);
        assert_eq!(rect.left(), 0.0);
        assert_eq!(rect.top(), 0.0);
    }

    #[test]
    fn test_set_speed_ignores_non_finite() {
        let mut player = Player::new(300.0, 400);
        player.set_speed(f32::NAN);
        assert_eq!(player.speed(), 300.0);
        player.set_speed(f32::INFINITY);
        assert_eq!(player.speed(), 300.0);
        player.set_speed(450.0);
        assert_eq!(player.speed(), 450.0);
    }

    #[test]
    fn test_shot_spawns_at_midtop_with_sound() {
        let mut player = Player::new(300.0, 400);
        let mut rect = player_rect();
        let mut events = Events::new();
        let input = InputSnapshot { shoot: true, ..Default::default() };

        player.update(&mut rect, &input, &ctx(0.0, 1000), &mut events);
        let shots: Vec<_> = events.shots.drain().collect();
        assert_eq!(shots, vec![ShotEvent { origin: rect.midtop() }]);
        assert_eq!(events.sounds.drain().collect::<Vec<_>>(), vec![SoundCue::Laser]);
        assert!(!player.cooldown.is_ready());
    }

    #[test]
    fn test_shot_cooldown() {
        let mut player = Player::new(300.0, 400);
        let mut rect = player_rect();
        let mut events = Events::new();
        let fire = InputSnapshot { shoot: true, ..Default::default() };

        player.update(&mut rect, &fire, &ctx(0.016, 1000), &mut events);
        assert_eq!(events.shots.drain().count(), 1);

        player.update(&mut rect, &fire, &ctx(0.016, 1399), &mut events);
        assert_eq!(events.shots.drain().count(), 0, "second shot inside cooldown");

        player.update(&mut rect, &fire, &ctx(0.016, 1400), &mut events);
        assert_eq!(events.shots.drain().count(), 1, "shot at exactly the cooldown boundary");
    }

    #[test]
    fn test_holding_fire_does_not_shoot() {
        let mut player = Player::new(300.0, 400);
        let mut rect = player_rect();
        let mut events = Events::new();
        // `shoot` is an edge; a held key yields false on later frames
        player.update(&mut rect, &InputSnapshot::default(), &ctx(0.016, 5000), &mut events);
        assert_eq!(events.shots.drain().count(), 0);
    }

    #[test]
    fn test_laser_expires_above_screen() {
        let mut laser = Laser::new(300.0);
        let mut rect = FRect::anchored(vec2(10.0, 40.0), Anchor::MidBottom, vec2(100.0, 100.0));

        // 100 / 300 seconds brings the bottom edge to exactly 0: still alive
        let mut t = 0.0;
        let dt = 1.0 / 300.0;
        for _ in 0..99 {
            assert_eq!(laser.update(&mut rect, dt), Lifecycle::Alive);
            t += dt;
        }
        assert!(t < 100.0 / 300.0);
        laser.update(&mut rect, dt);
        assert!(rect.bottom().abs() < 1e-3);
        // Any further movement takes it strictly above the top
        assert_eq!(laser.update(&mut rect, 0.01), Lifecycle::Expired);
    }

    #[test]
    fn test_meteor_random_ranges() {
        let cfg = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let m = Meteor::random(&mut rng, &cfg, vec2(60.0, 60.0));
            assert!((400.0..=500.0).contains(&m.speed()));
            assert!((40.0..=50.0).contains(&m.rotation_speed));
            assert!((-0.5..=0.5).contains(&m.direction.x));
            assert_eq!(m.direction.y, 1.0);
            assert_eq!(m.speed().fract(), 0.0);
        }
    }

    #[test]
    fn test_meteor_rotation_grows_box() {
        let base = vec2(100.0, 100.0);
        let mut meteor = Meteor::new(0.0, vec2(0.0, 1.0), 45.0, base);
        let mut rect = FRect::anchored(base, Anchor::Center, vec2(400.0, 300.0));

        meteor.update(&mut rect, 1.0, SCREEN);
        assert!((meteor.rotation() - 45.0).abs() < 1e-4);
        assert!(rect.w > 100.0 && rect.h > 100.0);
        // Box stays centred on the same point
        assert!((rect.center() - vec2(400.0, 300.0)).length() < 1e-3);
    }

    #[test]
    fn test_meteor_falls_and_expires() {
        let base = vec2(60.0, 60.0);
        let mut meteor = Meteor::new(400.0, vec2(0.0, 1.0), 0.0, base);
        let mut rect = FRect::anchored(base, Anchor::BottomLeft, vec2(200.0, 0.0));

        assert_eq!(meteor.update(&mut rect, 1.0, SCREEN), Lifecycle::Alive);
        assert!((rect.bottom() - 400.0).abs() < 1e-3);
        // Top edge at 540
        assert_eq!(meteor.update(&mut rect, 0.5, SCREEN), Lifecycle::Alive);
        // Top edge at 740, past the bottom of the screen
        assert_eq!(meteor.update(&mut rect, 0.5, SCREEN), Lifecycle::Expired);
    }

    #[test]
    fn test_explosion_plays_once() {
        let mut explosion = Explosion::new(21, 10.0);
        let dt = 0.05;
        let mut elapsed = 0.0;
        loop {
            let life = explosion.update(dt);
            elapsed += dt;
            if life == Lifecycle::Expired {
                break;
            }
            assert!(explosion.frame() < 21);
        }
        assert!(elapsed >= 2.1 - 1e-4);
        assert!(elapsed < 2.1 + dt);
    }

    #[test]
    fn test_explosion_frame_advances() {
        let mut explosion = Explosion::new(21, 10.0);
        assert_eq!(explosion.frame(), 0);
        explosion.update(0.35);
        assert_eq!(explosion.frame(), 3);
    }

    #[test]
    fn test_star_never_expires() {
        let mut star = Sprite::new(FRect::new(0.0, 0.0, 4.0, 4.0), Kind::Star);
        let mut events = Events::new();
        let life = star.update(&InputSnapshot::default(), &ctx(10.0, 0), &mut events);
        assert_eq!(life, Lifecycle::Alive);
        assert!(matches!(star.kind, Kind::Star));
    }

    proptest! {
        #[test]
        fn prop_player_stays_on_screen(
            cx in 50.0f32..1230.0,
            cy in 40.0f32..680.0,
            dt in 0.0f32..2.0,
            left: bool, right: bool, up: bool, down: bool
        ) {
            let mut player = Player::new(300.0, 400);
            let mut rect = FRect::anchored(vec2(100.0, 80.0), Anchor::Center, vec2(cx, cy));
            let mut events = Events::new();
            let input = InputSnapshot { left, right, up, down, ..Default::default() };

            player.update(&mut rect, &input, &ctx(dt, 0), &mut events);
            prop_assert!(rect.left() >= 0.0);
            prop_assert!(rect.top() >= 0.0);
            prop_assert!(rect.right() <= SCREEN.x + 1e-3);
            prop_assert!(rect.bottom() <= SCREEN.y + 1e-3);
        }

        #[test]
        fn prop_direction_is_unit_or_zero(left: bool, right: bool, up: bool, down: bool) {
            let input = InputSnapshot { left, right, up, down, ..Default::default() };
            let dir = movement_direction(&input);
            if input.axes() == Vec2::ZERO {
                prop_assert_eq!(dir, Vec2::ZERO);
            } else {
                prop_assert!((dir.length() - 1.0).abs() < 1e-6);
            }
        }
    }
}

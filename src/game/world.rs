//! Game World
//!
//! The world owns every sprite in a generational arena and keeps three
//! non-owning groups over it:
//! - `all`: every live sprite, in draw order
//! - `meteors`: live meteors
//! - `lasers`: live lasers
//!
//! A sprite is freed only when it has left every group it joined, so removal
//! always goes through `despawn`, which does both.

use macroquad::math::Vec2;

use super::arena::Arena;
use super::components::{Explosion, FrameContext, Kind, Laser, Lifecycle, Meteor, Player, Sprite};
use super::entity::Entity;
use super::event::Events;
use super::group::Group;
use super::input::InputSnapshot;
use super::rect::{Anchor, FRect};

/// Names of the sprite collections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupId {
    All,
    Meteors,
    Lasers,
}

pub struct World {
    sprites: Arena<Sprite>,
    all: Group,
    meteors: Group,
    lasers: Group,

    /// The ship, once spawned
    player: Option<Entity>,

    /// Sprites that expired during the update pass
    despawn_queue: Vec<Entity>,
}

impl World {
    pub fn new() -> Self {
        Self {
            sprites: Arena::new(),
            all: Group::new(),
            meteors: Group::new(),
            lasers: Group::new(),
            player: None,
            despawn_queue: Vec::new(),
        }
    }

    /// Members of one collection
    pub fn group(&self, id: GroupId) -> &Group {
        match id {
            GroupId::All => &self.all,
            GroupId::Meteors => &self.meteors,
            GroupId::Lasers => &self.lasers,
        }
    }

    fn group_mut(&mut self, id: GroupId) -> &mut Group {
        match id {
            GroupId::All => &mut self.all,
            GroupId::Meteors => &mut self.meteors,
            GroupId::Lasers => &mut self.lasers,
        }
    }

    /// Sprite behind a live handle
    pub fn get(&self, entity: Entity) -> Option<&Sprite> {
        self.sprites.get(entity)
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.sprites.contains(entity)
    }

    /// The ship's handle, cleared when it is despawned
    pub fn player(&self) -> Option<Entity> {
        self.player
    }

    // =========================================================================
    // Spawning
    // =========================================================================

    /// Store a sprite and add it to `all` plus any extra groups
    pub fn spawn(&mut self, sprite: Sprite, extra: &[GroupId]) -> Entity {
        let entity = self.sprites.insert(sprite);
        self.all.add(entity);
        for &id in extra {
            self.group_mut(id).add(entity);
        }
        entity
    }

    /// Star centred at `center`, background only
    pub fn spawn_star(&mut self, center: Vec2, size: Vec2) -> Entity {
        let rect = FRect::anchored(size, Anchor::Center, center);
        self.spawn(Sprite::new(rect, Kind::Star), &[])
    }

    /// Ship centred at `center`; remembered as the player
    pub fn spawn_player(&mut self, center: Vec2, size: Vec2, player: Player) -> Entity {
        let rect = FRect::anchored(size, Anchor::Center, center);
        let entity = self.spawn(Sprite::new(rect, Kind::Player(player)), &[]);
        self.player = Some(entity);
        entity
    }

    /// Laser with its mid-bottom at `origin`
    pub fn spawn_laser(&mut self, origin: Vec2, size: Vec2, laser: Laser) -> Entity {
        let rect = FRect::anchored(size, Anchor::MidBottom, origin);
        self.spawn(Sprite::new(rect, Kind::Laser(laser)), &[GroupId::Lasers])
    }

    /// Meteor with its bottom-left corner at `origin`
    pub fn spawn_meteor(&mut self, origin: Vec2, meteor: Meteor) -> Entity {
        let rect = FRect::anchored(meteor.base_size(), Anchor::BottomLeft, origin);
        self.spawn(Sprite::new(rect, Kind::Meteor(meteor)), &[GroupId::Meteors])
    }

    /// Explosion centred at `center`
    pub fn spawn_explosion(&mut self, center: Vec2, size: Vec2, explosion: Explosion) -> Entity {
        let rect = FRect::anchored(size, Anchor::Center, center);
        self.spawn(Sprite::new(rect, Kind::Explosion(explosion)), &[])
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Remove a sprite from every group and free it.
    /// Returns the sprite, or `None` if the handle was already dead.
    pub fn despawn(&mut self, entity: Entity) -> Option<Sprite> {
        let sprite = self.sprites.remove(entity)?;
        self.all.remove(entity);
        self.meteors.remove(entity);
        self.lasers.remove(entity);
        if self.player == Some(entity) {
            self.player = None;
        }
        Some(sprite)
    }

    /// Queue a sprite for removal after the current pass
    pub fn kill(&mut self, entity: Entity) {
        if self.is_alive(entity) && !self.despawn_queue.contains(&entity) {
            self.despawn_queue.push(entity);
        }
    }

    /// Despawn everything queued by `kill`
    pub fn flush_despawns(&mut self) {
        let queue = std::mem::take(&mut self.despawn_queue);
        for entity in queue {
            self.despawn(entity);
        }
    }

    // =========================================================================
    // Update
    // =========================================================================

    /// Update every sprite in `all` once, then free the ones that expired.
    /// Sprites spawned during the pass are not updated until next frame.
    pub fn update(&mut self, input: &InputSnapshot, ctx: &FrameContext, events: &mut Events) {
        for entity in self.all.snapshot() {
            let Some(sprite) = self.sprites.get_mut(entity) else { continue };
            if sprite.update(input, ctx, events) == Lifecycle::Expired {
                self.kill(entity);
            }
        }
        self.flush_despawns();
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl World {
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut Sprite> {
        self.sprites.get_mut(entity)
    }

    /// Number of live sprites
    pub fn sprite_count(&self) -> usize {
        self.sprites.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::vec2;

    const SCREEN: Vec2 = Vec2::new(1280.0, 720.0);

    fn ctx(dt: f32) -> FrameContext {
        FrameContext { dt, now_ms: 0, screen: SCREEN }
    }

    #[test]
    fn test_group_membership_on_spawn() {
        let mut world = World::new();
        let star = world.spawn_star(vec2(10.0, 10.0), vec2(4.0, 4.0));
        let laser = world.spawn_laser(vec2(100.0, 100.0), vec2(10.0, 40.0), Laser::new(300.0));
        let meteor = world.spawn_meteor(
            vec2(200.0, 0.0),
            Meteor::new(400.0, vec2(0.0, 1.0), 45.0, vec2(60.0, 60.0)),
        );

        assert_eq!(world.group(GroupId::All).len(), 3);
        assert!(world.group(GroupId::Lasers).contains(laser));
        assert!(world.group(GroupId::Meteors).contains(meteor));
        assert!(!world.group(GroupId::Meteors).contains(star));
        assert!(!world.group(GroupId::Lasers).contains(meteor));
    }

    #[test]
    fn test_despawn_leaves_all_groups() {
        let mut world = World::new();
        let laser = world.spawn_laser(vec2(100.0, 100.0), vec2(10.0, 40.0), Laser::new(300.0));

        assert!(world.despawn(laser).is_some());
        assert!(world.despawn(laser).is_none());
        assert!(!world.is_alive(laser));
        assert!(world.group(GroupId::All).is_empty());
        assert!(world.group(GroupId::Lasers).is_empty());
        assert_eq!(world.sprite_count(), 0);
    }

    #[test]
    fn test_spawn_anchors() {
        let mut world = World::new();
        let laser = world.spawn_laser(vec2(100.0, 100.0), vec2(10.0, 40.0), Laser::new(300.0));
        let rect = world.get(laser).map(|s| s.rect).unwrap_or_default();
        assert_eq!(rect.midbottom(), vec2(100.0, 100.0));

        let meteor = world.spawn_meteor(
            vec2(200.0, 0.0),
            Meteor::new(400.0, vec2(0.0, 1.0), 45.0, vec2(60.0, 60.0)),
        );
        let rect = world.get(meteor).map(|s| s.rect).unwrap_or_default();
        assert_eq!(rect.bottomleft(), vec2(200.0, 0.0));
    }

    #[test]
    fn test_update_frees_expired_laser() {
        let mut world = World::new();
        let mut events = Events::new();
        let laser = world.spawn_laser(vec2(100.0, 30.0), vec2(10.0, 20.0), Laser::new(300.0));

        world.update(&InputSnapshot::default(), &ctx(0.05), &mut events);
        assert!(world.is_alive(laser), "bottom edge at 15");

        world.update(&InputSnapshot::default(), &ctx(0.1), &mut events);
        assert!(!world.is_alive(laser));
        assert!(world.group(GroupId::Lasers).is_empty());
    }

    #[test]
    fn test_player_handle_cleared_on_despawn() {
        let mut world = World::new();
        let player = world.spawn_player(vec2(640.0, 360.0), vec2(100.0, 80.0), Player::new(300.0, 400));
        assert_eq!(world.player(), Some(player));
        world.despawn(player);
        assert_eq!(world.player(), None);
    }

    #[test]
    fn test_draw_order_keeps_background_first() {
        let mut world = World::new();
        let star = world.spawn_star(vec2(10.0, 10.0), vec2(4.0, 4.0));
        let player = world.spawn_player(vec2(640.0, 360.0), vec2(100.0, 80.0), Player::new(300.0, 400));
        let a = world.spawn_laser(vec2(100.0, 100.0), vec2(10.0, 40.0), Laser::new(300.0));
        let b = world.spawn_laser(vec2(200.0, 100.0), vec2(10.0, 40.0), Laser::new(300.0));

        world.despawn(a);
        assert_eq!(world.group(GroupId::All).snapshot(), vec![star, player, b]);
    }
}

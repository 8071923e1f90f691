//! Collision System
//!
//! Runs once per frame after every sprite has moved:
//! 1. Player vs meteors, pixel-perfect. Any hit ends the game.
//! 2. Lasers vs meteors, bounding boxes. Lasers are taken in group order
//!    and each one is tested against the meteors still alive, so a meteor
//!    can only be claimed once. A laser that hits is removed together with
//!    every meteor it touches. A single explosion is reported for the
//!    frame, at the mid-top of the first laser that hit.

use macroquad::math::Vec2;

use super::catalog::SpriteCatalog;
use super::components::Kind;
use super::entity::Entity;
use super::mask::Mask;
use super::rect::FRect;
use super::world::{GroupId, World};

/// What the resolver did this frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    /// The ship touched a meteor
    pub player_hit: bool,
    /// Meteors removed this frame (by the ship or by lasers)
    pub meteors_destroyed: usize,
    /// Lasers removed this frame
    pub lasers_spent: usize,
    /// Where to spawn this frame's explosion, if any laser hit
    pub explosion_at: Option<Vec2>,
}

/// Pixel test between two sprites' masks placed at their rects.
/// The offset is the truncated difference of the top-left corners.
pub fn masks_collide(a_rect: &FRect, a_mask: &Mask, b_rect: &FRect, b_mask: &Mask) -> bool {
    let offset = ((b_rect.x - a_rect.x) as i32, (b_rect.y - a_rect.y) as i32);
    a_mask.overlaps(b_mask, offset)
}

/// Meteors whose opaque pixels touch the ship's opaque pixels
pub fn player_hits(world: &World, catalog: &SpriteCatalog) -> Vec<Entity> {
    let Some(player_rect) = world.player().and_then(|p| world.get(p)).map(|s| s.rect) else {
        return Vec::new();
    };

    world
        .group(GroupId::Meteors)
        .iter()
        .filter(|&meteor| {
            let Some(sprite) = world.get(meteor) else { return false };
            let Kind::Meteor(state) = &sprite.kind else { return false };
            // Cheap box reject before rotating the mask
            if !player_rect.collides(&sprite.rect) {
                return false;
            }
            let rotated = catalog.meteor_mask.rotated(state.rotation());
            masks_collide(&player_rect, &catalog.player_mask, &sprite.rect, &rotated)
        })
        .collect()
}

/// Live meteors whose boxes overlap `laser_rect`
pub fn meteors_hit_by(world: &World, laser_rect: &FRect) -> Vec<Entity> {
    world
        .group(GroupId::Meteors)
        .iter()
        .filter(|&meteor| world.get(meteor).is_some_and(|s| laser_rect.collides(&s.rect)))
        .collect()
}

/// Apply both collision passes to the world.
///
/// When the ship is hit, the matched meteors are removed and the laser pass
/// is skipped: the game is over.
pub fn resolve(world: &mut World, catalog: &SpriteCatalog) -> CollisionReport {
    let mut report = CollisionReport::default();

    let crashed = player_hits(world, catalog);
    if !crashed.is_empty() {
        for meteor in crashed {
            if world.despawn(meteor).is_some() {
                report.meteors_destroyed += 1;
            }
        }
        report.player_hit = true;
        return report;
    }

    for laser in world.group(GroupId::Lasers).snapshot() {
        let Some(laser_rect) = world.get(laser).map(|s| s.rect) else { continue };
        let hits = meteors_hit_by(world, &laser_rect);
        if hits.is_empty() {
            continue;
        }

        if report.explosion_at.is_none() {
            report.explosion_at = Some(laser_rect.midtop());
        }
        for meteor in hits {
            if world.despawn(meteor).is_some() {
                report.meteors_destroyed += 1;
            }
        }
        if world.despawn(laser).is_some() {
            report.lasers_spent += 1;
        }
    }
    report
}

//! Sprite catalog
//!
//! Image sizes and collision masks, extracted from the loaded images. The
//! simulation only needs these numbers, never the GPU textures, so tests
//! build a catalog by hand.

use macroquad::math::Vec2;

use super::mask::Mask;
#[cfg(test)]
use macroquad::math::vec2;

/// Base sizes and collision masks of every sprite image
#[derive(Debug, Clone)]
pub struct SpriteCatalog {
    pub star: Vec2,
    pub player: Vec2,
    pub laser: Vec2,
    pub meteor: Vec2,
    /// Size of the first explosion frame
    pub explosion: Vec2,
    pub explosion_frames: usize,
    /// Opacity mask of the ship image
    pub player_mask: Mask,
    /// Opacity mask of the unrotated meteor image
    pub meteor_mask: Mask,
}

#[cfg(test)]
impl SpriteCatalog {
    /// Catalog where every sprite is a fully opaque rectangle of the
    /// given size
    pub fn solid(
        star: (usize, usize),
        player: (usize, usize),
        laser: (usize, usize),
        meteor: (usize, usize),
        explosion: (usize, usize),
        explosion_frames: usize,
    ) -> Self {
        let size = |(w, h): (usize, usize)| vec2(w as f32, h as f32);
        Self {
            star: size(star),
            player: size(player),
            laser: size(laser),
            meteor: size(meteor),
            explosion: size(explosion),
            explosion_frames,
            player_mask: Mask::filled(player.0, player.1),
            meteor_mask: Mask::filled(meteor.0, meteor.1),
        }
    }
}

#[cfg(test)]
pub(crate) fn test_catalog() -> SpriteCatalog {
    SpriteCatalog::solid((8, 8), (100, 80), (10, 40), (60, 60), (50, 50), 21)
}

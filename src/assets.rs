//! Asset loading
//!
//! Everything is loaded once at startup from fixed relative paths. Any
//! missing or broken file is a fatal `AssetError`.
//!
//! Images are decoded with the `image` crate so that collision masks and
//! sprite sizes come from the same pixels that get uploaded as textures.

use std::path::Path;

use image::RgbaImage;
use macroquad::math::{vec2, Vec2};
use macroquad::prelude::{load_ttf_font, FilterMode, Font, Texture2D};

use crate::audio::SoundBank;
use crate::config::{AssetPaths, GameConfig, EXPLOSION_FRAME_COUNT};
use crate::error::AssetError;
use crate::game::{Mask, SpriteCatalog};

/// Decode an image file into RGBA8
pub fn load_rgba(path: &Path) -> Result<RgbaImage, AssetError> {
    let img = image::open(path)
        .map_err(|source| AssetError::Image { path: path.to_path_buf(), source })?
        .to_rgba8();

    let (width, height) = img.dimensions();
    // Textures are addressed with u16 sizes
    if width == 0 || height == 0 || width > u16::MAX as u32 || height > u16::MAX as u32 {
        return Err(AssetError::ImageSize { path: path.to_path_buf(), width, height });
    }
    Ok(img)
}

fn image_size(img: &RgbaImage) -> Vec2 {
    vec2(img.width() as f32, img.height() as f32)
}

/// Decoded sprite images, before GPU upload
pub struct SpriteImages {
    pub star: RgbaImage,
    pub player: RgbaImage,
    pub laser: RgbaImage,
    pub meteor: RgbaImage,
    pub explosion: Vec<RgbaImage>,
}

impl SpriteImages {
    /// Decode every sprite image. Any missing or unreadable file is fatal.
    pub fn load(paths: &AssetPaths) -> Result<Self, AssetError> {
        let explosion = (0..EXPLOSION_FRAME_COUNT)
            .map(|i| load_rgba(&paths.explosion_frame(i)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            star: load_rgba(&paths.star())?,
            player: load_rgba(&paths.player())?,
            laser: load_rgba(&paths.laser())?,
            meteor: load_rgba(&paths.meteor())?,
            explosion,
        })
    }

    /// Sizes and masks for the simulation
    pub fn catalog(&self) -> SpriteCatalog {
        SpriteCatalog {
            star: image_size(&self.star),
            player: image_size(&self.player),
            laser: image_size(&self.laser),
            meteor: image_size(&self.meteor),
            explosion: self.explosion.first().map(image_size).unwrap_or(Vec2::ZERO),
            explosion_frames: self.explosion.len(),
            player_mask: Mask::from_image(&self.player),
            meteor_mask: Mask::from_image(&self.meteor),
        }
    }

    /// Upload every image as a texture. Needs a live GL context.
    pub fn upload(&self) -> SpriteTextures {
        SpriteTextures {
            star: texture_from(&self.star),
            player: texture_from(&self.player),
            laser: texture_from(&self.laser),
            meteor: texture_from(&self.meteor),
            explosion: self.explosion.iter().map(texture_from).collect(),
        }
    }
}

fn texture_from(img: &RgbaImage) -> Texture2D {
    let texture = Texture2D::from_rgba8(img.width() as u16, img.height() as u16, img.as_raw());
    texture.set_filter(FilterMode::Linear);
    texture
}

/// GPU textures for every sprite kind
pub struct SpriteTextures {
    pub star: Texture2D,
    pub player: Texture2D,
    pub laser: Texture2D,
    pub meteor: Texture2D,
    pub explosion: Vec<Texture2D>,
}

/// Everything loaded at startup
pub struct Assets {
    pub textures: SpriteTextures,
    pub font: Font,
    pub sounds: SoundBank,
    pub catalog: SpriteCatalog,
}

impl Assets {
    pub async fn load(paths: &AssetPaths, config: &GameConfig) -> Result<Self, AssetError> {
        let images = SpriteImages::load(paths)?;
        log::debug!("decoded {} sprite images", 4 + images.explosion.len());

        let catalog = images.catalog();
        let textures = images.upload();

        let font_path = paths.font();
        let font = load_ttf_font(&font_path.to_string_lossy())
            .await
            .map_err(|e| AssetError::Font { path: font_path.clone(), reason: e.to_string() })?;
        log::debug!("loaded font {}", font_path.display());

        let sounds = SoundBank::load(paths, config).await?;

        Ok(Self { textures, font, sounds, catalog })
    }
}

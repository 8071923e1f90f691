//! Game Configuration
//!
//! Every tunable number lives here so the simulation, renderer and asset
//! loader agree on the same values. Nothing is read from disk or the
//! environment: the game always runs with `GameConfig::default()`.

use std::path::PathBuf;
use macroquad::prelude::{Color, Conf};

/// Window title shown by the OS
pub const WINDOW_TITLE: &str = "Space shooter";

/// Fixed canvas size in pixels
pub const SCREEN_WIDTH: f32 = 1280.0;
pub const SCREEN_HEIGHT: f32 = 720.0;

/// Directory holding sprites, explosion frames and the font
pub const IMAGE_DIR: &str = "images";
/// Directory holding sound effects and music
pub const AUDIO_DIR: &str = "audio";

/// Number of frames in the explosion animation (`images/explosion/0.png` ..)
pub const EXPLOSION_FRAME_COUNT: usize = 21;

/// All gameplay and presentation constants.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Canvas width in pixels
    pub screen_width: f32,
    /// Canvas height in pixels
    pub screen_height: f32,
    /// Background clear color (#3a2e3f)
    pub background: Color,

    /// Stars scattered over the background at startup
    pub star_count: usize,

    /// Player movement speed (pixels/second)
    pub player_speed: f32,
    /// Minimum time between two shots (milliseconds)
    pub shot_cooldown_ms: u64,

    /// Laser travel speed (pixels/second, upward)
    pub laser_speed: f32,

    /// Inclusive range for meteor speed (pixels/second)
    pub meteor_speed: (u32, u32),
    /// Half-width of the horizontal drift applied to the meteor direction
    pub meteor_drift: f32,
    /// Inclusive range for meteor spin (degrees/second)
    pub meteor_spin: (u32, u32),
    /// Meteor spawn period (milliseconds)
    pub spawn_interval_ms: u64,

    /// Explosion playback rate (frames/second)
    pub explosion_fps: f32,

    /// Laser shot volume
    pub laser_volume: f32,
    /// Explosion volume
    pub explosion_volume: f32,
    /// Background music volume
    pub music_volume: f32,

    /// Score font size
    pub font_size: u16,
    /// Score text and outline color
    pub score_color: Color,
    /// Distance from the bottom of the screen to the score text's bottom edge
    pub score_margin: f32,
    /// Score box growth around the text (width, height)
    pub score_padding: (f32, f32),
    /// Vertical shift applied to the score box after padding
    pub score_box_shift: f32,
    /// Outline thickness of the score box
    pub score_outline: f32,
    /// Corner radius of the score box
    pub score_radius: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            background: Color::from_rgba(0x3a, 0x2e, 0x3f, 255),

            star_count: 20,

            player_speed: 300.0,
            shot_cooldown_ms: 400,

            laser_speed: 300.0,

            meteor_speed: (400, 500),
            meteor_drift: 0.5,
            meteor_spin: (40, 50),
            spawn_interval_ms: 500,

            explosion_fps: 10.0,

            laser_volume: 0.5,
            explosion_volume: 0.5,
            music_volume: 0.4,

            font_size: 40,
            score_color: Color::from_rgba(240, 240, 240, 255),
            score_margin: 50.0,
            score_padding: (20.0, 16.0),
            score_box_shift: -8.0,
            score_outline: 5.0,
            score_radius: 10.0,
        }
    }
}

/// Fixed relative locations of every asset the game loads at startup.
#[derive(Debug, Clone)]
pub struct AssetPaths {
    pub images: PathBuf,
    pub audio: PathBuf,
}

impl AssetPaths {
    /// Asset layout rooted at the given image and audio folders
    pub fn new(images: impl Into<PathBuf>, audio: impl Into<PathBuf>) -> Self {
        Self {
            images: images.into(),
            audio: audio.into(),
        }
    }

    pub fn player(&self) -> PathBuf {
        self.images.join("player.png")
    }

    pub fn star(&self) -> PathBuf {
        self.images.join("star.png")
    }

    pub fn laser(&self) -> PathBuf {
        self.images.join("laser.png")
    }

    pub fn meteor(&self) -> PathBuf {
        self.images.join("meteor.png")
    }

    /// Path of explosion frame `index` (0-based)
    pub fn explosion_frame(&self, index: usize) -> PathBuf {
        self.images.join("explosion").join(format!("{}.png", index))
    }

    /// The score font ships alongside the images
    pub fn font(&self) -> PathBuf {
        self.images.join("Oxanium-Bold.ttf")
    }

    pub fn laser_sound(&self) -> PathBuf {
        self.audio.join("laser.wav")
    }

    pub fn explosion_sound(&self) -> PathBuf {
        self.audio.join("explosion.wav")
    }

    pub fn music(&self) -> PathBuf {
        self.audio.join("game_music.wav")
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self::new(IMAGE_DIR, AUDIO_DIR)
    }
}

/// Window configuration for macroquad (fixed size, not resizable)
pub fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_string(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        high_dpi: false,
        #[cfg(not(target_arch = "wasm32"))]
        fullscreen: false,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_canvas() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.screen_width, 1280.0);
        assert_eq!(cfg.screen_height, 720.0);
        assert_eq!(cfg.shot_cooldown_ms, 400);
        assert_eq!(cfg.spawn_interval_ms, 500);
    }

    #[test]
    fn test_explosion_frame_paths() {
        let paths = AssetPaths::default();
        assert_eq!(paths.explosion_frame(0), PathBuf::from("images/explosion/0.png"));
        assert_eq!(paths.explosion_frame(20), PathBuf::from("images/explosion/20.png"));
        assert_eq!(paths.music(), PathBuf::from("audio/game_music.wav"));
    }
}

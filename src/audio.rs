//! Sound playback
//!
//! Two one-shot effects and one looping music track, mixed by macroquad.

use std::path::Path;

use macroquad::audio::{load_sound, play_sound, stop_sound, PlaySoundParams, Sound};

use crate::config::{AssetPaths, GameConfig};
use crate::error::AssetError;
use crate::game::SoundCue;

pub struct SoundBank {
    laser: Sound,
    explosion: Sound,
    music: Sound,
    laser_volume: f32,
    explosion_volume: f32,
    music_volume: f32,
}

async fn load_clip(path: &Path) -> Result<Sound, AssetError> {
    load_sound(&path.to_string_lossy())
        .await
        .map_err(|e| AssetError::Sound { path: path.to_path_buf(), reason: e.to_string() })
}

impl SoundBank {
    pub async fn load(paths: &AssetPaths, config: &GameConfig) -> Result<Self, AssetError> {
        let bank = Self {
            laser: load_clip(&paths.laser_sound()).await?,
            explosion: load_clip(&paths.explosion_sound()).await?,
            music: load_clip(&paths.music()).await?,
            laser_volume: config.laser_volume,
            explosion_volume: config.explosion_volume,
            music_volume: config.music_volume,
        };
        log::debug!("loaded 3 sound clips from {}", paths.audio.display());
        Ok(bank)
    }

    /// Fire-and-forget effect
    pub fn play(&self, cue: SoundCue) {
        let (sound, volume) = match cue {
            SoundCue::Laser => (&self.laser, self.laser_volume),
            SoundCue::Explosion => (&self.explosion, self.explosion_volume),
        };
        play_sound(sound, PlaySoundParams { looped: false, volume });
    }

    /// Start the background track, looping forever
    pub fn start_music(&self) {
        play_sound(&self.music, PlaySoundParams { looped: true, volume: self.music_volume });
    }

    /// Silence the music and any effect still playing
    pub fn stop_all(&self) {
        stop_sound(&self.music);
        stop_sound(&self.laser);
        stop_sound(&self.explosion);
    }
}

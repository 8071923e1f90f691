//! Startup errors
//!
//! Only asset loading can fail. Any failure is fatal: `main` logs it and
//! exits before the first frame.

use std::path::PathBuf;
use thiserror::Error;

/// A required asset could not be loaded
#[derive(Error, Debug)]
pub enum AssetError {
    /// Image file missing or not decodable
    #[error("failed to load image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Image decoded but is unusable as a sprite
    #[error("image {path} has unsupported size {width}x{height}")]
    ImageSize { path: PathBuf, width: u32, height: u32 },

    /// Font file missing or not a valid TTF
    #[error("failed to load font {path}: {reason}")]
    Font { path: PathBuf, reason: String },

    /// Sound file missing or not decodable
    #[error("failed to load sound {path}: {reason}")]
    Sound { path: PathBuf, reason: String },
}

/// Top-level error surfaced by `main`
#[derive(Error, Debug)]
pub enum GameError {
    #[error("asset loading failed: {0}")]
    Asset(#[from] AssetError),
}

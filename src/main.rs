//! Space shooter
//!
//! Dodge and shoot falling meteors. Arrow keys move the ship, space fires.
//! Touching a meteor ends the game; the score is how long you lasted.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod assets;
mod audio;
mod config;
mod error;
mod game;

use ::rand::rngs::StdRng;
use ::rand::SeedableRng;
use macroquad::prelude::*;

use assets::Assets;
use config::{window_conf, AssetPaths, GameConfig};
use error::GameError;
use game::{draw_frame, Game, GameState, InputSnapshot, TerminationReason};

/// Milliseconds since the window opened
fn now_ms() -> u64 {
    (get_time() * 1000.0) as u64
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

async fn load_assets(config: &GameConfig) -> Result<Assets, GameError> {
    let paths = AssetPaths::default();
    let assets = Assets::load(&paths, config).await?;
    log::info!(
        "assets loaded from {} and {}",
        paths.images.display(),
        paths.audio.display()
    );
    Ok(assets)
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    init_logging();
    log::info!("space shooter v{}", VERSION);

    // The score counts from here, loading time included
    let started = now_ms();

    let config = GameConfig::default();
    let assets = match load_assets(&config).await {
        Ok(assets) => assets,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    // Closing the window becomes a quit event instead of an instant exit
    prevent_quit();
    assets.sounds.start_music();

    let mut game = Game::new(
        config,
        assets.catalog.clone(),
        StdRng::from_entropy(),
        started,
        now_ms(),
    );

    loop {
        let dt = get_frame_time();
        let now = now_ms();
        let input = InputSnapshot::poll();

        let state = game.frame(&input, dt, now);
        for cue in game.drain_sounds() {
            assets.sounds.play(cue);
        }

        if let GameState::Terminated(reason) = state {
            match reason {
                TerminationReason::Quit => log::info!("quit requested"),
                TerminationReason::PlayerDestroyed => log::info!("ship destroyed"),
            }
            log::info!("final score {} ({} meteors shot)", game.score(now), game.kills());
            break;
        }

        draw_frame(&game, &assets, now);
        next_frame().await;
    }

    assets.sounds.stop_all();
}

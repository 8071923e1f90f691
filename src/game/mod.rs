//! Game Module
//!
//! The space shooter simulation plus its renderer.
//!
//! Key pieces:
//! - World: arena of sprites with `all` / `meteors` / `lasers` groups
//! - Components: closed set of sprite kinds and their update rules
//! - Collision: mask test for the ship, box test for lasers
//! - Runtime: the `Game` context driven once per frame by `main`
//!
//! Everything except `renderer` and `InputSnapshot::poll` runs without a
//! window.

pub mod arena;
pub mod catalog;
pub mod collision;
pub mod components;
pub mod entity;
pub mod event;
pub mod group;
pub mod input;
pub mod mask;
pub mod rect;
pub mod renderer;
pub mod runtime;
pub mod timer;
pub mod world;

// Re-export main types
pub use catalog::SpriteCatalog;
pub use entity::Entity;
pub use event::SoundCue;
pub use input::InputSnapshot;
pub use mask::Mask;
pub use renderer::draw_frame;
pub use runtime::{Game, GameState, TerminationReason};
pub use world::World;

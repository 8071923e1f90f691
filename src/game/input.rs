//! Input snapshot
//!
//! The keyboard is sampled once per frame into a plain struct so the
//! simulation can be driven by tests without a window.

use macroquad::prelude::*;

/// Keyboard state relevant to one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Fire key went down this frame (edge, not level)
    pub shoot: bool,
    /// The window was asked to close
    pub quit: bool,
}

impl InputSnapshot {
    /// Sample arrow keys, space and the window close request.
    /// Requires `prevent_quit()` to have been called at startup.
    pub fn poll() -> Self {
        Self {
            left: is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::Right),
            up: is_key_down(KeyCode::Up),
            down: is_key_down(KeyCode::Down),
            shoot: is_key_pressed(KeyCode::Space),
            quit: is_quit_requested(),
        }
    }

    /// Unnormalized movement axes: right - left, down - up
    pub fn axes(&self) -> Vec2 {
        vec2(
            self.right as i32 as f32 - self.left as i32 as f32,
            self.down as i32 as f32 - self.up as i32 as f32,
        )
    }
}

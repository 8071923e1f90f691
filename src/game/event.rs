//! Frame Events
//!
//! Sprite updates never reach into the world or the audio device directly.
//! They push events here; the runtime drains shots into new lasers and the
//! main loop drains sound cues into the mixer.

use macroquad::math::Vec2;

/// A queue for events of a single type, drained once per frame.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Queue an event for this frame's consumer
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Take every queued event in send order, leaving the queue empty
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The player pulled the trigger; a laser should appear with its
/// mid-bottom at `origin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotEvent {
    pub origin: Vec2,
}

/// One-shot sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Laser,
    Explosion,
}

/// All per-frame event queues
#[derive(Debug, Default)]
pub struct Events {
    pub shots: EventQueue<ShotEvent>,
    pub sounds: EventQueue<SoundCue>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }
}

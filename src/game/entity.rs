//! Entity handles
//!
//! An entity is a slot index plus a generation. When a meteor dies its slot
//! is recycled for the next spawn with a bumped generation, so a stale
//! handle held by a collection can never resolve to the newcomer.

use std::fmt;

/// Handle to a sprite stored in the world arena.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity {
    index: u32,
    generation: u32,
}

impl Entity {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index in the arena
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Generation of the slot when this handle was issued
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({}v{})", self.index, self.generation)
    }
}

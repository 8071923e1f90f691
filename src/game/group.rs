//! Sprite Groups
//!
//! A group is a non-owning list of entity handles used for batch
//! update, draw and collision. Membership order is insertion order until a
//! removal swaps the last member into the vacated slot.

use super::entity::Entity;

/// Ordered set of entity handles
#[derive(Debug, Clone, Default)]
pub struct Group {
    members: Vec<Entity>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member. Adding an existing member is a no-op.
    pub fn add(&mut self, entity: Entity) {
        if !self.contains(entity) {
            self.members.push(entity);
        }
    }

    /// Remove a member with swap-remove. Returns false if absent.
    pub fn remove(&mut self, entity: Entity) -> bool {
        match self.members.iter().position(|&e| e == entity) {
            Some(pos) => {
                self.members.swap_remove(pos);
                true
            }
            None => false,
        }
    }

    /// Is `entity` a member?
    pub fn contains(&self, entity: Entity) -> bool {
        self.members.contains(&entity)
    }

    /// Members in group order
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.members.iter().copied()
    }

    /// Copy of the current members, safe to iterate while the group changes
    pub fn snapshot(&self) -> Vec<Entity> {
        self.members.clone()
    }
}

#[cfg(test)]
impl Group {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

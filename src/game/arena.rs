//! Sprite Arena
//!
//! Owning storage for every live sprite. Slots are reused LIFO; each reuse
//! bumps the slot generation so old handles stop resolving.

use super::entity::Entity;

struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Generational arena. The only owner of sprite data; collections hold
/// plain `Entity` handles into it.
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Store a value and return its handle
    pub fn insert(&mut self, value: T) -> Entity {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.value = Some(value);
            Entity::new(index, slot.generation)
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot { generation: 0, value: Some(value) });
            Entity::new(index, 0)
        }
    }

    /// Take the value out and retire the handle.
    /// Returns `None` if the handle is stale.
    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        let slot = self.slots.get_mut(entity.index() as usize)?;
        if slot.generation != entity.generation() || slot.value.is_none() {
            return None;
        }
        let value = slot.value.take();
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(entity.index());
        value
    }

    /// Value behind a live handle
    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.slots
            .get(entity.index() as usize)
            .filter(|slot| slot.generation == entity.generation())
            .and_then(|slot| slot.value.as_ref())
    }

    /// Mutable value behind a live handle
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        self.slots
            .get_mut(entity.index() as usize)
            .filter(|slot| slot.generation == entity.generation())
            .and_then(|slot| slot.value.as_mut())
    }

    /// Does `entity` still refer to a stored value?
    pub fn contains(&self, entity: Entity) -> bool {
        self.get(entity).is_some()
    }
}

#[cfg(test)]
impl<T> Arena<T> {
    /// Number of live values
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.value.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut arena = Arena::new();
        let a = arena.insert("a");
        let b = arena.insert("b");
        assert_eq!(arena.get(a), Some(&"a"));
        assert_eq!(arena.get(b), Some(&"b"));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_remove_retires_handle() {
        let mut arena = Arena::new();
        let a = arena.insert(1);
        assert_eq!(arena.remove(a), Some(1));
        assert_eq!(arena.remove(a), None);
        assert!(!arena.contains(a));
        assert!(arena.is_empty());
    }

    #[test]
    fn test_reused_slot_rejects_stale_handle() {
        let mut arena = Arena::new();
        let old = arena.insert(10);
        arena.remove(old);

        let new = arena.insert(20);
        assert_eq!(new.index(), old.index());
        assert_ne!(new.generation(), old.generation());
        assert_eq!(arena.get(old), None);
        assert_eq!(arena.get(new), Some(&20));
    }

    #[test]
    fn test_get_mut() {
        let mut arena = Arena::new();
        let a = arena.insert(5);
        if let Some(v) = arena.get_mut(a) {
            *v += 1;
        }
        assert_eq!(arena.get(a), Some(&6));
    }
}

//! Generational entity IDs and the allocator behind them.
//!
//! An [`Entity`] is an opaque handle: a slot index plus a generation counter.
//! Destroying an entity bumps its slot's generation, so any handle held after
//! destruction simply stops matching — lookups on a dead entity return `None`
//! instead of touching reused storage. This replaces raw-pointer membership
//! with ids that cannot dangle.
//!
//! Category and capability flags are fixed at creation and never change for
//! the lifetime of the entity.

/// A handle to an entity: slot index + generation.
///
/// Cheap to copy, safe to hold across frames. Use
/// [`World::is_alive`](crate::world::World::is_alive) to check validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl Entity {
    /// The slot index. Only unique among currently-alive entities.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// The generation of the slot when this handle was created.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

/// Coarse role of an entity, fixed at creation. Each subsystem iterates the
/// categories it cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Character,
    Terrain,
    Projectile,
}

/// Cross-cutting capabilities, fixed at creation. These decide membership in
/// the animated and AI-controlled registry lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub animated: bool,
    pub ai_controlled: bool,
}

impl Capabilities {
    pub const NONE: Self = Self {
        animated: false,
        ai_controlled: false,
    };
}

/// Per-slot record of category and capabilities, used to unregister the
/// entity from the right lists on despawn.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EntityMeta {
    pub category: Category,
    pub caps: Capabilities,
}

/// Allocates and recycles entity slots.
///
/// Freed slots go on a free list and are reused with a bumped generation.
pub(crate) struct EntityAllocator {
    generations: Vec<u32>,
    alive: Vec<bool>,
    free: Vec<u32>,
}

impl EntityAllocator {
    pub fn new() -> Self {
        Self {
            generations: Vec::new(),
            alive: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Allocate a slot, reusing a freed one if available.
    pub fn allocate(&mut self) -> Entity {
        if let Some(index) = self.free.pop() {
            self.alive[index as usize] = true;
            Entity {
                index,
                generation: self.generations[index as usize],
            }
        } else {
            let index = self.generations.len() as u32;
            self.generations.push(0);
            self.alive.push(true);
            Entity {
                index,
                generation: 0,
            }
        }
    }

    /// Free a slot, bumping its generation so stale handles stop matching.
    /// Does nothing if the entity is already dead.
    pub fn deallocate(&mut self, entity: Entity) {
        if !self.is_alive(entity) {
            return;
        }
        self.alive[entity.index as usize] = false;
        self.generations[entity.index as usize] += 1;
        self.free.push(entity.index);
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        let i = entity.index as usize;
        i < self.generations.len() && self.alive[i] && self.generations[i] == entity.generation
    }

    pub fn alive_count(&self) -> usize {
        self.generations.len() - self.free.len()
    }

    pub fn total_slots(&self) -> usize {
        self.generations.len()
    }
}

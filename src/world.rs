//! # World — The Central Container
//!
//! The [`World`] owns every entity and its components, plus the registry that
//! groups entities for subsystem iteration. It's the single source of truth
//! for simulation state; the old-school alternative — one global singleton
//! per manager — is deliberately avoided so multiple independent worlds can
//! coexist (and tests stay hermetic).
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │ World                                                │
//! │                                                      │
//! │  EntityAllocator: generational id lifecycle          │
//! │                                                      │
//! │  components: Vec<ComponentSet>                       │
//! │    one slot struct per entity slot, O(1) access      │
//! │                                                      │
//! │  meta: Vec<Option<EntityMeta>>                       │
//! │    category + capabilities, for unregistration       │
//! │                                                      │
//! │  registry: membership lists per category/capability  │
//! │  player: Option<Entity>, camera_follow: bool         │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error philosophy
//!
//! A malformed entity never halts a frame. Reads return `Option`; the only
//! operations that log are the ones the caller plainly got wrong (detaching
//! a component that isn't there, attaching to a dead entity). Subsystems
//! skip entities that lack what they need.

use log::warn;

use crate::component::{Component, ComponentSet};
use crate::entity::{Capabilities, Category, Entity, EntityAllocator, EntityMeta};
use crate::registry::Registry;

/// The central container for all simulation state.
pub struct World {
    allocator: EntityAllocator,
    /// Component slots, parallel to the allocator's entity slots.
    components: Vec<ComponentSet>,
    /// Category/capability record per slot, `None` while the slot is free.
    meta: Vec<Option<EntityMeta>>,
    registry: Registry,
    /// The tracked player entity, if any. AI pursuit and camera follow both
    /// read this.
    player: Option<Entity>,
    /// When set, sprite collection offsets everything by the player position
    /// minus the viewport center.
    camera_follow: bool,
}

impl World {
    pub fn new() -> Self {
        Self {
            allocator: EntityAllocator::new(),
            components: Vec::new(),
            meta: Vec::new(),
            registry: Registry::new(),
            player: None,
            camera_follow: false,
        }
    }

    // ── Spawn / Despawn ──────────────────────────────────────────────

    /// Create an entity and register it in every applicable membership list
    /// in one step. Category and capabilities are fixed for its lifetime.
    pub fn spawn(&mut self, category: Category, caps: Capabilities) -> Entity {
        let entity = self.allocator.allocate();
        let i = entity.index() as usize;
        if i >= self.components.len() {
            self.components.resize_with(i + 1, ComponentSet::default);
            self.meta.resize(i + 1, None);
        }
        self.meta[i] = Some(EntityMeta { category, caps });
        self.registry.register(entity, category, caps);
        entity
    }

    /// Destroy an entity: release all its components, remove it from every
    /// membership list, and retire its id. Stale handles stop matching
    /// immediately. Clears the player reference if this was the player.
    ///
    /// Returns `true` if the entity was alive.
    pub fn despawn(&mut self, entity: Entity) -> bool {
        if !self.allocator.is_alive(entity) {
            return false;
        }
        let i = entity.index() as usize;
        if let Some(meta) = self.meta[i].take() {
            self.registry.unregister(entity, meta.category, meta.caps);
        }
        self.components[i].clear();
        if self.player == Some(entity) {
            self.player = None;
        }
        self.allocator.deallocate(entity);
        true
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.allocator.is_alive(entity)
    }

    /// Number of alive entities.
    pub fn entity_count(&self) -> usize {
        self.allocator.alive_count()
    }

    /// The category an entity was created with, or `None` if it's dead.
    pub fn category(&self, entity: Entity) -> Option<Category> {
        if !self.allocator.is_alive(entity) {
            return None;
        }
        self.meta[entity.index() as usize].map(|m| m.category)
    }

    // ── Component access ─────────────────────────────────────────────

    /// Install or replace a component slot. Warns and does nothing if the
    /// entity is dead.
    pub fn attach<T: Component>(&mut self, entity: Entity, component: T) {
        if !self.allocator.is_alive(entity) {
            warn!(
                "attach: entity {:?} is dead, dropping {}",
                entity,
                std::any::type_name::<T>()
            );
            return;
        }
        self.components[entity.index() as usize].attach(component);
    }

    /// Free and clear a component slot, returning the removed value.
    ///
    /// Detaching an empty slot is a warned no-op, never an error.
    pub fn detach<T: Component>(&mut self, entity: Entity) -> Option<T> {
        if !self.allocator.is_alive(entity) {
            warn!(
                "detach: entity {:?} is dead, no {} to remove",
                entity,
                std::any::type_name::<T>()
            );
            return None;
        }
        let taken = self.components[entity.index() as usize].detach::<T>();
        if taken.is_none() {
            warn!(
                "detach: entity {:?} has no {} component",
                entity,
                std::any::type_name::<T>()
            );
        }
        taken
    }

    /// Shared access to a component. `None` if the entity is dead or the
    /// slot is empty.
    pub fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
        if !self.allocator.is_alive(entity) {
            return None;
        }
        self.components[entity.index() as usize].get::<T>()
    }

    /// Mutable access to a component. `None` if the entity is dead or the
    /// slot is empty.
    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        if !self.allocator.is_alive(entity) {
            return None;
        }
        self.components[entity.index() as usize].get_mut::<T>()
    }

    /// Pure presence check.
    pub fn has<T: Component>(&self, entity: Entity) -> bool {
        self.allocator.is_alive(entity) && self.components[entity.index() as usize].has::<T>()
    }

    // ── Registry ─────────────────────────────────────────────────────

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Empty every membership list without destroying entities. The
    /// registry is an index, not an owner — after this, entities are alive
    /// but invisible to subsystems.
    pub fn clear_registry(&mut self) {
        self.registry.clear();
    }

    // ── Player / camera ──────────────────────────────────────────────

    /// The tracked player entity, if one is set and still alive.
    pub fn player(&self) -> Option<Entity> {
        self.player.filter(|&e| self.allocator.is_alive(e))
    }

    pub fn set_player(&mut self, entity: Option<Entity>) {
        if let Some(e) = entity {
            if !self.allocator.is_alive(e) {
                warn!("set_player: entity {e:?} is dead, clearing player");
                self.player = None;
                return;
            }
        }
        self.player = entity;
    }

    pub fn camera_follow(&self) -> bool {
        self.camera_follow
    }

    pub fn set_camera_follow(&mut self, follow: bool) {
        self.camera_follow = follow;
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

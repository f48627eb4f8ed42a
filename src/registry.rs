//! Category and capability membership lists.
//!
//! The registry is a pure index: unordered lists of entity ids grouped by
//! [`Category`] and by capability (animated, AI-controlled), so each
//! subsystem iterates only the entities it cares about. It never owns entity
//! lifetime — the [`World`](crate::world::World) registers entities on spawn
//! and unregisters them on despawn, and [`clear`](Registry::clear) empties
//! the lists without destroying anything.
//!
//! List order is not guaranteed: removal is swap-with-last-and-pop, and no
//! subsystem relies on ordering.

use crate::entity::{Capabilities, Category, Entity};

/// Membership lists for the three categories and two capabilities.
#[derive(Default)]
pub struct Registry {
    characters: Vec<Entity>,
    terrain: Vec<Entity>,
    projectiles: Vec<Entity>,
    animated: Vec<Entity>,
    ai_controlled: Vec<Entity>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Read access ──────────────────────────────────────────────────

    pub fn characters(&self) -> &[Entity] {
        &self.characters
    }

    pub fn terrain(&self) -> &[Entity] {
        &self.terrain
    }

    pub fn projectiles(&self) -> &[Entity] {
        &self.projectiles
    }

    pub fn animated(&self) -> &[Entity] {
        &self.animated
    }

    pub fn ai_controlled(&self) -> &[Entity] {
        &self.ai_controlled
    }

    /// The membership list for a category.
    pub fn category(&self, category: Category) -> &[Entity] {
        match category {
            Category::Character => &self.characters,
            Category::Terrain => &self.terrain,
            Category::Projectile => &self.projectiles,
        }
    }

    // ── Registration (driven by the World) ───────────────────────────

    /// Add an entity to its category list and any capability lists.
    pub(crate) fn register(&mut self, entity: Entity, category: Category, caps: Capabilities) {
        self.category_list(category).push(entity);
        if caps.animated {
            self.animated.push(entity);
        }
        if caps.ai_controlled {
            self.ai_controlled.push(entity);
        }
    }

    /// Remove an entity from every list it was registered in.
    pub(crate) fn unregister(&mut self, entity: Entity, category: Category, caps: Capabilities) {
        remove_swap_pop(self.category_list(category), entity);
        if caps.animated {
            remove_swap_pop(&mut self.animated, entity);
        }
        if caps.ai_controlled {
            remove_swap_pop(&mut self.ai_controlled, entity);
        }
    }

    /// Empty every list without destroying any entity. The entities stay
    /// alive and keep their components; they just stop being visited by the
    /// subsystems.
    pub fn clear(&mut self) {
        self.characters.clear();
        self.terrain.clear();
        self.projectiles.clear();
        self.animated.clear();
        self.ai_controlled.clear();
    }

    fn category_list(&mut self, category: Category) -> &mut Vec<Entity> {
        match category {
            Category::Character => &mut self.characters,
            Category::Terrain => &mut self.terrain,
            Category::Projectile => &mut self.projectiles,
        }
    }
}

/// O(n) scan, then O(1) swap-with-last-and-pop. Order is not preserved.
fn remove_swap_pop(list: &mut Vec<Entity>, entity: Entity) {
    if let Some(i) = list.iter().position(|&e| e == entity) {
        list.swap_remove(i);
    }
}

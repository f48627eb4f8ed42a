//! Sprite collection.
//!
//! The engine doesn't own a GPU surface; instead it flattens the world into a
//! list of [`SpriteInstance`]s each frame for whatever renderer sits on top.
//! An entity is drawable when it carries a [`TextureRef`]; a drawable entity
//! missing [`Position`] or [`TextureBox`] is a content bug and is skipped
//! with a warning rather than aborting the frame.
//!
//! When camera follow is enabled and a player with a position exists, every
//! sprite is shifted so the player sits at the viewport center. Otherwise
//! world coordinates pass through unchanged.

use glam::Vec2;

use crate::assets::{TextureHandle, TextureStore};
use crate::component::{Position, TextureBox, TextureRef};
use crate::entity::Category;
use crate::world::World;

/// One drawable quad, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteInstance {
    /// Quad center after the camera offset.
    pub position: Vec2,
    pub size: Vec2,
    pub texture: TextureHandle,
}

/// Flatten every drawable entity into sprite instances for one frame.
pub fn collect_sprites(
    world: &World,
    textures: &TextureStore,
    viewport: Vec2,
) -> Vec<SpriteInstance> {
    let camera = camera_offset(world, viewport);

    let mut sprites = Vec::new();
    for category in [Category::Terrain, Category::Character, Category::Projectile] {
        for &entity in world.registry().category(category) {
            let Some(tex_ref) = world.get::<TextureRef>(entity) else {
                continue;
            };

            let (Some(pos), Some(quad)) = (
                world.get::<Position>(entity),
                world.get::<TextureBox>(entity),
            ) else {
                log::warn!(
                    "drawable entity {}v{} is missing Position or TextureBox",
                    entity.index(),
                    entity.generation()
                );
                continue;
            };

            let texture = match tex_ref.current {
                Some(handle) => handle,
                None => {
                    log::warn!(
                        "entity {}v{} has no texture selected, using error texture",
                        entity.index(),
                        entity.generation()
                    );
                    textures.error_handle()
                }
            };

            sprites.push(SpriteInstance {
                position: pos.0 - camera,
                size: quad.0,
                texture,
            });
        }
    }
    sprites
}

/// World-space offset of the viewport's bottom-left corner.
fn camera_offset(world: &World, viewport: Vec2) -> Vec2 {
    if !world.camera_follow() {
        return Vec2::ZERO;
    }
    let Some(player) = world.player() else {
        return Vec2::ZERO;
    };
    match world.get::<Position>(player) {
        Some(pos) => pos.0 - viewport * 0.5,
        None => Vec2::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Capabilities, Category, Entity};

    fn spawn_sprite(world: &mut World, category: Category, pos: Vec2, tex: u32) -> Entity {
        let e = world.spawn(category, Capabilities::NONE);
        world.attach(e, Position(pos));
        world.attach(e, TextureBox(Vec2::splat(32.0)));
        world.attach(e, TextureRef { current: Some(TextureHandle(tex)) });
        e
    }

    #[test]
    fn collects_all_drawable_categories() {
        let mut world = World::new();
        let textures = TextureStore::new();
        spawn_sprite(&mut world, Category::Terrain, Vec2::ZERO, 1);
        spawn_sprite(&mut world, Category::Character, Vec2::new(10.0, 0.0), 2);
        spawn_sprite(&mut world, Category::Projectile, Vec2::new(20.0, 0.0), 3);

        let sprites = collect_sprites(&world, &textures, Vec2::new(800.0, 600.0));
        assert_eq!(sprites.len(), 3);
    }

    #[test]
    fn entity_without_texture_ref_is_not_drawable() {
        let mut world = World::new();
        let textures = TextureStore::new();
        let e = world.spawn(Category::Terrain, Capabilities::NONE);
        world.attach(e, Position(Vec2::ZERO));
        world.attach(e, TextureBox(Vec2::splat(32.0)));

        assert!(collect_sprites(&world, &textures, Vec2::splat(100.0)).is_empty());
    }

    #[test]
    fn missing_quad_is_skipped_not_fatal() {
        let mut world = World::new();
        let textures = TextureStore::new();
        let e = world.spawn(Category::Character, Capabilities::NONE);
        world.attach(e, Position(Vec2::ZERO));
        world.attach(e, TextureRef { current: Some(TextureHandle(7)) });
        spawn_sprite(&mut world, Category::Character, Vec2::ZERO, 1);

        let sprites = collect_sprites(&world, &textures, Vec2::splat(100.0));
        assert_eq!(sprites.len(), 1);
        let _ = e;
    }

    #[test]
    fn unselected_texture_falls_back_to_error_handle() {
        let mut world = World::new();
        let textures = TextureStore::with_error(TextureHandle(99));
        let e = world.spawn(Category::Character, Capabilities::NONE);
        world.attach(e, Position(Vec2::ZERO));
        world.attach(e, TextureBox(Vec2::splat(32.0)));
        world.attach(e, TextureRef::default());
        let _ = e;

        let sprites = collect_sprites(&world, &textures, Vec2::splat(100.0));
        assert_eq!(sprites[0].texture, TextureHandle(99));
    }

    #[test]
    fn camera_follow_centers_player() {
        let mut world = World::new();
        let textures = TextureStore::new();
        let player = spawn_sprite(&mut world, Category::Character, Vec2::new(500.0, 300.0), 1);
        spawn_sprite(&mut world, Category::Terrain, Vec2::new(500.0, 200.0), 2);
        world.set_player(Some(player));
        world.set_camera_follow(true);

        let sprites = collect_sprites(&world, &textures, Vec2::new(800.0, 600.0));
        // Player lands at viewport center.
        assert_eq!(sprites[1].position, Vec2::new(400.0, 300.0));
        // Terrain keeps its relative offset.
        assert_eq!(sprites[0].position, Vec2::new(400.0, 200.0));
    }

    #[test]
    fn camera_stays_fixed_without_follow() {
        let mut world = World::new();
        let textures = TextureStore::new();
        let player = spawn_sprite(&mut world, Category::Character, Vec2::new(500.0, 300.0), 1);
        world.set_player(Some(player));

        let sprites = collect_sprites(&world, &textures, Vec2::new(800.0, 600.0));
        assert_eq!(sprites[0].position, Vec2::new(500.0, 300.0));
    }
}

//! Movement integration.
//!
//! Semi-implicit Euler over every category list: gravity and acceleration
//! update the velocity first, then the updated velocity moves the position,
//! so both affect displacement in the same frame they're applied. Each
//! category (characters, terrain, projectiles) is processed exactly once,
//! with the same per-entity order.

use crate::component::{Acceleration, Gravity, Position, Velocity};
use crate::entity::Category;
use crate::world::World;

/// Integrate one frame of movement for every mobile entity.
pub fn update(world: &mut World, dt: f32) {
    for category in [Category::Character, Category::Terrain, Category::Projectile] {
        let entities = world.registry().category(category).to_vec();
        for entity in entities {
            integrate(world, entity, dt);
        }
    }
}

/// Gravity, then acceleration, then position — entities without a Velocity
/// never move, and the missing-component cases are simply skipped.
fn integrate(world: &mut World, entity: crate::entity::Entity, dt: f32) {
    if !world.has::<Velocity>(entity) {
        return;
    }

    if let Some(&Gravity(g)) = world.get::<Gravity>(entity) {
        if let Some(vel) = world.get_mut::<Velocity>(entity) {
            vel.0.y += g * dt;
        }
    }

    if let Some(&Acceleration(a)) = world.get::<Acceleration>(entity) {
        if let Some(vel) = world.get_mut::<Velocity>(entity) {
            vel.0 += a * dt;
        }
    }

    if let Some(&Velocity(v)) = world.get::<Velocity>(entity) {
        if let Some(pos) = world.get_mut::<Position>(entity) {
            pos.0 += v * dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::entity::Capabilities;

    const EPS: f32 = 1e-5;

    fn world_with(category: Category) -> (World, crate::entity::Entity) {
        let mut world = World::new();
        let e = world.spawn(category, Capabilities::NONE);
        (world, e)
    }

    #[test]
    fn gravity_accumulates_every_frame() {
        let (mut world, e) = world_with(Category::Character);
        world.attach(e, Velocity::default());
        world.attach(e, Gravity(-10.0));

        let mut last_vy = 0.0;
        for _ in 0..5 {
            update(&mut world, 0.1);
            let vy = world.get::<Velocity>(e).unwrap().0.y;
            assert!((last_vy - vy - 1.0).abs() < EPS); // drops by g*dt each frame
            last_vy = vy;
        }
        assert!((last_vy + 5.0).abs() < EPS);
    }

    #[test]
    fn velocity_updates_before_position_read() {
        // Semi-implicit Euler: this frame's gravity contributes to this
        // frame's displacement.
        let (mut world, e) = world_with(Category::Character);
        world.attach(e, Position(Vec2::ZERO));
        world.attach(e, Velocity::default());
        world.attach(e, Gravity(-10.0));

        update(&mut world, 1.0);
        let pos = world.get::<Position>(e).unwrap().0;
        assert!((pos.y + 10.0).abs() < EPS); // not 0.0, which explicit Euler would give
    }

    #[test]
    fn acceleration_applies_on_both_axes() {
        let (mut world, e) = world_with(Category::Projectile);
        world.attach(e, Position(Vec2::ZERO));
        world.attach(e, Velocity(Vec2::new(1.0, 0.0)));
        world.attach(e, Acceleration(Vec2::new(2.0, 3.0)));

        update(&mut world, 0.5);
        let vel = world.get::<Velocity>(e).unwrap().0;
        assert!((vel.x - 2.0).abs() < EPS);
        assert!((vel.y - 1.5).abs() < EPS);
    }

    #[test]
    fn all_categories_are_integrated() {
        let mut world = World::new();
        let mut entities = Vec::new();
        for category in [Category::Character, Category::Terrain, Category::Projectile] {
            let e = world.spawn(category, Capabilities::NONE);
            world.attach(e, Position(Vec2::ZERO));
            world.attach(e, Velocity(Vec2::new(4.0, 0.0)));
            entities.push(e);
        }

        update(&mut world, 0.25);
        for e in entities {
            assert!((world.get::<Position>(e).unwrap().0.x - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn entity_without_velocity_is_untouched() {
        let (mut world, e) = world_with(Category::Terrain);
        world.attach(e, Position(Vec2::new(5.0, 5.0)));
        world.attach(e, Gravity(-10.0)); // gravity without velocity does nothing

        update(&mut world, 1.0);
        assert_eq!(world.get::<Position>(e).unwrap().0, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn velocity_without_position_only_updates_velocity() {
        let (mut world, e) = world_with(Category::Character);
        world.attach(e, Velocity::default());
        world.attach(e, Gravity(-8.0));

        update(&mut world, 0.5);
        assert!((world.get::<Velocity>(e).unwrap().0.y + 4.0).abs() < EPS);
    }
}

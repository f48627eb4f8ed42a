//! Player movement intent.
//!
//! The engine is windowless; whatever sits on top (a real event loop, a test,
//! a replay file) reduces its inputs to a [`MovementIntent`] per frame and
//! the engine applies it to the player entity here.
//!
//! Horizontal movement is edge-triggered through the same `went_right` /
//! `went_left` flags the AI uses: holding a direction applies the walk
//! impulse exactly once, releasing it reverses the impulse exactly once.
//! Jumping is level-triggered but gated on ground contact, which it consumes,
//! so holding jump hops once per landing rather than once per frame.

use crate::component::{Hitbox, MovementTuning, Velocity};
use crate::world::World;

/// Desired player movement for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementIntent {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl MovementIntent {
    pub const NONE: Self = Self {
        left: false,
        right: false,
        jump: false,
    };
}

/// Apply one frame of movement intent to the player entity.
pub fn apply_movement_intent(world: &mut World, intent: MovementIntent) {
    let Some(player) = world.player() else {
        if intent != MovementIntent::NONE {
            log::warn!("movement intent with no player entity set");
        }
        return;
    };
    if !world.has::<Velocity>(player) || !world.has::<MovementTuning>(player) {
        log::warn!(
            "player {}v{} is missing Velocity or MovementTuning",
            player.index(),
            player.generation()
        );
        return;
    }

    let tuning = *world.get::<MovementTuning>(player).unwrap();

    if intent.right {
        if !tuning.went_right {
            world.get_mut::<Velocity>(player).unwrap().0.x += tuning.walk_speed;
            world.get_mut::<MovementTuning>(player).unwrap().went_right = true;
        }
    } else if tuning.went_right {
        world.get_mut::<Velocity>(player).unwrap().0.x -= tuning.walk_speed;
        world.get_mut::<MovementTuning>(player).unwrap().went_right = false;
    }

    if intent.left {
        if !tuning.went_left {
            world.get_mut::<Velocity>(player).unwrap().0.x -= tuning.walk_speed;
            world.get_mut::<MovementTuning>(player).unwrap().went_left = true;
        }
    } else if tuning.went_left {
        world.get_mut::<Velocity>(player).unwrap().0.x += tuning.walk_speed;
        world.get_mut::<MovementTuning>(player).unwrap().went_left = false;
    }

    if intent.jump {
        let grounded = world
            .get::<Hitbox>(player)
            .map(|h| h.grounded)
            .unwrap_or(false);
        if grounded {
            world.get_mut::<Hitbox>(player).unwrap().grounded = false;
            world.get_mut::<Velocity>(player).unwrap().0.y += tuning.jump_speed;
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::component::Position;
    use crate::entity::{Capabilities, Category, Entity};

    fn spawn_player(world: &mut World) -> Entity {
        let e = world.spawn(Category::Character, Capabilities::NONE);
        world.attach(e, Position(Vec2::ZERO));
        world.attach(e, Velocity(Vec2::ZERO));
        world.attach(e, MovementTuning::new(5.0, 20.0));
        world.attach(e, Hitbox::new(30.0, 30.0));
        world.set_player(Some(e));
        e
    }

    const RIGHT: MovementIntent = MovementIntent { left: false, right: true, jump: false };
    const LEFT: MovementIntent = MovementIntent { left: true, right: false, jump: false };
    const JUMP: MovementIntent = MovementIntent { left: false, right: false, jump: true };

    #[test]
    fn holding_right_applies_impulse_once() {
        let mut world = World::new();
        let p = spawn_player(&mut world);

        for _ in 0..5 {
            apply_movement_intent(&mut world, RIGHT);
        }
        assert_eq!(world.get::<Velocity>(p).unwrap().0.x, 5.0);
        assert!(world.get::<MovementTuning>(p).unwrap().went_right);
    }

    #[test]
    fn release_reverses_impulse_once() {
        let mut world = World::new();
        let p = spawn_player(&mut world);

        apply_movement_intent(&mut world, RIGHT);
        for _ in 0..3 {
            apply_movement_intent(&mut world, MovementIntent::NONE);
        }
        assert_eq!(world.get::<Velocity>(p).unwrap().0.x, 0.0);
        assert!(!world.get::<MovementTuning>(p).unwrap().went_right);
    }

    #[test]
    fn opposite_directions_cancel() {
        let mut world = World::new();
        let p = spawn_player(&mut world);

        apply_movement_intent(&mut world, MovementIntent { left: true, right: true, jump: false });
        assert_eq!(world.get::<Velocity>(p).unwrap().0.x, 0.0);
        assert!(world.get::<MovementTuning>(p).unwrap().went_right);
        assert!(world.get::<MovementTuning>(p).unwrap().went_left);

        apply_movement_intent(&mut world, MovementIntent::NONE);
        assert_eq!(world.get::<Velocity>(p).unwrap().0.x, 0.0);
    }

    #[test]
    fn jump_requires_and_consumes_ground_contact() {
        let mut world = World::new();
        let p = spawn_player(&mut world);

        apply_movement_intent(&mut world, JUMP);
        assert_eq!(world.get::<Velocity>(p).unwrap().0.y, 0.0);

        world.get_mut::<Hitbox>(p).unwrap().grounded = true;
        apply_movement_intent(&mut world, JUMP);
        assert_eq!(world.get::<Velocity>(p).unwrap().0.y, 20.0);
        assert!(!world.get::<Hitbox>(p).unwrap().grounded);

        // Held jump does nothing while airborne.
        apply_movement_intent(&mut world, JUMP);
        assert_eq!(world.get::<Velocity>(p).unwrap().0.y, 20.0);
    }

    #[test]
    fn switching_direction_mid_hold() {
        let mut world = World::new();
        let p = spawn_player(&mut world);

        apply_movement_intent(&mut world, RIGHT);
        apply_movement_intent(&mut world, LEFT);
        // Right impulse reversed, left impulse applied.
        assert_eq!(world.get::<Velocity>(p).unwrap().0.x, -5.0);
    }

    #[test]
    fn no_player_does_nothing() {
        let mut world = World::new();
        apply_movement_intent(&mut world, RIGHT); // must not panic
    }
}

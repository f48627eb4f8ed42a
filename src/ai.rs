//! Player-relative AI.
//!
//! Runs last in the frame, after collision has settled positions and ground
//! contact. Every AI-controlled entity first *undoes* any walk impulse it
//! applied on a previous frame (the same edge-triggered flags the input layer
//! uses), then the aggressive rule set re-applies impulses toward the
//! player's current position. Passive entities stop after the undo step, so
//! switching a profile to passive brings the entity to a clean halt.
//!
//! Aggressive pursuit has a dead band: no reaction while the player is within
//! [`X_THRESHOLD`] horizontally. Each pursuit impulse also consumes ground
//! contact for a hop, which makes chasers bounce over small obstacles, and a
//! separate rule jumps when the player is more than [`Y_THRESHOLD`] above.
//!
//! Without a player set on the world this whole pass is a no-op.

use crate::component::{AIProfile, AiBehavior, Hitbox, MovementTuning, Position, Velocity};
use crate::entity::Entity;
use crate::world::World;

/// Horizontal dead band. The player must be further away than this before an
/// aggressive entity starts walking toward it.
pub const X_THRESHOLD: f32 = 90.0;

/// Vertical gap above which an aggressive entity jumps after the player.
pub const Y_THRESHOLD: f32 = 350.0;

/// Run the AI pass for every AI-controlled entity.
pub fn update(world: &mut World) {
    let Some(player) = world.player() else {
        return;
    };
    let Some(player_pos) = world.get::<Position>(player).map(|p| p.0) else {
        return;
    };

    let controlled = world.registry().ai_controlled().to_vec();
    for entity in controlled {
        drive(world, entity, player_pos);
    }
}

fn drive(world: &mut World, entity: Entity, player_pos: glam::Vec2) {
    if !world.has::<Position>(entity)
        || !world.has::<Velocity>(entity)
        || !world.has::<MovementTuning>(entity)
    {
        return;
    }
    let Some(profile) = world.get::<AIProfile>(entity).copied() else {
        return;
    };

    let tuning = *world.get::<MovementTuning>(entity).unwrap();

    // Undo last frame's impulses unconditionally, for every profile. This is
    // what lets an entity stop when the player re-enters the dead band.
    if tuning.went_right {
        world.get_mut::<MovementTuning>(entity).unwrap().went_right = false;
        world.get_mut::<Velocity>(entity).unwrap().0.x -= tuning.walk_speed;
    }
    if tuning.went_left {
        world.get_mut::<MovementTuning>(entity).unwrap().went_left = false;
        world.get_mut::<Velocity>(entity).unwrap().0.x += tuning.walk_speed;
    }

    if profile.behavior != AiBehavior::Aggressive {
        return;
    }

    let pos = world.get::<Position>(entity).unwrap().0;

    if player_pos.x < pos.x - X_THRESHOLD {
        world.get_mut::<Velocity>(entity).unwrap().0.x -= tuning.walk_speed;
        world.get_mut::<MovementTuning>(entity).unwrap().went_left = true;
        hop(world, entity, tuning.jump_speed);
    }

    if player_pos.x > pos.x + X_THRESHOLD {
        world.get_mut::<Velocity>(entity).unwrap().0.x += tuning.walk_speed;
        world.get_mut::<MovementTuning>(entity).unwrap().went_right = true;
        hop(world, entity, tuning.jump_speed);
    }

    // Jump after a player standing high above, independent of pursuit.
    if player_pos.y > pos.y + Y_THRESHOLD {
        hop(world, entity, tuning.jump_speed);
    }
}

/// Consume ground contact for a jump impulse, if the entity has any.
fn hop(world: &mut World, entity: Entity, jump_speed: f32) {
    let grounded = world
        .get::<Hitbox>(entity)
        .map(|h| h.grounded)
        .unwrap_or(false);
    if grounded {
        world.get_mut::<Hitbox>(entity).unwrap().grounded = false;
        world.get_mut::<Velocity>(entity).unwrap().0.y += jump_speed;
    }
}

//! Collision detection and resolution.
//!
//! Two category pairings run each frame, in a fixed order:
//!
//! 1. **Character × projectile** — any overlap destroys the projectile.
//! 2. **Terrain × character** — solid resolution: the character is pushed
//!    out along the axis with the smaller overlap depth, velocity into the
//!    surface is zeroed, and an upward push sets the `grounded` flag.
//!    Interleaved with this, **terrain × projectile** destroys projectiles
//!    too, so a projectile overlapping *either* a character or terrain is
//!    gone by the end of the pass.
//!
//! Every character's `grounded` flag is reset before the terrain pass and
//! re-earned only by an upward push that same frame — ground contact never
//! persists without fresh resolution.
//!
//! Projectile destruction is deferred: overlaps are marked during the passes
//! and the despawns happen after both loops finish, so no list is mutated
//! while it's being iterated.
//!
//! One behavioral quirk is preserved on purpose: a *downward* push (terrain
//! above the character) zeroes upward velocity but does not touch `grounded`.
//! Grounding strictly means "standing on something".

use crate::component::{Hitbox, MovementTuning, Position, Velocity};
use crate::entity::Entity;
use crate::math::Aabb;
use crate::world::World;

/// Run the full collision pass for one frame.
pub fn update(world: &mut World) {
    let characters = world.registry().characters().to_vec();
    let terrain = world.registry().terrain().to_vec();
    let projectiles = world.registry().projectiles().to_vec();

    let mut destroyed: Vec<Entity> = Vec::new();

    // Character × projectile, on pre-resolution positions.
    for &c in &characters {
        let Some(char_box) = collider(world, c) else {
            continue;
        };
        for &p in &projectiles {
            if destroyed.contains(&p) {
                continue;
            }
            let Some(proj_box) = collider(world, p) else {
                continue;
            };
            if char_box.overlaps(&proj_box) {
                destroyed.push(p);
            }
        }
    }

    // Ground contact is re-earned every frame.
    for &c in &characters {
        if let Some(hitbox) = world.get_mut::<Hitbox>(c) {
            hitbox.grounded = false;
        }
    }

    for &t in &terrain {
        let Some(terrain_box) = collider(world, t) else {
            continue;
        };

        for &c in &characters {
            resolve_solid(world, terrain_box, c);
        }

        // Terrain eats projectiles as well, after this terrain entry has
        // finished resolving characters.
        for &p in &projectiles {
            if destroyed.contains(&p) {
                continue;
            }
            let Some(proj_box) = collider(world, p) else {
                continue;
            };
            if terrain_box.overlaps(&proj_box) {
                destroyed.push(p);
            }
        }
    }

    for p in destroyed {
        world.despawn(p);
    }
}

/// The collision box of an entity, if it has both Position and Hitbox.
fn collider(world: &World, entity: Entity) -> Option<Aabb> {
    let pos = world.get::<Position>(entity)?.0;
    let hitbox = world.get::<Hitbox>(entity)?;
    Some(Aabb::from_size(pos, hitbox.size))
}

/// Push a character out of a solid terrain box.
///
/// The axis with the smaller overlap depth is resolved (minimum translation).
/// On ties the Y axis wins, and a character centered exactly on the terrain
/// center is pushed down — both preserved from observed behavior.
fn resolve_solid(world: &mut World, terrain_box: Aabb, character: Entity) {
    // Re-read every time: an earlier terrain entry may already have moved
    // this character.
    let Some(char_box) = collider(world, character) else {
        return;
    };
    if !terrain_box.overlaps(&char_box) {
        return;
    }

    let pen = terrain_box.penetration(&char_box);
    let half_sum = terrain_box.half + char_box.half;

    if pen.x < pen.y {
        if terrain_box.center.x < char_box.center.x {
            // Terrain on the left: push right to its near edge.
            if let Some(pos) = world.get_mut::<Position>(character) {
                pos.0.x = terrain_box.center.x + half_sum.x;
            }
            if let Some(tuning) = world.get_mut::<MovementTuning>(character) {
                tuning.went_left = false;
            }
            if let Some(vel) = world.get_mut::<Velocity>(character) {
                if vel.0.x < 0.0 {
                    vel.0.x = 0.0;
                }
            }
        } else {
            if let Some(pos) = world.get_mut::<Position>(character) {
                pos.0.x = terrain_box.center.x - half_sum.x;
            }
            if let Some(tuning) = world.get_mut::<MovementTuning>(character) {
                tuning.went_right = false;
            }
            if let Some(vel) = world.get_mut::<Velocity>(character) {
                if vel.0.x > 0.0 {
                    vel.0.x = 0.0;
                }
            }
        }
    } else if terrain_box.center.y < char_box.center.y {
        // Terrain below: push up, land.
        if let Some(pos) = world.get_mut::<Position>(character) {
            pos.0.y = terrain_box.center.y + half_sum.y;
        }
        if let Some(hitbox) = world.get_mut::<Hitbox>(character) {
            hitbox.grounded = true;
        }
        if let Some(vel) = world.get_mut::<Velocity>(character) {
            if vel.0.y < 0.0 {
                vel.0.y = 0.0;
            }
        }
    } else {
        // Terrain above: push down. No grounding from hitting a ceiling.
        if let Some(pos) = world.get_mut::<Position>(character) {
            pos.0.y = terrain_box.center.y - half_sum.y;
        }
        if let Some(vel) = world.get_mut::<Velocity>(character) {
            if vel.0.y > 0.0 {
                vel.0.y = 0.0;
            }
        }
    }
}

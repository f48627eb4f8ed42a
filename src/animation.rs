//! Animation state selection and frame advance.
//!
//! Each animated entity's state is re-derived from its velocity every frame:
//! vertical motion picks jumping/falling (facing follows horizontal sign,
//! ties face right), otherwise standing or walking. When the derived state
//! changes, the sequence restarts at frame zero and the new texture shows
//! immediately. Within an unchanged state, the frame index only advances
//! once `frame_hold` seconds have passed since the last advance, then wraps.
//!
//! The dying states are never derived here; they are set externally (a
//! gameplay event) and stick until velocity-driven selection overwrites them.

use glam::Vec2;

use crate::component::{AnimState, AnimationState, TextureRef, Velocity};
use crate::world::World;

/// Run animation selection for every animated entity. `now` is the elapsed
/// clock in seconds.
pub fn update(world: &mut World, now: f64) {
    let animated = world.registry().animated().to_vec();

    for entity in animated {
        let Some(vel) = world.get::<Velocity>(entity) else {
            continue;
        };
        let v = vel.0;
        if !world.has::<TextureRef>(entity) {
            continue;
        }
        let Some(anim) = world.get_mut::<AnimationState>(entity) else {
            continue;
        };

        let state = select_state(v);
        anim.last = anim.current;
        anim.current = Some(state);

        let len = anim.frames(state).len();
        if len == 0 {
            log::warn!(
                "animated entity {}v{} has no frames for {:?}",
                entity.index(),
                entity.generation(),
                state
            );
            continue;
        }

        if anim.last == anim.current {
            // Same state: throttled advance.
            if now - anim.last_advance >= anim.frame_hold as f64 {
                anim.frame_index = (anim.frame_index + 1) % len;
                anim.last_advance = now;
            }
        } else {
            // State change: restart and show the first frame right away.
            anim.frame_index = 0;
            anim.last_advance = now;
        }

        let texture = anim.frames(state)[anim.frame_index.min(len - 1)];
        if let Some(tex_ref) = world.get_mut::<TextureRef>(entity) {
            tex_ref.current = Some(texture);
        }
    }
}

/// Map a velocity to an animation state.
fn select_state(v: Vec2) -> AnimState {
    if v.y > 0.0 {
        if v.x >= 0.0 {
            AnimState::JumpingRight
        } else {
            AnimState::JumpingLeft
        }
    } else if v.y < 0.0 {
        if v.x >= 0.0 {
            AnimState::FallingRight
        } else {
            AnimState::FallingLeft
        }
    } else if v.x > 0.0 {
        AnimState::WalkingRight
    } else if v.x < 0.0 {
        AnimState::WalkingLeft
    } else {
        AnimState::Standing
    }
}

//! The engine facade: clock + world + textures, stepped one frame at a time.
//!
//! ```text
//!           ┌──────────────────────── frame ────────────────────────┐
//!  intent ──▶ input ─▶ movement ─▶ collision ─▶ animation ─▶ ai ────▶ sprites
//!           └────────────────────────────────────────────────────────┘
//! ```
//!
//! The ordering is load-bearing: input impulses feed the same frame's
//! integration, collision settles positions and ground contact before
//! animation reads velocities, and AI runs last so its impulses act on the
//! freshly resolved ground state.
//!
//! Two stepping modes share the pipeline. [`Engine::frame`] ticks the wall
//! clock for interactive use; [`Engine::frame_with`] advances a fixed dt,
//! which is what the tests and headless runs use for deterministic playback.

use glam::Vec2;

use crate::assets::TextureStore;
use crate::input::MovementIntent;
use crate::render::SpriteInstance;
use crate::time::Time;
use crate::world::World;
use crate::{ai, animation, collision, input, movement, render};

pub struct Engine {
    pub world: World,
    pub time: Time,
    pub textures: TextureStore,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            time: Time::new(),
            textures: TextureStore::new(),
        }
    }

    /// Run one frame on the wall clock.
    pub fn frame(&mut self, intent: MovementIntent) {
        self.time.tick();
        self.step(intent);
    }

    /// Run one frame with a fixed timestep. Deterministic: the same intents
    /// and dt sequence always produce the same world.
    pub fn frame_with(&mut self, dt: f32, intent: MovementIntent) {
        self.time.advance(dt);
        self.step(intent);
    }

    fn step(&mut self, intent: MovementIntent) {
        let dt = self.time.delta_secs();
        log::trace!("frame {} dt={dt:.6}", self.time.frame_count());

        input::apply_movement_intent(&mut self.world, intent);
        movement::update(&mut self.world, dt);
        collision::update(&mut self.world);
        animation::update(&mut self.world, self.time.elapsed_secs_f64());
        ai::update(&mut self.world);
    }

    /// Flatten the current world into sprites for a viewport of this size.
    pub fn sprites(&self, viewport: Vec2) -> Vec<SpriteInstance> {
        render::collect_sprites(&self.world, &self.textures, viewport)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

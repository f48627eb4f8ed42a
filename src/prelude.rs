//! Everything a game needs, one import away.
//!
//! ```
//! use sindri::prelude::*;
//!
//! let mut engine = Engine::new();
//! let ground = engine.world.spawn(Category::Terrain, Capabilities::NONE);
//! engine.world.attach(ground, Position(Vec2::ZERO));
//! engine.world.attach(ground, Hitbox::new(1000.0, 100.0));
//! engine.frame_with(1.0 / 60.0, MovementIntent::NONE);
//! ```

pub use crate::assets::{TextureHandle, TextureStore};
pub use crate::component::{
    AIProfile, AiBehavior, Acceleration, AnimState, AnimationState, Gravity, Hitbox,
    MovementTuning, Position, TextureBox, TextureRef, Velocity,
};
pub use crate::engine::Engine;
pub use crate::entity::{Capabilities, Category, Entity};
pub use crate::input::MovementIntent;
pub use crate::math::{Aabb, Vec2};
pub use crate::render::SpriteInstance;
pub use crate::time::Time;
pub use crate::world::World;

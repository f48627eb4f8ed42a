//! # Sindri — Minimal Fixed-Pipeline 2D Simulation Kernel
//!
//! A small entity-component game kernel for 2D platformers: a typed component
//! store, category-based entity registry, and four simulation subsystems
//! (movement, collision, animation, pursuit AI) run in a fixed order each
//! frame.
//!
//! Windowing, GPU upload, image decoding, and raw keyboard polling are *not*
//! part of this crate. The host drives the kernel through a narrow surface:
//! feed it a [`MovementIntent`](input::MovementIntent) each frame, register
//! texture handles in the [`TextureStore`](assets::TextureStore), call
//! [`Engine::frame`](engine::Engine::frame), and draw the
//! [`SpriteInstance`](render::SpriteInstance)s it hands back.
//!
//! Start with `use sindri::prelude::*` and build an [`Engine`](engine::Engine).

pub mod ai;
pub mod animation;
pub mod assets;
pub mod collision;
pub mod component;
pub mod engine;
pub mod entity;
pub mod input;
pub mod math;
pub mod movement;
pub mod prelude;
pub mod registry;
pub mod render;
pub mod time;
pub mod world;

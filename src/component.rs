//! # Components — The Closed Data Model
//!
//! Every physical quantity the kernel simulates is one of the component kinds
//! in this module. The set is closed on purpose: the subsystems are fixed, so
//! there is no open extension point, and storage can be a plain struct of
//! `Option<T>` slots per entity ([`ComponentSet`]) instead of a runtime
//! type-id table.
//!
//! ## Why a struct of slots?
//!
//! The classic trick for this kind of store is a `[Option<Box<dyn Any>>; N]`
//! indexed by a monotonically-assigned type id — constant-time lookup, but
//! every access goes through a downcast and every component is a separate
//! heap allocation. With a closed component set, the compiler can do the
//! indexing for us: the [`Component`] trait maps each kind to its field, so
//! `set.get::<Hitbox>()` compiles down to a field read. Zero erasure, zero
//! unsafe, still O(1).
//!
//! Components hold no back-reference to their owner; storage is keyed by
//! [`Entity`](crate::entity::Entity), so the world lookup *is* the
//! back-reference.

use glam::Vec2;

use crate::assets::TextureHandle;

// ── Animation states ────────────────────────────────────────────────────

/// Number of animation states an entity can be in.
pub const ANIM_STATE_COUNT: usize = 9;

/// The fixed set of visual states. The animation subsystem derives one of the
/// first seven purely from velocity each frame; the two dying states are
/// never derived and exist for games to drive manually.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimState {
    Standing,
    WalkingRight,
    WalkingLeft,
    JumpingRight,
    JumpingLeft,
    FallingRight,
    FallingLeft,
    DyingFromRight,
    DyingFromLeft,
}

impl AnimState {
    /// Index into per-state frame sequence storage.
    pub fn as_index(self) -> usize {
        self as usize
    }
}

/// AI rule set selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiBehavior {
    /// No movement response.
    Passive,
    /// Pursue the player and jump toward it.
    Aggressive,
}

// ── Component kinds ─────────────────────────────────────────────────────

/// World-space center of the entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec2);

/// Linear velocity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity(pub Vec2);

/// Constant linear acceleration, applied every frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Acceleration(pub Vec2);

/// Vertical acceleration added to `vel.y` every frame, scaled by dt. Use a
/// negative value for downward gravity in a Y-up world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gravity(pub f32);

/// Render-space quad size, independent of the collision [`Hitbox`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureBox(pub Vec2);

/// Axis-aligned collision box, centered on [`Position`].
///
/// `grounded` is transient: the collision subsystem clears it every frame and
/// re-sets it only when the entity is pushed upward off terrain in that same
/// pass. Jumping (input or AI) consumes it immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub size: Vec2,
    pub grounded: bool,
}

impl Hitbox {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            grounded: false,
        }
    }
}

/// The texture currently selected for rendering. `None` until the animation
/// subsystem (or the game directly) picks one; rendered with the error
/// texture until then.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextureRef {
    pub current: Option<TextureHandle>,
}

/// Per-state frame sequences plus playback state.
///
/// Frame advancement is throttled: within a state, the index moves only after
/// `frame_hold` seconds on the monotonic clock; on a state *change* the index
/// resets and the texture is re-selected immediately, so visual feedback on
/// transitions is instant.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    frames: [Vec<TextureHandle>; ANIM_STATE_COUNT],
    pub current: Option<AnimState>,
    pub last: Option<AnimState>,
    pub frame_index: usize,
    /// Seconds to hold each frame before advancing.
    pub frame_hold: f32,
    /// Monotonic-clock timestamp of the last frame advance.
    pub last_advance: f64,
}

impl AnimationState {
    pub fn new(frame_hold: f32) -> Self {
        Self {
            frames: Default::default(),
            current: None,
            last: None,
            frame_index: 0,
            frame_hold,
            last_advance: 0.0,
        }
    }

    /// Set the frame sequence for one state (builder style).
    pub fn with_frames(mut self, state: AnimState, frames: Vec<TextureHandle>) -> Self {
        self.frames[state.as_index()] = frames;
        self
    }

    /// Replace the frame sequence for one state.
    pub fn set_frames(&mut self, state: AnimState, frames: Vec<TextureHandle>) {
        self.frames[state.as_index()] = frames;
    }

    /// The frame sequence for a state. May be empty.
    pub fn frames(&self, state: AnimState) -> &[TextureHandle] {
        &self.frames[state.as_index()]
    }
}

/// Edge-triggered movement response amounts.
///
/// `went_right`/`went_left` track whether the walk impulse is currently
/// applied to the velocity, so releasing a direction (or the AI changing its
/// mind) reverses the impulse exactly once instead of re-applying it every
/// frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementTuning {
    /// Horizontal walk impulse.
    pub walk_speed: f32,
    /// Vertical jump impulse, applied when ground contact is consumed.
    pub jump_speed: f32,
    pub went_right: bool,
    pub went_left: bool,
}

impl MovementTuning {
    pub fn new(walk_speed: f32, jump_speed: f32) -> Self {
        Self {
            walk_speed,
            jump_speed,
            went_right: false,
            went_left: false,
        }
    }
}

/// Selects the AI rule set for an AI-controlled entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AIProfile {
    pub behavior: AiBehavior,
}

// ── Storage ─────────────────────────────────────────────────────────────

/// One slot per component kind, attached to each entity.
///
/// The invariant: a slot is either empty or holds exactly one live component
/// belonging to this entity. Slot access goes through the [`Component`]
/// trait, giving typed O(1) reads without any runtime type lookup.
#[derive(Default)]
pub(crate) struct ComponentSet {
    position: Option<Position>,
    hitbox: Option<Hitbox>,
    velocity: Option<Velocity>,
    acceleration: Option<Acceleration>,
    gravity: Option<Gravity>,
    texture_box: Option<TextureBox>,
    texture_ref: Option<TextureRef>,
    animation: Option<AnimationState>,
    movement_tuning: Option<MovementTuning>,
    ai_profile: Option<AIProfile>,
}

impl ComponentSet {
    /// Release every component. Called once when the owning entity dies.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn get<T: Component>(&self) -> Option<&T> {
        T::slot(self).as_ref()
    }

    pub fn get_mut<T: Component>(&mut self) -> Option<&mut T> {
        T::slot_mut(self).as_mut()
    }

    /// Install or replace the slot for `T`.
    pub fn attach<T: Component>(&mut self, value: T) {
        *T::slot_mut(self) = Some(value);
    }

    /// Free and clear the slot for `T`, returning the removed value.
    pub fn detach<T: Component>(&mut self) -> Option<T> {
        T::slot_mut(self).take()
    }

    pub fn has<T: Component>(&self) -> bool {
        T::slot(self).is_some()
    }
}

/// Maps a component kind to its slot in the [`ComponentSet`]. Implemented
/// only by the fixed component kinds in this module — the set is closed.
pub trait Component: Sized {
    #[doc(hidden)]
    fn slot(set: &ComponentSet) -> &Option<Self>;
    #[doc(hidden)]
    fn slot_mut(set: &mut ComponentSet) -> &mut Option<Self>;
}

macro_rules! impl_component {
    ($($ty:ty => $field:ident),+ $(,)?) => {
        $(
            impl Component for $ty {
                fn slot(set: &ComponentSet) -> &Option<Self> {
                    &set.$field
                }
                fn slot_mut(set: &mut ComponentSet) -> &mut Option<Self> {
                    &mut set.$field
                }
            }
        )+
    };
}

impl_component! {
    Position => position,
    Hitbox => hitbox,
    Velocity => velocity,
    Acceleration => acceleration,
    Gravity => gravity,
    TextureBox => texture_box,
    TextureRef => texture_ref,
    AnimationState => animation,
    MovementTuning => movement_tuning,
    AIProfile => ai_profile,
}

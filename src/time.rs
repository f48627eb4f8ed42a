//! Frame timing and delta time.
//!
//! The [`Time`] value is refreshed once at the start of each frame, before
//! any subsystem runs. Two refresh modes exist:
//!
//! - [`tick`](Time::tick) reads the wall clock, for a real windowed host
//!   driven by vsync.
//! - [`advance`](Time::advance) steps a caller-chosen delta, for headless
//!   runs and deterministic tests.
//!
//! Both keep the elapsed clock monotonic; the animation subsystem uses it as
//! its frame-hold reference.

use std::time::{Duration, Instant};

/// Frame timing. Owned by the [`Engine`](crate::engine::Engine) and refreshed
/// once per frame.
#[derive(Clone, Copy)]
pub struct Time {
    /// When the previous wall-clock tick happened.
    frame_start: Instant,
    /// Duration of the previous frame.
    delta: Duration,
    /// Total simulated time since startup.
    elapsed: Duration,
    /// Frame counter.
    frame_count: u64,
}

impl Time {
    pub fn new() -> Self {
        Self {
            frame_start: Instant::now(),
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Refresh from the wall clock. Call once at the start of each frame.
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.advance_by(now - self.frame_start);
        self.frame_start = now;
    }

    /// Step the clock by a fixed delta instead of reading the wall clock.
    pub fn advance(&mut self, dt: f32) {
        self.advance_by(Duration::from_secs_f32(dt));
        self.frame_start = Instant::now();
    }

    fn advance_by(&mut self, delta: Duration) {
        self.delta = delta;
        self.elapsed += delta;
        self.frame_count += 1;
    }

    /// Duration of the previous frame.
    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// Delta time in seconds (f32), the most common way to use it.
    pub fn delta_secs(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Total elapsed time since startup.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Total elapsed time in seconds (f32).
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    /// Total elapsed time in seconds at full precision. The animation
    /// subsystem stores its per-entity advance timestamps at this precision
    /// so long sessions don't lose frame-hold accuracy.
    pub fn elapsed_secs_f64(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Number of frames stepped so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Estimated FPS based on the last frame's delta.
    pub fn fps(&self) -> f32 {
        if self.delta.as_secs_f32() > 0.0 {
            1.0 / self.delta.as_secs_f32()
        } else {
            0.0
        }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

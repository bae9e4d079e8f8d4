//! Frame pacing and the fixed-step simulation clock.
//!
//! - [`Clock`] abstracts the monotonic millisecond clock and sleeping
//! - [`FixedStep`] advances simulation time in constant steps with a cap
//! - [`FrameLimiter`] computes the end-of-frame sleep
//! - [`FpsCounter`] measures the presented frame rate

mod fixed_step;
mod fps;
mod frame_limiter;

pub use fixed_step::{FixedStep, StepReport};
pub use fps::FpsCounter;
pub use frame_limiter::FrameLimiter;

/// A monotonic millisecond clock that can also block the thread.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin. Never decreases.
    fn now_ms(&self) -> i64;

    /// Blocks for `ms` milliseconds.
    fn sleep_ms(&mut self, ms: i64);
}

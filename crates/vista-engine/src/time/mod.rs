//! Frame timing.
//!
//! One [`FrameClock`] per dispatch loop: call `tick()` once per frame, after
//! input has been drained and before the update pass, to obtain the
//! [`FrameTime`] handed to views.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};

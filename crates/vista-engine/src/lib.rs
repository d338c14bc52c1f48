//! Vista engine crate.
//!
//! Platform-agnostic primitives the UI core is built on: geometry, colors,
//! raw input events, frame timing, and logger setup. Nothing here draws or
//! opens windows; hosts own that.

pub mod coords;
pub mod input;
pub mod logging;
pub mod paint;
pub mod time;

//! Coordinate and geometry types shared by the view tree and the dispatcher.
//!
//! Canonical space:
//! - Window pixels, no DPI scaling
//! - Origin top-left
//! - +X right, +Y down
//!
//! A view's frame is expressed in its parent's coordinate space; the root
//! scene's frame is expressed in window space.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;

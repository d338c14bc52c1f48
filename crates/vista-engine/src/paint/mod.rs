//! Paint model consumed by themes and handed to the (external) renderer.
//!
//! Scope:
//! - color representation (straight-alpha sRGB bytes)
//! - the named palette themes are authored from
//! - paint sources (solid, two-stop vertical gradient)

pub mod color;
pub mod palette;

pub use color::Color;

/// Fill source for a view background or any other painted area.
///
/// Themes author gradients as a `(top, bottom)` pair; the renderer decides
/// how to rasterize them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    VerticalGradient { top: Color, bottom: Color },
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    #[inline]
    pub fn gradient(top: Color, bottom: Color) -> Self {
        Paint::VerticalGradient { top, bottom }
    }

    /// `true` when nothing would be drawn (every stop fully transparent).
    #[inline]
    pub fn is_clear(&self) -> bool {
        match self {
            Paint::Solid(c) => c.is_clear(),
            Paint::VerticalGradient { top, bottom } => top.is_clear() && bottom.is_clear(),
        }
    }
}

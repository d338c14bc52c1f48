/// Straight-alpha sRGB color, one byte per channel.
///
/// Themes are authored in this form (`(227, 227, 159)` style triples); the
/// renderer converts to whatever its pipeline wants via [`Color::to_premul_f32`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque color from RGB bytes.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    #[inline]
    pub const fn is_clear(self) -> bool {
        self.a == 0
    }

    /// Linear-blend-ready premultiplied `f32` components in `[0, 1]`.
    ///
    /// For `a == 0` every channel is 0.
    #[inline]
    pub fn to_premul_f32(self) -> [f32; 4] {
        let a = self.a as f32 / 255.0;
        [
            self.r as f32 / 255.0 * a,
            self.g as f32 / 255.0 * a,
            self.b as f32 / 255.0 * a,
            a,
        ]
    }
}

impl From<(u8, u8, u8)> for Color {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    #[inline]
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Color::rgba(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn premul_scales_rgb_by_alpha() {
        let c = Color::rgba(255, 0, 255, 0);
        assert_eq!(c.to_premul_f32(), [0.0, 0.0, 0.0, 0.0]);

        let [r, g, b, a] = Color::rgb(255, 0, 0).to_premul_f32();
        assert_eq!((r, g, b, a), (1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn tuples_convert() {
        assert_eq!(Color::from((1, 2, 3)), Color::rgba(1, 2, 3, 255));
        assert!(Color::from((1, 2, 3, 0)).is_clear());
    }
}

use std::collections::BTreeMap;

use vista_engine::paint::{Color, Paint};

use crate::style::{FontSpec, StyleValue};

// ── Edges ─────────────────────────────────────────────────────────────────

/// Insets on all four sides (padding, margin, border).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    #[inline]
    pub fn all(v: f32) -> Self {
        Self { top: v, right: v, bottom: v, left: v }
    }

    /// `x` left and right, `y` top and bottom.
    #[inline]
    pub fn symmetric(x: f32, y: f32) -> Self {
        Self { top: y, bottom: y, left: x, right: x }
    }

    /// Reads a themed inset: a number is every edge, a pair is `(x, y)`,
    /// a quad is top/right/bottom/left. Anything else is no inset.
    pub fn from_value(value: &StyleValue) -> Self {
        match *value {
            StyleValue::Number(n) => Self::all(n),
            StyleValue::Pair(x, y) => Self::symmetric(x, y),
            StyleValue::Quad(top, right, bottom, left) => Self { top, right, bottom, left },
            _ => Self::default(),
        }
    }

    /// Total inset on the horizontal axis.
    #[inline]
    pub fn h(self) -> f32 {
        self.left + self.right
    }

    /// Total inset on the vertical axis.
    #[inline]
    pub fn v(self) -> f32 {
        self.top + self.bottom
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self == Self::default()
    }
}

// ── Appearance ────────────────────────────────────────────────────────────

/// Presentation attributes applied to a view by stylization.
///
/// The renderer reads these; the core only writes them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Appearance {
    attrs: BTreeMap<String, StyleValue>,
}

impl Appearance {
    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.attrs.get(name)
    }

    pub fn set(&mut self, name: &str, value: StyleValue) {
        self.attrs.insert(name.to_string(), value);
    }

    pub fn clear(&mut self) {
        self.attrs.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    pub fn background(&self) -> Option<Paint> {
        self.get("background_color").and_then(StyleValue::as_paint)
    }

    pub fn border_color(&self) -> Option<Color> {
        self.get("border_color").and_then(StyleValue::as_color)
    }

    pub fn border_widths(&self) -> Edges {
        self.edges("border_widths")
    }

    pub fn padding(&self) -> Edges {
        self.edges("padding")
    }

    pub fn margin(&self) -> Edges {
        self.edges("margin")
    }

    pub fn text_color(&self) -> Option<Color> {
        self.get("text_color").and_then(StyleValue::as_color)
    }

    pub fn font(&self) -> Option<FontSpec> {
        self.get("font").and_then(StyleValue::as_font)
    }

    pub fn shadowed(&self) -> bool {
        self.get("shadowed").and_then(StyleValue::as_bool).unwrap_or(false)
    }

    fn edges(&self, name: &str) -> Edges {
        self.get(name).map(Edges::from_value).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vista_engine::paint::palette;

    // ── Edges ─────────────────────────────────────────────────────────────

    #[test]
    fn edges_from_themed_values() {
        assert_eq!(Edges::from_value(&StyleValue::Number(1.0)), Edges::all(1.0));
        assert_eq!(
            Edges::from_value(&StyleValue::Pair(6.0, 2.0)),
            Edges { top: 2.0, right: 6.0, bottom: 2.0, left: 6.0 },
        );
        assert_eq!(
            Edges::from_value(&StyleValue::Quad(0.0, 2.0, 2.0, 2.0)),
            Edges { top: 0.0, right: 2.0, bottom: 2.0, left: 2.0 },
        );
        assert!(Edges::from_value(&StyleValue::Unset).is_zero());
    }

    // ── Appearance ────────────────────────────────────────────────────────

    #[test]
    fn typed_getters() {
        let mut a = Appearance::default();
        a.set("background_color", StyleValue::Gradient(palette::WHITE, palette::LIGHT_GRAY));
        a.set("border_widths", StyleValue::Unset);
        a.set("padding", StyleValue::Pair(6.0, 6.0));
        a.set("shadowed", StyleValue::Bool(true));

        assert_eq!(a.background(), Some(Paint::gradient(palette::WHITE, palette::LIGHT_GRAY)));
        assert!(a.border_widths().is_zero());
        assert_eq!(a.padding().h(), 12.0);
        assert!(a.margin().is_zero());
        assert!(a.shadowed());
        assert_eq!(a.text_color(), None);
    }
}

use vista_engine::paint::{Color, Paint};

/// A font descriptor. Loading the actual face is the renderer's business.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontSpec {
    pub size: u16,
    pub bold: bool,
}

impl FontSpec {
    pub const fn regular(size: u16) -> Self {
        Self { size, bold: false }
    }

    pub const fn bold(size: u16) -> Self {
        Self { size, bold: true }
    }
}

/// A themed attribute value.
///
/// The resolver never looks inside these; only the view's stylization step
/// and the renderer interpret them.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// Explicitly "nothing" (e.g. a label with no border at all).
    Unset,
    Bool(bool),
    Number(f32),
    Pair(f32, f32),
    /// Per-edge values: top, right, bottom, left.
    Quad(f32, f32, f32, f32),
    Color(Color),
    /// Vertical gradient, top then bottom.
    Gradient(Color, Color),
    Font(FontSpec),
    Text(String),
}

impl StyleValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StyleValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f32> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            StyleValue::Color(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_font(&self) -> Option<FontSpec> {
        match self {
            StyleValue::Font(f) => Some(*f),
            _ => None,
        }
    }

    /// Colors and gradients as a fill; anything else is no fill.
    pub fn as_paint(&self) -> Option<Paint> {
        match self {
            StyleValue::Color(c) => Some(Paint::solid(*c)),
            StyleValue::Gradient(top, bottom) => Some(Paint::gradient(*top, *bottom)),
            _ => None,
        }
    }
}

impl From<bool> for StyleValue {
    fn from(v: bool) -> Self {
        StyleValue::Bool(v)
    }
}

impl From<f32> for StyleValue {
    fn from(v: f32) -> Self {
        StyleValue::Number(v)
    }
}

impl From<i32> for StyleValue {
    fn from(v: i32) -> Self {
        StyleValue::Number(v as f32)
    }
}

impl From<(f32, f32)> for StyleValue {
    fn from((a, b): (f32, f32)) -> Self {
        StyleValue::Pair(a, b)
    }
}

impl From<Color> for StyleValue {
    fn from(c: Color) -> Self {
        StyleValue::Color(c)
    }
}

impl From<(Color, Color)> for StyleValue {
    fn from((top, bottom): (Color, Color)) -> Self {
        StyleValue::Gradient(top, bottom)
    }
}

impl From<FontSpec> for StyleValue {
    fn from(f: FontSpec) -> Self {
        StyleValue::Font(f)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl<T: Into<StyleValue>> From<Option<T>> for StyleValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(StyleValue::Unset, Into::into)
    }
}

//! Named colors shared by the built-in themes.

use super::Color;

pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const NEAR_WHITE: Color = Color::rgb(250, 250, 250);
pub const WHITES_TWIN: Color = Color::rgb(245, 245, 245);
pub const LIGHT_GRAY: Color = Color::rgb(200, 200, 200);
pub const GRAY: Color = Color::rgb(128, 128, 128);
pub const DARK_GRAY: Color = Color::rgb(64, 64, 64);
pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const RED: Color = Color::rgb(255, 0, 0);
pub const GREEN: Color = Color::rgb(0, 255, 0);
pub const BLUE: Color = Color::rgb(0, 0, 255);
pub const CLEAR: Color = Color::rgba(0, 0, 0, 0);

// Accents used by the light theme.
pub const LIGHT_YELLOW: Color = Color::rgb(227, 227, 159);
pub const LIGHT_GREEN: Color = Color::rgb(173, 222, 78);
pub const DARK_GREEN: Color = Color::rgb(77, 148, 83);

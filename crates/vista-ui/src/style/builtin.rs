//! The themes shipped with the toolkit.

use vista_engine::paint::palette::*;

use super::{FontSpec, Theme, ThemeSettings, StyleValue, VisualState};

use VisualState::{Disabled, Focused, Normal, Selected};

fn v(value: impl Into<StyleValue>) -> StyleValue {
    value.into()
}

const NONE: StyleValue = StyleValue::Unset;

/// Near-white gradients with yellow-green accents.
pub fn light_theme() -> Theme {
    Theme::builder("light")
        .settings(ThemeSettings::default())
        .set_for_theme([
            (
                "View",
                vec![
                    (Normal, "background_color", v((WHITE, NEAR_WHITE))),
                    (Focused, "background_color", v((LIGHT_YELLOW, LIGHT_GREEN))),
                    (Selected, "background_color", v((LIGHT_YELLOW, LIGHT_GREEN))),
                    (Normal, "border_color", v(LIGHT_GRAY)),
                    (Normal, "border_widths", v(0)),
                    (Normal, "margin", v((6.0, 6.0))),
                    (Normal, "padding", v((0.0, 0.0))),
                    (Normal, "shadowed", v(false)),
                ],
            ),
            ("Scene", vec![(Normal, "background_color", v((NEAR_WHITE, WHITE)))]),
            (
                "Label",
                vec![
                    (Normal, "text_color", v(DARK_GRAY)),
                    (Selected, "text_color", v(DARK_GREEN)),
                    (Normal, "text_shadow_color", v(WHITE)),
                    (Normal, "text_shadow_offset", v((0.0, 1.0))),
                    (Normal, "padding", v((6.0, 6.0))),
                    (Normal, "border_widths", NONE),
                    (Normal, "font", v(FontSpec::regular(16))),
                ],
            ),
            (
                "Button",
                vec![
                    (Normal, "background_color", v((WHITE, LIGHT_GRAY))),
                    (Focused, "background_color", v(LIGHT_YELLOW)),
                    (Normal, "text_color", v(DARK_GRAY)),
                    (Normal, "font", v(FontSpec::bold(16))),
                    (Normal, "border_widths", v(1)),
                    (Normal, "border_color", v(LIGHT_GRAY)),
                ],
            ),
            (
                "ImageButton",
                vec![
                    (Normal, "background_color", v((WHITE, LIGHT_GRAY))),
                    (Focused, "background_color", v(LIGHT_YELLOW)),
                    (Normal, "border_color", v(LIGHT_GRAY)),
                    (Normal, "border_widths", v(1)),
                    (Normal, "padding", v((6.0, 6.0))),
                ],
            ),
            (
                "ScrollbarThumbView",
                vec![
                    (Normal, "background_color", v((WHITE, LIGHT_GRAY))),
                    (Focused, "background_color", v((LIGHT_YELLOW, LIGHT_GREEN))),
                    (Normal, "border_widths", v(1)),
                ],
            ),
            (
                "ScrollbarView",
                vec![
                    (Normal, "background_color", v(NEAR_WHITE)),
                    (Normal, "border_widths", StyleValue::Quad(1.0, 1.0, 0.0, 0.0)),
                ],
            ),
            (
                "ScrollView",
                vec![
                    (Normal, "hole_color", v(WHITES_TWIN)),
                    (Normal, "border_widths", v(1)),
                ],
            ),
            (
                "SliderTrackView",
                vec![
                    (Normal, "background_color", v((NEAR_WHITE, WHITE))),
                    (Normal, "value_color", v((LIGHT_YELLOW, LIGHT_GREEN))),
                    (Normal, "border_widths", v(1)),
                ],
            ),
            (
                "SliderView",
                vec![
                    (Normal, "background_color", v(CLEAR)),
                    (Normal, "border_widths", NONE),
                ],
            ),
            (
                "ImageView",
                vec![
                    (Normal, "background_color", NONE),
                    (Normal, "padding", v((0.0, 0.0))),
                ],
            ),
            (
                "Checkbox",
                vec![
                    (Normal, "background_color", v(CLEAR)),
                    (Normal, "padding", v((0.0, 0.0))),
                    (Focused, "check_label.background_color", v((LIGHT_YELLOW, LIGHT_GREEN))),
                    (Normal, "check_label.border_widths", v(1)),
                    (Normal, "label.background_color", v(CLEAR)),
                ],
            ),
            ("SpinnerView", vec![(Normal, "border_widths", NONE)]),
            (
                "DialogView",
                vec![
                    (Normal, "background_color", v((WHITE, LIGHT_GRAY))),
                    (Normal, "shadowed", v(true)),
                ],
            ),
            (
                "AlertView",
                vec![
                    (Normal, "title_label.background_color", v(GRAY)),
                    (Normal, "title_label.text_color", v(WHITE)),
                    (Normal, "title_label.text_shadow_offset", NONE),
                    (Normal, "message_label.background_color", v(CLEAR)),
                    (Normal, "font", v(FontSpec::regular(16))),
                    (Normal, "padding", v((6.0, 6.0))),
                ],
            ),
            (
                "NotificationView",
                vec![
                    (Normal, "background_color", v((LIGHT_YELLOW, LIGHT_GREEN))),
                    (Normal, "border_color", v(DARK_GREEN)),
                    (Normal, "border_widths", StyleValue::Quad(0.0, 2.0, 2.0, 2.0)),
                    (Normal, "padding", v((0.0, 0.0))),
                    (Normal, "message_label.background_color", v(CLEAR)),
                ],
            ),
            (
                "SelectView",
                vec![
                    (Normal, "disclosure_triangle_color", v(DARK_GRAY)),
                    (Normal, "border_widths", v(1)),
                    (Normal, "top_label.focusable", v(false)),
                ],
            ),
            (
                "TextField",
                vec![
                    (Focused, "label.background_color", v((LIGHT_YELLOW, LIGHT_GREEN))),
                    (Normal, "placeholder_text_color", v(LIGHT_GRAY)),
                    (Normal, "border_widths", v(1)),
                    (Normal, "text_color", v(BLACK)),
                    (Disabled, "text_color", v(LIGHT_GRAY)),
                    (Normal, "blink_cursor", v(true)),
                    (Normal, "cursor_blink_duration", v(450)),
                ],
            ),
            (
                "GridView",
                vec![
                    (Normal, "background_color", v(WHITE)),
                    (Normal, "line_color", v(LIGHT_GRAY)),
                ],
            ),
        ])
        .build()
}

/// Red on black, with a small 8px font.
pub fn dracula_theme() -> Theme {
    let font = FontSpec::regular(8);
    let bold = FontSpec::bold(8);

    Theme::builder("dracula")
        .settings(ThemeSettings::default())
        .set_for_theme([
            (
                "View",
                vec![
                    (Normal, "background_color", v(BLACK)),
                    (Focused, "background_color", v(RED)),
                    (Selected, "background_color", v(RED)),
                    (Normal, "border_color", v(RED)),
                    (Normal, "border_widths", v(0)),
                    (Normal, "margin", v((6.0, 6.0))),
                    (Normal, "padding", v((0.0, 0.0))),
                    (Normal, "shadowed", v(false)),
                ],
            ),
            ("Scene", vec![(Normal, "background_color", v(BLACK))]),
            (
                "Label",
                vec![
                    (Normal, "text_color", v(RED)),
                    (Selected, "text_color", v(BLACK)),
                    (Normal, "text_shadow_color", v(RED)),
                    (Normal, "text_shadow_offset", v((0.0, 1.0))),
                    (Normal, "padding", v((6.0, 6.0))),
                    (Normal, "border_widths", NONE),
                    (Normal, "font", v(font)),
                ],
            ),
            (
                "Button",
                vec![
                    (Normal, "background_color", v(BLACK)),
                    (Focused, "background_color", v(RED)),
                    (Normal, "text_color", v(RED)),
                    (Focused, "text_color", v(BLACK)),
                    (Normal, "font", v(bold)),
                    (Normal, "border_widths", v(1)),
                    (Normal, "border_color", v(RED)),
                    (Normal, "text_shadow_color", v(RED)),
                    (Normal, "text_shadow_offset", v((0.0, 1.0))),
                ],
            ),
            (
                "ImageButton",
                vec![
                    (Normal, "background_color", v(BLACK)),
                    (Focused, "background_color", v(RED)),
                    (Normal, "border_color", v(RED)),
                    (Normal, "border_widths", v(1)),
                    (Normal, "padding", v((6.0, 6.0))),
                ],
            ),
            (
                "ScrollbarThumbView",
                vec![
                    (Normal, "background_color", v(BLACK)),
                    (Focused, "background_color", v(RED)),
                    (Normal, "border_widths", v(1)),
                ],
            ),
            (
                "ScrollbarView",
                vec![
                    (Normal, "background_color", v(BLACK)),
                    (Normal, "border_widths", StyleValue::Quad(1.0, 1.0, 0.0, 0.0)),
                ],
            ),
            (
                "ScrollView",
                vec![
                    (Normal, "hole_color", v(RED)),
                    (Normal, "border_widths", v(1)),
                ],
            ),
            (
                "SliderTrackView",
                vec![
                    (Normal, "background_color", v(BLACK)),
                    (Normal, "value_color", v(RED)),
                    (Normal, "border_widths", v(1)),
                ],
            ),
            (
                "SliderView",
                vec![
                    (Normal, "background_color", v(BLACK)),
                    (Normal, "border_widths", NONE),
                ],
            ),
            (
                "ImageView",
                vec![
                    (Normal, "background_color", v(CLEAR)),
                    (Normal, "padding", v((0.0, 0.0))),
                ],
            ),
            (
                "Checkbox",
                vec![
                    (Normal, "background_color", v(BLACK)),
                    (Normal, "padding", v((0.0, 0.0))),
                    (Focused, "check_label.background_color", v(RED)),
                    (Normal, "check_label.border_widths", v(1)),
                    (Normal, "label.background_color", v(CLEAR)),
                ],
            ),
            ("SpinnerView", vec![(Normal, "border_widths", NONE)]),
            (
                "DialogView",
                vec![
                    (Normal, "background_color", v(BLACK)),
                    (Normal, "shadowed", v(true)),
                    (Normal, "border_widths", v(1)),
                ],
            ),
            (
                "AlertView",
                vec![
                    (Normal, "title_label.background_color", v(BLACK)),
                    (Normal, "title_label.text_color", v(RED)),
                    (Normal, "title_label.border_widths", v(1)),
                    (Normal, "title_label.text_shadow_offset", NONE),
                    (Normal, "message_label.background_color", v(CLEAR)),
                    (Normal, "font", v(font)),
                    (Normal, "padding", v((6.0, 6.0))),
                ],
            ),
            (
                "NotificationView",
                vec![
                    (Normal, "background_color", v(BLACK)),
                    (Normal, "border_color", v(RED)),
                    (Normal, "border_widths", StyleValue::Quad(0.0, 2.0, 2.0, 2.0)),
                    (Normal, "padding", v((0.0, 0.0))),
                    (Normal, "message_label.background_color", v(CLEAR)),
                ],
            ),
            (
                "SelectView",
                vec![
                    (Normal, "disclosure_triangle_color", v(BLACK)),
                    (Normal, "border_widths", v(1)),
                    (Normal, "top_label.focusable", v(false)),
                ],
            ),
            (
                "TextField",
                vec![
                    (Focused, "label.background_color", v(BLACK)),
                    (Focused, "text_color", v(RED)),
                    (Normal, "placeholder_text_color", v(RED)),
                    (Normal, "border_widths", v(1)),
                    (Normal, "text_color", v(RED)),
                    (Normal, "background_color", v(BLACK)),
                    (Disabled, "text_color", v(RED)),
                    (Normal, "blink_cursor", v(true)),
                    (Normal, "cursor_blink_duration", v(450)),
                ],
            ),
            (
                "GridView",
                vec![
                    (Normal, "background_color", v(BLACK)),
                    (Normal, "line_color", v(RED)),
                ],
            ),
        ])
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{ClassRegistry, resolve};

    #[test]
    fn light_button_layers_over_label_and_view() {
        let theme = light_theme();
        let chain = ClassRegistry::with_builtin().chain("Button", "View").unwrap();
        let style = resolve(&chain, None, &theme);

        assert_eq!(style.get("background_color"), Some(&v((WHITE, LIGHT_GRAY))));
        assert_eq!(style.get("font"), Some(&v(FontSpec::bold(16))));
        assert_eq!(style.get("padding"), Some(&v((6.0, 6.0))));
        assert_eq!(style.get("margin"), Some(&v((6.0, 6.0))));
        assert_eq!(style.get("border_widths"), Some(&v(1)));
    }

    #[test]
    fn dracula_focused_button_inverts_text() {
        let theme = dracula_theme();
        let chain = ClassRegistry::with_builtin().chain("Button", "View").unwrap();
        let style = resolve(&chain, Some(Focused), &theme);

        assert_eq!(style.get("background_color"), Some(&v(RED)));
        assert_eq!(style.get("text_color"), Some(&v(BLACK)));
        assert_eq!(style.get("font"), Some(&v(FontSpec::bold(8))));
    }

    #[test]
    fn alert_carries_key_paths_for_its_labels() {
        let theme = light_theme();
        let chain = ClassRegistry::with_builtin().chain("AlertView", "View").unwrap();
        let style = resolve(&chain, None, &theme);

        assert_eq!(style.get("title_label.text_color"), Some(&v(WHITE)));
        assert_eq!(style.get("title_label.text_shadow_offset"), Some(&NONE));
        assert_eq!(style.get("shadowed"), Some(&v(true)));
    }
}

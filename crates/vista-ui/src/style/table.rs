use std::collections::HashMap;

use super::{StyleKey, StyleValue, VisualState};

/// Attributes authored for one `(class, state)` pair.
pub type StyleCell = HashMap<StyleKey, StyleValue>;

/// `class → state → (key → value)`.
///
/// Keys are unique per cell; setting a key again overwrites it.
#[derive(Debug, Clone, Default)]
pub struct StyleTable {
    classes: HashMap<String, HashMap<VisualState, StyleCell>>,
}

impl StyleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a single attribute.
    pub fn set(
        &mut self,
        class: &str,
        state: VisualState,
        key: impl Into<StyleKey>,
        value: impl Into<StyleValue>,
    ) {
        self.classes
            .entry(class.to_string())
            .or_default()
            .entry(state)
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Sets several attributes of one class, in order.
    pub fn set_for_class<'k, I>(&mut self, class: &str, params: I)
    where
        I: IntoIterator<Item = (VisualState, &'k str, StyleValue)>,
    {
        for (state, key, value) in params {
            self.set(class, state, key, value);
        }
    }

    /// Sets attributes for many classes at once.
    pub fn set_for_theme<'c, 'k, I, P>(&mut self, params: I)
    where
        I: IntoIterator<Item = (&'c str, P)>,
        P: IntoIterator<Item = (VisualState, &'k str, StyleValue)>,
    {
        for (class, class_params) in params {
            self.set_for_class(class, class_params);
        }
    }

    /// The authored cell, if anything was set for `(class, state)`.
    pub fn cell(&self, class: &str, state: VisualState) -> Option<&StyleCell> {
        self.classes.get(class).and_then(|states| states.get(&state))
    }

    /// Classes with at least one authored attribute.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vista_engine::paint::palette;

    #[test]
    fn later_set_overwrites() {
        let mut t = StyleTable::new();
        t.set("View", VisualState::Normal, "border_widths", 0);
        t.set("View", VisualState::Normal, "border_widths", 2);
        let cell = t.cell("View", VisualState::Normal).unwrap();
        assert_eq!(cell.len(), 1);
        assert_eq!(cell[&StyleKey::attr("border_widths")], StyleValue::Number(2.0));
    }

    #[test]
    fn batched_setters_fill_cells() {
        let mut t = StyleTable::new();
        t.set_for_theme([
            (
                "Button",
                vec![
                    (VisualState::Normal, "text_color", StyleValue::from(palette::DARK_GRAY)),
                    (
                        VisualState::Focused,
                        "background_color",
                        StyleValue::from(palette::LIGHT_YELLOW),
                    ),
                ],
            ),
            (
                "Checkbox",
                vec![(VisualState::Normal, "check_label.border_widths", StyleValue::from(1))],
            ),
        ]);

        assert!(t.cell("Button", VisualState::Normal).is_some());
        assert!(t.cell("Button", VisualState::Focused).is_some());
        assert!(t.cell("Button", VisualState::Disabled).is_none());
        let cb = t.cell("Checkbox", VisualState::Normal).unwrap();
        assert!(cb.contains_key(&StyleKey::parse("check_label.border_widths")));
    }
}

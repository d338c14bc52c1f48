use std::collections::HashMap;
use std::sync::Arc;

use super::{ClassChain, StyleKey, StyleTable, StyleValue, VisualState, resolve};

/// Scalar metrics a theme carries besides its style table.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ThemeSettings {
    pub label_height: f32,
    pub button_height: f32,
    pub shadow_size: f32,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        // 16px font plus 6px padding above and below.
        Self {
            label_height: 28.0,
            button_height: 28.0,
            shadow_size: 140.0,
        }
    }
}

/// Mutable authoring surface; [`ThemeBuilder::build`] freezes it.
#[derive(Debug, Clone)]
pub struct ThemeBuilder {
    name: String,
    table: StyleTable,
    settings: ThemeSettings,
}

impl ThemeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: StyleTable::new(),
            settings: ThemeSettings::default(),
        }
    }

    pub fn set(
        mut self,
        class: &str,
        state: VisualState,
        key: impl Into<StyleKey>,
        value: impl Into<StyleValue>,
    ) -> Self {
        self.table.set(class, state, key, value);
        self
    }

    pub fn set_for_class<'k, I>(mut self, class: &str, params: I) -> Self
    where
        I: IntoIterator<Item = (VisualState, &'k str, StyleValue)>,
    {
        self.table.set_for_class(class, params);
        self
    }

    pub fn set_for_theme<'c, 'k, I, P>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (&'c str, P)>,
        P: IntoIterator<Item = (VisualState, &'k str, StyleValue)>,
    {
        self.table.set_for_theme(params);
        self
    }

    pub fn settings(mut self, settings: ThemeSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn build(self) -> Theme {
        Theme {
            name: self.name,
            table: self.table,
            settings: self.settings,
        }
    }
}

/// An immutable, shareable set of style attributes.
#[derive(Debug, Clone)]
pub struct Theme {
    name: String,
    table: StyleTable,
    settings: ThemeSettings,
}

impl Theme {
    pub fn builder(name: impl Into<String>) -> ThemeBuilder {
        ThemeBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> &StyleTable {
        &self.table
    }

    pub fn settings(&self) -> &ThemeSettings {
        &self.settings
    }

    /// A single resolved attribute, or `default` when no class in the chain sets it.
    pub fn value(
        &self,
        chain: &ClassChain,
        attr: &str,
        default: StyleValue,
        state: Option<VisualState>,
    ) -> StyleValue {
        resolve(chain, state, self).get_or(attr, default)
    }
}

/// Themes by name.
#[derive(Debug, Clone, Default)]
pub struct ThemeStore {
    themes: HashMap<String, Arc<Theme>>,
}

impl ThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// `light` and `dracula`.
    pub fn builtin() -> Self {
        let mut store = Self::new();
        store.insert(super::builtin::light_theme());
        store.insert(super::builtin::dracula_theme());
        store
    }

    /// Adds `theme`, replacing any theme of the same name.
    pub fn insert(&mut self, theme: Theme) -> Arc<Theme> {
        let theme = Arc::new(theme);
        self.themes.insert(theme.name().to_string(), Arc::clone(&theme));
        theme
    }

    pub fn get(&self, name: &str) -> Option<Arc<Theme>> {
        self.themes.get(name).cloned()
    }

    /// Sorted theme names.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

use std::collections::BTreeMap;
use std::collections::btree_map;

use super::{ClassChain, ClassRegistry, StyleKey, StyleValue, Theme, VisualState};
use crate::error::StyleError;

/// The flattened style of one class in one state.
///
/// Both plain attributes and key-path entries live here; key-path entries are
/// applied to named descendants by the view tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap {
    entries: BTreeMap<StyleKey, StyleValue>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a dotted key such as `"padding"` or `"label.text_color"`.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(&StyleKey::parse(key))
    }

    pub fn get_key(&self, key: &StyleKey) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    pub fn get_or(&self, key: &str, default: StyleValue) -> StyleValue {
        self.get(key).cloned().unwrap_or(default)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, StyleKey, StyleValue> {
        self.entries.iter()
    }

    /// Entries addressing the styled view itself.
    pub fn own_attributes(&self) -> impl Iterator<Item = (&StyleKey, &StyleValue)> {
        self.entries.iter().filter(|(k, _)| !k.is_path())
    }

    /// Entries addressing named descendants.
    pub fn path_overrides(&self) -> impl Iterator<Item = (&StyleKey, &StyleValue)> {
        self.entries.iter().filter(|(k, _)| k.is_path())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn merge_cell<'a>(&mut self, cell: impl IntoIterator<Item = (&'a StyleKey, &'a StyleValue)>) {
        for (k, v) in cell {
            self.entries.insert(k.clone(), v.clone());
        }
    }
}

impl<'a> IntoIterator for &'a StyleMap {
    type Item = (&'a StyleKey, &'a StyleValue);
    type IntoIter = btree_map::Iter<'a, StyleKey, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Flattens `theme` for `chain` in `state` (`Normal` when `None`).
///
/// Classes are layered base first, leaf last. Within a class a non-normal
/// state lies over that class's normal entries, so the precedence is
/// leaf state, leaf normal, ancestor state, ancestor normal.
pub fn resolve(chain: &ClassChain, state: Option<VisualState>, theme: &Theme) -> StyleMap {
    let state = state.unwrap_or_default();
    let table = theme.table();
    let mut style = StyleMap::new();

    for class in chain.base_to_leaf() {
        if state != VisualState::Normal {
            if let Some(normal) = table.cell(class, VisualState::Normal) {
                style.merge_cell(normal);
            }
        }
        if let Some(cell) = table.cell(class, state) {
            style.merge_cell(cell);
        }
    }

    style
}

/// Class registry plus the base class every chain ends at.
#[derive(Debug, Clone)]
pub struct StyleResolver {
    registry: ClassRegistry,
    base: String,
}

impl StyleResolver {
    pub fn new(registry: ClassRegistry, base: impl Into<String>) -> Self {
        Self {
            registry,
            base: base.into(),
        }
    }

    pub fn registry(&self) -> &ClassRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ClassRegistry {
        &mut self.registry
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn chain(&self, class: &str) -> Result<ClassChain, StyleError> {
        self.registry.chain(class, &self.base)
    }

    pub fn resolve_class(
        &self,
        class: &str,
        state: Option<VisualState>,
        theme: &Theme,
    ) -> Result<StyleMap, StyleError> {
        Ok(resolve(&self.chain(class)?, state, theme))
    }

    pub fn value(
        &self,
        class: &str,
        attr: &str,
        default: StyleValue,
        state: Option<VisualState>,
        theme: &Theme,
    ) -> Result<StyleValue, StyleError> {
        Ok(self.resolve_class(class, state, theme)?.get_or(attr, default))
    }
}

impl Default for StyleResolver {
    fn default() -> Self {
        Self::new(ClassRegistry::with_builtin(), "View")
    }
}

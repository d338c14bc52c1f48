use std::collections::{HashMap, HashSet};

use crate::error::StyleError;

/// Declared single-parent hierarchy of view classes, used only for style lookup.
///
/// Classes are plain names, so composition-based view types take part just
/// like anything else: a view names its class, the registry knows the parent.
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    parents: HashMap<String, Option<String>>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The hierarchy the built-in themes are authored against.
    pub fn with_builtin() -> Self {
        let mut reg = Self::new();
        reg.declare("View", None);
        for class in [
            "Scene",
            "Label",
            "ImageView",
            "Checkbox",
            "TextField",
            "ScrollView",
            "ScrollbarView",
            "ScrollbarThumbView",
            "SliderView",
            "SliderTrackView",
            "SpinnerView",
            "GridView",
            "SelectView",
            "DialogView",
            "NotificationView",
        ] {
            reg.declare(class, Some("View"));
        }
        reg.declare("Button", Some("Label"));
        reg.declare("ImageButton", Some("ImageView"));
        reg.declare("AlertView", Some("DialogView"));
        reg
    }

    /// Declares `class` with its first parent; redeclaring replaces the parent.
    pub fn declare(&mut self, class: &str, parent: Option<&str>) -> &mut Self {
        self.parents.insert(class.to_string(), parent.map(str::to_string));
        self
    }

    pub fn contains(&self, class: &str) -> bool {
        self.parents.contains_key(class)
    }

    pub fn parent(&self, class: &str) -> Option<&str> {
        self.parents.get(class).and_then(|p| p.as_deref())
    }

    /// Builds the chain from `class` up to and including `base`.
    pub fn chain(&self, class: &str, base: &str) -> Result<ClassChain, StyleError> {
        let mut classes = vec![class.to_string()];
        let mut seen: HashSet<&str> = HashSet::from([class]);
        let mut current = class;

        while current != base {
            let parent = self
                .parent(current)
                .ok_or_else(|| StyleError::configuration(class, base))?;
            if !seen.insert(parent) {
                return Err(StyleError::configuration(class, base));
            }
            classes.push(parent.to_string());
            current = parent;
        }

        Ok(ClassChain { classes })
    }
}

/// Ordered class names from a concrete class (first) to the base class (last).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ClassChain {
    classes: Vec<String>,
}

impl ClassChain {
    /// The concrete class.
    pub fn leaf(&self) -> &str {
        &self.classes[0]
    }

    pub fn base(&self) -> &str {
        &self.classes[self.classes.len() - 1]
    }

    /// Most specific first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Most general first; the order styles are layered in.
    pub fn base_to_leaf(&self) -> impl Iterator<Item = &str> {
        self.iter().rev()
    }

    pub fn is_a(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

use std::fmt;
use std::sync::Arc;

use vista_engine::coords::Rect;

use super::{Appearance, ViewHandler, ViewId};
use crate::style::{ClassChain, StyleMap, StyleValue, VisualState};

/// One rectangular view in the tree.
pub struct ViewNode {
    pub(crate) class: Arc<ClassChain>,
    /// Position and size in the parent's coordinate space.
    pub frame: Rect,
    pub(crate) state: VisualState,
    pub draggable: bool,
    pub focusable: bool,
    pub hidden: bool,
    pub(crate) parent: Option<ViewId>,
    /// Back to front.
    pub(crate) children: Vec<ViewId>,
    pub(crate) name: Option<String>,
    pub(crate) style: StyleMap,
    pub(crate) appearance: Appearance,
    pub(crate) handler: Option<Box<dyn ViewHandler>>,
}

impl ViewNode {
    pub fn new(class: Arc<ClassChain>, frame: Rect) -> Self {
        Self {
            class,
            frame,
            state: VisualState::Normal,
            draggable: false,
            focusable: true,
            hidden: false,
            parent: None,
            children: Vec::new(),
            name: None,
            style: StyleMap::new(),
            appearance: Appearance::default(),
            handler: None,
        }
    }

    pub fn with_handler(mut self, handler: impl ViewHandler) -> Self {
        self.handler = Some(Box::new(handler));
        self
    }

    pub fn class(&self) -> &ClassChain {
        &self.class
    }

    pub fn state(&self) -> VisualState {
        self.state
    }

    pub fn parent(&self) -> Option<ViewId> {
        self.parent
    }

    pub fn children(&self) -> &[ViewId] {
        &self.children
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The resolved style from the last stylization.
    pub fn style(&self) -> &StyleMap {
        &self.style
    }

    /// The attributes applied by the last stylization, key-path overrides included.
    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    pub fn is_enabled(&self) -> bool {
        self.state != VisualState::Disabled
    }

    /// Whether hit-testing may return this view.
    pub fn is_interactive(&self) -> bool {
        !self.hidden && self.is_enabled()
    }

    /// Applies one themed attribute. Behaviour flags are set directly; all
    /// other attributes land in the appearance.
    pub(crate) fn apply_attribute(&mut self, name: &str, value: &StyleValue) {
        let flag = match name {
            "focusable" => Some(&mut self.focusable),
            "draggable" => Some(&mut self.draggable),
            "hidden" => Some(&mut self.hidden),
            _ => None,
        };
        match (flag, value.as_bool()) {
            (Some(flag), Some(b)) => *flag = b,
            _ => self.appearance.set(name, value.clone()),
        }
    }
}

impl fmt::Debug for ViewNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewNode")
            .field("class", &self.class.leaf())
            .field("name", &self.name)
            .field("frame", &self.frame)
            .field("state", &self.state)
            .field("children", &self.children.len())
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

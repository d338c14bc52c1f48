use vista_engine::coords::Rect;

use super::ViewHandler;
use crate::style::VisualState;

/// Declarative description of a view subtree, turned into views by
/// [`UiContext::build`](crate::context::UiContext::build).
///
/// ```rust,ignore
/// let dialog = ViewBuilder::new("AlertView", Rect::new(40.0, 40.0, 300.0, 120.0))
///     .named_child("title_label", ViewBuilder::new("Label", Rect::new(0.0, 0.0, 300.0, 28.0)))
///     .named_child("message_label", ViewBuilder::new("Label", Rect::new(0.0, 28.0, 300.0, 60.0)));
/// ```
pub struct ViewBuilder {
    pub(crate) class: String,
    pub(crate) frame: Rect,
    pub(crate) handler: Option<Box<dyn ViewHandler>>,
    pub(crate) state: VisualState,
    pub(crate) draggable: bool,
    pub(crate) focusable: bool,
    pub(crate) hidden: bool,
    pub(crate) children: Vec<(Option<String>, ViewBuilder)>,
}

impl ViewBuilder {
    pub fn new(class: impl Into<String>, frame: Rect) -> Self {
        Self {
            class: class.into(),
            frame,
            handler: None,
            state: VisualState::Normal,
            draggable: false,
            focusable: true,
            hidden: false,
            children: Vec::new(),
        }
    }

    pub fn handler(mut self, handler: impl ViewHandler) -> Self {
        self.handler = Some(Box::new(handler));
        self
    }

    pub fn boxed_handler(mut self, handler: Box<dyn ViewHandler>) -> Self {
        self.handler = Some(handler);
        self
    }

    pub fn state(mut self, state: VisualState) -> Self {
        self.state = state;
        self
    }

    pub fn draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Adds an unnamed child in front of the previous ones.
    pub fn child(mut self, child: ViewBuilder) -> Self {
        self.children.push((None, child));
        self
    }

    /// Adds a child that key-paths can address as `name`.
    pub fn named_child(mut self, name: impl Into<String>, child: ViewBuilder) -> Self {
        self.children.push((Some(name.into()), child));
        self
    }
}

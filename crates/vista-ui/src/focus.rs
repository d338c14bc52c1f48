//! Keyboard focus.
//!
//! [`FocusManager`] holds the single focused view. It only records the
//! reference; the blur-then-focus transition with its callbacks and restyles
//! is driven by [`UiContext::set_focus`](crate::context::UiContext::set_focus),
//! which owns the tree the notifications go to.
//!
//! # Transition order
//!
//! 1. The previously focused view (if any, and if different) is blurred: its
//!    state drops back to `Normal`, it is restyled, its handler's `blurred`
//!    runs.
//! 2. The new reference is installed.
//! 3. The new view (if any) is focused: state `Focused`, restyle, `focused`.
//!
//! So at no instant are two views focused.

use crate::view::ViewId;

/// The single focused view, plus a counter of focus changes.
///
/// The id is weak: it does not keep the view alive, and a removed view
/// simply stops resolving.
#[derive(Debug, Default, Clone)]
pub struct FocusManager {
    focused: Option<ViewId>,
    generation: u64,
}

impl FocusManager {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn current(&self) -> Option<ViewId> {
        self.focused
    }

    #[inline]
    pub fn is_focused(&self, id: ViewId) -> bool {
        self.focused == Some(id)
    }

    /// Incremented every time a different reference is installed. The
    /// dispatcher compares it across a press to notice focus moving away.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn install(&mut self, id: Option<ViewId>) {
        if self.focused != id {
            self.focused = id;
            self.generation += 1;
        }
    }
}

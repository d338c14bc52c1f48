use vista_engine::coords::Vec2;
use vista_engine::input::{Key, MouseButton};

use crate::context::ViewCx;

/// Outcome of an input callback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EventResult {
    /// The view acted on the event.
    Consumed,
    /// The view had no use for the event.
    #[default]
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

// ── ViewHandler trait ─────────────────────────────────────────────────────

/// Application behaviour attached to a view.
///
/// Every callback has a no-op default, so a handler only overrides what it
/// reacts to. Points are in the receiving view's local space except for
/// [`mouse_motion`](ViewHandler::mouse_motion), which the scene root
/// receives in window space.
///
/// Returning `Err` abandons the rest of the current input frame; the error
/// reaches the application as [`UiError::Callback`](crate::error::UiError::Callback).
///
/// ```rust,ignore
/// struct Counter(u32);
///
/// impl ViewHandler for Counter {
///     fn mouse_up(&mut self, _cx: &mut ViewCx<'_>, _b: MouseButton, _p: Vec2) -> anyhow::Result<EventResult> {
///         self.0 += 1;
///         Ok(EventResult::Consumed)
///     }
/// }
/// ```
#[allow(unused_variables)]
pub trait ViewHandler: 'static {
    fn mouse_down(
        &mut self,
        cx: &mut ViewCx<'_>,
        button: MouseButton,
        point: Vec2,
    ) -> anyhow::Result<EventResult> {
        Ok(EventResult::Ignored)
    }

    /// The pointer moved while this (draggable) view holds the press.
    fn mouse_drag(
        &mut self,
        cx: &mut ViewCx<'_>,
        point: Vec2,
        delta: Vec2,
    ) -> anyhow::Result<EventResult> {
        Ok(EventResult::Ignored)
    }

    fn mouse_up(
        &mut self,
        cx: &mut ViewCx<'_>,
        button: MouseButton,
        point: Vec2,
    ) -> anyhow::Result<EventResult> {
        Ok(EventResult::Ignored)
    }

    fn mouse_motion(&mut self, cx: &mut ViewCx<'_>, point: Vec2) -> anyhow::Result<EventResult> {
        Ok(EventResult::Ignored)
    }

    fn key_down(
        &mut self,
        cx: &mut ViewCx<'_>,
        key: Key,
        text: Option<char>,
    ) -> anyhow::Result<EventResult> {
        Ok(EventResult::Ignored)
    }

    fn key_up(&mut self, cx: &mut ViewCx<'_>, key: Key) -> anyhow::Result<EventResult> {
        Ok(EventResult::Ignored)
    }

    /// Called after the view became the focused view and was restyled.
    fn focused(&mut self, cx: &mut ViewCx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Called after the view lost focus (or its press was released elsewhere)
    /// and was restyled.
    fn blurred(&mut self, cx: &mut ViewCx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// The view's scene became the current scene.
    fn entered(&mut self, cx: &mut ViewCx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// The view's scene stopped being the current scene.
    fn exited(&mut self, cx: &mut ViewCx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Once per frame after input, with seconds since the previous frame.
    fn update(&mut self, cx: &mut ViewCx<'_>, dt: f32) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Handler for views with no behaviour of their own.
#[derive(Debug, Default, Clone, Copy)]
pub struct Passive;

impl ViewHandler for Passive {}

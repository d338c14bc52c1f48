use vista_engine::coords::{Rect, Vec2};
use vista_engine::input::{Key, MouseButton};

use super::part_label;
use crate::context::ViewCx;
use crate::style::VisualState;
use crate::view::{EventResult, ViewBuilder, ViewHandler};

type ToggleFn = Box<dyn FnMut(&mut ViewCx<'_>, bool) -> anyhow::Result<()>>;

/// A check box followed by a text label.
///
/// The parts are named `check_label` (the box) and `label` (the text); the
/// box is `Selected` while checked, so themes style it through
/// `Checkbox.*.check_label.*` and `Label.selected.*`.
///
/// # Example
/// ```rust,ignore
/// Checkbox::new()
///     .checked(true)
///     .on_toggle(|_, on| { log::info!("shadows: {on}"); Ok(()) })
///     .view(Rect::new(10.0, 60.0, 160.0, 28.0))
/// ```
#[derive(Default)]
pub struct Checkbox {
    checked: bool,
    on_toggle: Option<ToggleFn>,
}

impl Checkbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn checked(mut self, v: bool) -> Self {
        self.checked = v;
        self
    }

    pub fn on_toggle(mut self, f: impl FnMut(&mut ViewCx<'_>, bool) -> anyhow::Result<()> + 'static) -> Self {
        self.on_toggle = Some(Box::new(f));
        self
    }

    /// The box is square with the frame's height; the text takes the rest.
    pub fn view(self, frame: Rect) -> ViewBuilder {
        let side = frame.size.y;
        let gap = 6.0;
        let text_width = (frame.size.x - side - gap).max(0.0);
        let check_state = if self.checked { VisualState::Selected } else { VisualState::Normal };

        ViewBuilder::new("Checkbox", frame)
            .named_child("check_label", part_label(Rect::new(0.0, 0.0, side, side)).state(check_state))
            .named_child("label", part_label(Rect::new(side + gap, 0.0, text_width, side)))
            .handler(self)
    }

    fn toggle(&mut self, cx: &mut ViewCx<'_>) -> anyhow::Result<EventResult> {
        self.checked = !self.checked;
        if let Some(check) = cx.child_named("check_label") {
            let state = if self.checked { VisualState::Selected } else { VisualState::Normal };
            cx.ui().set_state(check, state)?;
        }
        if let Some(f) = &mut self.on_toggle {
            f(cx, self.checked)?;
        }
        Ok(EventResult::Consumed)
    }
}

impl ViewHandler for Checkbox {
    fn mouse_down(&mut self, _cx: &mut ViewCx<'_>, _b: MouseButton, _p: Vec2) -> anyhow::Result<EventResult> {
        Ok(EventResult::Consumed)
    }

    fn mouse_up(&mut self, cx: &mut ViewCx<'_>, _b: MouseButton, _p: Vec2) -> anyhow::Result<EventResult> {
        self.toggle(cx)
    }

    fn key_down(&mut self, cx: &mut ViewCx<'_>, key: Key, _t: Option<char>) -> anyhow::Result<EventResult> {
        if key == Key::Space {
            return self.toggle(cx);
        }
        Ok(EventResult::Ignored)
    }
}

//! Stock views: handlers plus the [`ViewBuilder`] layouts they expect.
//!
//! Composite widgets name their parts (`check_label`, `title_label`, ...) so
//! themes can restyle them through key-paths.

pub mod alert;
pub mod button;
pub mod checkbox;
pub mod slider;

use vista_engine::coords::{Rect, Vec2};
use vista_engine::input::MouseButton;

use crate::context::ViewCx;
use crate::view::{EventResult, ViewBuilder, ViewHandler, ViewId};

/// A full-window scene root with the given children.
pub fn scene() -> ViewBuilder {
    ViewBuilder::new("Scene", Rect::default())
}

/// A plain, non-focusable label.
pub fn label(frame: Rect) -> ViewBuilder {
    ViewBuilder::new("Label", frame).focusable(false)
}

/// A label inside a composite that hands presses to its parent and gives
/// the parent focus.
pub(crate) fn part_label(frame: Rect) -> ViewBuilder {
    label(frame).handler(ForwardToParent)
}

/// Lets a composite react to presses landing on its parts.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct ForwardToParent;

impl ForwardToParent {
    fn parent(cx: &ViewCx<'_>) -> Option<(ViewId, Vec2)> {
        let node = cx.node()?;
        Some((node.parent()?, node.frame.origin))
    }
}

impl ViewHandler for ForwardToParent {
    fn mouse_down(
        &mut self,
        cx: &mut ViewCx<'_>,
        button: MouseButton,
        point: Vec2,
    ) -> anyhow::Result<EventResult> {
        let Some((parent, offset)) = Self::parent(cx) else {
            return Ok(EventResult::Ignored);
        };
        cx.ui().set_focus(Some(parent))?;
        let point = point + offset;
        Ok(cx.ui().deliver(parent, "mouse_down", |h, pcx| h.mouse_down(pcx, button, point))?)
    }

    fn mouse_up(
        &mut self,
        cx: &mut ViewCx<'_>,
        button: MouseButton,
        point: Vec2,
    ) -> anyhow::Result<EventResult> {
        let Some((parent, offset)) = Self::parent(cx) else {
            return Ok(EventResult::Ignored);
        };
        let point = point + offset;
        Ok(cx.ui().deliver(parent, "mouse_up", |h, pcx| h.mouse_up(pcx, button, point))?)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use vista_engine::input::{InputEvent, InputFrame};

    use super::*;
    use crate::config::UiConfig;
    use crate::context::UiContext;
    use crate::dispatch::Dispatcher;
    use crate::style::ThemeStore;

    type Log = Rc<RefCell<Vec<String>>>;

    struct Composite(Log);

    impl ViewHandler for Composite {
        fn mouse_down(&mut self, _cx: &mut ViewCx<'_>, _b: MouseButton, p: Vec2) -> anyhow::Result<EventResult> {
            self.0.borrow_mut().push(format!("down({},{})", p.x, p.y));
            Ok(EventResult::Consumed)
        }

        fn mouse_up(&mut self, _cx: &mut ViewCx<'_>, _b: MouseButton, p: Vec2) -> anyhow::Result<EventResult> {
            self.0.borrow_mut().push(format!("up({},{})", p.x, p.y));
            Ok(EventResult::Consumed)
        }

        fn focused(&mut self, _cx: &mut ViewCx<'_>) -> anyhow::Result<()> {
            self.0.borrow_mut().push("focused".into());
            Ok(())
        }

        fn blurred(&mut self, _cx: &mut ViewCx<'_>) -> anyhow::Result<()> {
            self.0.borrow_mut().push("blurred".into());
            Ok(())
        }
    }

    /// scene ⊃ composite (10,10,100,20) ⊃ part (30,0,70,20)
    fn setup(log: &Log) -> (UiContext, ViewId) {
        let mut ui = UiContext::new(UiConfig::default(), ThemeStore::builtin()).unwrap();
        let root = ui
            .build(scene().child(
                ViewBuilder::new("View", Rect::new(10.0, 10.0, 100.0, 20.0))
                    .named_child("part", part_label(Rect::new(30.0, 0.0, 70.0, 20.0)))
                    .handler(Composite(Rc::clone(log))),
            ))
            .unwrap();
        ui.push_scene(root).unwrap();
        let composite = ui.tree().children(root)[0];
        (ui, composite)
    }

    fn run(ui: &mut UiContext, d: &mut Dispatcher, events: impl IntoIterator<Item = InputEvent>) {
        let mut frame: InputFrame = events.into_iter().collect();
        d.dispatch_frame(ui, &mut frame).unwrap();
    }

    #[test]
    fn part_press_focuses_and_forwards_to_the_composite() {
        let log = Log::default();
        let (mut ui, composite) = setup(&log);
        let mut d = Dispatcher::new();
        run(&mut ui, &mut d, [
            InputEvent::pointer_down(MouseButton::Left, 50.0, 15.0),
            InputEvent::pointer_up(MouseButton::Left, 52.0, 15.0),
        ]);

        assert_eq!(*log.borrow(), ["focused", "down(40,5)", "up(42,5)"]);
        assert_eq!(ui.focused(), Some(composite));
    }

    #[test]
    fn part_released_outside_blurs_the_composite_once() {
        let log = Log::default();
        let (mut ui, _) = setup(&log);
        let mut d = Dispatcher::new();
        run(&mut ui, &mut d, [InputEvent::pointer_down(MouseButton::Left, 50.0, 15.0)]);
        assert!(d.gesture().is_some());

        run(&mut ui, &mut d, [InputEvent::pointer_up(MouseButton::Left, 300.0, 300.0)]);
        assert_eq!(*log.borrow(), ["focused", "down(40,5)", "blurred"]);
        assert_eq!(ui.focused(), None);
        assert!(d.gesture().is_none());
    }
}

use vista_engine::coords::{Rect, Vec2};
use vista_engine::input::MouseButton;

use crate::context::ViewCx;
use crate::view::{EventResult, ViewBuilder, ViewHandler};

type ChangeFn = Box<dyn FnMut(&mut ViewCx<'_>, f32) -> anyhow::Result<()>>;

const THUMB_WIDTH: f32 = 12.0;

/// A horizontal slider: a `track` and a draggable `thumb`, value in `0..=1`.
///
/// # Example
/// ```rust,ignore
/// Slider::new(0.5)
///     .on_change(|_, v| { log::info!("volume {v:.2}"); Ok(()) })
///     .view(Rect::new(10.0, 100.0, 200.0, 20.0))
/// ```
#[derive(Default)]
pub struct Slider {
    value: f32,
    on_change: Option<ChangeFn>,
}

impl Slider {
    pub fn new(value: f32) -> Self {
        Self { value: value.clamp(0.0, 1.0), on_change: None }
    }

    pub fn on_change(mut self, f: impl FnMut(&mut ViewCx<'_>, f32) -> anyhow::Result<()> + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn view(self, frame: Rect) -> ViewBuilder {
        let travel = (frame.size.x - THUMB_WIDTH).max(0.0);
        let thumb = Rect::new(self.value * travel, 0.0, THUMB_WIDTH, frame.size.y);

        ViewBuilder::new("SliderView", frame)
            .named_child(
                "track",
                ViewBuilder::new("SliderTrackView", Rect::new(0.0, 0.0, frame.size.x, frame.size.y)).focusable(false),
            )
            .named_child(
                "thumb",
                ViewBuilder::new("ScrollbarThumbView", thumb).draggable(true).handler(self),
            )
    }
}

impl ViewHandler for Slider {
    fn mouse_down(&mut self, _cx: &mut ViewCx<'_>, _b: MouseButton, _p: Vec2) -> anyhow::Result<EventResult> {
        Ok(EventResult::Consumed)
    }

    /// Moves the thumb by the horizontal delta, kept inside the slider.
    fn mouse_drag(&mut self, cx: &mut ViewCx<'_>, _point: Vec2, delta: Vec2) -> anyhow::Result<EventResult> {
        let id = cx.id();
        let tree = cx.ui().tree_mut();
        let width = tree.parent(id).and_then(|p| tree.get(p)).map_or(0.0, |n| n.frame.size.x);
        let Some(thumb) = tree.get_mut(id) else {
            return Ok(EventResult::Ignored);
        };

        let travel = (width - thumb.frame.size.x).max(0.0);
        thumb.frame.origin.x = (thumb.frame.origin.x + delta.x).clamp(0.0, travel);
        let value = if travel > 0.0 { thumb.frame.origin.x / travel } else { 0.0 };

        if value != self.value {
            self.value = value;
            if let Some(f) = &mut self.on_change {
                f(cx, value)?;
            }
        }
        Ok(EventResult::Consumed)
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
    use crate::widgets::scene;

    #[test]
    fn dragging_the_thumb_reports_clamped_values() {
        let mut ui = UiContext::new(UiConfig::default(), ThemeStore::builtin()).unwrap();
        let values = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&values);
        let root = ui
            .build(scene().child(
                Slider::new(0.0)
                    .on_change(move |_, v| {
                        sink.borrow_mut().push(v);
                        Ok(())
                    })
                    .view(Rect::new(0.0, 0.0, 112.0, 20.0)),
            ))
            .unwrap();
        ui.push_scene(root).unwrap();
        let slider = ui.tree().children(root)[0];
        let thumb = ui.tree().child_named(slider, "thumb").unwrap();

        let mut frame: InputFrame = [
            InputEvent::pointer_down(MouseButton::Left, 5.0, 5.0),
            InputEvent::pointer_move(55.0, 5.0, 50.0, 0.0),
            InputEvent::pointer_move(255.0, 5.0, 200.0, 0.0),
            InputEvent::pointer_move(300.0, 5.0, 45.0, 0.0),
            InputEvent::pointer_up(MouseButton::Left, 300.0, 5.0),
        ]
        .into_iter()
        .collect();
        Dispatcher::new().dispatch_frame(&mut ui, &mut frame).unwrap();

        assert_eq!(*values.borrow(), [0.5, 1.0]);
        assert_eq!(ui.tree().get(thumb).unwrap().frame.origin.x, 100.0);
        assert_eq!(ui.focused(), None);
    }
}

use vista_engine::coords::{Rect, Vec2};
use vista_engine::input::{Key, MouseButton};

use crate::context::ViewCx;
use crate::view::{EventResult, ViewBuilder, ViewHandler};

type ClickFn = Box<dyn FnMut(&mut ViewCx<'_>) -> anyhow::Result<()>>;

/// A push button.
///
/// A click is a press and release on the button itself; releasing elsewhere
/// blurs the button, which disarms it. `Enter` and `Space` click the focused
/// button.
///
/// # Example
/// ```rust,ignore
/// let ok = ui.build(Button::new().on_click(|cx| {
///     log::info!("clicked {:?}", cx.id());
///     Ok(())
/// }).view(Rect::new(10.0, 10.0, 80.0, 28.0)))?;
/// ```
#[derive(Default)]
pub struct Button {
    armed: bool,
    on_click: Option<ClickFn>,
}

impl Button {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callback invoked when the button is clicked.
    pub fn on_click(mut self, f: impl FnMut(&mut ViewCx<'_>) -> anyhow::Result<()> + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    pub fn view(self, frame: Rect) -> ViewBuilder {
        ViewBuilder::new("Button", frame).handler(self)
    }

    fn click(&mut self, cx: &mut ViewCx<'_>) -> anyhow::Result<EventResult> {
        self.armed = false;
        if let Some(f) = &mut self.on_click {
            f(cx)?;
        }
        Ok(EventResult::Consumed)
    }
}

impl ViewHandler for Button {
    fn mouse_down(&mut self, _cx: &mut ViewCx<'_>, button: MouseButton, _p: Vec2) -> anyhow::Result<EventResult> {
        self.armed = button == MouseButton::Left;
        Ok(EventResult::Consumed)
    }

    fn mouse_up(&mut self, cx: &mut ViewCx<'_>, _b: MouseButton, _p: Vec2) -> anyhow::Result<EventResult> {
        if !self.armed {
            return Ok(EventResult::Ignored);
        }
        self.click(cx)
    }

    fn key_down(&mut self, cx: &mut ViewCx<'_>, key: Key, _t: Option<char>) -> anyhow::Result<EventResult> {
        match key {
            Key::Enter | Key::Space => self.click(cx),
            _ => Ok(EventResult::Ignored),
        }
    }

    fn blurred(&mut self, _cx: &mut ViewCx<'_>) -> anyhow::Result<()> {
        self.armed = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use vista_engine::input::{InputEvent, InputFrame};

    use super::*;
    use crate::config::UiConfig;
    use crate::context::UiContext;
    use crate::dispatch::Dispatcher;
    use crate::style::{ThemeStore, VisualState};
    use crate::widgets::scene;

    fn setup(clicks: &Rc<Cell<u32>>) -> (UiContext, crate::view::ViewId) {
        let mut ui = UiContext::new(UiConfig::default(), ThemeStore::builtin()).unwrap();
        let counter = Rc::clone(clicks);
        let root = ui
            .build(scene().child(
                Button::new()
                    .on_click(move |_| {
                        counter.set(counter.get() + 1);
                        Ok(())
                    })
                    .view(Rect::new(10.0, 10.0, 80.0, 28.0)),
            ))
            .unwrap();
        ui.push_scene(root).unwrap();
        let button = ui.tree().children(root)[0];
        (ui, button)
    }

    fn run(ui: &mut UiContext, events: impl IntoIterator<Item = InputEvent>) {
        let mut frame: InputFrame = events.into_iter().collect();
        Dispatcher::new().dispatch_frame(ui, &mut frame).unwrap();
    }

    #[test]
    fn press_and_release_inside_clicks() {
        let clicks = Rc::new(Cell::new(0));
        let (mut ui, button) = setup(&clicks);
        run(&mut ui, [
            InputEvent::pointer_down(MouseButton::Left, 20.0, 20.0),
            InputEvent::pointer_up(MouseButton::Left, 21.0, 20.0),
        ]);
        assert_eq!(clicks.get(), 1);
        assert_eq!(ui.tree().get(button).unwrap().state(), VisualState::Focused);
    }

    #[test]
    fn release_outside_does_not_click() {
        let clicks = Rc::new(Cell::new(0));
        let (mut ui, button) = setup(&clicks);
        let mut d = Dispatcher::new();
        let mut frame: InputFrame = [
            InputEvent::pointer_down(MouseButton::Left, 20.0, 20.0),
            InputEvent::pointer_up(MouseButton::Left, 300.0, 300.0),
        ]
        .into_iter()
        .collect();
        d.dispatch_frame(&mut ui, &mut frame).unwrap();

        assert_eq!(clicks.get(), 0);
        assert_eq!(ui.focused(), None);
        assert_eq!(ui.tree().get(button).unwrap().state(), VisualState::Normal);
    }

    #[test]
    fn enter_clicks_focused_button() {
        let clicks = Rc::new(Cell::new(0));
        let (mut ui, button) = setup(&clicks);
        ui.set_focus(Some(button)).unwrap();
        run(&mut ui, [InputEvent::key_down(Key::Enter, None), InputEvent::key_down(Key::Tab, None)]);
        assert_eq!(clicks.get(), 1);
    }
}

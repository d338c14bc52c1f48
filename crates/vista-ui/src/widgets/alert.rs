use vista_engine::coords::{Rect, Vec2};
use vista_engine::input::{Key, MouseButton};

use super::part_label;
use crate::context::ViewCx;
use crate::view::{EventResult, ViewBuilder, ViewHandler};

type DismissFn = Box<dyn FnMut(&mut ViewCx<'_>) -> anyhow::Result<()>>;

/// A modal-looking message box with a `title_label` and a `message_label`.
///
/// `Enter` or `Escape` while focused hides it.
#[derive(Default)]
pub struct Alert {
    on_dismiss: Option<DismissFn>,
}

impl Alert {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_dismiss(mut self, f: impl FnMut(&mut ViewCx<'_>) -> anyhow::Result<()> + 'static) -> Self {
        self.on_dismiss = Some(Box::new(f));
        self
    }

    /// Title strip across the top, message below it.
    pub fn view(self, frame: Rect, title_height: f32) -> ViewBuilder {
        let w = frame.size.x;
        let message_height = (frame.size.y - title_height).max(0.0);
        ViewBuilder::new("AlertView", frame)
            .named_child("title_label", part_label(Rect::new(0.0, 0.0, w, title_height)))
            .named_child("message_label", part_label(Rect::new(0.0, title_height, w, message_height)))
            .handler(self)
    }

    fn dismiss(&mut self, cx: &mut ViewCx<'_>) -> anyhow::Result<EventResult> {
        let id = cx.id();
        if let Some(node) = cx.ui().tree_mut().get_mut(id) {
            node.hidden = true;
        }
        cx.ui().set_focus(None)?;
        if let Some(f) = &mut self.on_dismiss {
            f(cx)?;
        }
        Ok(EventResult::Consumed)
    }
}

impl ViewHandler for Alert {
    fn mouse_down(&mut self, _cx: &mut ViewCx<'_>, _b: MouseButton, _p: Vec2) -> anyhow::Result<EventResult> {
        Ok(EventResult::Consumed)
    }

    fn key_down(&mut self, cx: &mut ViewCx<'_>, key: Key, _t: Option<char>) -> anyhow::Result<EventResult> {
        match key {
            Key::Enter | Key::Escape => self.dismiss(cx),
            _ => Ok(EventResult::Ignored),
        }
    }
}

#[cfg(test)]
mod tests {
    use vista_engine::input::{InputEvent, InputFrame};
    use vista_engine::paint::{Paint, palette};

    use super::*;
    use crate::config::UiConfig;
    use crate::context::UiContext;
    use crate::dispatch::Dispatcher;
    use crate::style::ThemeStore;
    use crate::widgets::scene;

    #[test]
    fn parts_are_styled_by_the_alert() {
        let mut ui = UiContext::new(UiConfig::default().theme("light"), ThemeStore::builtin()).unwrap();
        let alert = ui.build(Alert::new().view(Rect::new(100.0, 100.0, 300.0, 120.0), 28.0)).unwrap();
        ui.stylize(alert).unwrap();

        let title = ui.tree().child_named(alert, "title_label").unwrap();
        let message = ui.tree().child_named(alert, "message_label").unwrap();
        let title = ui.tree().get(title).unwrap().appearance();
        assert_eq!(title.background(), Some(Paint::solid(palette::GRAY)));
        assert_eq!(title.text_color(), Some(palette::WHITE));
        assert_eq!(ui.tree().get(message).unwrap().appearance().background(), Some(Paint::solid(palette::CLEAR)));
        assert!(ui.tree().get(alert).unwrap().appearance().shadowed());
    }

    #[test]
    fn escape_hides_the_focused_alert() {
        let mut ui = UiContext::new(UiConfig::default(), ThemeStore::builtin()).unwrap();
        let root = ui
            .build(scene().child(Alert::new().view(Rect::new(100.0, 100.0, 300.0, 120.0), 28.0)))
            .unwrap();
        ui.push_scene(root).unwrap();
        let alert = ui.tree().children(root)[0];

        let mut frame: InputFrame = [
            InputEvent::pointer_down(MouseButton::Left, 150.0, 110.0),
            InputEvent::pointer_up(MouseButton::Left, 150.0, 110.0),
            InputEvent::key_down(Key::Escape, None),
        ]
        .into_iter()
        .collect();
        Dispatcher::new().dispatch_frame(&mut ui, &mut frame).unwrap();

        assert!(ui.tree().get(alert).unwrap().hidden);
        assert_eq!(ui.focused(), None);
        assert_eq!(ui.tree().hit(root, Vec2::new(150.0, 110.0)), Some(root));
    }
}

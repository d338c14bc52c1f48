//! Routing of raw input events to view callbacks.
//!
//! The [`Dispatcher`] is `Idle` or holds a [`Gesture`] (the view that took the
//! last press). Per event:
//!
//! | state | event | action |
//! |---|---|---|
//! | any | pointer down | hit-test; a hit other than a scene view gets focus and `mouse_down`, and becomes the gesture; otherwise focus is cleared |
//! | pressed | pointer move | draggable pressed view gets `mouse_drag`, else the root gets `mouse_motion` |
//! | idle | pointer move | root gets `mouse_motion` |
//! | any | pointer up | hit-test; releasing away from the pressed view blurs the press owner once and clears focus; the hit view gets `mouse_up`; gesture cleared |
//! | any | key down / up | focused view, else root; `Escape` ignored by the root pops the scene |
//! | any | quit | stop, return [`AppControl::Exit`] |

use vista_engine::coords::Vec2;
use vista_engine::input::{InputEvent, InputFrame, Key, KeyState, MouseButton, MouseButtonState};

use crate::context::UiContext;
use crate::error::Result;
use crate::view::{EventResult, ViewId};

/// Whether the host should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// A press in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gesture {
    /// The view that received `mouse_down`.
    pub view: ViewId,
    pub button: MouseButton,
    focus_generation: u64,
}

/// Per-frame input router. Holds the gesture across frames.
#[derive(Debug, Default)]
pub struct Dispatcher {
    gesture: Option<Gesture>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// The press in progress, if any.
    pub fn gesture(&self) -> Option<Gesture> {
        self.gesture
    }

    /// Forgets the press in progress without notifying anyone.
    pub fn cancel(&mut self) {
        self.gesture = None;
    }

    /// Drains one frame of events in order.
    ///
    /// Stops at the first failing callback: the error is returned and the
    /// remaining events of the frame are discarded.
    pub fn dispatch_frame(&mut self, ui: &mut UiContext, frame: &mut InputFrame) -> Result<AppControl> {
        ui.active_scene()?;
        while let Some(event) = frame.pop_event() {
            match self.dispatch(ui, &event) {
                Ok(AppControl::Continue) => {}
                Ok(AppControl::Exit) => {
                    log::info!("quit requested");
                    frame.clear();
                    return Ok(AppControl::Exit);
                }
                Err(e) => {
                    log::debug!("abandoning {} queued events: {e}", frame.len());
                    frame.clear();
                    return Err(e);
                }
            }
        }
        Ok(AppControl::Continue)
    }

    /// Routes a single event.
    pub fn dispatch(&mut self, ui: &mut UiContext, event: &InputEvent) -> Result<AppControl> {
        let root = ui.active_scene()?;
        self.prune(ui);

        match event {
            InputEvent::PointerButton(b) => {
                let point = Vec2::new(b.x, b.y);
                match b.state {
                    MouseButtonState::Pressed => self.pointer_down(ui, root, b.button, point)?,
                    MouseButtonState::Released => self.pointer_up(ui, root, b.button, point)?,
                }
            }
            InputEvent::PointerMoved(m) => {
                self.pointer_move(ui, root, Vec2::new(m.x, m.y), Vec2::new(m.dx, m.dy))?;
            }
            InputEvent::Key { key, state: KeyState::Pressed, text, .. } => {
                self.key_down(ui, root, *key, *text)?;
            }
            InputEvent::Key { key, state: KeyState::Released, .. } => {
                let key = *key;
                let target = ui.focused().unwrap_or(root);
                ui.deliver(target, "key_up", |h, cx| h.key_up(cx, key))?;
            }
            InputEvent::Focused(false) => self.cancel(),
            InputEvent::Quit => return Ok(AppControl::Exit),
            _ => {}
        }
        Ok(AppControl::Continue)
    }

    /// Drops the gesture when its view is gone or focus has moved since the
    /// press to a view outside the pressed view's ancestry. A composite
    /// taking focus for one of its parts keeps the gesture alive.
    fn prune(&mut self, ui: &UiContext) {
        let Some(g) = self.gesture else {
            return;
        };
        let gone = !ui.tree().contains(g.view);
        let focus_moved = ui.focus().generation() != g.focus_generation
            && ui.focused().is_some_and(|f| !ui.tree().is_ancestor_or_self(f, g.view));
        if gone || focus_moved {
            log::debug!("press on {:?} cancelled", g.view);
            self.gesture = None;
        }
    }

    fn pointer_down(&mut self, ui: &mut UiContext, root: ViewId, button: MouseButton, point: Vec2) -> Result<()> {
        self.gesture = None;
        let hit = ui.tree().hit(root, point);
        log::debug!("{button:?} down at ({}, {}) hit {hit:?}", point.x, point.y);

        let Some(hit) = hit.filter(|&h| h != root && !Self::is_scene(ui, h)) else {
            return ui.set_focus(None);
        };
        ui.set_focus(Some(hit))?;
        let Some(local) = ui.tree().from_window(hit, point) else {
            return Ok(());
        };
        self.gesture = Some(Gesture {
            view: hit,
            button,
            focus_generation: ui.focus().generation(),
        });
        ui.deliver(hit, "mouse_down", |h, cx| h.mouse_down(cx, button, local))?;
        Ok(())
    }

    fn pointer_move(&mut self, ui: &mut UiContext, root: ViewId, point: Vec2, delta: Vec2) -> Result<()> {
        let drag = self.gesture.and_then(|g| {
            if !ui.tree().get(g.view)?.draggable {
                return None;
            }
            Some((g.view, ui.tree().from_window(g.view, point)?))
        });

        match drag {
            Some((view, local)) => ui.deliver(view, "mouse_drag", |h, cx| h.mouse_drag(cx, local, delta))?,
            None => ui.deliver(root, "mouse_motion", |h, cx| h.mouse_motion(cx, point))?,
        };
        Ok(())
    }

    fn pointer_up(&mut self, ui: &mut UiContext, root: ViewId, button: MouseButton, point: Vec2) -> Result<()> {
        let pressed = self.gesture.take().map(|g| g.view);
        let hit = ui.tree().hit(root, point);
        log::debug!("{button:?} up at ({}, {}) hit {hit:?}", point.x, point.y);

        let Some(hit) = hit else {
            return Ok(());
        };
        if let Some(pressed) = pressed.filter(|&p| p != hit) {
            // Released elsewhere: whoever owns the press is blurred exactly
            // once. That is the focused view when it is the pressed view or
            // the composite the pressed part belongs to.
            let owns_focus = ui.focused().is_some_and(|f| ui.tree().is_ancestor_or_self(f, pressed));
            if !owns_focus {
                ui.notify_blur(pressed)?;
            }
            ui.set_focus(None)?;
        }

        let Some(local) = ui.tree().from_window(hit, point) else {
            return Ok(());
        };
        ui.deliver(hit, "mouse_up", |h, cx| h.mouse_up(cx, button, local))?;
        Ok(())
    }

    /// Bare scene backgrounds never take focus, nested ones included.
    fn is_scene(ui: &UiContext, id: ViewId) -> bool {
        ui.tree().get(id).is_some_and(|n| n.class().is_a("Scene"))
    }

    fn key_down(&mut self, ui: &mut UiContext, root: ViewId, key: Key, text: Option<char>) -> Result<()> {
        let target = ui.focused().unwrap_or(root);
        let result = ui.deliver(target, "key_down", |h, cx| h.key_down(cx, key, text))?;

        if target == root && key == Key::Escape && result == EventResult::Ignored && ui.scene_count() > 1 {
            self.cancel();
            ui.pop_scene()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use vista_engine::coords::Rect;

    use super::*;
    use crate::config::UiConfig;
    use crate::context::ViewCx;
    use crate::error::UiError;
    use crate::style::ThemeStore;
    use crate::view::{ViewBuilder, ViewHandler};

    type Log = Rc<RefCell<Vec<String>>>;

    struct Probe {
        tag: &'static str,
        log: Log,
    }

    impl Probe {
        fn push(&self, what: String) {
            self.log.borrow_mut().push(format!("{}:{what}", self.tag));
        }
    }

    impl ViewHandler for Probe {
        fn mouse_down(&mut self, _cx: &mut ViewCx<'_>, _b: MouseButton, p: Vec2) -> anyhow::Result<EventResult> {
            self.push(format!("down({},{})", p.x, p.y));
            Ok(EventResult::Consumed)
        }

        fn mouse_drag(&mut self, _cx: &mut ViewCx<'_>, p: Vec2, d: Vec2) -> anyhow::Result<EventResult> {
            self.push(format!("drag({},{};{},{})", p.x, p.y, d.x, d.y));
            Ok(EventResult::Consumed)
        }

        fn mouse_up(&mut self, _cx: &mut ViewCx<'_>, _b: MouseButton, p: Vec2) -> anyhow::Result<EventResult> {
            self.push(format!("up({},{})", p.x, p.y));
            Ok(EventResult::Consumed)
        }

        fn mouse_motion(&mut self, _cx: &mut ViewCx<'_>, p: Vec2) -> anyhow::Result<EventResult> {
            self.push(format!("motion({},{})", p.x, p.y));
            Ok(EventResult::Ignored)
        }

        fn key_down(&mut self, _cx: &mut ViewCx<'_>, key: Key, _t: Option<char>) -> anyhow::Result<EventResult> {
            self.push(format!("key({key})"));
            Ok(EventResult::Ignored)
        }
    }

    fn probe(class: &str, frame: Rect, tag: &'static str, log: &Log) -> ViewBuilder {
        ViewBuilder::new(class, frame).handler(Probe { tag, log: Rc::clone(log) })
    }

    fn setup(log: &Log) -> (UiContext, ViewId, ViewId) {
        let mut ui = UiContext::new(UiConfig::default(), ThemeStore::builtin()).unwrap();
        let scene = ui
            .build(
                probe("Scene", Rect::default(), "root", log)
                    .child(probe("View", Rect::new(100.0, 100.0, 50.0, 50.0), "v", log).draggable(true)),
            )
            .unwrap();
        ui.push_scene(scene).unwrap();
        let v = ui.tree().children(scene)[0];
        (ui, scene, v)
    }

    #[test]
    fn press_drag_release_inside() {
        let log = Log::default();
        let (mut ui, _, v) = setup(&log);
        let mut d = Dispatcher::new();
        let mut frame: InputFrame = [
            InputEvent::pointer_down(MouseButton::Left, 110.0, 120.0),
            InputEvent::pointer_move(115.0, 121.0, 5.0, 1.0),
            InputEvent::pointer_up(MouseButton::Left, 115.0, 121.0),
        ]
        .into_iter()
        .collect();

        assert_eq!(d.dispatch_frame(&mut ui, &mut frame).unwrap(), AppControl::Continue);
        assert_eq!(*log.borrow(), ["v:down(10,20)", "v:drag(15,21;5,1)", "v:up(15,21)"]);
        assert_eq!(ui.focused(), Some(v));
        assert!(d.gesture().is_none());
    }

    #[test]
    fn motion_without_press_goes_to_root() {
        let log = Log::default();
        let (mut ui, _, _) = setup(&log);
        let mut d = Dispatcher::new();
        d.dispatch(&mut ui, &InputEvent::pointer_move(120.0, 120.0, 1.0, 1.0)).unwrap();
        assert_eq!(*log.borrow(), ["root:motion(120,120)"]);
    }

    #[test]
    fn pressing_the_root_clears_focus() {
        let log = Log::default();
        let (mut ui, _, v) = setup(&log);
        let mut d = Dispatcher::new();
        d.dispatch(&mut ui, &InputEvent::pointer_down(MouseButton::Left, 110.0, 110.0)).unwrap();
        assert_eq!(ui.focused(), Some(v));
        d.dispatch(&mut ui, &InputEvent::pointer_down(MouseButton::Left, 5.0, 5.0)).unwrap();
        assert_eq!(ui.focused(), None);
        assert!(d.gesture().is_none());
    }

    #[test]
    fn keys_route_to_focus_then_root() {
        let log = Log::default();
        let (mut ui, _, _) = setup(&log);
        let mut d = Dispatcher::new();
        d.dispatch(&mut ui, &InputEvent::key_down(Key::Letter('a'), Some('a'))).unwrap();
        d.dispatch(&mut ui, &InputEvent::pointer_down(MouseButton::Left, 110.0, 110.0)).unwrap();
        d.dispatch(&mut ui, &InputEvent::key_down(Key::Letter('b'), Some('b'))).unwrap();
        assert_eq!(*log.borrow(), ["root:key(A)", "v:down(10,10)", "v:key(B)"]);
    }

    #[test]
    fn quit_stops_the_frame() {
        let log = Log::default();
        let (mut ui, _, _) = setup(&log);
        let mut d = Dispatcher::new();
        let mut frame: InputFrame = [InputEvent::Quit, InputEvent::pointer_move(1.0, 1.0, 0.0, 0.0)]
            .into_iter()
            .collect();
        assert_eq!(d.dispatch_frame(&mut ui, &mut frame).unwrap(), AppControl::Exit);
        assert!(log.borrow().is_empty());
        assert!(frame.is_empty());
    }

    #[test]
    fn empty_stack_is_an_error() {
        let mut ui = UiContext::new(UiConfig::default(), ThemeStore::builtin()).unwrap();
        let mut frame = InputFrame::new();
        assert!(matches!(
            Dispatcher::new().dispatch_frame(&mut ui, &mut frame),
            Err(UiError::NoActiveScene)
        ));
    }

    #[test]
    fn window_focus_loss_cancels_the_press() {
        let log = Log::default();
        let (mut ui, _, _) = setup(&log);
        let mut d = Dispatcher::new();
        d.dispatch(&mut ui, &InputEvent::pointer_down(MouseButton::Left, 110.0, 110.0)).unwrap();
        assert!(d.gesture().is_some());
        d.dispatch(&mut ui, &InputEvent::Focused(false)).unwrap();
        assert!(d.gesture().is_none());
    }

    #[test]
    fn removed_pressed_view_ends_the_gesture() {
        let log = Log::default();
        let (mut ui, _, v) = setup(&log);
        let mut d = Dispatcher::new();
        d.dispatch(&mut ui, &InputEvent::pointer_down(MouseButton::Left, 110.0, 110.0)).unwrap();
        ui.remove(v).unwrap();
        d.dispatch(&mut ui, &InputEvent::pointer_move(111.0, 111.0, 1.0, 1.0)).unwrap();
        assert!(d.gesture().is_none());
        assert_eq!(log.borrow().last().map(String::as_str), Some("root:motion(111,111)"));
    }

    #[test]
    fn pressing_a_nested_scene_clears_focus() {
        let log = Log::default();
        let (mut ui, root, v) = setup(&log);
        ui.add_child(root, Some("inset"), ViewBuilder::new("Scene", Rect::new(200.0, 200.0, 100.0, 100.0)))
            .unwrap();
        let mut d = Dispatcher::new();

        d.dispatch(&mut ui, &InputEvent::pointer_down(MouseButton::Left, 110.0, 110.0)).unwrap();
        assert_eq!(ui.focused(), Some(v));
        d.dispatch(&mut ui, &InputEvent::pointer_down(MouseButton::Left, 250.0, 250.0)).unwrap();
        assert_eq!(ui.focused(), None);
        assert!(d.gesture().is_none());
    }
}

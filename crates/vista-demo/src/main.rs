//! Headless walkthrough: builds a settings scene, drives it with scripted
//! input frames, swaps themes halfway, and logs what the views did.
//!
//! Run with `RUST_LOG=debug` to see focus and gesture tracing.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use vista_engine::logging::{LoggingConfig, init_logging};
use vista_engine::time::FrameClock;
use vista_ui::prelude::*;

fn main() -> anyhow::Result<()> {
    let config = UiConfig::default()
        .display_size(640.0, 480.0)
        .theme("dracula")
        .logging(LoggingConfig::default().with_filter("info"));
    init_logging(config.logging.clone());

    let mut ui = UiContext::new(config, ThemeStore::builtin())?;
    log::info!("themes available: {}", ui.themes().names().join(", "));

    let volume = Rc::new(Cell::new(0.25));
    let root = ui.build(settings_scene(&volume))?;
    ui.push_scene(root)?;

    let mut dispatcher = Dispatcher::new();
    let mut clock = FrameClock::new();

    for (i, events) in script().into_iter().enumerate() {
        if i == 3 {
            ui.use_theme_named("light")?;
            report(&ui, root);
        }

        let mut frame: InputFrame = events.into_iter().collect();
        if dispatcher.dispatch_frame(&mut ui, &mut frame)? == AppControl::Exit {
            break;
        }
        let t = clock.advance(Duration::from_millis(16));
        ui.update(t.dt)?;
    }

    log::info!("final volume {:.2}", volume.get());
    report(&ui, root);
    Ok(())
}

fn settings_scene(volume: &Rc<Cell<f32>>) -> ViewBuilder {
    let sink = Rc::clone(volume);

    scene()
        .named_child("heading", label(Rect::new(20.0, 20.0, 300.0, 28.0)))
        .named_child(
            "ok",
            Button::new()
                .on_click(|cx| {
                    log::info!("ok clicked");
                    let root = cx.ui().active_scene()?;
                    let Some(alert) = cx.ui().tree().child_named(root, "alert") else {
                        return Ok(());
                    };
                    if let Some(node) = cx.ui().tree_mut().get_mut(alert) {
                        node.hidden = false;
                    }
                    cx.ui().set_focus(Some(alert))?;
                    Ok(())
                })
                .view(Rect::new(20.0, 60.0, 100.0, 28.0)),
        )
        .named_child(
            "shadows",
            Checkbox::new()
                .on_toggle(|_, on| {
                    log::info!("shadows {}", if on { "on" } else { "off" });
                    Ok(())
                })
                .view(Rect::new(20.0, 100.0, 200.0, 20.0)),
        )
        .named_child(
            "volume",
            Slider::new(volume.get())
                .on_change(move |_, v| {
                    sink.set(v);
                    Ok(())
                })
                .view(Rect::new(20.0, 140.0, 212.0, 20.0)),
        )
        .named_child(
            "alert",
            Alert::new()
                .on_dismiss(|_| {
                    log::info!("alert dismissed");
                    Ok(())
                })
                .view(Rect::new(170.0, 180.0, 300.0, 120.0), 28.0)
                .hidden(true),
        )
}

/// One `Vec` of events per frame.
fn script() -> Vec<Vec<InputEvent>> {
    vec![
        // Click "ok": the alert appears with focus.
        vec![
            InputEvent::pointer_down(MouseButton::Left, 60.0, 70.0),
            InputEvent::pointer_up(MouseButton::Left, 60.0, 70.0),
        ],
        vec![InputEvent::key_down(Key::Escape, None)],
        // Toggle the check box through its text.
        vec![
            InputEvent::pointer_down(MouseButton::Left, 120.0, 110.0),
            InputEvent::pointer_up(MouseButton::Left, 120.0, 110.0),
        ],
        // Drag the volume thumb right, release off the slider.
        vec![
            InputEvent::pointer_down(MouseButton::Left, 75.0, 150.0),
            InputEvent::pointer_move(125.0, 150.0, 50.0, 0.0),
            InputEvent::pointer_move(175.0, 150.0, 50.0, 0.0),
            InputEvent::pointer_up(MouseButton::Left, 175.0, 400.0),
        ],
        // Click the box itself, then untick it again from the keyboard.
        vec![
            InputEvent::pointer_down(MouseButton::Left, 30.0, 110.0),
            InputEvent::pointer_up(MouseButton::Left, 30.0, 110.0),
            InputEvent::key_down(Key::Space, Some(' ')),
        ],
        vec![InputEvent::Quit],
        vec![InputEvent::pointer_move(0.0, 0.0, 0.0, 0.0)],
    ]
}

fn report(ui: &UiContext, root: ViewId) {
    for name in ["ok", "shadows", "volume"] {
        let Some(node) = ui.tree().child_named(root, name).and_then(|id| ui.tree().get(id)) else {
            continue;
        };
        log::info!(
            "[{}] {name}: {:?}, background {:?}",
            ui.theme().name(),
            node.state(),
            node.appearance().background(),
        );
    }
    log::info!("focus: {:?}", ui.focused());
}

//! Adapters from window-system event types to [`InputEvent`](super::InputEvent).

mod winit_events;

pub use winit_events::translate_window_event;

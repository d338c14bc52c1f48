//! Input subsystem.
//!
//! Public API is platform-agnostic: the dispatcher only ever sees
//! [`InputEvent`]s queued in an [`InputFrame`]. The `platform` module holds
//! the translation from winit window events for hosts that use winit.

mod frame;
pub mod platform;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    MouseWheelDelta,
    PointerButtonEvent,
    PointerMoveEvent,
    TextEvent,
};

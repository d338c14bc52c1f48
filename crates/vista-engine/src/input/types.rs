use std::fmt;

/// Keyboard key identifier.
///
/// Hosts map platform keycodes into these variants where possible.
/// For unsupported keys, use `Key::Unknown(u32)` with a stable platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,
    Delete,
    Home,
    End,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Shift,
    Control,
    Alt,
    Meta,

    /// Letter keys, `'a'..='z'`.
    Letter(char),
    /// Digit keys, `0..=9`.
    Digit(u8),
    /// Function keys, `1..=12`.
    F(u8),

    /// Platform-dependent key not represented above.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Modifier keys state.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// Mouse wheel delta.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MouseWheelDelta {
    Line { x: f32, y: f32 },
    Pixel { x: f32, y: f32 },
}

/// Pointer motion in window pixels.
///
/// `dx`/`dy` is the movement since the previous motion event, which is what
/// drag callbacks receive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
}

/// Pointer button transition at a window position.
///
/// Carrying the position keeps dispatch independent of any "current pointer"
/// query.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
    pub x: f32,
    pub y: f32,
    pub modifiers: Modifiers,
}

/// Committed text (not IME composition).
#[derive(Debug, Clone, PartialEq)]
pub struct TextEvent {
    pub text: String,
}

/// Raw, platform-agnostic input events in arrival order.
///
/// Hosts translate window-system events into these (see
/// [`crate::input::platform::translate_window_event`]); tests build them
/// directly with the constructor helpers below.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    ModifiersChanged(Modifiers),

    Key {
        key: Key,
        state: KeyState,
        modifiers: Modifiers,
        /// Stable platform code when available (e.g. scancode).
        code: u32,
        /// True when event is a key-repeat.
        repeat: bool,
        /// Character produced by the key press, if any.
        text: Option<char>,
    },

    PointerMoved(PointerMoveEvent),
    PointerButton(PointerButtonEvent),

    MouseWheel {
        delta: MouseWheelDelta,
        modifiers: Modifiers,
    },

    Text(TextEvent),

    /// Pointer left the window surface.
    PointerLeft,

    /// Window focus change.
    Focused(bool),

    /// The host asked the application to shut down.
    Quit,
}

impl InputEvent {
    pub fn pointer_down(button: MouseButton, x: f32, y: f32) -> Self {
        Self::button(button, MouseButtonState::Pressed, x, y)
    }

    pub fn pointer_up(button: MouseButton, x: f32, y: f32) -> Self {
        Self::button(button, MouseButtonState::Released, x, y)
    }

    pub fn pointer_move(x: f32, y: f32, dx: f32, dy: f32) -> Self {
        InputEvent::PointerMoved(PointerMoveEvent { x, y, dx, dy })
    }

    pub fn key_down(key: Key, text: Option<char>) -> Self {
        Self::key(key, KeyState::Pressed, text)
    }

    pub fn key_up(key: Key) -> Self {
        Self::key(key, KeyState::Released, None)
    }

    fn button(button: MouseButton, state: MouseButtonState, x: f32, y: f32) -> Self {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state,
            x,
            y,
            modifiers: Modifiers::default(),
        })
    }

    fn key(key: Key, state: KeyState, text: Option<char>) -> Self {
        InputEvent::Key {
            key,
            state,
            modifiers: Modifiers::default(),
            code: 0,
            repeat: false,
            text,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Letter(c) => write!(f, "{}", c.to_ascii_uppercase()),
            Key::Digit(d) => write!(f, "{d}"),
            Key::F(n) => write!(f, "F{n}"),
            other => write!(f, "{:?}", other),
        }
    }
}

//! Vista UI: a retained view tree with themes, focus, and a gesture-aware
//! input dispatcher, on top of `vista-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use vista_ui::prelude::*;
//!
//! let mut ui = UiContext::new(UiConfig::default().theme("light"), ThemeStore::builtin())?;
//! let root = ui.build(
//!     scene().child(Button::new()
//!         .on_click(|_| { log::info!("clicked"); Ok(()) })
//!         .view(Rect::new(10.0, 10.0, 80.0, 28.0))),
//! )?;
//! ui.push_scene(root)?;
//!
//! // Once per frame:
//! let mut dispatcher = Dispatcher::new();
//! if dispatcher.dispatch_frame(&mut ui, &mut frame)? == AppControl::Exit {
//!     return Ok(());
//! }
//! ui.update(clock.tick().dt)?;
//! ```
//!
//! # Custom views
//!
//! Implement [`ViewHandler`](view::ViewHandler) and attach it with
//! [`ViewBuilder::handler`](view::ViewBuilder::handler). Styling comes from
//! the view's class, declared with
//! [`UiContext::declare_class`](context::UiContext::declare_class).

pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod focus;
pub mod style;
pub mod view;
pub mod widgets;

pub use config::UiConfig;
pub use context::{UiContext, ViewCx};
pub use dispatch::{AppControl, Dispatcher};
pub use error::{StyleError, UiError};

/// Everything an application needs: import this in your scene modules.
pub mod prelude {
    pub use crate::config::UiConfig;
    pub use crate::context::{UiContext, ViewCx};
    pub use crate::dispatch::{AppControl, Dispatcher, Gesture};
    pub use crate::error::{StyleError, UiError};
    pub use crate::style::{StyleValue, Theme, ThemeBuilder, ThemeStore, VisualState};
    pub use crate::view::{Appearance, EventResult, Passive, ViewBuilder, ViewHandler, ViewId};
    pub use crate::widgets::{
        alert::Alert,
        button::Button,
        checkbox::Checkbox,
        label,
        scene,
        slider::Slider,
    };

    // Engine primitives.
    pub use vista_engine::coords::{Rect, Vec2, Viewport};
    pub use vista_engine::input::{InputEvent, InputFrame, Key, MouseButton};
    pub use vista_engine::paint::{Color, Paint, palette};
}

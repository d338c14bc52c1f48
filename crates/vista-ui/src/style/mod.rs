//! Themes and style resolution.
//!
//! A [`Theme`] maps `class → state → key → value`. [`resolve`] flattens it
//! for one [`ClassChain`] and [`VisualState`] into a [`StyleMap`]; the view
//! tree then applies that map to a view and, through dotted key-paths, to its
//! named descendants.

pub mod builtin;
mod class;
mod key;
mod resolve;
mod state;
mod table;
mod theme;
mod value;

pub use class::{ClassChain, ClassRegistry};
pub use key::StyleKey;
pub use resolve::{StyleMap, StyleResolver, resolve};
pub use state::VisualState;
pub use table::{StyleCell, StyleTable};
pub use theme::{Theme, ThemeBuilder, ThemeSettings, ThemeStore};
pub use value::{FontSpec, StyleValue};

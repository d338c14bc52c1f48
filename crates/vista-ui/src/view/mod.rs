//! The view tree.
//!
//! Views are rectangles arranged in a tree: frames are relative to the
//! parent, children are ordered back to front, and any child may carry a name
//! so themes can address it through a key-path. Behaviour is attached through
//! a boxed [`ViewHandler`].

mod appearance;
mod builder;
mod handler;
mod node;
mod tree;

pub use appearance::{Appearance, Edges};
pub use builder::ViewBuilder;
pub use handler::{EventResult, Passive, ViewHandler};
pub use node::ViewNode;
pub use tree::ViewTree;

slotmap::new_key_type! {
    /// Generational handle to a view; stale once the view is removed.
    pub struct ViewId;
}

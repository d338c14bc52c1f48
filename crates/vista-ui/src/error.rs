//! Error types for the UI core.

use crate::view::ViewId;

/// Style configuration errors.
///
/// These are developer mistakes surfaced when a view class is first used,
/// never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// The class chain of `class` ends (or loops) before reaching `base`.
    #[error("class `{class}` never reaches base class `{base}`")]
    Configuration { class: String, base: String },
}

impl StyleError {
    pub fn configuration(class: impl Into<String>, base: impl Into<String>) -> Self {
        Self::Configuration {
            class: class.into(),
            base: base.into(),
        }
    }
}

/// Errors raised by the view tree, focus handling, and the dispatcher.
///
/// Nothing in the core logs-and-swallows these; they propagate to the
/// application, which decides whether to keep running the next frame.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error(transparent)]
    Style(#[from] StyleError),

    /// Dispatch or update was attempted with an empty scene stack.
    #[error("no scene is active; push a scene before dispatching input")]
    NoActiveScene,

    /// An operation named a view that is not (or no longer) in the tree.
    #[error("view {0:?} does not exist")]
    UnknownView(ViewId),

    #[error("no theme named `{0}`")]
    UnknownTheme(String),

    /// Attaching `child` under `parent` would give it two parents or form a cycle.
    #[error("cannot attach view {child:?} under {parent:?}")]
    InvalidAttach { parent: ViewId, child: ViewId },

    /// A sibling already uses `name`.
    #[error("view {parent:?} already has a child named `{name}`")]
    DuplicateChildName { parent: ViewId, name: String },

    /// An application handler failed; the rest of the frame was abandoned.
    #[error("`{callback}` handler of view {view:?} failed")]
    Callback {
        view: ViewId,
        callback: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

/// Result type alias for UI operations.
pub type Result<T, E = UiError> = std::result::Result<T, E>;

//! [`UiContext`]: everything the dispatcher and handlers act on.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use crate::config::UiConfig;
use crate::error::{Result, UiError};
use crate::focus::FocusManager;
use crate::style::{ClassChain, ClassRegistry, StyleResolver, Theme, ThemeStore, VisualState};
use crate::view::{ViewBuilder, ViewHandler, ViewId, ViewNode, ViewTree};

// ── UiContext ─────────────────────────────────────────────────────────────

/// The current theme, the view tree, focus, and the scene stack.
///
/// There are no globals: the application owns one of these and passes it to
/// the [`Dispatcher`](crate::dispatch::Dispatcher) every frame.
pub struct UiContext {
    config: UiConfig,
    themes: ThemeStore,
    theme: Arc<Theme>,
    resolver: StyleResolver,
    chains: HashMap<String, Arc<ClassChain>>,
    tree: ViewTree,
    focus: FocusManager,
    scenes: Vec<ViewId>,
    /// Views whose handler is currently out of the tree running a callback.
    checked_out: Vec<ViewId>,
    /// Notifications addressed to a checked-out view, delivered once its
    /// handler is back.
    pending: VecDeque<(ViewId, Notice)>,
}

/// Lifecycle notifications that may be raised while the target view is
/// itself running a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Notice {
    Focused,
    Blurred,
    Entered,
    Exited,
}

impl Notice {
    fn callback(self) -> &'static str {
        match self {
            Notice::Focused => "focused",
            Notice::Blurred => "blurred",
            Notice::Entered => "entered",
            Notice::Exited => "exited",
        }
    }

    fn call(self, handler: &mut dyn ViewHandler, cx: &mut ViewCx<'_>) -> anyhow::Result<()> {
        match self {
            Notice::Focused => handler.focused(cx),
            Notice::Blurred => handler.blurred(cx),
            Notice::Entered => handler.entered(cx),
            Notice::Exited => handler.exited(cx),
        }
    }
}

impl UiContext {
    /// A context over the built-in class hierarchy.
    pub fn new(config: UiConfig, themes: ThemeStore) -> Result<Self> {
        Self::with_registry(config, themes, ClassRegistry::with_builtin())
    }

    pub fn with_registry(config: UiConfig, themes: ThemeStore, registry: ClassRegistry) -> Result<Self> {
        let theme = themes
            .get(&config.theme)
            .ok_or_else(|| UiError::UnknownTheme(config.theme.clone()))?;
        let resolver = StyleResolver::new(registry, config.base_class.clone());
        log::debug!("ui context ready with theme `{}`", theme.name());

        Ok(Self {
            config,
            themes,
            theme,
            resolver,
            chains: HashMap::new(),
            tree: ViewTree::new(),
            focus: FocusManager::new(),
            scenes: Vec::new(),
            checked_out: Vec::new(),
            pending: VecDeque::new(),
        })
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn theme(&self) -> &Arc<Theme> {
        &self.theme
    }

    pub fn themes(&self) -> &ThemeStore {
        &self.themes
    }

    pub fn themes_mut(&mut self) -> &mut ThemeStore {
        &mut self.themes
    }

    pub fn resolver(&self) -> &StyleResolver {
        &self.resolver
    }

    pub fn tree(&self) -> &ViewTree {
        &self.tree
    }

    /// Direct tree access for frames and flags. Style-affecting changes
    /// should go through [`set_state`](Self::set_state) so views restyle.
    pub fn tree_mut(&mut self) -> &mut ViewTree {
        &mut self.tree
    }

    pub fn focus(&self) -> &FocusManager {
        &self.focus
    }

    /// The focused view, if it still exists.
    pub fn focused(&self) -> Option<ViewId> {
        self.focus.current().filter(|&id| self.tree.contains(id))
    }

    /// Registers an application class. Views built afterwards pick it up.
    pub fn declare_class(&mut self, class: &str, parent: Option<&str>) -> &mut Self {
        self.resolver.registry_mut().declare(class, parent);
        self.chains.clear();
        self
    }

    fn chain(&mut self, class: &str) -> Result<Arc<ClassChain>> {
        if let Some(chain) = self.chains.get(class) {
            return Ok(Arc::clone(chain));
        }
        let chain = Arc::new(self.resolver.chain(class)?);
        self.chains.insert(class.to_string(), Arc::clone(&chain));
        Ok(chain)
    }

    // ── building ──────────────────────────────────────────────────────────

    /// Creates the views described by `builder`, detached and unstyled.
    ///
    /// Fails with [`UiError::Style`] when a class never reaches the base
    /// class; nothing is left in the tree in that case.
    pub fn build(&mut self, builder: ViewBuilder) -> Result<ViewId> {
        let ViewBuilder {
            class,
            frame,
            handler,
            state,
            draggable,
            focusable,
            hidden,
            children,
        } = builder;

        let mut node = ViewNode::new(self.chain(&class)?, frame);
        node.handler = handler;
        node.state = state;
        node.draggable = draggable;
        node.focusable = focusable;
        node.hidden = hidden;
        let id = self.tree.insert(node);

        for (name, child) in children {
            let built = self
                .build(child)
                .and_then(|child| self.tree.attach(id, child, name.as_deref()));
            if let Err(e) = built {
                self.tree.remove(id)?;
                return Err(e);
            }
        }
        Ok(id)
    }

    /// Builds `child`, attaches it in front of `parent`'s children and styles it.
    pub fn add_child(&mut self, parent: ViewId, name: Option<&str>, child: ViewBuilder) -> Result<ViewId> {
        self.tree.node(parent)?;
        let id = self.build(child)?;
        if let Err(e) = self.tree.attach(parent, id, name) {
            self.tree.remove(id)?;
            return Err(e);
        }
        self.stylize(id)?;
        Ok(id)
    }

    /// Removes `id` and its subtree. Focus held inside it is dropped without
    /// notifications; a removed scene leaves the stack.
    pub fn remove(&mut self, id: ViewId) -> Result<()> {
        let removed = self.tree.remove(id)?;
        if self.focus.current().is_some_and(|f| removed.contains(&f)) {
            self.focus.install(None);
        }
        self.scenes.retain(|s| !removed.contains(s));
        Ok(())
    }

    // ── scenes ────────────────────────────────────────────────────────────

    pub fn current_scene(&self) -> Option<ViewId> {
        self.scenes.last().copied()
    }

    /// The scene input goes to.
    pub fn active_scene(&self) -> Result<ViewId> {
        self.current_scene().ok_or(UiError::NoActiveScene)
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Makes the detached view `root` the current scene, sized to the display.
    ///
    /// Focus is cleared, the previous scene (if any) gets `exited`, the new
    /// one is styled and gets `entered`.
    pub fn push_scene(&mut self, root: ViewId) -> Result<()> {
        let node = self.tree.node_mut(root)?;
        if let Some(parent) = node.parent {
            return Err(UiError::InvalidAttach { parent, child: root });
        }
        node.frame = self.config.display_size.rect();

        self.set_focus(None)?;
        if let Some(prev) = self.current_scene() {
            self.notify(prev, Notice::Exited)?;
        }
        self.scenes.retain(|&s| s != root);
        self.scenes.push(root);
        self.stylize(root)?;
        log::info!("scene {root:?} pushed ({} stacked)", self.scenes.len());
        self.notify(root, Notice::Entered)
    }

    /// Pops the current scene and re-enters the one below it. The last scene
    /// is never popped. The popped views stay in the tree so the scene can be
    /// pushed again; [`remove`](Self::remove) discards them.
    pub fn pop_scene(&mut self) -> Result<Option<ViewId>> {
        if self.scenes.len() <= 1 {
            log::debug!("not popping the last scene");
            return Ok(None);
        }
        self.set_focus(None)?;
        let Some(top) = self.scenes.pop() else {
            return Ok(None);
        };
        self.notify(top, Notice::Exited)?;

        let exposed = self.active_scene()?;
        self.stylize(exposed)?;
        log::info!("scene {top:?} popped; {exposed:?} is current");
        self.notify(exposed, Notice::Entered)?;
        Ok(Some(top))
    }

    // ── style ─────────────────────────────────────────────────────────────

    /// Installs `theme` and restyles the current scene.
    pub fn use_theme(&mut self, theme: Arc<Theme>) -> Result<()> {
        log::info!("using theme `{}`", theme.name());
        self.theme = theme;
        match self.current_scene() {
            Some(scene) => self.stylize(scene),
            None => Ok(()),
        }
    }

    pub fn use_theme_named(&mut self, name: &str) -> Result<()> {
        let theme = self
            .themes
            .get(name)
            .ok_or_else(|| UiError::UnknownTheme(name.to_string()))?;
        self.use_theme(theme)
    }

    /// Re-resolves and re-applies style for `id` and its subtree.
    pub fn stylize(&mut self, id: ViewId) -> Result<()> {
        let theme = Arc::clone(&self.theme);
        self.tree.stylize(id, &theme)
    }

    /// Changes `id`'s visual state and restyles it. Disabling the focused
    /// view clears focus.
    pub fn set_state(&mut self, id: ViewId, state: VisualState) -> Result<()> {
        let node = self.tree.node_mut(id)?;
        if node.state == state {
            return Ok(());
        }
        node.state = state;
        if state == VisualState::Disabled && self.focus.is_focused(id) {
            self.set_focus(None)?;
        }
        self.stylize(id)
    }

    // ── focus ─────────────────────────────────────────────────────────────

    /// Moves focus to `target`, blurring the previous holder first.
    ///
    /// A target that is gone, disabled, or not focusable counts as `None`.
    /// Setting focus to the view that already has it does nothing.
    pub fn set_focus(&mut self, target: Option<ViewId>) -> Result<()> {
        let target = target.filter(|&id| {
            self.tree
                .get(id)
                .is_some_and(|n| n.focusable && n.is_enabled())
        });
        let prev = self.focused();

        if prev == target {
            self.focus.install(target);
            return Ok(());
        }
        log::debug!("focus {prev:?} -> {target:?}");

        if let Some(prev) = prev {
            if let Err(e) = self.notify_blur(prev) {
                self.focus.install(None);
                return Err(e);
            }
        }
        self.focus.install(target);
        match target {
            Some(id) => self.notify_focus(id),
            None => Ok(()),
        }
    }

    /// Drops a `Focused` view back to `Normal`, restyles it, calls `blurred`.
    pub(crate) fn notify_blur(&mut self, id: ViewId) -> Result<()> {
        let node = self.tree.node_mut(id)?;
        if node.state == VisualState::Focused {
            node.state = VisualState::Normal;
        }
        self.stylize(id)?;
        self.notify(id, Notice::Blurred)
    }

    fn notify_focus(&mut self, id: ViewId) -> Result<()> {
        self.tree.node_mut(id)?.state = VisualState::Focused;
        self.stylize(id)?;
        self.notify(id, Notice::Focused)
    }

    // ── per frame ─────────────────────────────────────────────────────────

    /// Runs `update` on every view of the current scene, parents first.
    pub fn update(&mut self, dt: f32) -> Result<()> {
        let scene = self.active_scene()?;
        for id in self.tree.subtree_preorder(scene)? {
            self.deliver(id, "update", |h, cx| h.update(cx, dt))?;
        }
        Ok(())
    }

    /// Runs one callback on `id`'s handler.
    ///
    /// The handler is taken out of the tree for the duration of the call so
    /// it can mutate the context freely. Views without a handler (or no
    /// longer in the tree) yield `T::default()`. Notifications raised for
    /// `id` during the call are delivered right after it returns; a failed
    /// call discards them.
    pub(crate) fn deliver<T: Default>(
        &mut self,
        id: ViewId,
        callback: &'static str,
        f: impl FnOnce(&mut dyn ViewHandler, &mut ViewCx<'_>) -> anyhow::Result<T>,
    ) -> Result<T> {
        let Some(mut handler) = self.tree.take_handler(id) else {
            return Ok(T::default());
        };
        self.checked_out.push(id);
        let result = f(handler.as_mut(), &mut ViewCx { id, ui: self });
        self.checked_out.pop();
        self.tree.restore_handler(id, handler);

        match result {
            Ok(value) => {
                self.flush_pending(id)?;
                Ok(value)
            }
            Err(source) => {
                self.pending.retain(|&(v, _)| v != id);
                Err(UiError::Callback { view: id, callback, source })
            }
        }
    }

    /// Delivers `notice` now, or queues it while `id` is mid-callback.
    fn notify(&mut self, id: ViewId, notice: Notice) -> Result<()> {
        if self.checked_out.contains(&id) {
            log::debug!("{id:?} is busy; `{}` deferred", notice.callback());
            self.pending.push_back((id, notice));
            return Ok(());
        }
        self.deliver(id, notice.callback(), |h, cx| notice.call(h, cx))
    }

    fn flush_pending(&mut self, id: ViewId) -> Result<()> {
        while let Some(at) = self.pending.iter().position(|&(v, _)| v == id) {
            let Some((_, notice)) = self.pending.remove(at) else {
                break;
            };
            self.deliver(id, notice.callback(), |h, cx| notice.call(h, cx))?;
        }
        Ok(())
    }
}

// ── ViewCx ────────────────────────────────────────────────────────────────

/// What a handler sees during a callback: its own view id plus the context.
pub struct ViewCx<'a> {
    id: ViewId,
    ui: &'a mut UiContext,
}

impl ViewCx<'_> {
    /// The view this callback was delivered to.
    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn ui(&mut self) -> &mut UiContext {
        self.ui
    }

    pub fn node(&self) -> Option<&ViewNode> {
        self.ui.tree.get(self.id)
    }

    pub fn state(&self) -> VisualState {
        self.node().map_or(VisualState::Normal, ViewNode::state)
    }

    pub fn set_state(&mut self, state: VisualState) -> Result<()> {
        self.ui.set_state(self.id, state)
    }

    pub fn request_focus(&mut self) -> Result<()> {
        self.ui.set_focus(Some(self.id))
    }

    pub fn is_focused(&self) -> bool {
        self.ui.focus.is_focused(self.id)
    }

    pub fn child_named(&self, name: &str) -> Option<ViewId> {
        self.ui.tree.child_named(self.id, name)
    }

    pub fn theme(&self) -> &Theme {
        &self.ui.theme
    }
}

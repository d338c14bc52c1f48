use slotmap::SlotMap;
use vista_engine::coords::{Rect, Vec2};

use super::{ViewHandler, ViewId, ViewNode};
use crate::error::{Result, UiError};
use crate::style::{StyleKey, StyleValue, Theme, resolve};

/// Arena of views.
///
/// Parents own their children; a [`ViewId`] held anywhere else is a weak
/// handle that stops resolving once the view is removed.
#[derive(Debug, Default)]
pub struct ViewTree {
    nodes: SlotMap<ViewId, ViewNode>,
}

impl ViewTree {
    pub fn new() -> Self {
        Self { nodes: SlotMap::with_key() }
    }

    /// Adds a detached view.
    pub fn insert(&mut self, node: ViewNode) -> ViewId {
        self.nodes.insert(node)
    }

    pub fn get(&self, id: ViewId) -> Option<&ViewNode> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: ViewId) -> Option<&mut ViewNode> {
        self.nodes.get_mut(id)
    }

    pub fn contains(&self, id: ViewId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn node(&self, id: ViewId) -> Result<&ViewNode> {
        self.nodes.get(id).ok_or(UiError::UnknownView(id))
    }

    pub(crate) fn node_mut(&mut self, id: ViewId) -> Result<&mut ViewNode> {
        self.nodes.get_mut(id).ok_or(UiError::UnknownView(id))
    }

    // ── structure ─────────────────────────────────────────────────────────

    /// Appends `child` as the front-most child of `parent`, optionally under a
    /// name unique among its siblings.
    pub fn attach(&mut self, parent: ViewId, child: ViewId, name: Option<&str>) -> Result<()> {
        self.node(parent)?;
        if self.node(child)?.parent.is_some() || self.is_ancestor_or_self(child, parent) {
            return Err(UiError::InvalidAttach { parent, child });
        }
        if let Some(name) = name {
            if self.child_named(parent, name).is_some() {
                return Err(UiError::DuplicateChildName { parent, name: name.to_string() });
            }
        }

        let node = self.node_mut(child)?;
        node.parent = Some(parent);
        node.name = name.map(str::to_string);
        self.node_mut(parent)?.children.push(child);
        Ok(())
    }

    /// Removes `id` and its whole subtree. Returns the removed ids, `id` first.
    pub fn remove(&mut self, id: ViewId) -> Result<Vec<ViewId>> {
        let removed = self.subtree_preorder(id)?;
        if let Some(parent) = self.node(id)?.parent {
            if let Some(p) = self.nodes.get_mut(parent) {
                p.children.retain(|&c| c != id);
            }
        }
        for &v in &removed {
            self.nodes.remove(v);
        }
        Ok(removed)
    }

    pub fn parent(&self, id: ViewId) -> Option<ViewId> {
        self.nodes.get(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: ViewId) -> &[ViewId] {
        self.nodes.get(id).map_or(&[], |n| n.children.as_slice())
    }

    pub fn child_named(&self, parent: ViewId, name: &str) -> Option<ViewId> {
        self.children(parent)
            .iter()
            .copied()
            .find(|&c| self.nodes.get(c).and_then(|n| n.name.as_deref()) == Some(name))
    }

    /// Follows a chain of child names down from `id`.
    pub fn descendant(&self, id: ViewId, path: &[String]) -> Option<ViewId> {
        path.iter().try_fold(id, |at, name| self.child_named(at, name))
    }

    /// Nearest first.
    pub fn ancestors(&self, id: ViewId) -> Vec<ViewId> {
        let mut out = Vec::new();
        let mut at = self.parent(id);
        while let Some(p) = at {
            out.push(p);
            at = self.parent(p);
        }
        out
    }

    pub fn is_ancestor_or_self(&self, ancestor: ViewId, id: ViewId) -> bool {
        id == ancestor || self.ancestors(id).contains(&ancestor)
    }

    /// The top of `id`'s tree.
    pub fn root_of(&self, id: ViewId) -> ViewId {
        self.ancestors(id).last().copied().unwrap_or(id)
    }

    /// Parents before children, children back to front.
    pub fn subtree_preorder(&self, id: ViewId) -> Result<Vec<ViewId>> {
        self.node(id)?;
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(v) = stack.pop() {
            out.push(v);
            stack.extend(self.children(v).iter().rev());
        }
        Ok(out)
    }

    /// Children before parents.
    pub fn subtree_postorder(&self, id: ViewId) -> Result<Vec<ViewId>> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        self.node(id)?;
        while let Some(v) = stack.pop() {
            out.push(v);
            stack.extend(self.children(v).iter());
        }
        out.reverse();
        Ok(out)
    }

    // ── geometry ──────────────────────────────────────────────────────────

    /// Window position of `id`'s origin: its frame origin plus every ancestor's.
    pub fn window_origin(&self, id: ViewId) -> Option<Vec2> {
        let mut origin = self.get(id)?.frame.origin;
        for a in self.ancestors(id) {
            origin += self.nodes[a].frame.origin;
        }
        Some(origin)
    }

    /// Converts a window point into `id`'s local space.
    pub fn from_window(&self, id: ViewId, point: Vec2) -> Option<Vec2> {
        Some(point - self.window_origin(id)?)
    }

    /// Converts a point in `id`'s local space into window space.
    pub fn to_window(&self, id: ViewId, point: Vec2) -> Option<Vec2> {
        Some(point + self.window_origin(id)?)
    }

    /// `id`'s frame expressed in window space.
    pub fn window_frame(&self, id: ViewId) -> Option<Rect> {
        let node = self.get(id)?;
        let parent_origin = match node.parent {
            Some(p) => self.window_origin(p)?,
            None => Vec2::zero(),
        };
        Some(node.frame.translated(parent_origin))
    }

    /// The deepest interactive view under `point` (window space) within
    /// `root`'s subtree. Front-most children are tested first; hidden and
    /// disabled views hide their whole subtree.
    pub fn hit(&self, root: ViewId, point: Vec2) -> Option<ViewId> {
        let parent_space = match self.parent(root) {
            Some(p) => self.from_window(p, point)?,
            None => point,
        };
        self.hit_in_parent_space(root, parent_space)
    }

    fn hit_in_parent_space(&self, id: ViewId, point: Vec2) -> Option<ViewId> {
        let node = self.get(id)?;
        if !node.is_interactive() || !node.frame.contains(point) {
            return None;
        }
        let local = node.frame.to_local(point);
        node.children
            .iter()
            .rev()
            .find_map(|&c| self.hit_in_parent_space(c, local))
            .or(Some(id))
    }

    // ── handlers ──────────────────────────────────────────────────────────

    pub(crate) fn take_handler(&mut self, id: ViewId) -> Option<Box<dyn ViewHandler>> {
        self.nodes.get_mut(id)?.handler.take()
    }

    /// Puts a handler back after a callback; dropped if the view went away meanwhile.
    pub(crate) fn restore_handler(&mut self, id: ViewId, handler: Box<dyn ViewHandler>) {
        if let Some(node) = self.nodes.get_mut(id) {
            if node.handler.is_none() {
                node.handler = Some(handler);
            }
        }
    }

    // ── stylization ───────────────────────────────────────────────────────

    /// Restyles `id`'s subtree against `theme`.
    ///
    /// Phase one runs children before parents: each view resolves its class in
    /// its current state and replaces its appearance with its own attributes.
    /// Phase two runs parents before children: each view pushes its key-path
    /// entries onto the named descendants. Ancestors of `id` whose key-paths
    /// reach into the subtree are replayed first, farthest ancestor first, so
    /// the nearest override always wins and a restyled subtree looks exactly
    /// as it would after restyling the whole tree.
    pub fn stylize(&mut self, id: ViewId, theme: &Theme) -> Result<()> {
        for v in self.subtree_postorder(id)? {
            let node = &mut self.nodes[v];
            node.style = resolve(&node.class, Some(node.state), theme);
            node.appearance.clear();
            let own: Vec<(StyleKey, StyleValue)> = node
                .style
                .own_attributes()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            for (key, value) in &own {
                node.apply_attribute(key.name(), value);
            }
        }

        let mut ancestors = self.ancestors(id);
        ancestors.reverse();
        for a in ancestors {
            self.apply_key_paths(a, Some(id));
        }
        for v in self.subtree_preorder(id)? {
            self.apply_key_paths(v, None);
        }
        Ok(())
    }

    /// Applies `id`'s key-path entries; with `within`, only to targets inside
    /// that subtree.
    fn apply_key_paths(&mut self, id: ViewId, within: Option<ViewId>) {
        let overrides: Vec<(StyleKey, StyleValue)> = self.nodes[id]
            .style
            .path_overrides()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        for (key, value) in overrides {
            let Some(target) = self.descendant(id, key.path()) else {
                log::debug!(
                    "{} has no descendant `{}`; skipping `{key}`",
                    self.nodes[id].class.leaf(),
                    key.path().join("."),
                );
                continue;
            };
            if within.is_some_and(|w| !self.is_ancestor_or_self(w, target)) {
                continue;
            }
            self.nodes[target].apply_attribute(key.name(), &value);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::style::{ClassRegistry, VisualState};
    use vista_engine::paint::palette;

    fn node(tree: &mut ViewTree, class: &str, frame: Rect) -> ViewId {
        let chain = ClassRegistry::with_builtin().chain(class, "View").unwrap();
        tree.insert(ViewNode::new(Arc::new(chain), frame))
    }

    /// scene(0,0,640,480) ⊃ panel(100,100,200,200) ⊃ button(10,10,50,20)
    fn nested() -> (ViewTree, ViewId, ViewId, ViewId) {
        let mut t = ViewTree::new();
        let scene = node(&mut t, "Scene", Rect::new(0.0, 0.0, 640.0, 480.0));
        let panel = node(&mut t, "View", Rect::new(100.0, 100.0, 200.0, 200.0));
        let button = node(&mut t, "Button", Rect::new(10.0, 10.0, 50.0, 20.0));
        t.attach(scene, panel, None).unwrap();
        t.attach(panel, button, Some("ok")).unwrap();
        (t, scene, panel, button)
    }

    // ── structure ─────────────────────────────────────────────────────────

    #[test]
    fn attach_rejects_second_parent_and_cycles() {
        let (mut t, scene, panel, button) = nested();
        assert!(matches!(t.attach(scene, button, None), Err(UiError::InvalidAttach { .. })));
        let loose = node(&mut t, "View", Rect::default());
        t.attach(button, loose, None).unwrap();
        assert!(matches!(t.attach(loose, panel, None), Err(UiError::InvalidAttach { .. })));
    }

    #[test]
    fn duplicate_sibling_names_are_rejected() {
        let (mut t, _, panel, _) = nested();
        let other = node(&mut t, "Label", Rect::default());
        assert!(matches!(
            t.attach(panel, other, Some("ok")),
            Err(UiError::DuplicateChildName { .. })
        ));
    }

    #[test]
    fn removal_invalidates_ids() {
        let (mut t, scene, panel, button) = nested();
        let removed = t.remove(panel).unwrap();
        assert_eq!(removed, vec![panel, button]);
        assert!(!t.contains(button));
        assert!(t.children(scene).is_empty());
        assert!(matches!(t.remove(button), Err(UiError::UnknownView(_))));
    }

    #[test]
    fn traversal_orders() {
        let (mut t, scene, panel, button) = nested();
        let second = node(&mut t, "Label", Rect::default());
        t.attach(scene, second, None).unwrap();
        assert_eq!(t.subtree_preorder(scene).unwrap(), vec![scene, panel, button, second]);
        assert_eq!(t.subtree_postorder(scene).unwrap(), vec![button, panel, second, scene]);
        assert_eq!(t.descendant(scene, &[]), Some(scene));
        assert_eq!(t.root_of(button), scene);
    }

    // ── geometry ──────────────────────────────────────────────────────────

    #[test]
    fn from_window_subtracts_every_origin() {
        let (t, _, _, button) = nested();
        let local = t.from_window(button, Vec2::new(115.0, 112.0)).unwrap();
        assert_eq!(local, Vec2::new(5.0, 2.0));
        assert_eq!(t.to_window(button, local), Some(Vec2::new(115.0, 112.0)));
        assert_eq!(t.window_frame(button), Some(Rect::new(110.0, 110.0, 50.0, 20.0)));
    }

    #[test]
    fn hit_returns_deepest_view() {
        let (t, scene, panel, button) = nested();
        assert_eq!(t.hit(scene, Vec2::new(115.0, 112.0)), Some(button));
        assert_eq!(t.hit(scene, Vec2::new(250.0, 250.0)), Some(panel));
        assert_eq!(t.hit(scene, Vec2::new(5.0, 5.0)), Some(scene));
        assert_eq!(t.hit(scene, Vec2::new(700.0, 5.0)), None);
    }

    #[test]
    fn hit_edges_are_half_open() {
        let (t, scene, panel, button) = nested();
        assert_eq!(t.hit(scene, Vec2::new(110.0, 110.0)), Some(button));
        assert_eq!(t.hit(scene, Vec2::new(160.0, 110.0)), Some(panel));
    }

    #[test]
    fn front_most_child_wins_overlap() {
        let (mut t, scene, panel, _) = nested();
        let overlay = node(&mut t, "View", Rect::new(90.0, 90.0, 50.0, 50.0));
        t.attach(scene, overlay, None).unwrap();
        assert_eq!(t.hit(scene, Vec2::new(115.0, 112.0)), Some(overlay));
        assert_eq!(t.hit(scene, Vec2::new(150.0, 150.0)), Some(panel));
    }

    #[test]
    fn hidden_and_disabled_subtrees_are_skipped() {
        let (mut t, scene, panel, button) = nested();
        t.get_mut(button).unwrap().hidden = true;
        assert_eq!(t.hit(scene, Vec2::new(115.0, 112.0)), Some(panel));
        t.get_mut(button).unwrap().hidden = false;
        t.get_mut(panel).unwrap().state = VisualState::Disabled;
        assert_eq!(t.hit(scene, Vec2::new(115.0, 112.0)), Some(scene));
    }

    #[test]
    fn hit_from_a_nested_root_uses_window_space() {
        let (t, _, panel, button) = nested();
        assert_eq!(t.hit(panel, Vec2::new(115.0, 112.0)), Some(button));
        assert_eq!(t.hit(panel, Vec2::new(50.0, 50.0)), None);
    }

    // ── stylization ───────────────────────────────────────────────────────

    fn themed() -> Theme {
        Theme::builder("t")
            .set("View", VisualState::Normal, "background_color", palette::GRAY)
            .set("Label", VisualState::Normal, "background_color", palette::WHITE)
            .set("View", VisualState::Normal, "label.background_color", palette::BLUE)
            .set("Scene", VisualState::Normal, "panel.label.background_color", palette::RED)
            .set("SelectView", VisualState::Normal, "top_label.focusable", false)
            .build()
    }

    #[test]
    fn key_path_beats_child_and_nearest_ancestor_wins() {
        let mut t = ViewTree::new();
        let scene = node(&mut t, "Scene", Rect::default());
        let panel = node(&mut t, "View", Rect::default());
        let label = node(&mut t, "Label", Rect::default());
        t.attach(scene, panel, Some("panel")).unwrap();
        t.attach(panel, label, Some("label")).unwrap();

        let theme = themed();
        t.stylize(scene, &theme).unwrap();
        let bg = |t: &ViewTree, id| t.get(id).unwrap().appearance().background();
        assert_eq!(bg(&t, label), Some(vista_engine::paint::Paint::solid(palette::BLUE)));

        // Restyling only the label replays both ancestors' overrides.
        t.stylize(label, &theme).unwrap();
        assert_eq!(bg(&t, label), Some(vista_engine::paint::Paint::solid(palette::BLUE)));
    }

    #[test]
    fn flag_attributes_set_behaviour() {
        let mut t = ViewTree::new();
        let select = node(&mut t, "SelectView", Rect::default());
        let top = node(&mut t, "Label", Rect::default());
        t.attach(select, top, Some("top_label")).unwrap();

        t.stylize(select, &themed()).unwrap();
        let top = t.get(top).unwrap();
        assert!(!top.focusable);
        assert!(top.appearance().get("focusable").is_none());
    }

    #[test]
    fn missing_key_path_target_is_skipped() {
        let mut t = ViewTree::new();
        let panel = node(&mut t, "View", Rect::default());
        t.stylize(panel, &themed()).unwrap();
        assert_eq!(
            t.get(panel).unwrap().appearance().background(),
            Some(vista_engine::paint::Paint::solid(palette::GRAY)),
        );
    }
}

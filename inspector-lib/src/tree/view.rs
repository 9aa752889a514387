//! The tree view engine.

use log::{debug, trace, warn};

use super::adapter::{RenderContext, TreeAdapter, TreeItem};
use super::node::TreeNode;
use super::path::{ExpandPaths, ROOT_PATH, child_path};
use super::resolve::resolve;
use super::state::ExpansionState;

/// Expand level used when none is given.
pub const DEFAULT_EXPAND_LEVEL: i32 = 1;

/// Owns the inspected value, its adapter and the expansion state.
///
/// Input changes only mark the view dirty; the next [`refresh`](Self::refresh)
/// or [`render`](Self::render) re-resolves the expansion state once, keeping
/// every path that was expanded before. [`toggle`](Self::toggle) is the only
/// other way the state changes.
pub struct TreeView<A: TreeAdapter> {
    adapter: A,
    data: A::Data,
    name: Option<String>,
    expand_level: i32,
    expand_paths: ExpandPaths,
    state: ExpansionState,
    dirty: bool,
}

impl<A: TreeAdapter> TreeView<A> {
    pub fn new(adapter: A, data: A::Data) -> Self {
        Self {
            adapter,
            data,
            name: None,
            expand_level: DEFAULT_EXPAND_LEVEL,
            expand_paths: ExpandPaths::none(),
            state: ExpansionState::new(),
            dirty: true,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_expand_level(mut self, level: i32) -> Self {
        self.set_expand_level(level);
        self
    }

    pub fn with_expand_paths(mut self, paths: impl Into<ExpandPaths>) -> Self {
        self.set_expand_paths(paths);
        self
    }

    // =========================================================================
    // Inputs
    // =========================================================================

    pub fn data(&self) -> &A::Data {
        &self.data
    }

    pub fn set_data(&mut self, data: A::Data) {
        self.data = data;
        self.dirty = true;
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn set_adapter(&mut self, adapter: A) {
        self.adapter = adapter;
        self.dirty = true;
    }

    /// Change the adapter in place, e.g. to switch one of its options.
    pub fn update_adapter(&mut self, f: impl FnOnce(&mut A)) {
        f(&mut self.adapter);
        self.dirty = true;
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The root name only affects rendering, so this does not re-resolve.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn expand_level(&self) -> i32 {
        self.expand_level
    }

    pub fn set_expand_level(&mut self, level: i32) {
        self.expand_level = level;
        self.dirty = true;
    }

    pub fn expand_paths(&self) -> &ExpandPaths {
        &self.expand_paths
    }

    pub fn set_expand_paths(&mut self, paths: impl Into<ExpandPaths>) {
        self.expand_paths = paths.into();
        self.dirty = true;
    }

    // =========================================================================
    // State
    // =========================================================================

    pub fn state(&self) -> &ExpansionState {
        &self.state
    }

    /// Whether an input changed since the last resolution.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Re-resolve the expansion state if an input changed. Returns whether it
    /// did.
    pub fn refresh(&mut self) -> bool {
        if !self.dirty {
            return false;
        }
        self.state = resolve(
            &self.data,
            &self.adapter,
            self.expand_paths.as_slice(),
            self.expand_level,
            &self.state,
        );
        self.dirty = false;
        true
    }

    /// Flip a rendered node. Returns its new expansion.
    pub fn toggle(&mut self, node: &TreeNode) -> bool {
        self.toggle_path(&node.path, node.expanded)
    }

    /// Flip the node at `path`, given its `current` effective expansion.
    pub fn toggle_path(&mut self, path: &str, current: bool) -> bool {
        let expanded = self.state.toggle(path, current);
        debug!("toggled {path} -> {}", if expanded { "expanded" } else { "collapsed" });
        expanded
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Refresh and render the whole visible tree.
    pub fn render(&mut self) -> TreeNode {
        self.refresh();
        let root = TreeItem::root(self.name.clone(), self.data.clone());
        self.render_node(&root, 0, None)
    }

    fn render_node(
        &self,
        item: &TreeItem<A::Data>,
        depth: usize,
        parent_path: Option<&str>,
    ) -> TreeNode {
        let path = match parent_path {
            None => ROOT_PATH.to_string(),
            Some(parent) => child_path(parent, item.segment()),
        };
        let mut has_children = self.adapter.has_children(&item.data);
        // A stale state entry never expands a node that has nothing to show.
        let mut expanded = has_children && self.state.is_expanded(&path, item.expanded);
        trace!("render {path} (depth {depth}, expanded {expanded})");

        let mut children = Vec::new();
        if expanded {
            match self.adapter.children(&item.data) {
                Ok(items) => {
                    children = items
                        .unwrap_or_default()
                        .iter()
                        .map(|child| self.render_node(child, depth + 1, Some(&path)))
                        .collect();
                }
                Err(err) => {
                    warn!("showing {path} as childless: {err}");
                    has_children = false;
                    expanded = false;
                }
            }
        }

        let label = self.adapter.render(&RenderContext {
            item,
            depth,
            parent_path,
            expanded,
        });

        TreeNode {
            path,
            name: item.name.clone(),
            depth,
            expanded,
            synthetic: item.synthetic,
            non_enumerable: item.non_enumerable,
            show_arrow: has_children,
            show_placeholder: depth > 0,
            label,
            children,
        }
    }
}

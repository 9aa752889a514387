//! The adapter contract between the tree engine and a data shape.

use super::fragment::Fragment;
use super::path::{ROOT_PATH, child_path};
use crate::error::AdapterError;

/// A value and its name.
///
/// Values rarely carry their own name; it is usually the key under which the
/// parent holds them. Items are built fresh by [`TreeAdapter::children`] on
/// every render pass and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeItem<T> {
    /// Display name. Only the root may have none.
    pub name: Option<String>,
    pub data: T,
    /// Injected by the adapter with no counterpart in the source value, such
    /// as `[[Entries]]` on a map.
    pub synthetic: bool,
    /// Default expansion, used when the expansion state has no entry for this
    /// item's path.
    pub expanded: Option<bool>,
    /// The underlying property is non-enumerable and should be de-emphasized.
    pub non_enumerable: bool,
}

impl<T> TreeItem<T> {
    pub fn new(name: impl Into<String>, data: T) -> Self {
        Self {
            name: Some(name.into()),
            data,
            synthetic: false,
            expanded: None,
            non_enumerable: false,
        }
    }

    /// The root item, optionally named.
    pub fn root(name: Option<String>, data: T) -> Self {
        Self {
            name,
            data,
            synthetic: false,
            expanded: None,
            non_enumerable: false,
        }
    }

    pub fn synthetic(mut self) -> Self {
        self.synthetic = true;
        self
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = Some(expanded);
        self
    }

    pub fn non_enumerable(mut self, non_enumerable: bool) -> Self {
        self.non_enumerable = non_enumerable;
        self
    }

    /// The name used as a path segment.
    pub fn segment(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// Everything an adapter needs to render one node.
#[derive(Debug)]
pub struct RenderContext<'a, T> {
    pub item: &'a TreeItem<T>,
    /// Nesting depth, 0 for the root.
    pub depth: usize,
    /// Path of the parent, `None` for the root.
    pub parent_path: Option<&'a str>,
    /// Whether the node is currently expanded.
    pub expanded: bool,
}

impl<T> RenderContext<'_, T> {
    pub fn is_root(&self) -> bool {
        self.parent_path.is_none()
    }

    /// Structural path of the node being rendered.
    pub fn path(&self) -> String {
        match self.parent_path {
            None => ROOT_PATH.to_string(),
            Some(parent) => child_path(parent, self.item.segment()),
        }
    }
}

/// The rendered label of a node.
///
/// The engine composes the node's children between `content` and `footer`,
/// so `footer` only shows while the node is expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Label {
    pub content: Fragment,
    pub footer: Option<Fragment>,
}

impl Label {
    pub fn new(content: Fragment) -> Self {
        Self {
            content,
            footer: None,
        }
    }

    pub fn with_footer(mut self, footer: Fragment) -> Self {
        self.footer = Some(footer);
        self
    }
}

impl From<Fragment> for Label {
    fn from(content: Fragment) -> Self {
        Self::new(content)
    }
}

/// Per-shape implementation of the tree contract.
///
/// # Example
///
/// ```ignore
/// struct Dirs;
///
/// impl TreeAdapter for Dirs {
///     type Data = Rc<Dir>;
///
///     fn has_children(&self, data: &Self::Data) -> bool {
///         !data.entries.is_empty()
///     }
///
///     fn children(&self, data: &Self::Data) -> Result<Option<Vec<TreeItem<Self::Data>>>, AdapterError> {
///         Ok(Some(data.entries.iter().map(|d| TreeItem::new(&d.name, d.clone())).collect()))
///     }
///
///     fn render(&self, cx: &RenderContext<'_, Self::Data>) -> Label {
///         Fragment::text(cx.item.segment()).into()
///     }
/// }
/// ```
pub trait TreeAdapter {
    /// Element type of the tree. Cloned into every [`TreeItem`], so it should
    /// be cheap to clone.
    type Data: Clone;

    /// Whether `data` has at least one child to show. Never true for scalars.
    fn has_children(&self, data: &Self::Data) -> bool;

    /// The children of `data` in display order.
    ///
    /// Must return `Ok(None)` when [`has_children`](Self::has_children) is
    /// false. An error makes the engine show the node as childless.
    fn children(
        &self,
        data: &Self::Data,
    ) -> Result<Option<Vec<TreeItem<Self::Data>>>, AdapterError>;

    /// The child called `name`, used when resolving concrete path segments.
    ///
    /// The default looks it up through [`children`](Self::children).
    fn child(&self, data: &Self::Data, name: &str) -> Option<Self::Data> {
        self.children(data)
            .ok()
            .flatten()?
            .into_iter()
            .find(|item| item.name.as_deref() == Some(name))
            .map(|item| item.data)
    }

    /// Render the label of one node.
    fn render(&self, cx: &RenderContext<'_, Self::Data>) -> Label;
}

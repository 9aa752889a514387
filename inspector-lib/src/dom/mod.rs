//! DOM inspector: serialized document trees.

mod adapter;
pub mod format;
mod inline;
mod node;

pub use adapter::DomTreeAdapter;
pub use inline::{MAX_INLINE_CHARS, should_inline_content};
pub use node::{Attribute, DomNode, DomRef, from_json_str};

use std::rc::Rc;

use crate::tree::TreeView;

/// A tree view over [`DomNode`]s.
pub type DomInspector = TreeView<DomTreeAdapter>;

impl DomInspector {
    /// Inspect `node`.
    pub fn inspect(node: DomNode) -> Self {
        TreeView::new(DomTreeAdapter, Rc::new(node))
    }
}

//! Tree adapter for [`DomNode`]s.

use super::format::{close_tag, node_preview};
use super::inline::{MAX_INLINE_CHARS, should_inline_content};
use super::node::{DomNode, DomRef};
use crate::error::AdapterError;
use crate::tree::{Label, RenderContext, TreeAdapter, TreeItem};

/// Walks element, document and fragment children.
///
/// Children are named `nodeName[index]`, so `$.html[1].body[0]` addresses the
/// body of a document whose first child is a doctype.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomTreeAdapter;

impl TreeAdapter for DomTreeAdapter {
    type Data = DomRef;

    fn has_children(&self, data: &DomRef) -> bool {
        !data.child_nodes().is_empty()
            && !(data.is_element() && should_inline_content(data, MAX_INLINE_CHARS))
    }

    fn children(&self, data: &DomRef) -> Result<Option<Vec<TreeItem<DomRef>>>, AdapterError> {
        if !self.has_children(data) {
            return Ok(None);
        }
        Ok(Some(
            data.child_nodes()
                .iter()
                .enumerate()
                .map(|(i, node)| TreeItem::new(format!("{}[{i}]", node.node_name()), node.clone()))
                .collect(),
        ))
    }

    fn render(&self, cx: &RenderContext<'_, DomRef>) -> Label {
        let node = &cx.item.data;
        let label = Label::new(node_preview(node, cx.expanded));
        match &**node {
            DomNode::Element { tag_name, .. } if cx.expanded => {
                label.with_footer(close_tag(tag_name))
            }
            _ => label,
        }
    }
}

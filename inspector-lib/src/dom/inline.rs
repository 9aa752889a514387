use super::node::DomNode;

/// Longest text an element may hold and still be shown on one line.
pub const MAX_INLINE_CHARS: usize = 80;

/// Whether an element is shown with its content inline.
///
/// True for elements whose only child is a text node shorter than
/// `max_inline_chars` characters.
pub fn should_inline_content(node: &DomNode, max_inline_chars: usize) -> bool {
    match node {
        DomNode::Element { child_nodes, .. } => match child_nodes.as_slice() {
            [only] => matches!(
                &**only,
                DomNode::Text { text_content } if text_content.chars().count() < max_inline_chars
            ),
            _ => false,
        },
        _ => false,
    }
}

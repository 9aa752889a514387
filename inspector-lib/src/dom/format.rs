//! Devtools-style rendering of DOM nodes.

use super::inline::{MAX_INLINE_CHARS, should_inline_content};
use super::node::{Attribute, DomNode};
use crate::object::format::ELLIPSIS;
use crate::tree::{Fragment, Token};

/// `<tag name="value">`, with the tag name lowercased.
pub fn open_tag(tag_name: &str, attributes: &[Attribute]) -> Fragment {
    let mut fragment = Fragment::styled(Token::TagBracket, "<")
        .with(Token::TagName, tag_name.to_lowercase());
    for attribute in attributes {
        fragment
            .push(Token::Plain, " ")
            .push(Token::AttributeName, attribute.name.as_str())
            .push(Token::Punctuation, "=\"")
            .push(Token::AttributeValue, attribute.value.as_str())
            .push(Token::Punctuation, "\"");
    }
    fragment.with(Token::TagBracket, ">")
}

/// `</tag>`
pub fn close_tag(tag_name: &str) -> Fragment {
    Fragment::styled(Token::TagBracket, "</")
        .with(Token::TagName, tag_name.to_lowercase())
        .with(Token::TagBracket, ">")
}

/// One-line rendering of a node.
///
/// A collapsed element shows its inlined text (or `…`) and its closing tag;
/// an expanded one only its opening tag, the closing tag going after its
/// children.
pub fn node_preview(node: &DomNode, expanded: bool) -> Fragment {
    match node {
        DomNode::Element {
            tag_name,
            attributes,
            child_nodes,
        } => {
            let mut fragment = open_tag(tag_name, attributes);
            if !expanded {
                let content = if should_inline_content(node, MAX_INLINE_CHARS) {
                    child_nodes
                        .first()
                        .and_then(|child| child.text_content())
                        .unwrap_or_default()
                } else {
                    ELLIPSIS
                };
                fragment.push(Token::Plain, content);
                fragment.append(close_tag(tag_name));
            }
            fragment
        }
        DomNode::Text { text_content } => Fragment::text(text_content.as_str()),
        DomNode::CdataSection { text_content } => {
            Fragment::text(format!("<![CDATA[{text_content}]]>"))
        }
        DomNode::ProcessingInstruction { .. } | DomNode::Document { .. } => {
            Fragment::text(node.node_name())
        }
        DomNode::DocumentFragment { .. } => Fragment::text(node.node_name()),
        DomNode::Comment { text_content } => {
            Fragment::styled(Token::Comment, format!("<!--{text_content}-->"))
        }
        DomNode::DocumentType {
            name,
            public_id,
            system_id,
        } => {
            let mut doctype = format!("<!DOCTYPE {name}");
            if let Some(public_id) = public_id.as_deref().filter(|id| !id.is_empty()) {
                doctype.push_str(&format!(" PUBLIC \"{public_id}\""));
            } else if system_id.as_deref().is_some_and(|id| !id.is_empty()) {
                doctype.push_str(" SYSTEM");
            }
            if let Some(system_id) = system_id.as_deref().filter(|id| !id.is_empty()) {
                doctype.push_str(&format!(" \"{system_id}\""));
            }
            doctype.push('>');
            Fragment::styled(Token::Doctype, doctype)
        }
        DomNode::Unsupported => Fragment::styled(Token::Undefined, "undefined"),
    }
}

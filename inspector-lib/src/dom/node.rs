//! Serialized DOM nodes.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Shared handle to a node.
pub type DomRef = Rc<DomNode>;

/// An attribute of an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// A DOM node, as produced by serializing a document.
///
/// ```json
/// {"type": "element", "tagName": "p", "childNodes": [{"type": "text", "textContent": "hi"}]}
/// ```
///
/// Unknown `type`s deserialize to [`DomNode::Unsupported`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum DomNode {
    Element {
        tag_name: String,
        #[serde(default)]
        attributes: Vec<Attribute>,
        #[serde(default)]
        child_nodes: Vec<DomRef>,
    },
    Text {
        text_content: String,
    },
    CdataSection {
        text_content: String,
    },
    Comment {
        text_content: String,
    },
    ProcessingInstruction {
        name: String,
    },
    Document {
        #[serde(default)]
        child_nodes: Vec<DomRef>,
    },
    DocumentType {
        name: String,
        #[serde(default)]
        public_id: Option<String>,
        #[serde(default)]
        system_id: Option<String>,
    },
    DocumentFragment {
        #[serde(default)]
        child_nodes: Vec<DomRef>,
    },
    #[serde(other)]
    Unsupported,
}

impl DomNode {
    pub fn element(tag_name: impl Into<String>) -> Self {
        Self::Element {
            tag_name: tag_name.into(),
            attributes: Vec::new(),
            child_nodes: Vec::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text_content: text.into(),
        }
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Self::Comment {
            text_content: text.into(),
        }
    }

    pub fn document(child_nodes: impl IntoIterator<Item = DomNode>) -> Self {
        Self::Document {
            child_nodes: child_nodes.into_iter().map(Rc::new).collect(),
        }
    }

    /// Add an attribute. No-op unless this is an element.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Self::Element { attributes, .. } = &mut self {
            attributes.push(Attribute {
                name: name.into(),
                value: value.into(),
            });
        }
        self
    }

    /// Append a child. No-op for nodes that cannot have children.
    pub fn child(mut self, child: DomNode) -> Self {
        if let Self::Element { child_nodes, .. }
        | Self::Document { child_nodes }
        | Self::DocumentFragment { child_nodes } = &mut self
        {
            child_nodes.push(Rc::new(child));
        }
        self
    }

    /// The DOM `nodeName`.
    pub fn node_name(&self) -> &str {
        match self {
            Self::Element { tag_name, .. } => tag_name,
            Self::Text { .. } => "#text",
            Self::CdataSection { .. } => "#cdata-section",
            Self::Comment { .. } => "#comment",
            Self::ProcessingInstruction { name } => name,
            Self::Document { .. } => "#document",
            Self::DocumentType { name, .. } => name,
            Self::DocumentFragment { .. } => "#document-fragment",
            Self::Unsupported => "#unsupported",
        }
    }

    pub fn child_nodes(&self) -> &[DomRef] {
        match self {
            Self::Element { child_nodes, .. }
            | Self::Document { child_nodes }
            | Self::DocumentFragment { child_nodes } => child_nodes,
            _ => &[],
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element { .. })
    }

    /// Text of text-like nodes.
    pub fn text_content(&self) -> Option<&str> {
        match self {
            Self::Text { text_content }
            | Self::CdataSection { text_content }
            | Self::Comment { text_content } => Some(text_content),
            _ => None,
        }
    }
}

/// Parse a serialized node from JSON text.
pub fn from_json_str(text: &str) -> Result<DomNode, LoadError> {
    Ok(serde_json::from_str(text)?)
}

//! Tree inspector library
//!
//! Renders arbitrary in-memory values (objects, arrays, maps, sets, DOM trees and
//! tabular data) as expandable trees or tables, like a devtools console inspector.
//!
//! The [`tree`] module holds the shape-independent engine; [`object`], [`dom`] and
//! [`table`] are the concrete inspectors built on top of it.

pub mod dom;
pub mod error;
pub mod object;
pub mod table;
pub mod tree;

pub use dom::{DomInspector, DomNode, DomTreeAdapter};
pub use error::{AccessError, AdapterError, LoadError};
pub use object::{ObjectInspector, ObjectNode, ObjectOptions, ObjectTreeAdapter, Value};
pub use table::TableView;
pub use tree::{
    ExpandPaths, ExpansionState, Fragment, Label, Token, TreeAdapter, TreeItem, TreeNode, TreeView,
};

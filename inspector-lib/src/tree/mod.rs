//! Generic tree engine.
//!
//! One rendering driver works over any data shape through a [`TreeAdapter`].
//! Which nodes are expanded is tracked per structural path (`$.a.b`) in an
//! [`ExpansionState`] owned by the [`TreeView`].
//!
//! # Example
//!
//! ```ignore
//! use inspector_lib::object::{ObjectTreeAdapter, Value};
//! use inspector_lib::tree::TreeView;
//!
//! let data = Value::object([("a", Value::from(1)), ("b", Value::from(2))]);
//! let mut view = TreeView::new(ObjectTreeAdapter::default(), data.into())
//!     .with_expand_level(1);
//!
//! let root = view.render();
//! assert!(root.expanded);
//! assert_eq!(root.children.len(), 2);
//! ```

mod adapter;
mod fragment;
mod node;
pub mod path;
mod resolve;
mod state;
mod view;

pub use adapter::{Label, RenderContext, TreeAdapter, TreeItem};
pub use fragment::{Fragment, Span, Token};
pub use node::{ARROW_COLLAPSED, ARROW_EXPANDED, PLACEHOLDER, Row, RowKind, TreeNode};
pub use path::ExpandPaths;
pub use resolve::resolve;
pub use state::ExpansionState;
pub use view::{DEFAULT_EXPAND_LEVEL, TreeView};

//! Object inspector: plain objects, arrays, maps, sets and friends.

mod adapter;
pub mod format;
mod json;
mod property;
mod value;

pub use adapter::{ENTRIES_NAME, ObjectNode, ObjectOptions, ObjectTreeAdapter, PROTO_NAME};
pub use json::{from_json, from_json_str};
pub use property::{Comparator, KeySort, own_property_names, safe_get};
pub use value::{Getter, Object, ObjectKind, ObjectRef, Property, PropertyKey, Slot, Value};

use crate::tree::TreeView;

/// A tree view over [`Value`]s.
pub type ObjectInspector = TreeView<ObjectTreeAdapter>;

impl ObjectInspector {
    /// Inspect `value` with default options.
    pub fn inspect(value: Value) -> Self {
        TreeView::new(ObjectTreeAdapter::default(), ObjectNode::Value(value))
    }
}

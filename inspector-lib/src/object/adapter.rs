//! Tree adapter for [`Value`]s.

use log::trace;

use super::format;
use super::property::{KeySort, safe_get, snapshot};
use super::value::{Object, ObjectKind, ObjectRef, Property, PropertyKey, Value};
use crate::error::AdapterError;
use crate::tree::{Fragment, Label, RenderContext, Token, TreeAdapter, TreeItem};

/// Name of the synthetic node grouping a map's or set's entries.
pub const ENTRIES_NAME: &str = "[[Entries]]";

/// Name of the synthetic prototype node.
pub const PROTO_NAME: &str = "__proto__";

/// Data walked by the [`ObjectTreeAdapter`].
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectNode {
    Value(Value),
    /// The `[[Entries]]` of a map or set.
    Entries(ObjectRef),
}

impl From<Value> for ObjectNode {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

/// Options of the object inspector.
#[derive(Debug, Clone)]
pub struct ObjectOptions {
    /// Also list non-enumerable properties, array `length` and `__proto__`.
    pub show_non_enumerable: bool,
    pub sort_object_keys: KeySort,
    /// Properties shown in an object preview.
    pub max_properties: usize,
    /// Elements shown in an array preview.
    pub max_array_items: usize,
}

impl Default for ObjectOptions {
    fn default() -> Self {
        Self {
            show_non_enumerable: false,
            sort_object_keys: KeySort::Insertion,
            max_properties: 5,
            max_array_items: 10,
        }
    }
}

/// Walks objects, arrays, maps and sets.
#[derive(Debug, Clone, Default)]
pub struct ObjectTreeAdapter {
    options: ObjectOptions,
}

impl ObjectTreeAdapter {
    pub fn new(options: ObjectOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ObjectOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut ObjectOptions {
        &mut self.options
    }

    fn is_visible(&self, property: &Property) -> bool {
        property.enumerable || self.options.show_non_enumerable
    }

    fn object_has_children(&self, object: &Object) -> bool {
        let has_entries = match object.kind().try_borrow().as_deref() {
            Ok(ObjectKind::Array(items)) | Ok(ObjectKind::Set(items)) => !items.is_empty(),
            Ok(ObjectKind::Map(entries)) => !entries.is_empty(),
            Ok(ObjectKind::Buffer(bytes)) => !bytes.is_empty(),
            // Being mutated right now; let `children` report it.
            Err(_) => return true,
            Ok(_) => false,
        };
        if has_entries {
            return true;
        }
        // Arrays always have a non-enumerable `length`.
        if self.options.show_non_enumerable
            && (object.is_array() || object.prototype().is_some())
        {
            return true;
        }
        object
            .properties()
            .try_borrow()
            .map(|properties| properties.iter().any(|p| self.is_visible(p)))
            .unwrap_or(true)
    }

    fn entries_children(&self, object: &Object) -> Result<Vec<TreeItem<ObjectNode>>, AdapterError> {
        let kind = object
            .kind()
            .try_borrow()
            .map_err(|_| AdapterError::busy(object.class_name()))?;
        let items = match &*kind {
            ObjectKind::Map(entries) => entries
                .iter()
                .map(|(key, value)| TreeItem::new(key.to_key_string(), value.clone().into()))
                .collect(),
            ObjectKind::Set(items) => items
                .iter()
                .enumerate()
                .map(|(i, value)| TreeItem::new(i.to_string(), value.clone().into()))
                .collect(),
            _ => return Err(AdapterError::unsupported(format!("entries of {}", object.class_name()))),
        };
        Ok(items)
    }

    fn object_children(
        &self,
        object: &ObjectRef,
    ) -> Result<Vec<TreeItem<ObjectNode>>, AdapterError> {
        let busy = || AdapterError::busy(object.class_name());
        let mut children = Vec::new();

        let is_array = {
            let kind = object.kind().try_borrow().map_err(|_| busy())?;
            match &*kind {
                ObjectKind::Map(_) | ObjectKind::Set(_) => {
                    children.push(
                        TreeItem::new(ENTRIES_NAME, ObjectNode::Entries(object.clone()))
                            .synthetic()
                            .expanded(true),
                    );
                    false
                }
                ObjectKind::Array(items) => {
                    children.extend(
                        items
                            .iter()
                            .enumerate()
                            .map(|(i, item)| TreeItem::new(i.to_string(), item.clone().into())),
                    );
                    true
                }
                ObjectKind::Buffer(bytes) => {
                    children.extend(bytes.iter().enumerate().map(|(i, byte)| {
                        TreeItem::new(i.to_string(), byte_value(*byte).into())
                    }));
                    false
                }
                _ => false,
            }
        };

        let mut properties: Vec<Property> = snapshot(object)
            .ok_or_else(busy)?
            .into_iter()
            .filter(|p| self.is_visible(p))
            .collect();
        if !is_array {
            self.options.sort_object_keys.apply(&mut properties);
        }
        children.extend(properties.iter().map(|property| {
            TreeItem::new(property.key.display_name(), safe_get(property).into())
                .non_enumerable(!property.enumerable)
        }));

        if self.options.show_non_enumerable {
            if is_array {
                let length = Value::Number(object.entry_count() as f64);
                children.push(TreeItem::new("length", length.into()).non_enumerable(true));
            }
            if let Some(prototype) = object.prototype() {
                children.push(
                    TreeItem::new(PROTO_NAME, prototype.into())
                        .synthetic()
                        .non_enumerable(true),
                );
            }
        }

        trace!("{} children for {}", children.len(), object.class_name());
        Ok(children)
    }

    /// Direct property lookup; synthetic names are left to enumeration.
    fn lookup(&self, object: &Object, name: &str) -> Option<Value> {
        match (object.kind().try_borrow().as_deref(), name.parse::<usize>()) {
            (Ok(ObjectKind::Array(items)), Ok(index)) => return items.get(index).cloned(),
            (Ok(ObjectKind::Buffer(bytes)), Ok(index)) => {
                return bytes.get(index).map(|byte| byte_value(*byte));
            }
            _ => {}
        }
        let properties = snapshot(object)?;
        properties
            .iter()
            .find(|p| p.key == PropertyKey::from(name))
            .map(safe_get)
    }

    fn render_value(&self, cx: &RenderContext<'_, ObjectNode>) -> Option<Fragment> {
        match &cx.item.data {
            ObjectNode::Entries(_) => None,
            ObjectNode::Value(value) if cx.depth == 0 => Some(format::preview(
                value,
                self.options.max_properties,
                self.options.max_array_items,
            )),
            ObjectNode::Value(value) => Some(format::value(value)),
        }
    }
}

fn byte_value(byte: u8) -> Value {
    Value::Number(f64::from(byte))
}

impl TreeAdapter for ObjectTreeAdapter {
    type Data = ObjectNode;

    fn has_children(&self, data: &ObjectNode) -> bool {
        match data {
            ObjectNode::Entries(object) => object.entry_count() > 0,
            ObjectNode::Value(Value::Object(object)) => self.object_has_children(object),
            ObjectNode::Value(_) => false,
        }
    }

    fn children(&self, data: &ObjectNode) -> Result<Option<Vec<TreeItem<ObjectNode>>>, AdapterError> {
        if !self.has_children(data) {
            return Ok(None);
        }
        let children = match data {
            ObjectNode::Entries(object) => self.entries_children(object)?,
            ObjectNode::Value(Value::Object(object)) => self.object_children(object)?,
            ObjectNode::Value(_) => return Ok(None),
        };
        Ok(Some(children))
    }

    fn child(&self, data: &ObjectNode, name: &str) -> Option<ObjectNode> {
        if let ObjectNode::Value(Value::Object(object)) = data {
            if let Some(value) = self.lookup(object, name) {
                return Some(value.into());
            }
        }
        self.children(data)
            .ok()
            .flatten()?
            .into_iter()
            .find(|item| item.name.as_deref() == Some(name))
            .map(|item| item.data)
    }

    fn render(&self, cx: &RenderContext<'_, ObjectNode>) -> Label {
        let name = match cx.item.name.as_deref() {
            Some(name) if !name.is_empty() => Some(format::name(name, cx.item.non_enumerable)),
            _ if cx.depth == 0 => None,
            _ => Some(format::value(&Value::String(String::new()))),
        };
        let value = self.render_value(cx);

        let content = match (name, value) {
            (Some(name), Some(value)) => name.with(Token::Punctuation, ": ").then(value),
            (Some(name), None) => name,
            (None, Some(value)) => value,
            (None, None) => Fragment::new(),
        };
        Label::new(content)
    }
}

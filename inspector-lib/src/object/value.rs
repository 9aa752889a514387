//! Inspectable values.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::AccessError;

/// Shared handle to an object. Equality is identity.
pub type ObjectRef = Rc<Object>;

/// Computes a property's value on read. May fail.
pub type Getter = Rc<dyn Fn() -> Result<Value, AccessError>>;

/// A value that can be inspected.
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(i128),
    String(String),
    /// A symbol with its description.
    Symbol(String),
    Object(ObjectRef),
}

/// What kind of object an [`Object`] is, with its intrinsic contents.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectKind {
    Plain,
    Array(Vec<Value>),
    Function { name: String },
    Map(Vec<(Value, Value)>),
    Set(Vec<Value>),
    /// A date, kept as its display text.
    Date(String),
    RegExp { source: String, flags: String },
    Buffer(Vec<u8>),
}

/// Key of an own property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyKey {
    String(String),
    Symbol(String),
}

/// Where a property's value comes from.
#[derive(Clone)]
pub enum Slot {
    Data(Value),
    Accessor(Getter),
}

/// An own property.
#[derive(Clone)]
pub struct Property {
    pub key: PropertyKey,
    pub slot: Slot,
    pub enumerable: bool,
}

/// A heap object with own properties and an optional prototype.
///
/// Contents sit behind `RefCell`s so that objects can be wired into cycles
/// after construction.
pub struct Object {
    class_name: Option<String>,
    kind: RefCell<ObjectKind>,
    properties: RefCell<Vec<Property>>,
    prototype: RefCell<Option<Value>>,
}

impl Object {
    pub fn new(kind: ObjectKind) -> Self {
        Self {
            class_name: None,
            kind: RefCell::new(kind),
            properties: RefCell::new(Vec::new()),
            prototype: RefCell::new(None),
        }
    }

    /// An object whose constructor is `class_name`.
    pub fn with_class(kind: ObjectKind, class_name: impl Into<String>) -> Self {
        Self {
            class_name: Some(class_name.into()),
            ..Self::new(kind)
        }
    }

    /// Constructor name: the explicit class, else the kind's builtin name.
    pub fn class_name(&self) -> &str {
        if let Some(name) = &self.class_name {
            return name;
        }
        match self.kind.try_borrow().as_deref() {
            Ok(ObjectKind::Plain) | Err(_) => "Object",
            Ok(ObjectKind::Array(_)) => "Array",
            Ok(ObjectKind::Function { .. }) => "Function",
            Ok(ObjectKind::Map(_)) => "Map",
            Ok(ObjectKind::Set(_)) => "Set",
            Ok(ObjectKind::Date(_)) => "Date",
            Ok(ObjectKind::RegExp { .. }) => "RegExp",
            Ok(ObjectKind::Buffer(_)) => "Buffer",
        }
    }

    pub fn kind(&self) -> &RefCell<ObjectKind> {
        &self.kind
    }

    pub fn properties(&self) -> &RefCell<Vec<Property>> {
        &self.properties
    }

    pub fn prototype(&self) -> Option<Value> {
        self.prototype.borrow().clone()
    }

    pub fn set_prototype(&self, prototype: Option<Value>) {
        *self.prototype.borrow_mut() = prototype;
    }

    /// Define or replace a data property.
    pub fn define(&self, key: impl Into<PropertyKey>, value: Value, enumerable: bool) {
        self.define_slot(key.into(), Slot::Data(value), enumerable);
    }

    /// Define or replace an accessor property.
    pub fn define_getter(
        &self,
        key: impl Into<PropertyKey>,
        getter: impl Fn() -> Result<Value, AccessError> + 'static,
        enumerable: bool,
    ) {
        self.define_slot(key.into(), Slot::Accessor(Rc::new(getter)), enumerable);
    }

    fn define_slot(&self, key: PropertyKey, slot: Slot, enumerable: bool) {
        let mut properties = self.properties.borrow_mut();
        let property = Property {
            key,
            slot,
            enumerable,
        };
        match properties.iter_mut().find(|p| p.key == property.key) {
            Some(existing) => *existing = property,
            None => properties.push(property),
        }
    }

    /// Shorthand for an enumerable data property.
    pub fn insert(&self, key: impl Into<PropertyKey>, value: Value) {
        self.define(key, value, true);
    }

    /// Append an element. No-op unless this is an array.
    pub fn push(&self, value: Value) {
        if let ObjectKind::Array(items) = &mut *self.kind.borrow_mut() {
            items.push(value);
        }
    }

    /// Number of intrinsic entries: array length, map/set size, buffer length.
    pub fn entry_count(&self) -> usize {
        match self.kind.try_borrow().as_deref() {
            Ok(ObjectKind::Array(items)) | Ok(ObjectKind::Set(items)) => items.len(),
            Ok(ObjectKind::Map(entries)) => entries.len(),
            Ok(ObjectKind::Buffer(bytes)) => bytes.len(),
            _ => 0,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self.kind.try_borrow().as_deref(), Ok(ObjectKind::Array(_)))
    }
}

impl Value {
    pub fn from_object(object: Object) -> Self {
        Self::Object(Rc::new(object))
    }

    /// A plain object with enumerable properties in the given order.
    pub fn object<K: Into<PropertyKey>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        let object = Object::new(ObjectKind::Plain);
        for (key, value) in entries {
            object.insert(key, value);
        }
        Self::from_object(object)
    }

    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Self::from_object(Object::new(ObjectKind::Array(items.into_iter().collect())))
    }

    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        Self::from_object(Object::new(ObjectKind::Map(entries.into_iter().collect())))
    }

    pub fn set(items: impl IntoIterator<Item = Value>) -> Self {
        Self::from_object(Object::new(ObjectKind::Set(items.into_iter().collect())))
    }

    pub fn function(name: impl Into<String>) -> Self {
        Self::from_object(Object::new(ObjectKind::Function { name: name.into() }))
    }

    pub fn date(text: impl Into<String>) -> Self {
        Self::from_object(Object::new(ObjectKind::Date(text.into())))
    }

    pub fn regexp(source: impl Into<String>, flags: impl Into<String>) -> Self {
        Self::from_object(Object::new(ObjectKind::RegExp {
            source: source.into(),
            flags: flags.into(),
        }))
    }

    pub fn buffer(bytes: impl Into<Vec<u8>>) -> Self {
        Self::from_object(Object::new(ObjectKind::Buffer(bytes.into())))
    }

    pub fn symbol(description: impl Into<String>) -> Self {
        Self::Symbol(description.into())
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Name of the value's type, as `typeof` would report it.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "object",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::BigInt(_) => "bigint",
            Self::String(_) => "string",
            Self::Symbol(_) => "symbol",
            Self::Object(object) => match object.kind().try_borrow().as_deref() {
                Ok(ObjectKind::Function { .. }) => "function",
                _ => "object",
            },
        }
    }

    /// String form used when a value becomes a name, e.g. a map key.
    pub fn to_key_string(&self) -> String {
        match self {
            Self::Undefined => "undefined".to_string(),
            Self::Null => "null".to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => format_number(*n),
            Self::BigInt(n) => n.to_string(),
            Self::String(s) => s.clone(),
            Self::Symbol(description) => format!("Symbol({description})"),
            Self::Object(object) => match object.kind().try_borrow().as_deref() {
                Ok(ObjectKind::Array(items)) => items
                    .iter()
                    .map(Value::to_key_string)
                    .collect::<Vec<_>>()
                    .join(","),
                Ok(ObjectKind::Date(text)) => text.clone(),
                Ok(ObjectKind::RegExp { source, flags }) => format!("/{source}/{flags}"),
                Ok(ObjectKind::Function { name }) => format!("function {name}() {{}}"),
                _ => "[object Object]".to_string(),
            },
        }
    }
}

/// Format a number the way a console does (`1`, `1.5`, `NaN`, `-Infinity`).
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 && n.is_sign_negative() {
        "-0".to_string()
    } else {
        n.to_string()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::BigInt(a), Self::BigInt(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Symbol(a), Self::Symbol(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "Undefined"),
            Self::Null => write!(f, "Null"),
            Self::Bool(b) => write!(f, "Bool({b})"),
            Self::Number(n) => write!(f, "Number({n})"),
            Self::BigInt(n) => write!(f, "BigInt({n})"),
            Self::String(s) => write!(f, "String({s:?})"),
            Self::Symbol(s) => write!(f, "Symbol({s:?})"),
            // Objects may be cyclic, so never recurse.
            Self::Object(object) => write!(f, "Object({})", object.class_name()),
        }
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("class_name", &self.class_name())
            .field("properties", &self.properties.try_borrow().map(|p| p.len()))
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Data(value) => f.debug_tuple("Data").field(value).finish(),
            Self::Accessor(_) => write!(f, "Accessor(...)"),
        }
    }
}

impl fmt::Debug for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("key", &self.key)
            .field("slot", &self.slot)
            .field("enumerable", &self.enumerable)
            .finish()
    }
}

impl PropertyKey {
    pub fn symbol(description: impl Into<String>) -> Self {
        Self::Symbol(description.into())
    }

    /// Text used as the tree item name.
    pub fn display_name(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::Symbol(description) => format!("Symbol({description})"),
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(key: &str) -> Self {
        Self::String(key.to_string())
    }
}

impl From<String> for PropertyKey {
    fn from(key: String) -> Self {
        Self::String(key)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<ObjectRef> for Value {
    fn from(object: ObjectRef) -> Self {
        Self::Object(object)
    }
}

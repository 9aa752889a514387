//! Property access helpers.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use log::warn;

use super::value::{Object, Property, PropertyKey, Slot, Value};

/// Orders two property keys.
pub type Comparator = Rc<dyn Fn(&PropertyKey, &PropertyKey) -> Ordering>;

/// How object keys are ordered. Array elements are never reordered.
#[derive(Clone, Default)]
pub enum KeySort {
    /// Definition order.
    #[default]
    Insertion,
    Alphabetical,
    Custom(Comparator),
}

impl KeySort {
    pub fn custom(compare: impl Fn(&PropertyKey, &PropertyKey) -> Ordering + 'static) -> Self {
        Self::Custom(Rc::new(compare))
    }

    /// Sort `properties` in place. The sort is stable.
    pub fn apply(&self, properties: &mut [Property]) {
        match self {
            Self::Insertion => {}
            Self::Alphabetical => {
                properties.sort_by(|a, b| a.key.display_name().cmp(&b.key.display_name()))
            }
            Self::Custom(compare) => properties.sort_by(|a, b| compare(&a.key, &b.key)),
        }
    }
}

impl fmt::Debug for KeySort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insertion => write!(f, "Insertion"),
            Self::Alphabetical => write!(f, "Alphabetical"),
            Self::Custom(_) => write!(f, "Custom(...)"),
        }
    }
}

/// Keys of all own properties, enumerable or not, in definition order.
///
/// Returns nothing while the object is being mutated.
pub fn own_property_names(object: &Object) -> Vec<PropertyKey> {
    object
        .properties()
        .try_borrow()
        .map(|properties| properties.iter().map(|p| p.key.clone()).collect())
        .unwrap_or_default()
}

/// Read a property, running its accessor if it has one.
///
/// A failing accessor yields `undefined` so that one bad property does not
/// hide its siblings.
pub fn safe_get(property: &Property) -> Value {
    match &property.slot {
        Slot::Data(value) => value.clone(),
        Slot::Accessor(getter) => getter().unwrap_or_else(|err| {
            warn!("reading {}: {err}", property.key.display_name());
            Value::Undefined
        }),
    }
}

/// Snapshot of the own properties, so accessors can run without holding a
/// borrow on the object.
pub(crate) fn snapshot(object: &Object) -> Option<Vec<Property>> {
    object.properties().try_borrow().ok().map(|p| p.clone())
}

//! Console-style formatting of values.

use super::property::{safe_get, snapshot};
use super::value::{Object, ObjectKind, Value, format_number};
use crate::tree::{Fragment, Token};

/// Ellipsis shown when a preview is cut short.
pub const ELLIPSIS: &str = "…";

/// Short description of a value: `"text"`, `42`, `Array(3)`, `Map(1)`, …
pub fn value(value: &Value) -> Fragment {
    match value {
        Value::Undefined => Fragment::styled(Token::Undefined, "undefined"),
        Value::Null => Fragment::styled(Token::Null, "null"),
        Value::Bool(b) => Fragment::styled(Token::Boolean, b.to_string()),
        Value::Number(n) => Fragment::styled(Token::Number, format_number(*n)),
        Value::BigInt(n) => Fragment::styled(Token::Number, format!("{n}n")),
        Value::String(s) => Fragment::styled(Token::String, format!("\"{s}\"")),
        Value::Symbol(description) => {
            Fragment::styled(Token::Symbol, format!("Symbol({description})"))
        }
        Value::Object(object) => object_value(object),
    }
}

fn object_value(object: &Object) -> Fragment {
    let Ok(kind) = object.kind().try_borrow() else {
        return Fragment::text(object.class_name());
    };
    match &*kind {
        ObjectKind::Map(entries) => Fragment::text(format!("Map({})", entries.len())),
        ObjectKind::Set(items) => Fragment::text(format!("Set({})", items.len())),
        ObjectKind::Date(text) => Fragment::text(text.clone()),
        ObjectKind::RegExp { source, flags } => {
            Fragment::styled(Token::RegExp, format!("/{source}/{flags}"))
        }
        ObjectKind::Array(items) => Fragment::text(format!("Array({})", items.len())),
        ObjectKind::Buffer(bytes) => Fragment::text(format!("Buffer[{}]", bytes.len())),
        ObjectKind::Function { name } => Fragment::styled(Token::FunctionPrefix, "ƒ ")
            .with(Token::FunctionName, format!("{name}()")),
        ObjectKind::Plain => Fragment::text(object.class_name()),
    }
}

/// Size summary of a map's or set's `[[Entries]]` grouping.
pub fn entries(object: &Object) -> Fragment {
    Fragment::text(format!("({})", object.entry_count()))
}

/// A property name, dimmed when non-enumerable.
pub fn name(name: &str, dimmed: bool) -> Fragment {
    let token = if dimmed { Token::DimmedName } else { Token::Name };
    Fragment::styled(token, name)
}

/// Compact one-line preview of a value.
///
/// Arrays and buffers show their first `max_array_items` elements, other
/// objects their first `max_properties` own properties. Scalars, dates and regexps fall back
/// to [`value`].
pub fn preview(data: &Value, max_properties: usize, max_array_items: usize) -> Fragment {
    let Value::Object(object) = data else {
        return value(data);
    };

    let items = match object.kind().try_borrow().as_deref() {
        Ok(ObjectKind::Date(_)) | Ok(ObjectKind::RegExp { .. }) | Err(_) => {
            return value(data);
        }
        Ok(ObjectKind::Array(items)) => Some(("", items.clone())),
        Ok(ObjectKind::Buffer(bytes)) => Some((
            "Buffer",
            bytes.iter().map(|byte| Value::Number(f64::from(*byte))).collect(),
        )),
        Ok(_) => None,
    };

    match items {
        Some((class_name, items)) => array_preview(class_name, &items, max_array_items),
        None => object_preview(object, max_properties),
    }
}

fn array_preview(class_name: &str, items: &[Value], max_items: usize) -> Fragment {
    let mut shown: Vec<Fragment> = items.iter().take(max_items).map(value).collect();
    if items.len() > max_items {
        shown.push(Fragment::text(ELLIPSIS));
    }

    let mut fragment = Fragment::new();
    if !items.is_empty() {
        fragment.push(Token::Preview, format!("{class_name}({}) ", items.len()));
    } else if !class_name.is_empty() {
        fragment.push(Token::Preview, format!("{class_name} "));
    }
    fragment
        .with(Token::Punctuation, "[")
        .then(Fragment::join(shown, ", "))
        .with(Token::Punctuation, "]")
}

fn object_preview(object: &Object, max_properties: usize) -> Fragment {
    let properties = snapshot(object).unwrap_or_default();
    let mut shown: Vec<Fragment> = properties
        .iter()
        .take(max_properties)
        .map(|property| {
            let key = property.key.display_name();
            let key = if key.is_empty() { "\"\"".to_string() } else { key };
            name(&key, false)
                .with(Token::Punctuation, ": ")
                .then(value(&safe_get(property)))
        })
        .collect();
    if properties.len() > max_properties {
        shown.push(Fragment::text(ELLIPSIS));
    }

    let mut fragment = Fragment::new();
    let class_name = object.class_name();
    if class_name != "Object" {
        fragment.push(Token::Preview, format!("{class_name} "));
    }
    fragment
        .with(Token::Punctuation, "{")
        .then(Fragment::join(shown, ", "))
        .with(Token::Punctuation, "}")
}

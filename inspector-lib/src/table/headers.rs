//! Row and column header derivation.

use crate::object::{ObjectKind, PropertyKey, Value, safe_get};

/// Row keys and column names of a table.
#[derive(Debug, Clone, PartialEq)]
pub struct Headers {
    /// Array indices (numbers) or object keys (strings).
    pub row_headers: Vec<Value>,
    /// Union of the rows' enumerable keys, in first-seen order.
    pub col_headers: Vec<String>,
}

/// Derive the headers of `data`. `None` unless `data` is an object.
pub fn get_headers(data: &Value) -> Option<Headers> {
    let rows = rows(data)?;
    let mut col_headers: Vec<String> = Vec::new();
    for (_, row) in &rows {
        for key in enumerable_keys(row) {
            if !col_headers.contains(&key) {
                col_headers.push(key);
            }
        }
    }
    Some(Headers {
        row_headers: rows.into_iter().map(|(key, _)| key).collect(),
        col_headers,
    })
}

/// `(row key, row value)` pairs of `data`.
pub(crate) fn rows(data: &Value) -> Option<Vec<(Value, Value)>> {
    let object = data.as_object()?;
    if let Ok(ObjectKind::Array(items)) = object.kind().try_borrow().as_deref() {
        return Some(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| (Value::Number(i as f64), item.clone()))
                .collect(),
        );
    }
    let properties = object.properties().try_borrow().ok()?.clone();
    Some(
        properties
            .iter()
            .filter(|p| p.enumerable)
            .filter_map(|p| match &p.key {
                PropertyKey::String(key) => Some((Value::String(key.clone()), safe_get(p))),
                PropertyKey::Symbol(_) => None,
            })
            .collect(),
    )
}

/// Enumerable string keys of a row, indices first for arrays.
fn enumerable_keys(row: &Value) -> Vec<String> {
    let Some(object) = row.as_object() else {
        return Vec::new();
    };
    let mut keys: Vec<String> = match object.kind().try_borrow().as_deref() {
        Ok(ObjectKind::Array(items)) => (0..items.len()).map(|i| i.to_string()).collect(),
        _ => Vec::new(),
    };
    if let Ok(properties) = object.properties().try_borrow() {
        keys.extend(properties.iter().filter(|p| p.enumerable).filter_map(|p| match &p.key {
            PropertyKey::String(key) => Some(key.clone()),
            PropertyKey::Symbol(_) => None,
        }));
    }
    keys
}

/// The cell of `row` under `column`, if the row owns that key.
pub(crate) fn cell(row: &Value, column: &str) -> Option<Value> {
    let object = row.as_object()?;
    if let Ok(ObjectKind::Array(items)) = object.kind().try_borrow().as_deref() {
        if let Some(item) = column.parse::<usize>().ok().and_then(|i| items.get(i)) {
            return Some(item.clone());
        }
    }
    let properties = object.properties().try_borrow().ok()?.clone();
    properties
        .iter()
        .find(|p| p.key == PropertyKey::from(column))
        .map(safe_get)
}

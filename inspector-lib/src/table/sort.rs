//! Column sorting.

use std::cmp::Ordering;

use crate::object::Value;

/// Rank of a value's type when comparing values of different types.
fn type_rank(value: &Value) -> u8 {
    match value.type_name() {
        "string" => 0,
        "number" | "bigint" => 1,
        "object" => 2,
        "symbol" => 3,
        "boolean" => 4,
        "undefined" => 5,
        _ => 6,
    }
}

/// Ascending order of two cell values.
///
/// Values of the same type compare naturally; objects, functions and
/// `undefined` are all equal among themselves. Values of different types
/// order as string < number < object < symbol < boolean < undefined <
/// function.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (Value::BigInt(a), Value::BigInt(b)) => a.cmp(b),
        (Value::Number(a), Value::BigInt(b)) => a.partial_cmp(&(*b as f64)).unwrap_or(Ordering::Equal),
        (Value::BigInt(a), Value::Number(b)) => (*a as f64).partial_cmp(b).unwrap_or(Ordering::Equal),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Symbol(a), Value::Symbol(b)) => a.cmp(b),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

/// What the table is sorted by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortKey {
    /// The row header column.
    Index,
    Column(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Header glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// Sorting chosen by clicking headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    key: Option<SortKey>,
    ascending: bool,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort by the index column, flipping direction if already sorted by it.
    pub fn click_index(&mut self) {
        self.click(SortKey::Index);
    }

    /// Sort by `column`, flipping direction if already sorted by it.
    pub fn click_column(&mut self, column: impl Into<String>) {
        self.click(SortKey::Column(column.into()));
    }

    fn click(&mut self, key: SortKey) {
        if self.key.as_ref() == Some(&key) {
            self.ascending = !self.ascending;
        } else {
            self.key = Some(key);
            self.ascending = true;
        }
    }

    pub fn key(&self) -> Option<&SortKey> {
        self.key.as_ref()
    }

    pub fn direction(&self) -> Option<SortDirection> {
        self.key.as_ref().map(|_| {
            if self.ascending {
                SortDirection::Ascending
            } else {
                SortDirection::Descending
            }
        })
    }

    /// Direction shown on the header for `key`, if it is the sorted one.
    pub fn direction_of(&self, key: &SortKey) -> Option<SortDirection> {
        if self.key.as_ref() == Some(key) {
            self.direction()
        } else {
            None
        }
    }

    /// Order two values according to the current direction.
    pub fn compare(&self, a: &Value, b: &Value) -> Ordering {
        let ordering = compare_values(a, b);
        if self.ascending { ordering } else { ordering.reverse() }
    }
}

//! Table view model.

use log::debug;

use super::headers::{cell, get_headers, rows};
use super::sort::{SortDirection, SortKey, SortState};
use crate::object::{Value, format};
use crate::tree::Fragment;

/// Label of the row header column.
pub const INDEX_LABEL: &str = "(index)";

/// A column header with its sort indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    pub label: String,
    pub key: SortKey,
    pub sort: Option<SortDirection>,
}

/// One table row: its key and one optional cell per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub header: String,
    /// `None` where the row does not own the column's key.
    pub cells: Vec<Option<Fragment>>,
}

/// A fully derived table, ready to paint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub index: ColumnHeader,
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<TableRow>,
}

/// Shows an array or object of rows as a sortable table.
#[derive(Debug, Clone)]
pub struct TableView {
    data: Value,
    columns: Option<Vec<String>>,
    sort: SortState,
}

impl TableView {
    pub fn new(data: Value) -> Self {
        Self {
            data,
            columns: None,
            sort: SortState::new(),
        }
    }

    /// Show only these columns, in this order.
    pub fn with_columns(mut self, columns: Vec<String>) -> Self {
        self.columns = Some(columns);
        self
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn set_data(&mut self, data: Value) {
        self.data = data;
    }

    pub fn set_columns(&mut self, columns: Option<Vec<String>>) {
        self.columns = columns;
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn click_index(&mut self) {
        self.sort.click_index();
    }

    pub fn click_column(&mut self, column: impl Into<String>) {
        self.sort.click_column(column);
    }

    /// Derive the table. `None` when the data is not an object.
    pub fn table(&self) -> Option<Table> {
        let headers = get_headers(&self.data)?;
        let columns = self.columns.clone().unwrap_or(headers.col_headers);
        let mut rows = rows(&self.data)?;

        match self.sort.key() {
            Some(SortKey::Index) => {
                rows.sort_by(|(a, _), (b, _)| self.sort.compare(a, b));
            }
            Some(SortKey::Column(column)) => {
                rows.sort_by(|(_, a), (_, b)| {
                    let a = cell(a, column).unwrap_or_default();
                    let b = cell(b, column).unwrap_or_default();
                    self.sort.compare(&a, &b)
                });
            }
            None => {}
        }
        debug!("table with {} rows and {} columns", rows.len(), columns.len());

        let index_key = SortKey::Index;
        Some(Table {
            index: ColumnHeader {
                label: INDEX_LABEL.to_string(),
                sort: self.sort.direction_of(&index_key),
                key: index_key,
            },
            columns: columns
                .iter()
                .map(|column| {
                    let key = SortKey::Column(column.clone());
                    ColumnHeader {
                        label: column.clone(),
                        sort: self.sort.direction_of(&key),
                        key,
                    }
                })
                .collect(),
            rows: rows
                .iter()
                .map(|(key, row)| TableRow {
                    header: key.to_key_string(),
                    cells: columns
                        .iter()
                        .map(|column| cell(row, column).map(|value| format::value(&value)))
                        .collect(),
                })
                .collect(),
        })
    }
}

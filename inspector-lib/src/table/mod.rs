//! Table inspector: arrays or objects of rows shown as a grid.

mod headers;
mod model;
mod sort;

pub use headers::{Headers, get_headers};
pub use model::{ColumnHeader, Table, TableRow, TableView};
pub use sort::{SortDirection, SortKey, SortState, compare_values};

//! Data model for in-memory tables

mod fill;
mod schema;
mod table;

pub use fill::ColumnFill;
pub use schema::{guard_fields, CellType};
pub use table::{CellValue, Row, Table};

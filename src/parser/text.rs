//! Naive delimiter-separated text decoder

use std::borrow::Cow;

use tracing::debug;

use crate::config::Config;
use crate::error::{Result, TableError};
use crate::model::{CellValue, Row, Table};

/// Split raw text into rows of string cells.
///
/// The split is not quote aware: a separator inside a quoted field ends the
/// field, and quotes are kept as part of the cell text.
pub fn split_rows(raw: &str, column_separator: &str, line_separator: &str) -> Result<Vec<Row>> {
    if column_separator.is_empty() || line_separator.is_empty() {
        return Err(TableError::EmptySeparator);
    }

    Ok(raw
        .split(line_separator)
        .map(|line| {
            line.split(column_separator)
                .map(|cell| CellValue::String(Cow::Owned(cell.to_string())))
                .collect()
        })
        .collect())
}

/// Decode raw text into a table using the separators in `config`
pub fn decode(raw: &str, config: Config) -> Result<Table> {
    let rows = split_rows(raw, &config.column_separator, &config.line_separator)?;
    debug!(lines = rows.len(), "decoded text");
    Table::new(rows, config)
}

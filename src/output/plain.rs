//! Plain-text encoder with per-cell escaping

use std::borrow::Cow;

use crate::model::{CellValue, Table};

/// Escape a single cell for output.
///
/// Strings lose control characters and anything outside ASCII, then get
/// wrapped in double quotes unless they already start and end with one.
/// No quote doubling or separator escaping is done. A string stripped to
/// nothing is emitted as an empty cell.
pub fn escape_field(field: &CellValue) -> Cow<'_, str> {
    match field.as_str() {
        Some(s) => {
            let stripped: String = s.chars().filter(|c| ('\x20'..='\x7f').contains(c)).collect();
            if stripped.is_empty() {
                Cow::Borrowed("")
            } else if stripped.starts_with('"') && stripped.ends_with('"') {
                Cow::Owned(stripped)
            } else {
                Cow::Owned(format!("\"{}\"", stripped))
            }
        }
        None => field.display(),
    }
}

fn encode_line(cells: &[CellValue], escape: bool, separator: &str) -> String {
    cells
        .iter()
        .map(|cell| {
            if escape {
                escape_field(cell)
            } else {
                cell.display()
            }
        })
        .collect::<Vec<_>>()
        .join(separator)
}

/// Encode the header (when present) and body rows of a table
pub fn encode(table: &Table) -> String {
    let escape = table.escape_data();
    let separator = table.column_separator();

    let header = (!table.header_fields().is_empty()).then(|| table.header_fields());
    header
        .into_iter()
        .chain(table.lines().iter().map(Vec::as_slice))
        .map(|cells| encode_line(cells, escape, separator))
        .collect::<Vec<_>>()
        .join(table.line_separator())
}

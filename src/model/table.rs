//! Table and cell data structures

use std::borrow::Cow;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::Config;
use crate::error::{FieldRole, Result, TableError};
use crate::output::ResponseSink;

use super::fill::ColumnFill;
use super::schema::{guard_fields, CellType};

/// A cell value with type information
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(Cow<'static, str>),
    /// Nested array or object from loosely typed input. Never accepted by the
    /// type guard, but may be stored through `set_value_from_position`.
    Composite(serde_json::Value),
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CellValue::Null, CellValue::Null) => true,
            (CellValue::Bool(a), CellValue::Bool(b)) => a == b,
            (CellValue::Int(a), CellValue::Int(b)) => a == b,
            (CellValue::Float(a), CellValue::Float(b)) => {
                // Handle NaN comparison
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    a == b
                }
            }
            (CellValue::String(a), CellValue::String(b)) => a == b,
            (CellValue::Composite(a), CellValue::Composite(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for CellValue {}

impl CellValue {
    /// Kind of this value
    pub fn cell_type(&self) -> CellType {
        match self {
            CellValue::Null => CellType::Null,
            CellValue::Bool(_) => CellType::Bool,
            CellValue::Int(_) => CellType::Int,
            CellValue::Float(_) => CellType::Float,
            CellValue::String(_) => CellType::String,
            CellValue::Composite(serde_json::Value::Object(_)) => CellType::Object,
            CellValue::Composite(serde_json::Value::Null) => CellType::Null,
            CellValue::Composite(_) => CellType::Array,
        }
    }

    /// Borrow the text of a string cell
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// Raw text of the value, without quoting. Null is the empty string.
    pub fn display(&self) -> Cow<'_, str> {
        match self {
            CellValue::Null => Cow::Borrowed(""),
            CellValue::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            CellValue::Int(i) => Cow::Owned(i.to_string()),
            // JSON number text keeps the fraction or exponent: 1.0, 1e300
            CellValue::Float(f) => Cow::Owned(
                serde_json::Number::from_f64(*f)
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| f.to_string()),
            ),
            CellValue::String(s) => Cow::Borrowed(s.as_ref()),
            CellValue::Composite(v) => Cow::Owned(v.to_string()),
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(Cow::Owned(s.to_string()))
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(Cow::Owned(s))
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        CellValue::Int(i64::from(i))
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<CellValue>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}

impl From<serde_json::Value> for CellValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => CellValue::Null,
            Value::Bool(b) => CellValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => CellValue::Int(i),
                None => CellValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => CellValue::String(Cow::Owned(s)),
            other => CellValue::Composite(other),
        }
    }
}

/// A row of cells in column order
pub type Row = Vec<CellValue>;

/// Build a [`Row`] from heterogeneous values
#[macro_export]
macro_rules! row {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::model::CellValue::from($value)),*]
    };
}

/// A header plus body rows. Rows may differ in length.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    header: Row,
    lines: Vec<Row>,
    config: Config,
}

/// Convert a 1-based position into a slot index
fn slot(position: usize) -> Option<usize> {
    position.checked_sub(1)
}

impl Table {
    /// Create a table from literal rows.
    ///
    /// With `config.has_header` the first row becomes the header. Every cell
    /// must be a string, integer, float or boolean.
    pub fn new(mut rows: Vec<Row>, config: Config) -> Result<Self> {
        let mut table = Self {
            header: Vec::new(),
            lines: Vec::new(),
            config,
        };

        if table.config.has_header && !rows.is_empty() {
            let header = rows.remove(0);
            table.set_header_fields(header)?;
        }
        table.set_lines(rows)?;

        debug!(
            header_len = table.header.len(),
            lines = table.lines.len(),
            "constructed table"
        );
        Ok(table)
    }

    /// Create a table from a JSON array of arrays
    pub fn from_json(value: &serde_json::Value, config: Config) -> Result<Self> {
        let elements = match value {
            serde_json::Value::Array(elements) => elements,
            _ => return Err(TableError::NotATable),
        };

        let rows = elements
            .iter()
            .enumerate()
            .map(|(index, element)| match element {
                serde_json::Value::Array(cells) => {
                    Ok(cells.iter().cloned().map(CellValue::from).collect())
                }
                _ => Err(TableError::Shape { index }),
            })
            .collect::<Result<Vec<Row>>>()?;

        Self::new(rows, config)
    }

    /// Decode delimiter-separated text
    pub fn from_text(raw: &str, config: Config) -> Result<Self> {
        crate::parser::decode(raw, config)
    }

    /// Read and decode a delimiter-separated file
    pub fn from_file(path: impl AsRef<Path>, config: Config) -> Result<Self> {
        crate::parser::read_file(path.as_ref(), config)
    }

    /// Encode the table as text using the current formatting options
    pub fn to_text(&self) -> String {
        crate::output::encode(self)
    }

    /// Write the encoded table to a file, preceded by a UTF-8 BOM
    pub fn export_file(&self, path: impl AsRef<Path>) -> Result<()> {
        crate::output::export_file(self, path.as_ref())
    }

    /// Send the encoded table as a CSV attachment
    pub fn send_content(&self, sink: &mut dyn ResponseSink, filename: Option<&str>) -> Result<()> {
        crate::output::send_content(self, sink, filename)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn column_separator(&self) -> &str {
        &self.config.column_separator
    }

    pub fn set_column_separator(&mut self, sep: impl Into<String>) {
        self.config.column_separator = sep.into();
    }

    pub fn line_separator(&self) -> &str {
        &self.config.line_separator
    }

    pub fn set_line_separator(&mut self, sep: impl Into<String>) {
        self.config.line_separator = sep.into();
    }

    pub fn escape_data(&self) -> bool {
        self.config.escape_data
    }

    pub fn set_escape_data(&mut self, escape: bool) {
        self.config.escape_data = escape;
    }

    pub fn header_fields(&self) -> &[CellValue] {
        &self.header
    }

    /// Replace the header. Nothing changes if any field is rejected.
    pub fn set_header_fields(&mut self, fields: Row) -> Result<()> {
        guard_fields(&fields, FieldRole::Header)?;
        self.header = fields;
        Ok(())
    }

    /// Replace an existing header field (1-based). Never extends the header.
    pub fn set_header_field(&mut self, position: usize, value: CellValue) -> Result<()> {
        let idx = slot(position)
            .filter(|&i| i < self.header.len())
            .ok_or(TableError::HeaderFieldNotFound { position })?;
        guard_fields([&value], FieldRole::Header)?;
        self.header[idx] = value;
        Ok(())
    }

    pub fn lines(&self) -> &[Row] {
        &self.lines
    }

    /// Clear the body, then append `rows` through [`Table::add_lines`]
    pub fn set_lines(&mut self, rows: Vec<Row>) -> Result<()> {
        self.lines.clear();
        self.add_lines(rows)
    }

    /// Append one row. Nothing is appended if any cell is rejected.
    pub fn add_line(&mut self, row: Row) -> Result<()> {
        guard_fields(&row, FieldRole::Value)?;
        self.lines.push(row);
        Ok(())
    }

    /// Append rows in order, stopping at the first rejected row.
    ///
    /// Rows appended before the failure are kept.
    pub fn add_lines(&mut self, rows: Vec<Row>) -> Result<()> {
        for row in rows {
            self.add_line(row)?;
        }
        Ok(())
    }

    /// Cells of a body row (1-based)
    pub fn line_values(&self, line: usize) -> Result<&[CellValue]> {
        slot(line)
            .and_then(|i| self.lines.get(i))
            .map(Vec::as_slice)
            .ok_or(TableError::LineNotFound { line })
    }

    /// Cell at a 1-based line and column
    pub fn value_from_position(&self, line: usize, column: usize) -> Result<&CellValue> {
        slot(line)
            .and_then(|l| self.lines.get(l))
            .and_then(|row| slot(column).and_then(|c| row.get(c)))
            .ok_or(TableError::OutOfRange { line, column })
    }

    /// Overwrite an existing cell (1-based).
    ///
    /// Unlike the other mutators this does not type-guard `value`; nested or
    /// null values are stored as given and encoded through the fallback.
    pub fn set_value_from_position(
        &mut self,
        line: usize,
        column: usize,
        value: CellValue,
    ) -> Result<()> {
        let cell = slot(line)
            .and_then(|l| self.lines.get_mut(l))
            .and_then(|row| slot(column).and_then(move |c| row.get_mut(c)))
            .ok_or(TableError::OutOfRange { line, column })?;
        *cell = value;
        Ok(())
    }

    /// One value per body row at a 1-based column; `Null` for short rows
    pub fn column_values(&self, column: usize) -> Vec<CellValue> {
        self.lines
            .iter()
            .map(|row| {
                slot(column)
                    .and_then(|c| row.get(c))
                    .cloned()
                    .unwrap_or(CellValue::Null)
            })
            .collect()
    }

    /// Append one trailing column.
    ///
    /// A non-empty header takes the first value, then each body row takes the
    /// next one in order. Rows past the end of `values` get `Null`.
    pub fn add_column(&mut self, values: Vec<CellValue>) -> Result<()> {
        guard_fields(&values, FieldRole::Value)?;

        let mut fill = ColumnFill::new(values);
        if !self.header.is_empty() {
            fill.extend_row(&mut self.header);
        }
        for row in &mut self.lines {
            fill.extend_row(row);
        }

        trace!(unused = fill.remaining(), "added column");
        Ok(())
    }

    /// Number of body rows
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of header fields
    pub fn header_len(&self) -> usize {
        self.header.len()
    }

    /// True when there is neither a header nor any body row
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.lines.is_empty()
    }
}

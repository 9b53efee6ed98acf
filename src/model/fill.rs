//! Positional value queue used when inserting a column

use std::collections::VecDeque;

use super::table::CellValue;

/// Hands out the values of a new column in order, then `Null` once drained.
///
/// One fill is threaded through the header step and the row step of a column
/// insertion so the header always takes the first value.
#[derive(Debug, Default)]
pub struct ColumnFill {
    remaining: VecDeque<CellValue>,
}

impl ColumnFill {
    pub fn new(values: Vec<CellValue>) -> Self {
        Self {
            remaining: values.into(),
        }
    }

    /// Take the next value, or `Null` when exhausted
    pub fn next_value(&mut self) -> CellValue {
        self.remaining.pop_front().unwrap_or(CellValue::Null)
    }

    /// Append the next value to a row
    pub fn extend_row(&mut self, row: &mut Vec<CellValue>) {
        row.push(self.next_value());
    }

    /// Values not yet consumed
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pads_with_null_once_drained() {
        let mut fill = ColumnFill::new(vec![CellValue::Int(1)]);
        assert_eq!(fill.remaining(), 1);
        assert_eq!(fill.next_value(), CellValue::Int(1));
        assert_eq!(fill.next_value(), CellValue::Null);
        assert_eq!(fill.remaining(), 0);
    }

    #[test]
    fn test_extend_row() {
        let mut fill = ColumnFill::new(vec![CellValue::from("x")]);
        let mut row = vec![CellValue::Int(1)];
        fill.extend_row(&mut row);
        fill.extend_row(&mut row);
        assert_eq!(
            row,
            vec![CellValue::Int(1), CellValue::from("x"), CellValue::Null]
        );
    }
}

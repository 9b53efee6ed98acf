//! Cell kinds and the scalar type guard

use serde::{Deserialize, Serialize};

use crate::error::{FieldRole, Result, TableError};

use super::table::CellValue;

/// Kind of a cell value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellType {
    Null,
    Bool,
    Int,
    Float,
    String,
    Array,
    Object,
}

impl Default for CellType {
    fn default() -> Self {
        CellType::Null
    }
}

impl CellType {
    /// Whether guarded mutators accept cells of this kind
    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            CellType::Bool | CellType::Int | CellType::Float | CellType::String
        )
    }
}

impl std::fmt::Display for CellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellType::Null => write!(f, "null"),
            CellType::Bool => write!(f, "bool"),
            CellType::Int => write!(f, "int"),
            CellType::Float => write!(f, "float"),
            CellType::String => write!(f, "string"),
            CellType::Array => write!(f, "array"),
            CellType::Object => write!(f, "object"),
        }
    }
}

/// Reject the first cell that is not a string, integer, float or boolean
pub fn guard_fields<'a, I>(fields: I, role: FieldRole) -> Result<()>
where
    I: IntoIterator<Item = &'a CellValue>,
{
    for field in fields {
        let kind = field.cell_type();
        if !kind.is_scalar() {
            return Err(TableError::InvalidFieldType { role, kind });
        }
    }
    Ok(())
}

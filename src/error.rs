//! Error types for table construction, access and I/O

use std::path::PathBuf;

use thiserror::Error;

use crate::model::CellType;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, TableError>;

/// Which part of the table a rejected value was headed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    Header,
    Value,
}

impl std::fmt::Display for FieldRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldRole::Header => write!(f, "header field"),
            FieldRole::Value => write!(f, "value"),
        }
    }
}

/// Coarse classification of a [`TableError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Shape,
    InvalidFieldType,
    NotFound,
    OutOfRange,
    FileNotFound,
    InvalidSeparator,
    Io,
}

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Rows must be an array of lines")]
    NotATable,

    #[error("Line {index} is not an array")]
    Shape { index: usize },

    #[error("Invalid type for {role}: {kind}")]
    InvalidFieldType { role: FieldRole, kind: CellType },

    #[error("Doesn't exist a header field on {position} position")]
    HeaderFieldNotFound { position: usize },

    #[error("Line {line} doesn't exist")]
    LineNotFound { line: usize },

    #[error("Doesn't exist a value on {line} line and {column} column")]
    OutOfRange { line: usize, column: usize },

    #[error("File doesn't exist: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Column and line separators must not be empty")]
    EmptySeparator,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TableError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TableError::NotATable | TableError::Shape { .. } => ErrorKind::Shape,
            TableError::InvalidFieldType { .. } => ErrorKind::InvalidFieldType,
            TableError::HeaderFieldNotFound { .. } | TableError::LineNotFound { .. } => {
                ErrorKind::NotFound
            }
            TableError::OutOfRange { .. } => ErrorKind::OutOfRange,
            TableError::FileNotFound(_) => ErrorKind::FileNotFound,
            TableError::EmptySeparator => ErrorKind::InvalidSeparator,
            TableError::Io(_) => ErrorKind::Io,
        }
    }

    /// HTTP-style status code for callers that surface errors over a response
    pub fn status(&self) -> u16 {
        match self.kind() {
            ErrorKind::Shape | ErrorKind::InvalidFieldType => 403,
            ErrorKind::NotFound | ErrorKind::FileNotFound => 404,
            ErrorKind::OutOfRange | ErrorKind::InvalidSeparator => 400,
            ErrorKind::Io => 500,
        }
    }
}

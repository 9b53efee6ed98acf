//! Reading tables from text and files

mod text;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::Config;
use crate::error::{Result, TableError};
use crate::model::Table;

pub use self::text::{decode, split_rows};

/// UTF-8 byte order mark written ahead of exported files
pub const UTF8_BOM: &str = "\u{feff}";

/// Read a whole file and decode it.
///
/// Fails with [`TableError::FileNotFound`] unless `path` is an existing file.
/// A leading byte order mark is dropped.
pub fn read_file(path: &Path, config: Config) -> Result<Table> {
    if !path.is_file() {
        return Err(TableError::FileNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = content.len(), "read file");

    let raw = content.strip_prefix(UTF8_BOM).unwrap_or(&content);
    decode(raw, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::row;

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file(&dir.path().join("absent.csv"), Config::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert_eq!(err.status(), 404);
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file(dir.path(), Config::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
    }

    #[test]
    fn test_strips_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bom.csv");
        fs::write(&path, "\u{feff}id,name\n1,Ann").unwrap();

        let table = read_file(&path, Config::default()).unwrap();
        assert_eq!(table.header_fields(), row!["id", "name"].as_slice());
        assert_eq!(table.line_values(1).unwrap(), row!["1", "Ann"].as_slice());
    }
}

//! File export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::model::Table;
use crate::parser::UTF8_BOM;

use super::encode;

/// Write the BOM and the encoded table to `writer`
pub fn write_with_bom(table: &Table, writer: &mut dyn Write) -> Result<()> {
    writer.write_all(UTF8_BOM.as_bytes())?;
    writer.write_all(encode(table).as_bytes())?;
    Ok(())
}

/// Create (or truncate) `path` and write the encoded table to it
pub fn export_file(table: &Table, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_with_bom(table, &mut writer)?;
    writer.flush()?;
    debug!(path = %path.display(), lines = table.line_count(), "exported table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::row;

    #[test]
    fn test_export_writes_bom_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = Table::new(vec![row!["id"], row![1]], Config::default()).unwrap();

        export_file(&table, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);
        assert_eq!(&bytes[3..], b"\"id\"\n1");
    }

    #[test]
    fn test_export_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let table = Table::new(vec![row!["id"]], Config::default()).unwrap();
        let err = export_file(&table, &dir.path().join("nope").join("out.csv")).unwrap_err();
        assert_eq!(err.status(), 500);
    }
}

//! Formatting options for decoding and encoding tables

use serde::{Deserialize, Serialize};

pub const DEFAULT_COLUMN_SEPARATOR: &str = ",";
pub const DEFAULT_LINE_SEPARATOR: &str = "\n";

/// Formatting options shared by the table and its text codec
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Treat the first row as the header when constructing or decoding
    pub has_header: bool,
    /// Separator placed between cells of a line
    pub column_separator: String,
    /// Separator placed between lines
    pub line_separator: String,
    /// Quote and strip string cells on output
    pub escape_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            has_header: true,
            column_separator: DEFAULT_COLUMN_SEPARATOR.to_string(),
            line_separator: DEFAULT_LINE_SEPARATOR.to_string(),
            escape_data: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the first row is the header
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Set the column separator
    pub fn with_column_separator(mut self, sep: impl Into<String>) -> Self {
        self.column_separator = sep.into();
        self
    }

    /// Set the line separator
    pub fn with_line_separator(mut self, sep: impl Into<String>) -> Self {
        self.line_separator = sep.into();
        self
    }

    /// Enable or disable escaping on output
    pub fn with_escape_data(mut self, escape: bool) -> Self {
        self.escape_data = escape;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.has_header);
        assert_eq!(config.column_separator, ",");
        assert_eq!(config.line_separator, "\n");
        assert!(config.escape_data);
    }

    #[test]
    fn test_json_round_trip() {
        let config = Config::default().with_column_separator(";");
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            r#"{"has_header":true,"column_separator":";","line_separator":"\n","escape_data":true}"#
        );
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_builder() {
        let config = Config::new()
            .with_header(false)
            .with_column_separator(";")
            .with_line_separator("\r\n")
            .with_escape_data(false);
        assert!(!config.has_header);
        assert_eq!(config.column_separator, ";");
        assert_eq!(config.line_separator, "\r\n");
        assert!(!config.escape_data);
    }
}

//! CSV attachment responses

use std::io;
use std::path::Path;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::Result;
use crate::model::Table;
use crate::parser::UTF8_BOM;

use super::encode;

pub const CONTENT_TYPE: &str = "text/csv; charset=UTF-8";

/// Destination for an HTTP-style response
pub trait ResponseSink {
    /// Set a response header, replacing any earlier value
    fn set_header(&mut self, name: &str, value: &str);

    /// Append bytes to the body
    fn write_body(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Signal that no further output follows
    fn finish(&mut self) -> io::Result<()>;
}

/// In-memory response that keeps headers in the order they were set
#[derive(Debug, Default)]
pub struct BufferedResponse {
    pub headers: IndexMap<String, String>,
    pub body: Vec<u8>,
    finished: bool,
}

impl BufferedResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl ResponseSink for BufferedResponse {
    fn set_header(&mut self, name: &str, value: &str) {
        self.headers.insert(name.to_string(), value.to_string());
    }

    fn write_body(&mut self, bytes: &[u8]) -> io::Result<()> {
        if self.finished {
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "response already finished",
            ));
        }
        self.body.extend_from_slice(bytes);
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.finished = true;
        Ok(())
    }
}

/// Attachment name derived from the running program, e.g. `report.csv`
pub fn default_filename() -> String {
    let stem = std::env::args_os()
        .next()
        .and_then(|arg| {
            Path::new(&arg)
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
        })
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "export".to_string());
    format!("{}.csv", stem)
}

/// Send the encoded table as a CSV attachment and finish the response
pub fn send_content(
    table: &Table,
    sink: &mut dyn ResponseSink,
    filename: Option<&str>,
) -> Result<()> {
    let filename = filename
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(default_filename);

    sink.set_header("Content-Encoding", "UTF-8");
    sink.set_header("Content-Type", CONTENT_TYPE);
    sink.set_header(
        "Content-Disposition",
        &format!("attachment; filename={}", filename),
    );

    sink.write_body(UTF8_BOM.as_bytes())?;
    sink.write_body(encode(table).as_bytes())?;
    sink.finish()?;

    debug!(%filename, lines = table.line_count(), "sent table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::row;

    fn table() -> Table {
        Table::new(vec![row!["id"], row![7]], Config::default()).unwrap()
    }

    #[test]
    fn test_headers_and_body() {
        let mut response = BufferedResponse::new();
        send_content(&table(), &mut response, Some("people.csv")).unwrap();

        let names: Vec<_> = response.headers.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            vec!["Content-Encoding", "Content-Type", "Content-Disposition"]
        );
        assert_eq!(response.header("Content-Type"), Some(CONTENT_TYPE));
        assert_eq!(
            response.header("Content-Disposition"),
            Some("attachment; filename=people.csv")
        );
        assert_eq!(response.body, b"\xEF\xBB\xBF\"id\"\n7");
        assert!(response.is_finished());
    }

    #[test]
    fn test_default_filename() {
        let mut response = BufferedResponse::new();
        send_content(&table(), &mut response, None).unwrap();

        let expected = format!("attachment; filename={}", default_filename());
        assert_eq!(response.header("Content-Disposition"), Some(expected.as_str()));
        assert!(default_filename().ends_with(".csv"));
    }

    #[test]
    fn test_no_output_after_finish() {
        let mut response = BufferedResponse::new();
        send_content(&table(), &mut response, Some("a.csv")).unwrap();
        let err = send_content(&table(), &mut response, Some("a.csv")).unwrap_err();
        assert_eq!(err.status(), 500);
    }
}

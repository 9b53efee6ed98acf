//! Encoding tables to text and handing them to files or responses

mod file;
mod plain;
mod response;

pub use file::{export_file, write_with_bom};
pub use plain::{encode, escape_field};
pub use response::{default_filename, send_content, BufferedResponse, ResponseSink, CONTENT_TYPE};

//! csvtable - in-memory tables with a delimiter-separated text codec
//!
//! A [`Table`] holds an optional header and body rows of scalar cells. It can
//! be built from literal rows, a JSON document or raw text, mutated by 1-based
//! position, and encoded back to CSV-like text for a file or a response.
//!
//! ```
//! use csvtable::{row, Config, Table};
//!
//! let mut table = Table::new(
//!     vec![row!["id", "name"], row![1, "Ann"], row![2, "Bo"]],
//!     Config::default(),
//! )
//! .unwrap();
//! table.add_column(row!["score", 10]).unwrap();
//! assert_eq!(table.to_text(), "\"id\",\"name\",\"score\"\n1,\"Ann\",10\n2,\"Bo\",");
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;

pub use config::Config;
pub use error::{ErrorKind, Result, TableError};
pub use model::{CellValue, Table};

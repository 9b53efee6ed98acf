//! csvtable - re-encode a delimiter-separated file

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use csvtable::{Config, Table};

/// Read a delimiter-separated file and write it back out through the encoder
#[derive(Parser, Debug)]
#[command(name = "csvtable")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to read
    input: PathBuf,

    /// Column separator
    #[arg(short, long, default_value = ",")]
    separator: String,

    /// Line separator (escapes like \n, \r\n and \t are understood)
    #[arg(long, default_value = "\\n")]
    line_separator: String,

    /// Treat the first line as data rather than a header
    #[arg(long)]
    no_header: bool,

    /// Emit cells as-is, without quoting or stripping
    #[arg(long)]
    raw: bool,

    /// Write to this file (with a UTF-8 BOM) instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Expand the escape sequences accepted on the command line
fn unescape_separator(s: &str) -> String {
    s.replace("\\r", "\r").replace("\\n", "\n").replace("\\t", "\t")
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::new()
        .with_header(!cli.no_header)
        .with_column_separator(unescape_separator(&cli.separator))
        .with_line_separator(unescape_separator(&cli.line_separator))
        .with_escape_data(!cli.raw);

    let table = Table::from_file(&cli.input, config)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;

    match cli.output {
        Some(path) => table
            .export_file(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(table.to_text().as_bytes())?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::{ReaderBuilder, StringRecord, Trim};

/// Field delimiter of log exports
pub const DELIMITER: u8 = b';';

/// Header row plus the structurally valid data rows of one export
#[derive(Debug, Clone, Default)]
pub struct RawLog {
    pub headers: Vec<String>,
    pub rows: Vec<StringRecord>,
}

fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .delimiter(DELIMITER)
        .quote(b'"')
        .double_quote(true)
        .has_headers(true)
        .flexible(true)
        .trim(Trim::None);
    builder
}

/// Split a `;`-delimited export into header cells and rows
///
/// Rows the reader rejects (invalid UTF-8, broken records) are dropped without
/// notice. Header cells are decoded lossily so a bad header byte never hides
/// the whole file.
pub fn read_log<R: Read>(reader: R) -> Result<RawLog> {
    let mut rdr = reader_builder().from_reader(reader);

    let headers = rdr
        .byte_headers()
        .context("Failed to read header row")?
        .iter()
        .map(|cell| String::from_utf8_lossy(cell).into_owned())
        .collect();

    let rows = rdr.records().filter_map(|row| row.ok()).collect();

    Ok(RawLog { headers, rows })
}

/// Open and split a log export on disk
///
/// A missing path is a configuration error and is reported as such.
pub fn read_log_file(path: &Path) -> Result<RawLog> {
    if !path.is_file() {
        bail!("File not found: {}", path.display());
    }
    let file = File::open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;
    read_log(file).with_context(|| format!("Failed to read log file: {}", path.display()))
}

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use csv::{QuoteStyle, WriterBuilder};

use super::columns::ColumnSelection;
use super::projection::project_record;
use crate::models::LogRecord;
use crate::parsers::DELIMITER;
use crate::utils::export_file_name;

/// Write the header row and one quoted row per record
///
/// Every cell is wrapped in double quotes; embedded quotes are doubled so the
/// file reads back with the same delimiter and quoting rules as the input.
/// Returns the number of data rows written.
pub fn write_export<'a, W, I>(writer: W, records: I, columns: &ColumnSelection) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a LogRecord>,
{
    let mut wtr = WriterBuilder::new()
        .delimiter(DELIMITER)
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    wtr.write_record(columns.names()).context("Failed to write export header")?;

    let mut written = 0;
    for record in records {
        wtr.write_record(project_record(record, columns))
            .context("Failed to write export row")?;
        written += 1;
    }

    wtr.flush().context("Failed to flush export")?;
    Ok(written)
}

/// Export into `dir` under a timestamped file name, returning the new path
pub fn export_to_dir<'a, I>(dir: &Path, records: I, columns: &ColumnSelection) -> Result<PathBuf>
where
    I: IntoIterator<Item = &'a LogRecord>,
{
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory: {}", dir.display()))?;

    let path = dir.join(export_file_name(Local::now()));
    let file = File::create(&path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;

    let written = write_export(file, records, columns)
        .with_context(|| format!("Failed to export to {}", path.display()))?;
    log::info!("Exported {} rows to {}", written, path.display());

    Ok(path)
}

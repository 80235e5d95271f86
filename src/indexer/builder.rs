//! Store builder for delimited log exports.
//!
//! Resolves the header row once, then turns every row into a [`LogRecord`]
//! in parallel with `rayon`. Rows have no cross-row state, so the result is
//! identical to a sequential pass, including order.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Result;
use rayon::prelude::*;

use super::store::LogStore;
use crate::models::LogRecord;
use crate::parsers::{HeaderMap, RawLog, parse_record, read_log, read_log_file, resolve_headers};

/// A header map and the store built with it; created and discarded together
#[derive(Debug, Clone, Default)]
pub struct LoadedLog {
    pub source: Option<PathBuf>,
    pub headers: HeaderMap,
    pub store: LogStore,
}

/// Turn split rows into a store
///
/// Empty rows are skipped; every other row yields exactly one record.
pub fn build_store(raw: &RawLog) -> (HeaderMap, LogStore) {
    let headers = resolve_headers(&raw.headers);

    for (index, header) in raw.headers.iter().enumerate() {
        log::debug!("header column {}: '{}'", index, header);
    }
    for field in headers.absent_fields() {
        log::debug!("column {} not present, defaulting", field);
    }

    let records: Vec<LogRecord> =
        raw.rows.par_iter().filter_map(|row| parse_record(row, &headers)).collect();

    (headers, LogStore::build(records))
}

/// Load a log export from any reader
pub fn load_log<R: Read>(reader: R) -> Result<LoadedLog> {
    let raw = read_log(reader)?;
    let (headers, store) = build_store(&raw);
    Ok(LoadedLog { source: None, headers, store })
}

/// Load a log export from disk
///
/// # Errors
///
/// Returns an error if the file does not exist or cannot be read. Malformed
/// rows and fields never cause an error.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use csv_log_explorer::load_log_file;
///
/// let loaded = load_log_file(Path::new("log_Entity.csv"))?;
/// println!("Loaded {} records", loaded.store.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn load_log_file(path: &Path) -> Result<LoadedLog> {
    let raw = read_log_file(path)?;
    let (headers, store) = build_store(&raw);
    log::info!("Loaded {} records from {}", store.len(), path.display());
    Ok(LoadedLog { source: Some(path.to_path_buf()), headers, store })
}

//! CSV Log Explorer - Keyword search over semicolon-delimited log exports
//!
//! This library loads `;`-delimited log files whose headers name some or all of five
//! logical columns (`TIMESTAMP`, `CALLSTACK`, `ERRORCALLSTACK`, `EVENTMESSAGE`,
//! `TASKNAME`) and lets callers:
//!
//! - Resolve arbitrary, reordered or partial header rows to those columns
//! - Parse rows leniently into [`LogRecord`]s held in an immutable [`LogStore`]
//! - Filter records by a case-insensitive keyword across the text columns
//! - Keep a bounded history of recent keywords, persisted to a text file
//! - Project filtered records onto a configured column layout and export them
//!
//! # Example
//!
//! ```no_run
//! use csv_log_explorer::{filter_store, load_log_file};
//! use std::path::PathBuf;
//!
//! let loaded = load_log_file(&PathBuf::from("log_Entity.csv"))?;
//! let failures = filter_store(&loaded.store, "fail");
//! println!("{} of {} records mention 'fail'", failures.len(), loaded.store.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod export;
pub mod filters;
pub mod history;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod session;
pub mod utils;

// Re-export commonly used types
pub use export::{ColumnSelection, project_records, write_export};
pub use filters::filter_store;
pub use history::SearchHistory;
pub use indexer::{LogStore, load_log_file};
pub use models::{LogField, LogRecord};
pub use parsers::{HeaderMap, parse_record, resolve_headers};
pub use session::Session;
pub use utils::format_path_with_tilde;

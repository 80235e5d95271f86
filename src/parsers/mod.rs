//! Parsers for `;`-delimited log exports
//!
//! # Error Handling Strategy
//!
//! Ingestion is lenient at every level below the file itself:
//!
//! - **File-level failures**: A missing or unreadable input file is an error and is
//!   propagated with context. Nothing is loaded.
//!
//! - **Row-level failures**: Rows the delimited reader rejects are dropped silently.
//!   They are neither counted nor logged; the only trace is a smaller store.
//!
//! - **Field-level failures**: Missing columns, short rows and unparsable timestamps
//!   fall back to the field's zero value. A row is never rejected for its content.
//!
//! Header cells are matched to the five logical fields by [`resolve_headers`] once
//! per file; [`parse_record`] then runs independently for every row.

pub mod header;
pub mod log_file;
pub mod record;
pub mod timestamp;

pub use header::{HeaderMap, resolve_headers};
pub use log_file::{DELIMITER, RawLog, read_log, read_log_file};
pub use record::{RawRow, parse_record};
pub use timestamp::parse_timestamp;

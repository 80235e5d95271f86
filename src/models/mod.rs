//! Data models for delimited log exports.
//!
//! - [`LogField`] - The five logical columns a source file may carry
//! - [`LogRecord`] - One parsed row, with zero values for anything missing
//!
//! Records derive serde so callers can dump a filtered subset as JSON.

pub mod field;
pub mod record;

pub use field::{LogField, normalize_name};
pub use record::{LogRecord, TIMESTAMP_FORMAT};

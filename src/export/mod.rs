//! Column projection and the export sink
//!
//! The console view and exported files render records through the same
//! [`project_record`], so what is shown is exactly what is written.

pub mod columns;
pub mod projection;
pub mod writer;

pub use columns::{ColumnSelection, ColumnSpec};
pub use projection::{project_cell, project_record, project_records, unknown_placeholder};
pub use writer::{export_to_dir, write_export};

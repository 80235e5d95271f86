//! In-memory log store and its builder
//!
//! # Error Handling Strategy
//!
//! - **File-level failures**: Propagated to the caller. A failed load produces no
//!   store at all, so a caller holding a previous store keeps it intact.
//!
//! - **Row and field failures**: Handled by the parsers (silent skip / zero value).
//!   The builder never fails because of row content.

pub mod builder;
pub mod store;

pub use builder::{LoadedLog, build_store, load_log, load_log_file};
pub use store::LogStore;

//! Bounded recent-search history
//!
//! Keeps the last [`MAX_HISTORY`] distinct keywords, most recent first, and
//! mirrors them to a plain text file that is rewritten after every recorded
//! query. A missing or corrupt file starts an empty history.

pub mod persistence;
pub mod tracker;

pub use persistence::{load_history, read_history, save_history};
pub use tracker::{MAX_HISTORY, SearchHistory};

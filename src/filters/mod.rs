pub mod keyword;

pub use keyword::{KeywordFilter, filter_records, filter_store, matches_keyword};

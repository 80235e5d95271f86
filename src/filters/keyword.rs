use crate::indexer::LogStore;
use crate::models::{LogField, LogRecord};

/// Case-insensitive substring matcher over the four text fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordFilter {
    needle: String,
}

impl KeywordFilter {
    /// `None` for an empty or whitespace-only keyword, which filters nothing
    ///
    /// The keyword is otherwise used as typed, surrounding spaces included.
    pub fn new(keyword: &str) -> Option<Self> {
        if keyword.trim().is_empty() {
            return None;
        }
        Some(Self { needle: keyword.to_lowercase() })
    }

    pub fn matches(&self, record: &LogRecord) -> bool {
        LogField::SEARCHABLE
            .iter()
            .filter_map(|field| record.text(*field))
            .any(|text| !text.is_empty() && text.to_lowercase().contains(&self.needle))
    }
}

/// True if `keyword` occurs in any searchable field of `record`
pub fn matches_keyword(record: &LogRecord, keyword: &str) -> bool {
    KeywordFilter::new(keyword).is_none_or(|filter| filter.matches(record))
}

/// Records matching `keyword`, in store order
///
/// A blank keyword returns the whole store. Results are never re-ranked.
pub fn filter_records(records: &[LogRecord], keyword: &str) -> Vec<LogRecord> {
    match KeywordFilter::new(keyword) {
        None => records.to_vec(),
        Some(filter) => records.iter().filter(|record| filter.matches(record)).cloned().collect(),
    }
}

pub fn filter_store(store: &LogStore, keyword: &str) -> Vec<LogRecord> {
    filter_records(store.as_slice(), keyword)
}

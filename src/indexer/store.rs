use std::ops::Index;
use std::slice;

use chrono::{DateTime, Utc};

use crate::models::LogRecord;

/// Ordered, read-only collection of the records parsed from one file
///
/// Built once per load and replaced wholesale on the next one. Source order is
/// kept; no sorting or deduplication happens here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogStore {
    records: Vec<LogRecord>,
}

impl LogStore {
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator<Item = LogRecord>,
    {
        Self { records: records.into_iter().collect() }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, LogRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[LogRecord] {
        &self.records
    }

    /// Earliest and latest parsed timestamps, ignoring records without one
    pub fn time_range(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let mut stamps = self.records.iter().filter_map(|r| r.timestamp);
        let first = stamps.next()?;
        Some(stamps.fold((first, first), |(lo, hi), ts| (lo.min(ts), hi.max(ts))))
    }
}

impl FromIterator<LogRecord> for LogStore {
    fn from_iter<I: IntoIterator<Item = LogRecord>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl Index<usize> for LogStore {
    type Output = LogRecord;

    fn index(&self, index: usize) -> &LogRecord {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a LogStore {
    type Item = &'a LogRecord;
    type IntoIter = slice::Iter<'a, LogRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

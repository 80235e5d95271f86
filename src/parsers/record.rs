use csv::StringRecord;

use super::header::HeaderMap;
use super::timestamp::parse_timestamp;
use crate::models::{LogField, LogRecord};

/// Positional access to the cells of one delimited row
pub trait RawRow {
    fn field_count(&self) -> usize;
    fn field(&self, index: usize) -> Option<&str>;
}

impl RawRow for StringRecord {
    fn field_count(&self) -> usize {
        self.len()
    }

    fn field(&self, index: usize) -> Option<&str> {
        self.get(index)
    }
}

impl<S: AsRef<str>> RawRow for [S] {
    fn field_count(&self) -> usize {
        self.len()
    }

    fn field(&self, index: usize) -> Option<&str> {
        self.get(index).map(AsRef::as_ref)
    }
}

impl<S: AsRef<str>> RawRow for Vec<S> {
    fn field_count(&self) -> usize {
        self.len()
    }

    fn field(&self, index: usize) -> Option<&str> {
        self.get(index).map(AsRef::as_ref)
    }
}

/// A row with no cells; a single empty cell is still a record
fn is_empty_row<R: RawRow + ?Sized>(row: &R) -> bool {
    row.field_count() == 0
}

/// Build a record from one row, or `None` if the row is empty
///
/// Absent or out-of-range columns become empty strings and an unparsable
/// timestamp becomes `None`; neither rejects the row.
pub fn parse_record<R: RawRow + ?Sized>(row: &R, headers: &HeaderMap) -> Option<LogRecord> {
    if is_empty_row(row) {
        return None;
    }

    let cell = |field: LogField| headers.position(field).and_then(|index| row.field(index));
    let text = |field: LogField| cell(field).unwrap_or_default().to_string();

    Some(LogRecord {
        timestamp: cell(LogField::Timestamp).and_then(parse_timestamp),
        call_stack: text(LogField::CallStack),
        error_call_stack: text(LogField::ErrorCallStack),
        event_message: text(LogField::EventMessage),
        task_name: text(LogField::TaskName),
    })
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::field::LogField;

/// Display/export format for timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One parsed row of a log export
///
/// Missing columns and unparsable timestamps collapse to the zero value
/// (`None` / empty string), so two records are equal iff all five fields are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub timestamp: Option<DateTime<Utc>>,
    pub call_stack: String,
    pub error_call_stack: String,
    pub event_message: String,
    pub task_name: String,
}

impl LogRecord {
    /// Borrow a text field; `None` for the timestamp
    pub fn text(&self, field: LogField) -> Option<&str> {
        match field {
            LogField::Timestamp => None,
            LogField::CallStack => Some(&self.call_stack),
            LogField::ErrorCallStack => Some(&self.error_call_stack),
            LogField::EventMessage => Some(&self.event_message),
            LogField::TaskName => Some(&self.task_name),
        }
    }

    /// String form of any field as shown on screen and in exports
    pub fn render(&self, field: LogField) -> String {
        match field {
            LogField::Timestamp => self
                .timestamp
                .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
                .unwrap_or_default(),
            other => self.text(other).unwrap_or_default().to_string(),
        }
    }
}

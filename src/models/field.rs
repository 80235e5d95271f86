use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five logical columns a log export can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogField {
    Timestamp,
    CallStack,
    ErrorCallStack,
    EventMessage,
    TaskName,
}

impl LogField {
    /// All fields in slot order
    pub const ALL: [LogField; 5] = [
        LogField::Timestamp,
        LogField::CallStack,
        LogField::ErrorCallStack,
        LogField::EventMessage,
        LogField::TaskName,
    ];

    /// Fields the keyword filter looks at (timestamp is never matched)
    pub const SEARCHABLE: [LogField; 4] =
        [LogField::EventMessage, LogField::CallStack, LogField::ErrorCallStack, LogField::TaskName];

    /// Canonical upper-case header name
    pub fn as_str(self) -> &'static str {
        match self {
            LogField::Timestamp => "TIMESTAMP",
            LogField::CallStack => "CALLSTACK",
            LogField::ErrorCallStack => "ERRORCALLSTACK",
            LogField::EventMessage => "EVENTMESSAGE",
            LogField::TaskName => "TASKNAME",
        }
    }

    /// Match a raw header or configuration token (trimmed, case-insensitive)
    pub fn from_name(raw: &str) -> Option<LogField> {
        let normalized = normalize_name(raw);
        LogField::ALL.into_iter().find(|field| field.as_str() == normalized)
    }

    /// Position of this field in fixed-size per-field tables
    pub(crate) fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for LogField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trim (including a stray UTF-8 BOM) and upper-case a header or column token
pub fn normalize_name(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_uppercase()
}

use super::columns::{ColumnSelection, ColumnSpec};
use crate::models::LogRecord;

/// Cell text emitted for a column that names no logical field
pub fn unknown_placeholder(name: &str) -> String {
    format!("[Unknown: {}]", name)
}

pub fn project_cell(record: &LogRecord, column: &ColumnSpec) -> String {
    match column {
        ColumnSpec::Field(field) => record.render(*field),
        ColumnSpec::Unknown(name) => unknown_placeholder(name),
    }
}

/// One record as the ordered cells of the selection
pub fn project_record(record: &LogRecord, columns: &ColumnSelection) -> Vec<String> {
    columns.columns().iter().map(|column| project_cell(record, column)).collect()
}

/// Rows for display and export; both must go through here
pub fn project_records<'a, I>(records: I, columns: &ColumnSelection) -> Vec<Vec<String>>
where
    I: IntoIterator<Item = &'a LogRecord>,
{
    records.into_iter().map(|record| project_record(record, columns)).collect()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn sample() -> LogRecord {
        LogRecord {
            timestamp: Some(Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()),
            call_stack: "main>init".to_string(),
            error_call_stack: String::new(),
            event_message: "boot failed".to_string(),
            task_name: "Loader".to_string(),
        }
    }

    #[test]
    fn test_project_in_selection_order() {
        let columns = ColumnSelection::parse("TASKNAME,TIMESTAMP,EVENTMESSAGE").unwrap();
        assert_eq!(
            project_record(&sample(), &columns),
            vec!["Loader", "2024-01-01 10:00:00", "boot failed"]
        );
    }

    #[test]
    fn test_project_empty_fields() {
        let columns = ColumnSelection::parse("ERRORCALLSTACK,TIMESTAMP").unwrap();
        assert_eq!(project_record(&LogRecord::default(), &columns), vec!["", ""]);
    }

    #[test]
    fn test_project_unknown_placeholder() {
        let columns = ColumnSelection::parse("severity,TASKNAME").unwrap();
        assert_eq!(project_record(&sample(), &columns), vec!["[Unknown: SEVERITY]", "Loader"]);
    }

    #[test]
    fn test_project_records_keeps_order() {
        let mut second = sample();
        second.task_name = "Other".to_string();
        let records = vec![sample(), second];
        let rows = project_records(&records, &ColumnSelection::parse("TASKNAME").unwrap());
        assert_eq!(rows, vec![vec!["Loader"], vec!["Other"]]);
    }
}

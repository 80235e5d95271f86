/// Tests for awkward input files: encodings, malformed rows, odd headers
mod common;

use csv_log_explorer::indexer::load_log_file;
use csv_log_explorer::{LogField, filter_store};
use common::LogDirBuilder;

#[test]
fn test_missing_file_is_an_error() {
    let dir = LogDirBuilder::new().headers(&["TIMESTAMP"]).build();
    let missing = dir.path().join("nope.csv");

    let err = load_log_file(&missing).unwrap_err();
    assert!(err.to_string().contains("File not found"));
}

#[test]
fn test_header_only_file_loads_empty() {
    let dir = LogDirBuilder::new().headers(&["TIMESTAMP", "EVENTMESSAGE"]).build();
    let loaded = load_log_file(&dir.log_path).unwrap();
    assert!(loaded.store.is_empty());
    assert!(filter_store(&loaded.store, "").is_empty());
}

#[test]
fn test_empty_file_loads_empty() {
    let dir = LogDirBuilder::new().raw(b"").build();
    let loaded = load_log_file(&dir.log_path).unwrap();
    assert!(loaded.store.is_empty());
    assert_eq!(loaded.headers.absent_fields().count(), LogField::ALL.len());
}

#[test]
fn test_headers_are_case_and_whitespace_insensitive() {
    let dir = LogDirBuilder::new()
        .headers(&[" eventMessage ", "TaskName"])
        .row("hello;worker")
        .build();

    let loaded = load_log_file(&dir.log_path).unwrap();
    assert_eq!(loaded.store[0].event_message, "hello");
    assert_eq!(loaded.store[0].task_name, "worker");
}

#[test]
fn test_bom_before_first_header() {
    let dir = LogDirBuilder::new()
        .raw("\u{feff}TIMESTAMP;EVENTMESSAGE\n2024-03-01 12:00:00;hi\n".as_bytes())
        .build();

    let loaded = load_log_file(&dir.log_path).unwrap();
    assert!(loaded.store[0].timestamp.is_some());
}

#[test]
fn test_crlf_line_endings() {
    let dir = LogDirBuilder::new()
        .raw(b"EVENTMESSAGE;TASKNAME\r\nfirst;A\r\nsecond;B\r\n")
        .build();

    let loaded = load_log_file(&dir.log_path).unwrap();
    assert_eq!(loaded.store.len(), 2);
    assert_eq!(loaded.store[1].task_name, "B");
}

#[test]
fn test_duplicate_header_last_wins() {
    let dir = LogDirBuilder::new()
        .headers(&["TASKNAME", "EVENTMESSAGE", "TASKNAME"])
        .row("first;msg;second")
        .build();

    let loaded = load_log_file(&dir.log_path).unwrap();
    assert_eq!(loaded.store[0].task_name, "second");
}

#[test]
fn test_unrecognised_headers_ignored() {
    let dir = LogDirBuilder::new()
        .headers(&["ID", "EVENTMESSAGE", "SEVERITY"])
        .row("1;disk full;HIGH")
        .build();

    let loaded = load_log_file(&dir.log_path).unwrap();
    assert_eq!(loaded.store[0].event_message, "disk full");
    assert!(filter_store(&loaded.store, "high").is_empty());
}

#[test]
fn test_blank_lines_skipped() {
    let dir = LogDirBuilder::new()
        .headers(&["EVENTMESSAGE"])
        .row("one")
        .row("")
        .row("two")
        .build();

    let loaded = load_log_file(&dir.log_path).unwrap();
    assert_eq!(loaded.store.len(), 2);
}

#[test]
fn test_short_and_long_rows_tolerated() {
    let dir = LogDirBuilder::new()
        .headers(&["TIMESTAMP", "EVENTMESSAGE", "TASKNAME"])
        .row("2024-01-01 10:00:00")
        .row("2024-01-01 10:00:01;msg;task;extra;cells")
        .build();

    let loaded = load_log_file(&dir.log_path).unwrap();
    assert_eq!(loaded.store.len(), 2);
    assert!(loaded.store[0].event_message.is_empty());
    assert_eq!(loaded.store[1].task_name, "task");
}

#[test]
fn test_quoted_cell_spanning_lines() {
    let dir = LogDirBuilder::new()
        .headers(&["EVENTMESSAGE", "ERRORCALLSTACK"])
        .row("\"crash\";\"at A\nat B\"")
        .row("after;")
        .build();

    let loaded = load_log_file(&dir.log_path).unwrap();
    assert_eq!(loaded.store.len(), 2);
    assert_eq!(loaded.store[0].error_call_stack, "at A\nat B");
    assert_eq!(filter_store(&loaded.store, "at b").len(), 1);
}

#[test]
fn test_invalid_utf8_row_dropped() {
    let mut bytes = b"EVENTMESSAGE\nkept\n".to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
    bytes.extend_from_slice(b"also kept\n");
    let dir = LogDirBuilder::new().raw(&bytes).build();

    let loaded = load_log_file(&dir.log_path).unwrap();
    let messages: Vec<_> = loaded.store.iter().map(|r| r.event_message.as_str()).collect();
    assert_eq!(messages, vec!["kept", "also kept"]);
}

#[test]
fn test_unparsable_timestamp_keeps_record() {
    let dir = LogDirBuilder::new()
        .headers(&["TIMESTAMP", "EVENTMESSAGE"])
        .row("yesterday-ish;still here")
        .build();

    let loaded = load_log_file(&dir.log_path).unwrap();
    assert_eq!(loaded.store.len(), 1);
    assert!(loaded.store[0].timestamp.is_none());
    assert_eq!(loaded.store[0].render(LogField::Timestamp), "");
}

#[test]
fn test_unicode_keyword_matching() {
    let dir = LogDirBuilder::new()
        .headers(&["EVENTMESSAGE"])
        .row("Échec de connexion")
        .row("Connexion réussie")
        .build();

    let loaded = load_log_file(&dir.log_path).unwrap();
    assert_eq!(filter_store(&loaded.store, "échec").len(), 1);
    assert_eq!(filter_store(&loaded.store, "CONNEXION").len(), 2);
}

#[test]
fn test_timestamp_not_searched() {
    let dir = LogDirBuilder::new()
        .headers(&["TIMESTAMP", "EVENTMESSAGE"])
        .row("2024-01-01 10:00:00;boot")
        .build();

    let loaded = load_log_file(&dir.log_path).unwrap();
    assert!(filter_store(&loaded.store, "2024").is_empty());
}

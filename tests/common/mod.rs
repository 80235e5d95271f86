//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for a temp workspace holding a log export, history file and export dir
pub struct LogDirBuilder {
    temp_dir: TempDir,
    headers: Vec<String>,
    rows: Vec<String>,
    raw: Option<Vec<u8>>,
}

impl LogDirBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, headers: Vec::new(), rows: Vec::new(), raw: None }
    }

    /// Set the header row
    pub fn headers(mut self, headers: &[&str]) -> Self {
        self.headers = headers.iter().map(|h| h.to_string()).collect();
        self
    }

    /// Add a data row given as already-delimited text
    pub fn row(mut self, row: &str) -> Self {
        self.rows.push(row.to_string());
        self
    }

    /// Add a data row from cells, quoting every cell
    pub fn quoted_row(mut self, cells: &[&str]) -> Self {
        let row = cells
            .iter()
            .map(|c| format!("\"{}\"", c.replace('"', "\"\"")))
            .collect::<Vec<_>>()
            .join(";");
        self.rows.push(row);
        self
    }

    /// Use raw bytes for the log file instead of headers/rows
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.raw = Some(bytes.to_vec());
        self
    }

    /// Write `log.csv` and return the workspace
    pub fn build(self) -> LogDir {
        let log_path = self.temp_dir.path().join("log.csv");
        let contents = match self.raw {
            Some(bytes) => bytes,
            None => {
                let mut text = self.headers.join(";");
                text.push('\n');
                for row in &self.rows {
                    text.push_str(row);
                    text.push('\n');
                }
                text.into_bytes()
            }
        };
        fs::write(&log_path, contents).expect("Failed to write log file");
        LogDir { temp_dir: self.temp_dir, log_path }
    }
}

impl Default for LogDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A built workspace; files vanish when dropped
pub struct LogDir {
    temp_dir: TempDir,
    pub log_path: PathBuf,
}

impl LogDir {
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn history_path(&self) -> PathBuf {
        self.temp_dir.path().join("history.txt")
    }

    pub fn export_dir(&self) -> PathBuf {
        self.temp_dir.path().join("exports")
    }

    /// Files written to the export dir, sorted by name
    pub fn exported_files(&self) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(self.export_dir()) else {
            return Vec::new();
        };
        let mut files: Vec<PathBuf> = entries.filter_map(|e| e.ok()).map(|e| e.path()).collect();
        files.sort();
        files
    }
}

/// The two-row sample used throughout the scenarios
pub fn boot_log() -> LogDir {
    LogDirBuilder::new()
        .headers(&["TIMESTAMP", "EVENTMESSAGE"])
        .row("2024-01-01 10:00:00;boot failed")
        .row("2024-01-01 11:00:00;boot ok")
        .build()
}

/// A richer sample with every column present
pub fn full_log() -> LogDir {
    LogDirBuilder::new()
        .headers(&["TIMESTAMP", "CALLSTACK", "ERRORCALLSTACK", "EVENTMESSAGE", "TASKNAME"])
        .quoted_row(&["2024-01-01 08:00:00", "Main>Init", "", "Service starting", "Bootstrap"])
        .quoted_row(&[
            "2024-01-01 08:00:05",
            "Main>Init>Db",
            "SqlException: timeout",
            "Database connection failed",
            "DbWorker",
        ])
        .quoted_row(&["2024-01-01 08:01:00", "Main>Loop", "", "Heartbeat", "Monitor"])
        .quoted_row(&["2024-01-01 08:02:00", "Main>Loop", "", "Retry succeeded; \"db\" online", "DbWorker"])
        .build()
}

//! Session state shared by every front end.
//!
//! A [`Session`] owns the loaded store, the current keyword and its filtered
//! result, the search history and the column layout. Front ends stay thin:
//!
//! - **Change notifications**: listeners registered with [`Session::subscribe`] hear
//!   about every replacement of the store or of the filtered records.
//! - **Capability checks**: [`Session::can_filter`] and [`Session::can_export`] tell a
//!   front end whether an action makes sense before it offers it.
//! - **Atomic reloads**: a load that fails leaves the previous state untouched and
//!   emits nothing.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use csv_log_explorer::export::ColumnSelection;
//! use csv_log_explorer::history::SearchHistory;
//! use csv_log_explorer::session::Session;
//!
//! let columns = ColumnSelection::parse("TIMESTAMP, EVENTMESSAGE")?;
//! let mut session = Session::new(columns, SearchHistory::new());
//! session.load_file(Path::new("log_Entity.csv"))?;
//! let outcome = session.run_query("fail");
//! println!("{} matches", outcome.matched);
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::export::{ColumnSelection, export_to_dir, project_records};
use crate::filters::filter_store;
use crate::history::{SearchHistory, load_history, save_history};
use crate::indexer::{LoadedLog, LogStore, load_log_file};
use crate::models::LogRecord;
use crate::parsers::HeaderMap;

/// Something observable changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A new file was loaded; `records` is the new store size
    LogStoreReplaced { records: usize },
    /// The filtered view was recomputed; `records` is its size
    FilteredLogsReplaced { records: usize },
}

/// Handle returned by [`Session::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&SessionEvent)>;

/// Result of one submitted query
#[derive(Debug)]
pub struct QueryOutcome {
    pub matched: usize,
    /// Whether the keyword entered the history
    pub recorded: bool,
    /// Set when the history file could not be rewritten; the query itself succeeded
    pub history_error: Option<anyhow::Error>,
}

pub struct Session {
    loaded: Option<LoadedLog>,
    filtered: Vec<LogRecord>,
    keyword: String,
    history: SearchHistory,
    history_path: Option<PathBuf>,
    columns: ColumnSelection,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Session {
    /// Session with an in-memory history only
    pub fn new(columns: ColumnSelection, history: SearchHistory) -> Self {
        Self {
            loaded: None,
            filtered: Vec::new(),
            keyword: String::new(),
            history,
            history_path: None,
            columns,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Session whose history is read from, and rewritten to, `path`
    pub fn with_history_file(columns: ColumnSelection, path: PathBuf) -> Self {
        let history = load_history(&path);
        let mut session = Self::new(columns, history);
        session.history_path = Some(path);
        session
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&SessionEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, event: SessionEvent) {
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }

    /// Load `path` and swap it in; on error nothing changes
    pub fn load_file(&mut self, path: &Path) -> Result<usize> {
        let loaded = load_log_file(path)?;
        let count = loaded.store.len();
        self.replace_log(loaded);
        Ok(count)
    }

    /// Install a freshly built store; the filtered view resets to all records
    pub fn replace_log(&mut self, loaded: LoadedLog) {
        self.filtered = loaded.store.as_slice().to_vec();
        let records = loaded.store.len();
        self.loaded = Some(loaded);

        self.notify(SessionEvent::LogStoreReplaced { records });
        self.notify(SessionEvent::FilteredLogsReplaced { records });
    }

    pub fn store(&self) -> Option<&LogStore> {
        self.loaded.as_ref().map(|loaded| &loaded.store)
    }

    pub fn headers(&self) -> Option<&HeaderMap> {
        self.loaded.as_ref().map(|loaded| &loaded.headers)
    }

    pub fn source(&self) -> Option<&Path> {
        self.loaded.as_ref().and_then(|loaded| loaded.source.as_deref())
    }

    pub fn filtered(&self) -> &[LogRecord] {
        &self.filtered
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
    }

    pub fn columns(&self) -> &ColumnSelection {
        &self.columns
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    pub fn history_path(&self) -> Option<&Path> {
        self.history_path.as_deref()
    }

    /// A store is loaded
    pub fn can_filter(&self) -> bool {
        self.loaded.is_some()
    }

    /// A store is loaded and the current filtered view has rows
    pub fn can_export(&self) -> bool {
        self.loaded.is_some() && !self.filtered.is_empty()
    }

    /// Set the keyword and filter with it
    pub fn run_query(&mut self, keyword: &str) -> QueryOutcome {
        self.set_keyword(keyword);
        self.apply_filter()
    }

    /// Filter the store with the current keyword and record the keyword
    ///
    /// Blank keywords show the whole store and are not recorded. A failed
    /// history write is reported in the outcome, never as a failed query.
    pub fn apply_filter(&mut self) -> QueryOutcome {
        self.filtered = match self.store() {
            Some(store) => filter_store(store, &self.keyword),
            None => Vec::new(),
        };
        let matched = self.filtered.len();

        let recorded = self.history.record(&self.keyword);
        let history_error = if recorded { self.save_history().err() } else { None };

        self.notify(SessionEvent::FilteredLogsReplaced { records: matched });

        QueryOutcome { matched, recorded, history_error }
    }

    /// Filtered records as display/export rows
    pub fn projected_rows(&self) -> Vec<Vec<String>> {
        project_records(&self.filtered, &self.columns)
    }

    /// Write the filtered records to a new file in `dir`
    pub fn export(&self, dir: &Path) -> Result<PathBuf> {
        export_to_dir(dir, &self.filtered, &self.columns)
    }

    /// Persist the history if this session has a history file
    pub fn save_history(&self) -> Result<()> {
        match &self.history_path {
            Some(path) => save_history(path, &self.history),
            None => Ok(()),
        }
    }
}

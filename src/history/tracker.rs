use std::collections::VecDeque;

/// Maximum number of keywords kept
pub const MAX_HISTORY: usize = 5;

/// Recent distinct keywords, most recent first
///
/// Keywords are compared exactly as typed (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHistory {
    entries: VecDeque<String>,
    capacity: usize,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::with_capacity(MAX_HISTORY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: VecDeque::with_capacity(capacity), capacity }
    }

    /// Build from keywords listed most recent first
    ///
    /// Blank and repeated keywords are dropped (first occurrence wins) and the
    /// list stops at capacity.
    pub fn from_recent<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut history = Self::new();
        for keyword in keywords {
            if history.entries.len() >= history.capacity {
                break;
            }
            let keyword = keyword.into();
            if is_recordable(&keyword) && !history.contains(&keyword) {
                history.entries.push_back(keyword);
            }
        }
        history
    }

    /// Move `keyword` to the front, evicting the oldest entry past capacity
    ///
    /// Returns `false` (and changes nothing) for keywords that cannot be stored:
    /// blank ones or ones spanning several lines.
    pub fn record(&mut self, keyword: &str) -> bool {
        if !is_recordable(keyword) {
            return false;
        }
        if let Some(pos) = self.entries.iter().position(|k| k == keyword) {
            self.entries.remove(pos);
        }
        self.entries.push_front(keyword.to_string());
        self.entries.truncate(self.capacity);
        true
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.entries.iter().any(|k| k == keyword)
    }

    /// Most recent keyword
    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::new()
    }
}

fn is_recordable(keyword: &str) -> bool {
    !keyword.trim().is_empty() && !keyword.contains(['\n', '\r'])
}

//! History file persistence: one keyword per line, most recent first

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use super::tracker::SearchHistory;

/// Read keywords in file order from any reader
pub fn read_history<R: BufRead>(reader: R) -> Result<SearchHistory> {
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    Ok(SearchHistory::from_recent(lines))
}

/// Load the history file, falling back to an empty history
///
/// A missing file is the normal first-run case. An unreadable or corrupt file
/// is logged and ignored; it is never an error for the caller.
pub fn load_history(path: &Path) -> SearchHistory {
    if !path.exists() {
        return SearchHistory::new();
    }

    let loaded = fs::File::open(path)
        .with_context(|| format!("Failed to open history file: {}", path.display()))
        .and_then(|file| read_history(BufReader::new(file)));

    match loaded {
        Ok(history) => history,
        Err(e) => {
            log::warn!("Ignoring search history at {}: {:#}", path.display(), e);
            SearchHistory::new()
        }
    }
}

/// Overwrite the history file atomically (temp file + rename)
pub fn save_history(path: &Path, history: &SearchHistory) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create history directory: {}", parent.display())
        })?;
    }

    let mut contents = String::new();
    for keyword in history.iter() {
        contents.push_str(keyword);
        contents.push('\n');
    }

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = Path::new(&temp_name);

    fs::write(temp_path, contents).context("Failed to write history temp file")?;
    fs::rename(temp_path, path)
        .with_context(|| format!("Failed to replace history file: {}", path.display()))?;

    Ok(())
}

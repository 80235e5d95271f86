use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Directory name used under the platform config/data directories
pub const APP_DIR_NAME: &str = "csv-log-explorer";

const HISTORY_FILENAME: &str = "search_history.txt";
const CONFIG_FILENAME: &str = "config.json";

fn home_dir() -> Result<PathBuf> {
    let home = env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home))
}

/// Default export directory: the user's Downloads folder
pub fn get_export_dir() -> Result<PathBuf> {
    match dirs::download_dir() {
        Some(dir) => Ok(dir),
        None => Ok(home_dir()?.join("Downloads")),
    }
}

/// Default location of the search history file
pub fn get_history_path() -> Result<PathBuf> {
    let base = match dirs::data_dir() {
        Some(dir) => dir.join(APP_DIR_NAME),
        None => home_dir()?.join(format!(".{}", APP_DIR_NAME)),
    };
    Ok(base.join(HISTORY_FILENAME))
}

/// Per-user settings file, if the platform has a config directory
pub fn get_user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILENAME))
}

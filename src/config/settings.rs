use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::utils::get_user_config_path;

/// Settings file looked up in the working directory
pub const LOCAL_CONFIG_FILENAME: &str = "log-explorer.json";

/// Contents of a JSON settings file; every key is optional
///
/// ```json
/// {
///   "csvLogFile": "log_Entity.csv",
///   "columnsToExtract": "TIMESTAMP, EVENTMESSAGE, TASKNAME"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub csv_log_file: Option<PathBuf>,
    #[serde(default)]
    pub columns_to_extract: Option<String>,
    #[serde(default)]
    pub history_file: Option<PathBuf>,
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

impl Settings {
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load settings from an explicit path, or from the first default location found
    ///
    /// An explicit path must exist. Default locations (`./log-explorer.json`, then
    /// the per-user config file) are optional; with neither present the result
    /// is empty settings.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let candidates =
            std::iter::once(PathBuf::from(LOCAL_CONFIG_FILENAME)).chain(get_user_config_path());
        for candidate in candidates {
            if candidate.is_file() {
                log::debug!("using settings from {}", candidate.display());
                return Self::from_file(&candidate);
            }
        }

        Ok(Self::default())
    }
}

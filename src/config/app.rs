use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};

use super::settings::Settings;
use crate::export::ColumnSelection;
use crate::utils::{get_export_dir, get_history_path};

/// Values given on the command line (or their env fallbacks); they win over the file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub csv_log_file: Option<PathBuf>,
    pub columns: Option<String>,
    pub history_file: Option<PathBuf>,
    pub export_dir: Option<PathBuf>,
}

/// Fully resolved session configuration
///
/// The input file and column selection stay optional here; commands that need
/// them call [`AppConfig::input_file`] / [`AppConfig::columns`], which turn
/// their absence into a fatal configuration error.
#[derive(Debug, Clone)]
pub struct AppConfig {
    csv_log_file: Option<PathBuf>,
    columns: Option<ColumnSelection>,
    pub history_file: PathBuf,
    pub export_dir: PathBuf,
}

impl AppConfig {
    pub fn resolve(settings: Settings, overrides: Overrides) -> Result<Self> {
        let columns = overrides
            .columns
            .or(settings.columns_to_extract)
            .map(|list| ColumnSelection::parse(&list))
            .transpose()?;

        let history_file = match overrides.history_file.or(settings.history_file) {
            Some(path) => path,
            None => get_history_path()?,
        };
        let export_dir = match overrides.export_dir.or(settings.export_dir) {
            Some(path) => path,
            None => get_export_dir()?,
        };

        Ok(Self {
            csv_log_file: overrides.csv_log_file.or(settings.csv_log_file),
            columns,
            history_file,
            export_dir,
        })
    }

    pub fn input_file(&self) -> Result<&Path> {
        self.csv_log_file.as_deref().ok_or_else(|| {
            anyhow!("No input file configured: set csvLogFile in the config file or pass --file")
        })
    }

    pub fn columns(&self) -> Result<&ColumnSelection> {
        self.columns.as_ref().ok_or_else(|| {
            anyhow!(
                "No column selection configured: set columnsToExtract in the config file or pass --columns"
            )
        })
    }
}

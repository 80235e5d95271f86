use std::env;
use std::path::Path;

use chrono::{DateTime, TimeZone};

const EXPORT_PREFIX: &str = "filtered_logs_";
const EXPORT_SUFFIX_FORMAT: &str = "%Y%m%d_%H%M%S";

/// File name for an export started at `now`, e.g. `filtered_logs_20240101_103000.csv`
pub fn export_file_name<Tz>(now: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("{}{}.csv", EXPORT_PREFIX, now.format(EXPORT_SUFFIX_FORMAT))
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use csv_log_explorer::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/Downloads/filtered_logs_20240101_103000.csv");
/// // Returns "~/Downloads/..." if HOME=/Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    if let Some(home) = home
        && !home.is_empty()
        && let Ok(rest) = path.strip_prefix(home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.to_string_lossy());
    }

    path.to_string_lossy().into_owned()
}

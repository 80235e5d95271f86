pub mod environment;
pub mod paths;

pub use environment::{get_export_dir, get_history_path, get_user_config_path};
pub use paths::{export_file_name, format_path_with_tilde};

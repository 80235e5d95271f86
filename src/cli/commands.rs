use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use super::console::{ConsoleOptions, run_prompt_loop};
use crate::config::{AppConfig, Overrides, Settings};
use crate::history::{SearchHistory, load_history, save_history};
use crate::indexer::load_log_file;
use crate::models::TIMESTAMP_FORMAT;
use crate::session::Session;
use crate::utils::format_path_with_tilde;

#[derive(Parser)]
#[command(name = "csv-log-explorer")]
#[command(version = "0.1.0")]
#[command(about = "Search and export semicolon-delimited log files", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// JSON settings file (default: ./log-explorer.json or the user config file)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file to load
    #[arg(short, long, global = true, env = "LOG_EXPLORER_FILE", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Comma-separated columns to show and export, e.g. "TIMESTAMP,EVENTMESSAGE"
    #[arg(short, long, global = true, env = "LOG_EXPLORER_COLUMNS", value_name = "LIST")]
    pub columns: Option<String>,

    /// Search history file
    #[arg(long, global = true, env = "LOG_EXPLORER_HISTORY", value_name = "PATH")]
    pub history_file: Option<PathBuf>,

    /// Directory exports are written to (default: Downloads)
    #[arg(long, global = true, env = "LOG_EXPLORER_EXPORT_DIR", value_name = "DIR")]
    pub export_dir: Option<PathBuf>,
}

impl ConfigArgs {
    fn resolve(&self) -> Result<AppConfig> {
        let settings = Settings::discover(self.config.as_deref())?;
        let overrides = Overrides {
            csv_log_file: self.file.clone(),
            columns: self.columns.clone(),
            history_file: self.history_file.clone(),
            export_dir: self.export_dir.clone(),
        };
        AppConfig::resolve(settings, overrides)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the log interactively (default)
    Search,
    /// Show statistics about the log file
    Stats,
    /// Filter by a keyword and export the matches without prompting
    Export {
        /// Keyword to filter by; omit to export every record
        #[arg(short, long)]
        keyword: Option<String>,
    },
    /// Show or clear recent searches
    History {
        /// Forget all recent searches
        #[arg(long)]
        clear: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config.resolve()?;

    match &cli.command {
        None | Some(Commands::Search) => search(&config)?,
        Some(Commands::Stats) => show_stats(&config)?,
        Some(Commands::Export { keyword }) => export(&config, keyword.as_deref().unwrap_or(""))?,
        Some(Commands::History { clear }) => history(&config, *clear)?,
    }

    Ok(())
}

fn open_session(config: &AppConfig) -> Result<Session> {
    let input = config.input_file()?;
    let columns = config.columns()?.clone();

    let mut session = Session::with_history_file(columns, config.history_file.clone());
    session.load_file(input)?;
    Ok(session)
}

fn search(config: &AppConfig) -> Result<()> {
    let mut session = open_session(config)?;

    let input = config.input_file()?;
    println!("File found : {}", format_path_with_tilde(input));
    println!("Loaded {} records", session.store().map_or(0, |store| store.len()));
    for name in session.columns().unknown() {
        println!("Warning: unknown column '{}' will be shown as a placeholder", name);
    }

    let options = ConsoleOptions {
        export_dir: config.export_dir.clone(),
        color: io::stdout().is_terminal(),
    };
    run_prompt_loop(&mut session, io::stdin().lock(), io::stdout().lock(), &options)
}

fn show_stats(config: &AppConfig) -> Result<()> {
    let input = config.input_file()?;
    let loaded = load_log_file(input)?;

    let join = |names: Vec<&str>| if names.is_empty() { "-".to_string() } else { names.join(", ") };

    println!("Log File Statistics");
    println!("===================");
    println!("File: {}", format_path_with_tilde(input));
    println!("Total records: {}", loaded.store.len());
    println!(
        "Columns found: {}",
        join(loaded.headers.present_fields().map(|f| f.as_str()).collect())
    );
    println!(
        "Columns missing: {}",
        join(loaded.headers.absent_fields().map(|f| f.as_str()).collect())
    );

    if let Some((oldest, newest)) = loaded.store.time_range() {
        println!("Oldest entry: {}", oldest.format(TIMESTAMP_FORMAT));
        println!("Newest entry: {}", newest.format(TIMESTAMP_FORMAT));
    }

    Ok(())
}

fn export(config: &AppConfig, keyword: &str) -> Result<()> {
    let mut session = open_session(config)?;
    let outcome = session.run_query(keyword);
    if let Some(e) = outcome.history_error {
        eprintln!("Warning: could not save search history: {:#}", e);
    }

    println!("[Results found : {}]", outcome.matched);
    if !session.can_export() {
        println!("Nothing to export.");
        return Ok(());
    }

    let path = session.export(&config.export_dir)?;
    println!("Exported {} records to {}", outcome.matched, format_path_with_tilde(&path));
    Ok(())
}

fn history(config: &AppConfig, clear: bool) -> Result<()> {
    if clear {
        save_history(&config.history_file, &SearchHistory::new())?;
        println!("Search history cleared.");
        return Ok(());
    }

    let history = load_history(&config.history_file);
    if history.is_empty() {
        println!("No recent searches.");
        return Ok(());
    }

    println!("Recent searches:");
    for (i, keyword) in history.iter().enumerate() {
        println!("  {}. {}", i + 1, keyword);
    }
    Ok(())
}

use anyhow::Result;
use env_logger::Env;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    csv_log_explorer::cli::run()
}

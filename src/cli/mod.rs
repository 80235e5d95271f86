pub mod commands;
pub mod console;

pub use commands::{Cli, Commands, run};
pub use console::{ConsoleOptions, run_prompt_loop};

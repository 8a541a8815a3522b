pub mod commands;
pub mod context;
pub mod output;
pub mod registry;
mod shell;
pub mod views;

pub use context::{CliMode, CommandError, ShellContext};
pub use shell::run_cli;

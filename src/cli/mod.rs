//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, and one handler per
//! subcommand. Handlers talk to the core only through `Notify`.

pub mod action_cmd;
pub mod app;
pub mod args;
pub mod config_cmd;
pub mod diagnose_cmd;
pub mod info_cmd;
pub mod presenter;
pub mod send_cmd;

// Re-export commonly used types
pub use app::{run_notify_command, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, SendArgs};
pub use presenter::Presenter;

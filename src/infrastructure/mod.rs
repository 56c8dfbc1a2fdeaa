//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the process environment, the controlling terminal,
//! platform notifier programs and the config file.

pub mod config;
pub mod environment;
pub mod notification;
pub mod terminal;

// Re-export adapters
pub use config::XdgConfigStore;
pub use environment::ProcessEnvironment;
pub use notification::{
    create_external_notifier, is_program_available, NotifySendNotifier, OsascriptNotifier,
    PowershellNotifier,
};
pub use terminal::{MemorySink, OutputTarget, TerminalWriter};

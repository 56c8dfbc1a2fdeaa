//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod environment;
pub mod notifier;
pub mod terminal;

// Re-export common types
pub use config::ConfigStore;
pub use environment::EnvironmentSource;
pub use notifier::ExternalNotifier;
pub use terminal::TerminalSink;

//! termnotify - desktop notifications through terminal escape sequences
//!
//! Detects the hosting terminal emulator (and any tmux or GNU Screen
//! session in between), encodes notifications, progress reports, bells and
//! hyperlinks as OSC escape sequences it understands, and falls back to the
//! platform notifier program when the terminal has none.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Terminal identity, protocol catalog, escape-sequence codec,
//!   progress state machine, value objects and errors
//! - **Application**: The `Notify` facade, its `Dispatcher`, and port traits
//! - **Infrastructure**: Adapters for the process environment, the terminal
//!   stream, notifier programs and the config file
//! - **CLI**: Argument parsing, output formatting and subcommand handlers
//!
//! # Example
//!
//! ```no_run
//! use termnotify::application::{Dispatcher, Notify};
//! use termnotify::infrastructure::{
//!     create_external_notifier, OutputTarget, ProcessEnvironment, TerminalWriter,
//! };
//!
//! let mut notify = Dispatcher::new(
//!     ProcessEnvironment::new(),
//!     TerminalWriter::new(OutputTarget::Tty),
//!     create_external_notifier("my-tool"),
//! );
//! notify.send("Build finished", Some("CI"), None, None);
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

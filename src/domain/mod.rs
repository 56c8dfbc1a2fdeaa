//! Domain layer - Core notification logic
//!
//! Contains value objects, terminal detection, the protocol catalog, the
//! escape sequence codec and domain errors.
//! This layer has no dependencies on external systems.

pub mod codec;
pub mod config;
pub mod error;
pub mod notification;
pub mod progress;
pub mod protocol;
pub mod terminal;

// Re-export common types
pub use codec::Codec;
pub use config::AppConfig;
pub use error::*;
pub use notification::{CommandOutcome, NotificationRequest, OutcomeTemplate, Urgency};
pub use progress::{ProgressMode, ProgressState, ProgressTracker};
pub use protocol::{CapabilitySet, ProtocolVariant};
pub use terminal::{EnvSnapshot, MultiplexerContext, Passthrough, TerminalIdentity};

//! Application layer - The notification facade and port interfaces
//!
//! Contains the dispatcher that ties detection, encoding and delivery
//! together, and the trait definitions for external system interactions.

pub mod dispatcher;
pub mod notify;
pub mod ports;

// Re-export the facade
pub use dispatcher::{Detection, DispatchContext, Dispatcher};
pub use notify::Notify;

//! Terminal detection domain module

pub mod catalog;
mod env;
mod identity;
mod resolver;

pub use catalog::{lookup, CatalogEntry};
pub use env::{vars, EnvSnapshot};
pub use identity::{MultiplexerContext, Passthrough, TerminalIdentity, KNOWN_TERMINALS};
pub use resolver::resolve;

//! Terminal output adapters

mod memory;
mod writer;

pub use memory::MemorySink;
pub use writer::{OutputTarget, TerminalWriter, VALID_OUTPUTS};

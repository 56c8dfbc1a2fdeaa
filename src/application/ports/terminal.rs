//! Terminal output port interface

use std::io;

/// Port for the stream escape sequences are written to
pub trait TerminalSink: Send {
    /// Write one complete encoded sequence and flush it.
    ///
    /// # Arguments
    /// * `bytes` - The encoded escape sequence(s)
    fn write_sequence(&mut self, bytes: &[u8]) -> io::Result<()>;
}

/// Blanket implementation for boxed sink types
impl TerminalSink for Box<dyn TerminalSink> {
    fn write_sequence(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.as_mut().write_sequence(bytes)
    }
}

//! In-memory terminal sink

use std::io;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::application::ports::TerminalSink;

/// Records every write instead of sending it to a terminal.
///
/// Clones share the same buffer, so a caller can keep one handle and give
/// the other to a dispatcher.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    writes: Arc<Mutex<Vec<Vec<u8>>>>,
    failing: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose writes always fail with a broken pipe
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    /// Each successful write, in order
    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.lock().clone()
    }

    /// All written bytes concatenated
    pub fn contents(&self) -> Vec<u8> {
        self.lock().concat()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Vec<u8>>> {
        self.writes.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl TerminalSink for MemorySink {
    fn write_sequence(&mut self, bytes: &[u8]) -> io::Result<()> {
        if self.failing {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        self.lock().push(bytes.to_vec());
        Ok(())
    }
}

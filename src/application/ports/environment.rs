//! Environment port interface

use crate::domain::terminal::EnvSnapshot;

/// Port for reading the detection-relevant environment
pub trait EnvironmentSource {
    /// Take a fresh snapshot of the environment.
    fn snapshot(&self) -> EnvSnapshot;
}

/// A fixed snapshot is its own source
impl EnvironmentSource for EnvSnapshot {
    fn snapshot(&self) -> EnvSnapshot {
        self.clone()
    }
}

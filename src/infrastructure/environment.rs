//! Process environment adapter

use std::env;

use crate::application::ports::EnvironmentSource;
use crate::domain::terminal::EnvSnapshot;

/// Reads detection variables from the real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl EnvironmentSource for ProcessEnvironment {
    fn snapshot(&self) -> EnvSnapshot {
        EnvSnapshot::from_lookup(|name| env::var(name).ok())
    }
}

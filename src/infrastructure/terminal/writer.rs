//! Terminal stream adapter

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::str::FromStr;

use tracing::debug;

use crate::application::ports::TerminalSink;
use crate::domain::error::ConfigError;

/// Valid output target names
pub const VALID_OUTPUTS: &[&str] = &["tty", "stdout", "stderr"];

/// Where escape sequences are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputTarget {
    /// The controlling terminal, falling back to stderr when there is none
    #[default]
    Tty,
    Stdout,
    Stderr,
}

impl OutputTarget {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tty => "tty",
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        }
    }
}

impl FromStr for OutputTarget {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tty" => Ok(Self::Tty),
            "stdout" => Ok(Self::Stdout),
            "stderr" => Ok(Self::Stderr),
            _ => Err(ConfigError::ValidationError {
                key: "output".to_string(),
                message: format!(
                    "Invalid value '{}'. Valid options: {}",
                    s,
                    VALID_OUTPUTS.join(", ")
                ),
            }),
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Writes escape sequences straight to the chosen stream.
///
/// The stream is opened on first write and kept for the writer's lifetime.
/// Every write is flushed immediately.
pub struct TerminalWriter {
    target: OutputTarget,
    stream: Option<Box<dyn Write + Send>>,
}

impl TerminalWriter {
    pub fn new(target: OutputTarget) -> Self {
        Self {
            target,
            stream: None,
        }
    }

    pub fn target(&self) -> OutputTarget {
        self.target
    }

    fn open(target: OutputTarget) -> Box<dyn Write + Send> {
        match target {
            OutputTarget::Tty => match open_tty() {
                Ok(tty) => Box::new(tty),
                Err(e) => {
                    debug!(error = %e, "no controlling terminal, writing to stderr");
                    Box::new(io::stderr())
                }
            },
            OutputTarget::Stdout => Box::new(io::stdout()),
            OutputTarget::Stderr => Box::new(io::stderr()),
        }
    }
}

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new(OutputTarget::default())
    }
}

impl TerminalSink for TerminalWriter {
    fn write_sequence(&mut self, bytes: &[u8]) -> io::Result<()> {
        let target = self.target;
        let stream = self.stream.get_or_insert_with(|| Self::open(target));
        stream.write_all(bytes)?;
        stream.flush()
    }
}

#[cfg(unix)]
fn open_tty() -> io::Result<File> {
    OpenOptions::new().write(true).open("/dev/tty")
}

#[cfg(windows)]
fn open_tty() -> io::Result<File> {
    OpenOptions::new().write(true).open("CONOUT$")
}

#[cfg(not(any(unix, windows)))]
fn open_tty() -> io::Result<File> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "no controlling terminal on this platform",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_targets() {
        for name in VALID_OUTPUTS {
            let target: OutputTarget = name.parse().unwrap();
            assert_eq!(target.as_str(), *name);
        }
        assert_eq!("STDOUT".parse::<OutputTarget>().unwrap(), OutputTarget::Stdout);
    }

    #[test]
    fn rejects_unknown_target() {
        let err = "printer".parse::<OutputTarget>().unwrap_err();
        assert!(err.to_string().contains("printer"));
    }

    #[test]
    fn stream_opens_lazily() {
        let writer = TerminalWriter::new(OutputTarget::Stderr);
        assert!(writer.stream.is_none());
        assert_eq!(writer.target(), OutputTarget::Stderr);
    }
}

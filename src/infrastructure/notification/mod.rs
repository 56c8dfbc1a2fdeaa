//! External notification adapters
//!
//! Platform-native notifier programs used when the terminal has no usable
//! escape-sequence protocol: notify-send on Linux and the BSDs, osascript
//! on macOS, PowerShell on Windows.

mod notify_send;
mod osascript;
mod powershell;

pub use notify_send::NotifySendNotifier;
pub use osascript::OsascriptNotifier;
pub use powershell::PowershellNotifier;

use std::io;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::application::ports::ExternalNotifier;
use crate::domain::error::NotificationError;

/// Create the notifier for the current platform, if it has one
pub fn create_external_notifier(app_name: &str) -> Option<Box<dyn ExternalNotifier>> {
    platform_notifier(app_name)
}

#[cfg(target_os = "macos")]
fn platform_notifier(_app_name: &str) -> Option<Box<dyn ExternalNotifier>> {
    Some(Box::new(OsascriptNotifier::new()))
}

#[cfg(windows)]
fn platform_notifier(app_name: &str) -> Option<Box<dyn ExternalNotifier>> {
    Some(Box::new(PowershellNotifier::with_app_name(app_name)))
}

#[cfg(all(unix, not(target_os = "macos")))]
fn platform_notifier(app_name: &str) -> Option<Box<dyn ExternalNotifier>> {
    Some(Box::new(NotifySendNotifier::with_app_name(app_name)))
}

#[cfg(not(any(unix, windows)))]
fn platform_notifier(_app_name: &str) -> Option<Box<dyn ExternalNotifier>> {
    None
}

/// Check if a program is on the PATH using `which` (`where` on Windows)
pub fn is_program_available(program: &str) -> bool {
    let locator = if cfg!(windows) { "where" } else { "which" };
    Command::new(locator)
        .arg(program)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Run a notifier program to completion with null stdio
fn run_notifier(program: &str, args: &[String]) -> Result<(), NotificationError> {
    debug!(program, ?args, "running external notifier");

    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                NotificationError::NotifierNotFound(program.to_string())
            } else {
                NotificationError::SendFailed(e.to_string())
            }
        })?;

    if !status.success() {
        return Err(NotificationError::SendFailed(format!(
            "{} exited with status: {}",
            program, status
        )));
    }

    Ok(())
}

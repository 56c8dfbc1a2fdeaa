//! macOS AppleScript notification adapter

use crate::application::ports::ExternalNotifier;
use crate::domain::error::NotificationError;
use crate::domain::notification::{NotificationRequest, Urgency};

use super::{is_program_available, run_notifier};

const PROGRAM: &str = "osascript";

/// Shows notifications through `display notification`
#[derive(Debug, Clone, Copy, Default)]
pub struct OsascriptNotifier;

impl OsascriptNotifier {
    pub fn new() -> Self {
        Self
    }

    /// Build the AppleScript source. Critical notifications play a sound.
    fn build_script(request: &NotificationRequest) -> String {
        let mut script = format!("display notification {}", quote(request.message()));
        if let Some(title) = request.title() {
            script.push_str(&format!(" with title {}", quote(title)));
        }
        if request.urgency() == Urgency::Critical {
            script.push_str(" sound name \"Basso\"");
        }
        script
    }
}

/// AppleScript string literal
fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}

impl ExternalNotifier for OsascriptNotifier {
    fn program(&self) -> &str {
        PROGRAM
    }

    fn is_available(&self) -> bool {
        is_program_available(PROGRAM)
    }

    fn notify(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        let args = vec!["-e".to_string(), Self::build_script(request)];
        run_notifier(PROGRAM, &args)
    }
}

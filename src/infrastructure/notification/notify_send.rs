//! notify-send notification adapter

use crate::application::ports::ExternalNotifier;
use crate::domain::config::DEFAULT_APP_NAME;
use crate::domain::error::NotificationError;
use crate::domain::notification::NotificationRequest;

use super::{is_program_available, run_notifier};

const PROGRAM: &str = "notify-send";

/// notify-send notification adapter (freedesktop.org notifications)
pub struct NotifySendNotifier {
    /// Application name for notifications
    app_name: String,
}

impl NotifySendNotifier {
    /// Create a new notify-send notifier
    pub fn new() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    /// Build the argument list.
    ///
    /// The summary is the title when present, otherwise the message alone.
    fn build_args(&self, request: &NotificationRequest) -> Vec<String> {
        let mut args = vec![
            "--app-name".to_string(),
            self.app_name.clone(),
            "--urgency".to_string(),
            request.urgency().as_str().to_string(),
            "--".to_string(),
        ];

        if let Some(title) = request.title() {
            args.push(title.to_string());
        }
        args.push(request.message().to_string());
        args
    }
}

impl Default for NotifySendNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ExternalNotifier for NotifySendNotifier {
    fn program(&self) -> &str {
        PROGRAM
    }

    fn is_available(&self) -> bool {
        is_program_available(PROGRAM)
    }

    fn notify(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        run_notifier(PROGRAM, &self.build_args(request))
    }
}

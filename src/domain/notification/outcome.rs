//! Notifications describing how a finished command exited

pub const DEFAULT_SUCCESS_MESSAGE: &str = "Command completed successfully";
pub const DEFAULT_FAILURE_MESSAGE: &str = "Command failed";

/// Wording for success and failure notifications
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeTemplate {
    pub success_message: String,
    pub failure_message: String,
    pub success_title: String,
    pub failure_title: String,
}

/// Message and title derived from an exit code.
///
/// Carries no urgency: outcomes go out at the dispatcher's default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub exit_code: i32,
    pub message: String,
    pub title: String,
}

impl CommandOutcome {
    /// Build the notification for `exit_code`.
    ///
    /// An explicit message or title replaces the template's. The exit code is
    /// appended to the default failure message only.
    pub fn from_exit_code(
        exit_code: i32,
        message: Option<&str>,
        title: Option<&str>,
        template: &OutcomeTemplate,
    ) -> Self {
        let message = message.filter(|m| !m.is_empty());
        let title = title.filter(|t| !t.is_empty());

        if exit_code == 0 {
            Self {
                exit_code,
                message: message.unwrap_or(&template.success_message).to_string(),
                title: title.unwrap_or(&template.success_title).to_string(),
            }
        } else {
            let message = match message {
                Some(m) => m.to_string(),
                None => format!("{} (exit code: {})", template.failure_message, exit_code),
            };
            Self {
                exit_code,
                message,
                title: title.unwrap_or(&template.failure_title).to_string(),
            }
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

//! Windows PowerShell balloon-tip notification adapter

use crate::application::ports::ExternalNotifier;
use crate::domain::config::DEFAULT_APP_NAME;
use crate::domain::error::NotificationError;
use crate::domain::notification::{NotificationRequest, Urgency};

use super::{is_program_available, run_notifier};

const PROGRAM: &str = "powershell";

/// Shows a tray balloon tip via `System.Windows.Forms.NotifyIcon`
pub struct PowershellNotifier {
    /// Used as the title when the request has none
    app_name: String,
}

impl PowershellNotifier {
    pub fn new() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }

    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    fn build_script(&self, request: &NotificationRequest) -> String {
        let icon = match request.urgency() {
            Urgency::Low => "None",
            Urgency::Normal => "Info",
            Urgency::Critical => "Error",
        };
        let title = request.title().unwrap_or(&self.app_name);

        [
            "Add-Type -AssemblyName System.Windows.Forms".to_string(),
            "$n = New-Object System.Windows.Forms.NotifyIcon".to_string(),
            "$n.Icon = [System.Drawing.SystemIcons]::Information".to_string(),
            format!("$n.BalloonTipIcon = '{}'", icon),
            format!("$n.BalloonTipTitle = {}", quote(title)),
            format!("$n.BalloonTipText = {}", quote(request.message())),
            "$n.Visible = $true".to_string(),
            "$n.ShowBalloonTip(5000)".to_string(),
            "Start-Sleep -Milliseconds 500".to_string(),
            "$n.Dispose()".to_string(),
        ]
        .join("; ")
    }
}

impl Default for PowershellNotifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-quoted PowerShell string literal
fn quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

impl ExternalNotifier for PowershellNotifier {
    fn program(&self) -> &str {
        PROGRAM
    }

    fn is_available(&self) -> bool {
        is_program_available(PROGRAM)
    }

    fn notify(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        let args = vec![
            "-NoProfile".to_string(),
            "-NonInteractive".to_string(),
            "-Command".to_string(),
            self.build_script(request),
        ];
        run_notifier(PROGRAM, &args)
    }
}

//! `info` command handler

use serde::Serialize;

use crate::application::Notify;
use crate::domain::protocol::{CapabilitySet, ProtocolVariant};
use crate::domain::terminal::TerminalIdentity;

use super::app::{EXIT_ERROR, EXIT_SUCCESS};
use super::presenter::{format_detail, yes_no, Presenter};

/// Detection summary, also the `--json` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoReport {
    pub terminal: TerminalIdentity,
    pub protocol: ProtocolVariant,
    pub can_notify: bool,
    pub can_fallback: bool,
    pub in_tmux: bool,
    pub in_screen: bool,
    pub capabilities: CapabilitySet,
}

impl InfoReport {
    pub fn collect<D: Notify>(notifier: &D) -> Self {
        Self {
            terminal: notifier.get_terminal(),
            protocol: notifier.get_protocol(),
            can_notify: notifier.can_notify(),
            can_fallback: notifier.can_fallback(),
            in_tmux: notifier.in_tmux(),
            in_screen: notifier.in_screen(),
            capabilities: notifier.capabilities(),
        }
    }

    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Terminal", self.terminal.as_str().to_string()),
            ("Protocol", self.protocol.as_str().to_string()),
            ("Can Notify", yes_no(self.can_notify)),
            ("Can Fallback", yes_no(self.can_fallback)),
            ("Progress", yes_no(self.capabilities.supports_progress)),
            ("In tmux", yes_no(self.in_tmux)),
            ("In Screen", yes_no(self.in_screen)),
        ]
    }
}

/// Handle `info`
pub fn handle_info<D: Notify>(notifier: &D, json: bool, presenter: &Presenter) -> u8 {
    let report = InfoReport::collect(notifier);

    if json {
        return match serde_json::to_string_pretty(&report) {
            Ok(text) => {
                presenter.output(&text);
                EXIT_SUCCESS
            }
            Err(e) => {
                presenter.error(&format!("Failed to serialize report: {}", e));
                EXIT_ERROR
            }
        };
    }

    for (label, value) in report.rows() {
        presenter.output(&format_detail(label, &value));
    }

    if report.in_tmux && !report.can_notify {
        presenter.warn("tmux detected. Ensure \"allow-passthrough on\" is set in ~/.tmux.conf");
    }

    EXIT_SUCCESS
}

//! The notification facade interface
//!
//! Consumers (the CLI, logging glue, build scripts) depend on this trait
//! only. Every operation is synchronous and reports failure as `false`.

use crate::domain::notification::{KindTitles, NotificationKind, Urgency};
use crate::domain::progress::{ProgressMode, ProgressState};
use crate::domain::protocol::{CapabilitySet, ProtocolVariant};
use crate::domain::terminal::TerminalIdentity;

use super::dispatcher::Detection;

pub trait Notify {
    /// Cached detection result (terminal, multiplexer, catalog row).
    fn detection(&self) -> &Detection;

    fn get_terminal(&self) -> TerminalIdentity {
        self.detection().terminal
    }

    /// Forced protocol if set, else the detected one.
    fn get_protocol(&self) -> ProtocolVariant;

    fn capabilities(&self) -> CapabilitySet {
        CapabilitySet::new(self.get_protocol(), self.supports_progress())
    }

    fn can_notify(&self) -> bool {
        self.get_protocol().is_usable()
    }

    /// Fallback is enabled and a platform notifier is installed.
    fn can_fallback(&self) -> bool;

    fn supports_progress(&self) -> bool {
        self.detection().entry.progress
    }

    fn in_tmux(&self) -> bool {
        self.detection().multiplexer.in_tmux()
    }

    fn in_screen(&self) -> bool {
        self.detection().multiplexer.in_screen()
    }

    /// Send through the terminal protocol, else the fallback if enabled.
    fn send(
        &mut self,
        message: &str,
        title: Option<&str>,
        urgency: Option<Urgency>,
        id: Option<&str>,
    ) -> bool;

    fn send_low(&mut self, message: &str, title: Option<&str>) -> bool {
        self.send(message, title, Some(Urgency::Low), None)
    }

    fn send_critical(&mut self, message: &str, title: Option<&str>) -> bool {
        self.send(message, title, Some(Urgency::Critical), None)
    }

    /// Titles applied by the semantic helpers.
    fn kind_titles(&self) -> &KindTitles;

    /// Send with the kind's urgency preset, titled by `kind_titles` unless
    /// `title` is given.
    fn send_kind(&mut self, kind: NotificationKind, message: &str, title: Option<&str>) -> bool {
        let title = title.map_or_else(|| self.kind_titles().get(kind).to_string(), str::to_string);
        self.send(message, Some(&title), kind.urgency(), None)
    }

    fn success(&mut self, message: &str, title: Option<&str>) -> bool {
        self.send_kind(NotificationKind::Success, message, title)
    }

    fn error(&mut self, message: &str, title: Option<&str>) -> bool {
        self.send_kind(NotificationKind::Error, message, title)
    }

    fn warning(&mut self, message: &str, title: Option<&str>) -> bool {
        self.send_kind(NotificationKind::Warning, message, title)
    }

    fn info(&mut self, message: &str, title: Option<&str>) -> bool {
        self.send_kind(NotificationKind::Info, message, title)
    }

    /// Send when a protocol is usable, ring the bell otherwise.
    fn send_or_bell(&mut self, message: &str, title: Option<&str>) -> bool {
        if self.can_notify() {
            self.send(message, title, None, None)
        } else {
            self.bell()
        }
    }

    /// Like `send`, but a failed terminal write also tries the fallback.
    fn send_any(&mut self, message: &str, title: Option<&str>, urgency: Option<Urgency>) -> bool;

    /// Always use the external notifier, ignoring the fallback toggle.
    fn send_external(&self, message: &str, title: Option<&str>, urgency: Option<Urgency>) -> bool;

    fn bell(&mut self) -> bool;

    /// Close a notification previously sent with `id` (OSC 99 only).
    fn close(&mut self, id: &str) -> bool;

    /// Encoded OSC 8 link for the caller to print.
    fn hyperlink(&self, url: &str, text: Option<&str>, id: Option<&str>) -> String;

    fn request_attention(&mut self, fireworks: bool) -> bool;

    fn fireworks(&mut self) -> bool {
        self.request_attention(true)
    }

    fn steal_focus(&mut self) -> bool;

    /// Report determinate progress. Succeeds without output when the
    /// terminal has no progress support.
    fn progress(&mut self, value: u32, mode: ProgressMode) -> bool;

    fn progress_clear(&mut self) -> bool;

    fn progress_error(&mut self, value: u32) -> bool {
        self.progress(value, ProgressMode::Error)
    }

    fn progress_paused(&mut self, value: u32) -> bool {
        self.progress(value, ProgressMode::Paused)
    }

    fn progress_indeterminate(&mut self) -> bool;

    /// Last progress state reported.
    fn progress_state(&self) -> ProgressState;

    /// Override detection; `None` returns to auto-detection.
    fn force_protocol(&mut self, protocol: Option<ProtocolVariant>);

    fn enable_fallback(&mut self);

    fn disable_fallback(&mut self);

    fn set_default_urgency(&mut self, urgency: Urgency);

    fn set_default_title(&mut self, title: Option<String>);

    fn set_kind_titles(&mut self, titles: KindTitles);

    /// Drop the cached detection and the forced protocol.
    fn reset(&mut self);
}

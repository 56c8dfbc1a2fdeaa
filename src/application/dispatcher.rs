//! Notification dispatcher
//!
//! Owns the per-process notification context (forced protocol, fallback
//! toggle, defaults, cached detection) and decides for every call whether
//! to write an escape sequence, run the external notifier, or do nothing.

use std::cell::OnceCell;

use tracing::{debug, trace, warn};

use crate::domain::codec::Codec;
use crate::domain::notification::{KindTitles, NotificationRequest, Urgency};
use crate::domain::progress::{ProgressMode, ProgressState, ProgressTracker};
use crate::domain::protocol::ProtocolVariant;
use crate::domain::terminal::{
    self, catalog, CatalogEntry, EnvSnapshot, MultiplexerContext, TerminalIdentity,
};

use super::notify::Notify;
use super::ports::{EnvironmentSource, ExternalNotifier, TerminalSink};

/// Mutable settings held by a dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchContext {
    /// Overrides detection when set
    pub forced_protocol: Option<ProtocolVariant>,
    pub fallback_enabled: bool,
    pub default_urgency: Urgency,
    /// Applied to requests without a title
    pub default_title: Option<String>,
    pub kind_titles: KindTitles,
}

impl Default for DispatchContext {
    fn default() -> Self {
        Self {
            forced_protocol: None,
            fallback_enabled: true,
            default_urgency: Urgency::Normal,
            default_title: None,
            kind_titles: KindTitles::default(),
        }
    }
}

/// Result of terminal detection, cached until `reset`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub env: EnvSnapshot,
    pub terminal: TerminalIdentity,
    pub multiplexer: MultiplexerContext,
    pub entry: CatalogEntry,
}

impl Detection {
    /// Resolve and look up the terminal for a snapshot
    pub fn detect(env: EnvSnapshot) -> Self {
        let (terminal, multiplexer) = terminal::resolve(&env);
        let entry = catalog::entry(terminal);
        Self {
            env,
            terminal,
            multiplexer,
            entry,
        }
    }
}

/// The notification facade.
///
/// Single-threaded by construction: detection is cached in a `OnceCell`, so
/// the dispatcher is not `Sync`. Hosts that share one across threads must
/// wrap it in a lock.
pub struct Dispatcher<E, S, N>
where
    E: EnvironmentSource,
    S: TerminalSink,
    N: ExternalNotifier,
{
    environment: E,
    sink: S,
    notifier: Option<N>,
    context: DispatchContext,
    detection: OnceCell<Detection>,
    progress: ProgressTracker,
}

impl<E, S, N> Dispatcher<E, S, N>
where
    E: EnvironmentSource,
    S: TerminalSink,
    N: ExternalNotifier,
{
    /// Create a dispatcher with default settings.
    ///
    /// `notifier` is `None` on platforms without a known notifier program.
    pub fn new(environment: E, sink: S, notifier: Option<N>) -> Self {
        Self::with_context(environment, sink, notifier, DispatchContext::default())
    }

    pub fn with_context(
        environment: E,
        sink: S,
        notifier: Option<N>,
        context: DispatchContext,
    ) -> Self {
        Self {
            environment,
            sink,
            notifier,
            context,
            detection: OnceCell::new(),
            progress: ProgressTracker::new(),
        }
    }

    pub fn context(&self) -> &DispatchContext {
        &self.context
    }

    fn codec(&self) -> Codec {
        Codec::new(self.detection().multiplexer.passthrough())
    }

    fn build_request(
        &self,
        message: &str,
        title: Option<&str>,
        urgency: Option<Urgency>,
        id: Option<&str>,
    ) -> Option<NotificationRequest> {
        match NotificationRequest::new(message) {
            Ok(request) => Some(
                request
                    .with_title(title.or(self.context.default_title.as_deref()))
                    .with_urgency(urgency.unwrap_or(self.context.default_urgency))
                    .with_id(id),
            ),
            Err(e) => {
                debug!(error = %e, "notification rejected");
                None
            }
        }
    }

    fn emit(&mut self, bytes: &[u8]) -> bool {
        if bytes.is_empty() {
            return false;
        }

        match self.sink.write_sequence(bytes) {
            Ok(()) => {
                trace!(len = bytes.len(), "escape sequence written");
                true
            }
            Err(e) => {
                warn!(error = %e, "failed to write escape sequence");
                false
            }
        }
    }

    fn emit_notification(&mut self, request: &NotificationRequest, protocol: ProtocolVariant) -> bool {
        let bytes = self.codec().encode_notification(request, protocol);
        self.emit(&bytes)
    }

    fn deliver_external(&self, request: &NotificationRequest) -> bool {
        let Some(notifier) = self.notifier.as_ref() else {
            debug!("no external notifier for this platform");
            return false;
        };

        match notifier.notify(request) {
            Ok(()) => {
                debug!(program = notifier.program(), "notification sent via fallback");
                true
            }
            Err(e) => {
                warn!(program = notifier.program(), error = %e, "fallback notification failed");
                false
            }
        }
    }

    fn set_progress(&mut self, state: ProgressState) -> bool {
        self.progress.transition(state);
        if !self.supports_progress() {
            trace!(%state, "progress tracked without output");
            return true;
        }

        let bytes = self.codec().encode_progress(state);
        self.emit(&bytes)
    }
}

impl<E, S, N> Notify for Dispatcher<E, S, N>
where
    E: EnvironmentSource,
    S: TerminalSink,
    N: ExternalNotifier,
{
    fn detection(&self) -> &Detection {
        self.detection.get_or_init(|| {
            let detection = Detection::detect(self.environment.snapshot());
            debug!(
                terminal = %detection.terminal,
                protocol = %detection.entry.protocol,
                progress = detection.entry.progress,
                tmux = detection.multiplexer.in_tmux(),
                screen = detection.multiplexer.in_screen(),
                "terminal detected"
            );
            detection
        })
    }

    fn get_protocol(&self) -> ProtocolVariant {
        self.context
            .forced_protocol
            .unwrap_or_else(|| self.detection().entry.protocol)
    }

    fn kind_titles(&self) -> &KindTitles {
        &self.context.kind_titles
    }

    fn can_fallback(&self) -> bool {
        self.context.fallback_enabled
            && self.notifier.as_ref().is_some_and(|n| n.is_available())
    }

    fn send(
        &mut self,
        message: &str,
        title: Option<&str>,
        urgency: Option<Urgency>,
        id: Option<&str>,
    ) -> bool {
        let Some(request) = self.build_request(message, title, urgency, id) else {
            return false;
        };

        let protocol = self.get_protocol();
        if protocol.is_usable() {
            return self.emit_notification(&request, protocol);
        }

        if self.context.fallback_enabled {
            return self.deliver_external(&request);
        }

        debug!("no terminal protocol and fallback disabled, dropping notification");
        false
    }

    fn send_any(&mut self, message: &str, title: Option<&str>, urgency: Option<Urgency>) -> bool {
        let Some(request) = self.build_request(message, title, urgency, None) else {
            return false;
        };

        let protocol = self.get_protocol();
        if protocol.is_usable() && self.emit_notification(&request, protocol) {
            return true;
        }

        self.context.fallback_enabled && self.deliver_external(&request)
    }

    fn send_external(&self, message: &str, title: Option<&str>, urgency: Option<Urgency>) -> bool {
        match self.build_request(message, title, urgency, None) {
            Some(request) => self.deliver_external(&request),
            None => false,
        }
    }

    fn bell(&mut self) -> bool {
        let bytes = self.codec().encode_bell();
        self.emit(&bytes)
    }

    fn close(&mut self, id: &str) -> bool {
        if self.get_protocol() != ProtocolVariant::Osc99 {
            debug!(id, "close requires OSC 99");
            return false;
        }

        let bytes = self.codec().encode_close(id);
        self.emit(&bytes)
    }

    fn hyperlink(&self, url: &str, text: Option<&str>, id: Option<&str>) -> String {
        let bytes = self.codec().encode_hyperlink(url, text, id);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    fn request_attention(&mut self, fireworks: bool) -> bool {
        if !self.detection().entry.attention {
            return false;
        }

        let bytes = self.codec().encode_request_attention(fireworks);
        self.emit(&bytes)
    }

    fn steal_focus(&mut self) -> bool {
        if !self.detection().entry.attention {
            return false;
        }

        let bytes = self.codec().encode_steal_focus();
        self.emit(&bytes)
    }

    fn progress(&mut self, value: u32, mode: ProgressMode) -> bool {
        self.set_progress(ProgressState::determinate(mode, value))
    }

    fn progress_clear(&mut self) -> bool {
        self.set_progress(ProgressState::Cleared)
    }

    fn progress_indeterminate(&mut self) -> bool {
        self.set_progress(ProgressState::Indeterminate)
    }

    fn progress_state(&self) -> ProgressState {
        self.progress.current()
    }

    fn force_protocol(&mut self, protocol: Option<ProtocolVariant>) {
        self.context.forced_protocol = protocol;
    }

    fn enable_fallback(&mut self) {
        self.context.fallback_enabled = true;
    }

    fn disable_fallback(&mut self) {
        self.context.fallback_enabled = false;
    }

    fn set_default_urgency(&mut self, urgency: Urgency) {
        self.context.default_urgency = urgency;
    }

    fn set_default_title(&mut self, title: Option<String>) {
        self.context.default_title = title.filter(|t| !t.is_empty());
    }

    fn set_kind_titles(&mut self, titles: KindTitles) {
        self.context.kind_titles = titles;
    }

    fn reset(&mut self) {
        self.detection.take();
        self.context.forced_protocol = None;
    }
}

//! Escape sequence codec
//!
//! Pure encoders that turn notifications, progress updates and the other
//! terminal requests into the exact bytes to write. Every function returns
//! byte-identical output for identical inputs.
//!
//! Wire grammar (ESC = `0x1b`, BEL = `0x07`, ST = `ESC \`):
//!
//! | request        | sequence                                                     |
//! |----------------|--------------------------------------------------------------|
//! | OSC 9          | `ESC ] 9 ; message BEL`                                      |
//! | OSC 777        | `ESC ] 777 ; notify ; title ; message BEL`                   |
//! | OSC 99         | `ESC ] 99 ; i=id:d=0:u=N:p=title ; title ST` + body chunk    |
//! | close          | `ESC ] 99 ; i=id:p=close ; ST`                               |
//! | progress       | `ESC ] 9 ; 4 ; state [; value] BEL`                          |
//! | hyperlink      | `ESC ] 8 ; id=id ; url ST text ESC ] 8 ; ; ST`                |
//! | attention      | `ESC ] 1337 ; RequestAttention=yes BEL`                      |
//! | bell           | `BEL`                                                        |
//!
//! Each sequence is wrapped individually when a multiplexer is in the way.

mod passthrough;

pub use passthrough::wrap;

use crate::domain::notification::NotificationRequest;
use crate::domain::progress::ProgressState;
use crate::domain::protocol::ProtocolVariant;
use crate::domain::terminal::Passthrough;

pub const ESC: u8 = 0x1b;
pub const BEL: u8 = 0x07;
pub const ST: &[u8] = b"\x1b\\";

const OSC: &[u8] = b"\x1b]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Terminator {
    Bel,
    St,
}

/// Encoder bound to the multiplexer envelope of the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Codec {
    passthrough: Passthrough,
}

impl Codec {
    pub const fn new(passthrough: Passthrough) -> Self {
        Self { passthrough }
    }

    pub const fn passthrough(&self) -> Passthrough {
        self.passthrough
    }

    /// Encode a notification in the given dialect.
    ///
    /// Fields the dialect cannot carry are dropped. `ProtocolVariant::None`
    /// encodes to nothing.
    pub fn encode_notification(
        &self,
        request: &NotificationRequest,
        protocol: ProtocolVariant,
    ) -> Vec<u8> {
        let message = sanitize(request.message());
        match protocol {
            ProtocolVariant::Osc9 => self.osc(
                &format!("9;{}", escape_osc9_subcommand(&message)),
                Terminator::Bel,
            ),
            ProtocolVariant::Osc777 => {
                let title = request
                    .title()
                    .map(|t| sanitize(t).replace(';', ":"))
                    .unwrap_or_default();
                self.osc(
                    &format!("777;notify;{};{}", title, message),
                    Terminator::Bel,
                )
            }
            ProtocolVariant::Osc99 => self.encode_osc99(request, &message),
            ProtocolVariant::None => Vec::new(),
        }
    }

    fn encode_osc99(&self, request: &NotificationRequest, message: &str) -> Vec<u8> {
        let id_key = request
            .id()
            .map(sanitize_osc99_id)
            .filter(|id| !id.is_empty())
            .map(|id| format!("i={}:", id))
            .unwrap_or_default();
        let urgency = request.urgency().osc99_level();

        match request.title() {
            Some(title) => {
                // Title chunk stays open (d=0) until the body chunk arrives
                let mut out = self.osc(
                    &format!("99;{}d=0:u={}:p=title;{}", id_key, urgency, sanitize(title)),
                    Terminator::St,
                );
                out.extend(self.osc(
                    &format!("99;{}d=1:p=body;{}", id_key, message),
                    Terminator::St,
                ));
                out
            }
            None => self.osc(
                &format!("99;{}u={}:p=title;{}", id_key, urgency, message),
                Terminator::St,
            ),
        }
    }

    /// Encode the OSC 99 directive that closes a notification by id.
    /// Returns nothing for an id with no usable characters.
    pub fn encode_close(&self, id: &str) -> Vec<u8> {
        let id = sanitize_osc99_id(id);
        if id.is_empty() {
            return Vec::new();
        }
        self.osc(&format!("99;i={}:p=close;", id), Terminator::St)
    }

    /// Encode a ConEmu-style `OSC 9;4` progress report
    pub fn encode_progress(&self, state: ProgressState) -> Vec<u8> {
        let body = match state.value() {
            Some(value) => format!("9;4;{};{}", state.wire_state(), value),
            None => format!("9;4;{}", state.wire_state()),
        };
        self.osc(&body, Terminator::Bel)
    }

    pub fn encode_bell(&self) -> Vec<u8> {
        wrap(&[BEL], self.passthrough)
    }

    /// Encode an OSC 8 hyperlink around `text` (the url when absent)
    pub fn encode_hyperlink(&self, url: &str, text: Option<&str>, id: Option<&str>) -> Vec<u8> {
        let url = sanitize(url);
        let params = id
            .map(|id| sanitize(id).replace([':', ';'], ""))
            .filter(|id| !id.is_empty())
            .map(|id| format!("id={}", id))
            .unwrap_or_default();
        let text = text
            .map(sanitize)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| url.clone());

        let mut out = self.osc(&format!("8;{};{}", params, url), Terminator::St);
        out.extend_from_slice(text.as_bytes());
        out.extend(self.osc("8;;", Terminator::St));
        out
    }

    /// Encode iTerm2's dock-bounce request, optionally with fireworks
    pub fn encode_request_attention(&self, fireworks: bool) -> Vec<u8> {
        let value = if fireworks { "fireworks" } else { "yes" };
        self.osc(&format!("1337;RequestAttention={}", value), Terminator::Bel)
    }

    pub fn encode_steal_focus(&self) -> Vec<u8> {
        self.osc("1337;StealFocus", Terminator::Bel)
    }

    fn osc(&self, body: &str, terminator: Terminator) -> Vec<u8> {
        // An inner ST would end screen's DCS early
        let terminator = match (self.passthrough, terminator) {
            (Passthrough::Screen, _) => Terminator::Bel,
            (_, t) => t,
        };

        let mut seq = Vec::with_capacity(OSC.len() + body.len() + ST.len());
        seq.extend_from_slice(OSC);
        seq.extend_from_slice(body.as_bytes());
        match terminator {
            Terminator::Bel => seq.push(BEL),
            Terminator::St => seq.extend_from_slice(ST),
        }
        wrap(&seq, self.passthrough)
    }
}

/// Strip control characters from payload text. Line breaks and tabs become
/// spaces.
fn sanitize(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\n' | '\r' | '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}

/// A message opening with `<digits>;` would read as an `OSC 9` subcommand
/// (`9;4;...` is progress), so it gets a leading space.
fn escape_osc9_subcommand(message: &str) -> String {
    let digits = message.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 && message.as_bytes().get(digits) == Some(&b';') {
        format!(" {}", message)
    } else {
        message.to_string()
    }
}

/// kitty ids are limited to `[A-Za-z0-9_.+-]`
fn sanitize_osc99_id(id: &str) -> String {
    id.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '+'))
        .collect()
}

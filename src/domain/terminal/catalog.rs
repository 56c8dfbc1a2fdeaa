//! Static protocol catalog: what each known terminal understands
//!
//! This table is the only place capability decisions come from. Supporting
//! a new terminal means adding a `TerminalIdentity` variant and a row here.

use crate::domain::protocol::ProtocolVariant;

use super::identity::TerminalIdentity;

/// One catalog row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub terminal: TerminalIdentity,
    pub protocol: ProtocolVariant,
    /// Understands ConEmu-style `OSC 9;4` progress reporting
    pub progress: bool,
    /// Understands iTerm2 `RequestAttention` / `StealFocus`
    pub attention: bool,
}

const fn row(
    terminal: TerminalIdentity,
    protocol: ProtocolVariant,
    progress: bool,
    attention: bool,
) -> CatalogEntry {
    CatalogEntry {
        terminal,
        protocol,
        progress,
        attention,
    }
}

/// Entry used for terminals with no row
pub const UNSUPPORTED: CatalogEntry = row(
    TerminalIdentity::Unknown,
    ProtocolVariant::None,
    false,
    false,
);

pub static CATALOG: &[CatalogEntry] = &[
    row(TerminalIdentity::Kitty, ProtocolVariant::Osc99, false, false),
    row(TerminalIdentity::ITerm2, ProtocolVariant::Osc9, true, true),
    row(TerminalIdentity::WezTerm, ProtocolVariant::Osc777, true, false),
    row(TerminalIdentity::Ghostty, ProtocolVariant::Osc777, true, false),
    row(TerminalIdentity::WindowsTerminal, ProtocolVariant::None, true, false),
    row(TerminalIdentity::Vte, ProtocolVariant::Osc777, false, false),
    row(TerminalIdentity::Alacritty, ProtocolVariant::None, false, false),
    row(TerminalIdentity::AppleTerminal, ProtocolVariant::None, false, false),
];

/// Full catalog row for a terminal
pub fn entry(terminal: TerminalIdentity) -> CatalogEntry {
    CATALOG
        .iter()
        .find(|e| e.terminal == terminal)
        .copied()
        .unwrap_or(UNSUPPORTED)
}

/// Protocol variant and progress support for a terminal
pub fn lookup(terminal: TerminalIdentity) -> (ProtocolVariant, bool) {
    let e = entry(terminal);
    (e.protocol, e.progress)
}

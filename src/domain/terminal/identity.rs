//! Terminal identity and multiplexer context

use std::fmt;

use serde::Serialize;

/// All known terminals (excludes `Unknown`)
pub const KNOWN_TERMINALS: &[TerminalIdentity] = &[
    TerminalIdentity::Kitty,
    TerminalIdentity::ITerm2,
    TerminalIdentity::WezTerm,
    TerminalIdentity::Ghostty,
    TerminalIdentity::WindowsTerminal,
    TerminalIdentity::Vte,
    TerminalIdentity::Alacritty,
    TerminalIdentity::AppleTerminal,
];

/// The terminal emulator hosting this process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TerminalIdentity {
    Kitty,
    #[serde(rename = "iterm2")]
    ITerm2,
    #[serde(rename = "wezterm")]
    WezTerm,
    Ghostty,
    WindowsTerminal,
    /// GNOME Terminal, Tilix, Terminator and other VTE-based terminals
    Vte,
    Alacritty,
    AppleTerminal,
    #[default]
    Unknown,
}

impl TerminalIdentity {
    /// Get the string identifier for this terminal
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Kitty => "kitty",
            Self::ITerm2 => "iterm2",
            Self::WezTerm => "wezterm",
            Self::Ghostty => "ghostty",
            Self::WindowsTerminal => "windows-terminal",
            Self::Vte => "vte",
            Self::Alacritty => "alacritty",
            Self::AppleTerminal => "apple-terminal",
            Self::Unknown => "unknown",
        }
    }

    /// Get the human-readable name for this terminal
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Kitty => "Kitty",
            Self::ITerm2 => "iTerm2",
            Self::WezTerm => "WezTerm",
            Self::Ghostty => "Ghostty",
            Self::WindowsTerminal => "Windows Terminal",
            Self::Vte => "VTE-based (GNOME Terminal, etc.)",
            Self::Alacritty => "Alacritty",
            Self::AppleTerminal => "Terminal.app",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TerminalIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Envelope needed to get a sequence through a multiplexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Passthrough {
    #[default]
    Direct,
    Tmux,
    Screen,
}

/// Which multiplexer (if any) wraps the session.
///
/// The session tokens are kept for diagnostics only; protocol decisions use
/// the booleans.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MultiplexerContext {
    pub tmux: Option<String>,
    pub screen: Option<String>,
}

impl MultiplexerContext {
    pub fn in_tmux(&self) -> bool {
        self.tmux.is_some()
    }

    pub fn in_screen(&self) -> bool {
        self.screen.is_some()
    }

    /// Envelope for emitted sequences. tmux wins when both are set.
    pub fn passthrough(&self) -> Passthrough {
        if self.in_tmux() {
            Passthrough::Tmux
        } else if self.in_screen() {
            Passthrough::Screen
        } else {
            Passthrough::Direct
        }
    }
}

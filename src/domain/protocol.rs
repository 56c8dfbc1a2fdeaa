//! Notification protocol variants and their capabilities

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::InvalidProtocolError;

/// All protocol variants
pub const ALL_PROTOCOLS: &[ProtocolVariant] = &[
    ProtocolVariant::Osc9,
    ProtocolVariant::Osc777,
    ProtocolVariant::Osc99,
    ProtocolVariant::None,
];

/// Notification escape-sequence dialect understood by a terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtocolVariant {
    /// Message only (iTerm2 growl-style)
    Osc9,
    /// Title and message (rxvt-unicode `notify` extension)
    Osc777,
    /// Title, message, urgency and stable id (kitty desktop notifications)
    Osc99,
    /// No terminal protocol usable
    #[default]
    None,
}

impl ProtocolVariant {
    /// Get the string identifier for this protocol
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Osc9 => "osc9",
            Self::Osc777 => "osc777",
            Self::Osc99 => "osc99",
            Self::None => "none",
        }
    }

    /// Human-readable summary used by diagnostics
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Osc9 => "OSC 9 (message only)",
            Self::Osc777 => "OSC 777 (title + message)",
            Self::Osc99 => "OSC 99 (title, urgency, id)",
            Self::None => "None",
        }
    }

    pub const fn is_usable(&self) -> bool {
        !matches!(self, Self::None)
    }

    pub const fn supports_title(&self) -> bool {
        matches!(self, Self::Osc777 | Self::Osc99)
    }

    pub const fn supports_urgency(&self) -> bool {
        matches!(self, Self::Osc99)
    }

    pub const fn supports_id(&self) -> bool {
        matches!(self, Self::Osc99)
    }
}

impl FromStr for ProtocolVariant {
    type Err = InvalidProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "osc9" => Ok(Self::Osc9),
            "osc777" => Ok(Self::Osc777),
            "osc99" => Ok(Self::Osc99),
            "none" => Ok(Self::None),
            _ => Err(InvalidProtocolError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ProtocolVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the effective protocol (and detected terminal) can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CapabilitySet {
    pub supports_title: bool,
    pub supports_urgency: bool,
    pub supports_id: bool,
    pub supports_progress: bool,
}

impl CapabilitySet {
    /// Combine the variant's fixed capabilities with the terminal's
    /// progress support.
    pub const fn new(protocol: ProtocolVariant, supports_progress: bool) -> Self {
        Self {
            supports_title: protocol.supports_title(),
            supports_urgency: protocol.supports_urgency(),
            supports_id: protocol.supports_id(),
            supports_progress,
        }
    }
}

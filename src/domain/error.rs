//! Domain error types

use thiserror::Error;

/// Error when parsing a protocol name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid protocol: \"{input}\". Valid protocols are: osc9, osc777, osc99, none")]
pub struct InvalidProtocolError {
    pub input: String,
}

/// Error when parsing an urgency level
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid urgency: \"{input}\". Valid levels are: low, normal, critical")]
pub struct InvalidUrgencyError {
    pub input: String,
}

/// Error when parsing a progress state name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid progress state: \"{input}\". Valid states are: normal, error, paused")]
pub struct InvalidProgressModeError {
    pub input: String,
}

/// Error when parsing a notification kind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid kind: \"{input}\". Valid kinds are: success, error, warning, info")]
pub struct InvalidKindError {
    pub input: String,
}

/// Notification delivery errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    #[error("Notification message must not be empty")]
    EmptyMessage,

    #[error("{0} not found")]
    NotifierNotFound(String),

    #[error("Failed to show notification: {0}")]
    SendFailed(String),
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_protocol_lists_valid_names() {
        let err = InvalidProtocolError {
            input: "osc42".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("osc42"));
        assert!(msg.contains("osc777"));
    }

    #[test]
    fn notifier_not_found_names_program() {
        let err = NotificationError::NotifierNotFound("notify-send".to_string());
        assert_eq!(err.to_string(), "notify-send not found");
    }
}

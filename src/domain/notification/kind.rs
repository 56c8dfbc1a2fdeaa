//! Semantic notification kinds

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidKindError;

use super::Urgency;

pub const DEFAULT_SUCCESS_KIND_TITLE: &str = "Success";
pub const DEFAULT_ERROR_KIND_TITLE: &str = "Error";
pub const DEFAULT_WARNING_KIND_TITLE: &str = "Warning";
pub const DEFAULT_INFO_KIND_TITLE: &str = "Info";

pub const ALL_KINDS: &[NotificationKind] = &[
    NotificationKind::Success,
    NotificationKind::Error,
    NotificationKind::Warning,
    NotificationKind::Info,
];

/// What a notification reports, which picks its title and urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Urgency preset for the kind; `None` keeps the sender's default.
    pub const fn urgency(&self) -> Option<Urgency> {
        match self {
            Self::Success | Self::Warning => None,
            Self::Error => Some(Urgency::Critical),
            Self::Info => Some(Urgency::Low),
        }
    }
}

impl FromStr for NotificationKind {
    type Err = InvalidKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "success" => Ok(Self::Success),
            "error" => Ok(Self::Error),
            "warning" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            _ => Err(InvalidKindError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Title used for each kind when the caller gives none
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindTitles {
    pub success: String,
    pub error: String,
    pub warning: String,
    pub info: String,
}

impl KindTitles {
    pub fn get(&self, kind: NotificationKind) -> &str {
        match kind {
            NotificationKind::Success => &self.success,
            NotificationKind::Error => &self.error,
            NotificationKind::Warning => &self.warning,
            NotificationKind::Info => &self.info,
        }
    }
}

impl Default for KindTitles {
    fn default() -> Self {
        Self {
            success: DEFAULT_SUCCESS_KIND_TITLE.to_string(),
            error: DEFAULT_ERROR_KIND_TITLE.to_string(),
            warning: DEFAULT_WARNING_KIND_TITLE.to_string(),
            info: DEFAULT_INFO_KIND_TITLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urgency_presets() {
        assert_eq!(NotificationKind::Success.urgency(), None);
        assert_eq!(NotificationKind::Warning.urgency(), None);
        assert_eq!(NotificationKind::Error.urgency(), Some(Urgency::Critical));
        assert_eq!(NotificationKind::Info.urgency(), Some(Urgency::Low));
    }

    #[test]
    fn parses_every_kind() {
        for kind in ALL_KINDS {
            assert_eq!(kind.as_str().parse::<NotificationKind>().unwrap(), *kind);
        }
        assert_eq!(
            " ERROR ".parse::<NotificationKind>().unwrap(),
            NotificationKind::Error
        );
        assert!("failure".parse::<NotificationKind>().is_err());
    }

    #[test]
    fn default_titles() {
        let titles = KindTitles::default();
        assert_eq!(titles.get(NotificationKind::Success), "Success");
        assert_eq!(titles.get(NotificationKind::Info), "Info");
    }
}

//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::notification::{
    KindTitles, Urgency, DEFAULT_ERROR_KIND_TITLE, DEFAULT_INFO_KIND_TITLE,
    DEFAULT_WARNING_KIND_TITLE,
};
use crate::domain::protocol::ProtocolVariant;

pub const DEFAULT_TITLE: &str = "Terminal";
pub const DEFAULT_APP_NAME: &str = "termnotify";
pub const DEFAULT_OUTPUT: &str = "tty";
pub const DEFAULT_SUCCESS_TITLE: &str = "✓ Success";
pub const DEFAULT_FAILURE_TITLE: &str = "✗ Failed";

/// Notification titles.
///
/// `success` is shared by exit-code mode and the success helper; `failure`
/// is exit-code mode only; the rest title the semantic helpers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TitlesConfig {
    pub success: Option<String>,
    pub failure: Option<String>,
    pub error: Option<String>,
    pub warning: Option<String>,
    pub info: Option<String>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub default_title: Option<String>,
    pub force_protocol: Option<String>,
    pub enable_fallback: Option<bool>,
    pub default_urgency: Option<String>,
    pub app_name: Option<String>,
    pub output: Option<String>,
    pub titles: Option<TitlesConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            default_title: Some(DEFAULT_TITLE.to_string()),
            force_protocol: None,
            enable_fallback: Some(true),
            default_urgency: Some(Urgency::Normal.to_string()),
            app_name: Some(DEFAULT_APP_NAME.to_string()),
            output: Some(DEFAULT_OUTPUT.to_string()),
            titles: Some(TitlesConfig {
                success: Some(DEFAULT_SUCCESS_TITLE.to_string()),
                failure: Some(DEFAULT_FAILURE_TITLE.to_string()),
                error: Some(DEFAULT_ERROR_KIND_TITLE.to_string()),
                warning: Some(DEFAULT_WARNING_KIND_TITLE.to_string()),
                info: Some(DEFAULT_INFO_KIND_TITLE.to_string()),
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            default_title: other.default_title.or(self.default_title),
            force_protocol: other.force_protocol.or(self.force_protocol),
            enable_fallback: other.enable_fallback.or(self.enable_fallback),
            default_urgency: other.default_urgency.or(self.default_urgency),
            app_name: other.app_name.or(self.app_name),
            output: other.output.or(self.output),
            titles: Self::merge_titles(self.titles, other.titles),
        }
    }

    fn merge_titles(base: Option<TitlesConfig>, other: Option<TitlesConfig>) -> Option<TitlesConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(TitlesConfig {
                success: o.success.or(b.success),
                failure: o.failure.or(b.failure),
                error: o.error.or(b.error),
                warning: o.warning.or(b.warning),
                info: o.info.or(b.info),
            }),
        }
    }

    /// Get the default notification title, or "Terminal" if not set
    pub fn default_title_or_default(&self) -> &str {
        self.default_title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    /// Get the forced protocol, or None (auto-detect) if not set/invalid
    pub fn force_protocol_or_default(&self) -> Option<ProtocolVariant> {
        self.force_protocol.as_ref().and_then(|s| s.parse().ok())
    }

    /// Get fallback setting, or true if not set
    pub fn enable_fallback_or_default(&self) -> bool {
        self.enable_fallback.unwrap_or(true)
    }

    /// Get default urgency, or normal if not set/invalid
    pub fn default_urgency_or_default(&self) -> Urgency {
        self.default_urgency
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get the app name passed to external notifiers
    pub fn app_name_or_default(&self) -> &str {
        self.app_name.as_deref().unwrap_or(DEFAULT_APP_NAME)
    }

    /// Get the output stream name, or "tty" if not set
    pub fn output_or_default(&self) -> &str {
        self.output.as_deref().unwrap_or(DEFAULT_OUTPUT)
    }

    pub fn success_title_or_default(&self) -> &str {
        self.titles
            .as_ref()
            .and_then(|t| t.success.as_deref())
            .unwrap_or(DEFAULT_SUCCESS_TITLE)
    }

    pub fn failure_title_or_default(&self) -> &str {
        self.titles
            .as_ref()
            .and_then(|t| t.failure.as_deref())
            .unwrap_or(DEFAULT_FAILURE_TITLE)
    }

    /// Titles for the semantic helpers, falling back per kind
    pub fn kind_titles_or_default(&self) -> KindTitles {
        let titles = self.titles.clone().unwrap_or_default();
        KindTitles {
            success: self.success_title_or_default().to_string(),
            error: titles.error.unwrap_or_else(|| DEFAULT_ERROR_KIND_TITLE.to_string()),
            warning: titles
                .warning
                .unwrap_or_else(|| DEFAULT_WARNING_KIND_TITLE.to_string()),
            info: titles.info.unwrap_or_else(|| DEFAULT_INFO_KIND_TITLE.to_string()),
        }
    }
}

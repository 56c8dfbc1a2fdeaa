//! Notification request value object

use crate::domain::error::NotificationError;

use super::Urgency;

/// A single notification to deliver.
///
/// The message is always non-empty. Title and id are optional and are
/// dropped silently by protocols that cannot carry them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    message: String,
    title: Option<String>,
    urgency: Urgency,
    id: Option<String>,
}

impl NotificationRequest {
    /// Create a request with normal urgency and no title or id.
    ///
    /// Fails with [`NotificationError::EmptyMessage`] when the message is
    /// empty or whitespace only.
    pub fn new(message: impl Into<String>) -> Result<Self, NotificationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(NotificationError::EmptyMessage);
        }

        Ok(Self {
            message,
            title: None,
            urgency: Urgency::default(),
            id: None,
        })
    }

    /// Set the title. Empty titles are treated as absent.
    pub fn with_title(mut self, title: Option<impl Into<String>>) -> Self {
        self.title = title.map(Into::into).filter(|t| !t.is_empty());
        self
    }

    pub fn with_urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = urgency;
        self
    }

    /// Set the stable identifier. Empty ids are treated as absent.
    pub fn with_id(mut self, id: Option<impl Into<String>>) -> Self {
        self.id = id.map(Into::into).filter(|i| !i.is_empty());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn urgency(&self) -> Urgency {
        self.urgency
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

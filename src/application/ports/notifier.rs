//! External notifier port interface

use crate::domain::error::NotificationError;
use crate::domain::notification::NotificationRequest;

/// Port for OS-native notification programs used as a fallback
pub trait ExternalNotifier: Send + Sync {
    /// Name of the program this notifier runs.
    fn program(&self) -> &str;

    /// Check whether the program can be found on this system.
    fn is_available(&self) -> bool;

    /// Show a desktop notification and wait for the program to exit.
    ///
    /// # Arguments
    /// * `request` - The notification to show
    ///
    /// # Returns
    /// Ok(()) on success, error otherwise
    fn notify(&self, request: &NotificationRequest) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed notifier types
impl ExternalNotifier for Box<dyn ExternalNotifier> {
    fn program(&self) -> &str {
        self.as_ref().program()
    }

    fn is_available(&self) -> bool {
        self.as_ref().is_available()
    }

    fn notify(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        self.as_ref().notify(request)
    }
}

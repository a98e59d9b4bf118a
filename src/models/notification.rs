//! Notification preference model.

use serde::{Deserialize, Serialize};

/// Per-driver delivery channel preferences for journey alerts.
///
/// Delivery itself (email/push transport) happens outside this crate; the
/// core only stores the flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    /// Receive alerts by email.
    pub email: bool,
    /// Receive in-app push notifications.
    pub push: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
        }
    }
}

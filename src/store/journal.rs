//! Notifications and the action log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Recipient that addresses every employee at once.
pub const BROADCAST_RECIPIENT: &str = "TOUS";

/// Urgency of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Informational message.
    #[default]
    Info,
    /// Something the recipient should look at.
    Warning,
    /// A request went through.
    Success,
    /// Needs immediate action.
    Urgent,
}

/// A message addressed to one employee or to everyone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Sequential id, starting at 1.
    pub id: u32,
    /// Employee name, or [`BROADCAST_RECIPIENT`].
    pub recipient: String,
    /// Message body.
    pub message: String,
    /// Urgency.
    #[serde(default)]
    pub kind: NotificationKind,
    /// Creation time.
    pub timestamp: DateTime<Utc>,
    /// Whether the recipient has read it.
    #[serde(default)]
    pub read: bool,
}

impl Notification {
    /// Returns true if `name` should see this notification.
    pub fn is_for(&self, name: &str) -> bool {
        self.recipient == name || self.recipient == BROADCAST_RECIPIENT
    }

    /// Returns true for broadcast notifications.
    pub fn is_broadcast(&self) -> bool {
        self.recipient == BROADCAST_RECIPIENT
    }
}

/// One entry of the action log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionEntry {
    /// When the action was performed.
    pub timestamp: DateTime<Utc>,
    /// Action name (e.g., "approve_absence").
    pub action: String,
    /// Action parameters and outcome.
    #[serde(default)]
    pub details: Value,
}

impl ActionEntry {
    pub(crate) fn now(action: &str, details: Value) -> Self {
        Self {
            timestamp: Utc::now(),
            action: action.to_string(),
            details,
        }
    }
}

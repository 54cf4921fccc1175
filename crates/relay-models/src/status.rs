//! Service status record.
//!
//! The record is written by an external service; this system only reads it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message shown when the service is online and no note was supplied.
pub const DEFAULT_ONLINE_MESSAGE: &str = "All services are online!";

/// Message shown when the service is offline and no note was supplied.
pub const DEFAULT_OFFLINE_MESSAGE: &str = "We are currently unavailable!";

/// Returns the default message for an availability value.
pub fn default_message(is_online: bool) -> &'static str {
    if is_online {
        DEFAULT_ONLINE_MESSAGE
    } else {
        DEFAULT_OFFLINE_MESSAGE
    }
}

/// Snapshot of the watched service's availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStatus {
    /// Whether the service is currently available.
    pub is_online: bool,

    /// When the external writer last updated the record.
    pub updated_at: DateTime<Utc>,

    /// Operator-supplied note. `None` means "use the default".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ServiceStatus {
    /// Creates a status stamped with the current time.
    ///
    /// Empty or whitespace-only messages are treated as absent.
    pub fn new(is_online: bool, message: Option<String>) -> Self {
        Self::at(is_online, Utc::now(), message)
    }

    /// Creates a status with an explicit update time.
    pub fn at(is_online: bool, updated_at: DateTime<Utc>, message: Option<String>) -> Self {
        Self {
            is_online,
            updated_at,
            message: message.filter(|m| !m.trim().is_empty()),
        }
    }

    /// The value held before the first successful read: offline, default message.
    pub fn initial() -> Self {
        Self::new(false, None)
    }

    /// The message to display: the stored note, or the default for the current state.
    pub fn effective_message(&self) -> &str {
        self.message
            .as_deref()
            .unwrap_or_else(|| default_message(self.is_online))
    }

    /// Whether the stored note differs from the default for the current state.
    pub fn has_custom_message(&self) -> bool {
        self.effective_message() != default_message(self.is_online)
    }

    /// Lowercase state label, as reported by the health endpoint.
    pub fn label(&self) -> &'static str {
        if self.is_online {
            "online"
        } else {
            "offline"
        }
    }
}

impl Default for ServiceStatus {
    fn default() -> Self {
        Self::initial()
    }
}

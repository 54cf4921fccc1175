//! Platform-neutral status payloads.
//!
//! Every surface that shows the service state (the channel notification,
//! the `!check`/`!online`/`!offline` previews and the `/status` query) builds
//! its content here, so the wording cannot drift between them.

use serde::Serialize;

use crate::status::{default_message, ServiceStatus};

/// Title of the channel notification.
pub const PAYLOAD_TITLE: &str = "📊・Service Status Update";

/// Title of the `/status` report.
pub const REPORT_TITLE: &str = "Service Status";

/// Accent colour for the online state.
pub const COLOR_ONLINE: u32 = 0x00FF00;

/// Accent colour for the offline state.
pub const COLOR_OFFLINE: u32 = 0xFF0000;

const MARK_ONLINE: &str = "✅";
const MARK_OFFLINE: &str = "❌";

/// A named line in a payload. `value` may be empty for heading-only lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayloadField {
    pub name: String,
    pub value: String,
}

impl PayloadField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// A field with a name and no value.
    pub fn heading(name: impl Into<String>) -> Self {
        Self::new(name, "")
    }
}

/// The channel notification content for one availability state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusPayload {
    pub title: String,
    pub color: u32,
    pub fields: Vec<PayloadField>,
}

impl StatusPayload {
    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&PayloadField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Builds the notification payload for an availability state.
///
/// `message` is the operator note; `None` or an empty note falls back to the
/// default unavailability text. The note only appears in the offline payload.
pub fn render_status_payload(is_online: bool, message: Option<&str>) -> StatusPayload {
    let fields = if is_online {
        vec![
            PayloadField::heading(format!("🧾 Similarity Checker – {} Online", MARK_ONLINE)),
            PayloadField::heading(format!("🤖 AI Checker – {} Online", MARK_ONLINE)),
            PayloadField::new("⏱️ Results", "15-20 mins"),
        ]
    } else {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| default_message(false));
        vec![
            PayloadField::heading(format!("🧾 Similarity Checker – {} Offline", MARK_OFFLINE)),
            PayloadField::heading(format!("🤖 AI Checker – {} Offline", MARK_OFFLINE)),
            PayloadField::new("Message", message),
            PayloadField::new(
                "📝 We'll be back online soon! ⚡",
                "You can still upload your files - they'll be checked ASAP once we're back.",
            ),
            PayloadField::new(
                "📌 Note",
                "You can check the status via the bot profile or using /status command!",
            ),
        ]
    };

    StatusPayload {
        title: PAYLOAD_TITLE.to_string(),
        color: if is_online { COLOR_ONLINE } else { COLOR_OFFLINE },
        fields,
    }
}

/// Reply content for the `/status` query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub title: String,
    /// Short state line, e.g. "🟢 Online".
    pub headline: String,
    pub color: u32,
    pub fields: Vec<PayloadField>,
}

impl StatusReport {
    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&PayloadField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Builds the `/status` reply.
///
/// The `Message` field always carries the default text for the current
/// state; an `Additional Info` field is added only when the stored note
/// differs from that default.
pub fn render_status_report(status: &ServiceStatus) -> StatusReport {
    let default = default_message(status.is_online);
    let mut fields = vec![PayloadField::new("Message", default)];

    if status.has_custom_message() {
        fields.push(PayloadField::new("Additional Info", status.effective_message()));
    }

    StatusReport {
        title: REPORT_TITLE.to_string(),
        headline: if status.is_online {
            "🟢 Online".to_string()
        } else {
            "🔴 Offline".to_string()
        },
        color: if status.is_online { COLOR_ONLINE } else { COLOR_OFFLINE },
        fields,
    }
}

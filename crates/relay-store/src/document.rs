//! Wire shape of the status document.

use chrono::Utc;
use relay_models::ServiceStatus;
use serde::{Deserialize, Serialize};

/// The status document as the external writer stores it.
///
/// Extra fields the writer adds (`_id`, `__v`, `createdAt`) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDocument {
    #[serde(default)]
    pub is_online: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<bson::DateTime>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<StatusDocument> for ServiceStatus {
    fn from(doc: StatusDocument) -> Self {
        let updated_at = doc
            .updated_at
            .map(|ts| ts.to_chrono())
            .unwrap_or_else(Utc::now);
        ServiceStatus::at(doc.is_online, updated_at, doc.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::{doc, oid::ObjectId};
    use relay_models::DEFAULT_OFFLINE_MESSAGE;

    #[test]
    fn test_document_from_writer_shape() {
        let raw = doc! {
            "_id": ObjectId::new(),
            "isOnline": true,
            "updatedAt": bson::DateTime::from_millis(1_700_000_000_000),
            "message": "Back to normal",
            "__v": 0,
        };

        let document: StatusDocument = bson::from_document(raw).unwrap();
        assert!(document.is_online);
        assert_eq!(document.message.as_deref(), Some("Back to normal"));

        let status = ServiceStatus::from(document);
        assert!(status.is_online);
        assert_eq!(status.updated_at.timestamp_millis(), 1_700_000_000_000);
        assert_eq!(status.effective_message(), "Back to normal");
    }

    #[test]
    fn test_document_missing_fields() {
        let document: StatusDocument = bson::from_document(doc! { "_id": ObjectId::new() }).unwrap();
        assert!(!document.is_online);
        assert!(document.updated_at.is_none());

        let status = ServiceStatus::from(document);
        assert!(!status.is_online);
        assert_eq!(status.effective_message(), DEFAULT_OFFLINE_MESSAGE);
    }

    #[test]
    fn test_document_empty_message_uses_default() {
        let document: StatusDocument =
            bson::from_document(doc! { "isOnline": false, "message": "" }).unwrap();
        let status = ServiceStatus::from(document);
        assert!(status.message.is_none());
        assert_eq!(status.effective_message(), DEFAULT_OFFLINE_MESSAGE);
    }
}

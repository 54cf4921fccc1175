//! The chat-side seam of the relay.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use async_trait::async_trait;
use relay_models::StatusPayload;
use tokio::sync::Mutex;

use crate::error::{Result, RuntimeError};

/// Identifier of a posted notification message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(pub i64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Posts status notifications to the status channel.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Post a payload and return the new message's id.
    async fn send(&self, payload: &StatusPayload) -> Result<NotificationId>;

    /// Remove a previously posted message.
    async fn delete(&self, id: NotificationId) -> Result<()>;

    /// Reflect the availability state in the bot's profile.
    async fn set_presence(&self, is_online: bool) -> Result<()> {
        let _ = is_online;
        Ok(())
    }
}

/// Notifier that keeps everything in memory.
///
/// Used as the chat stand-in in tests; individual operations can be made
/// to fail.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    next_id: AtomicI64,
    sent: Mutex<Vec<(NotificationId, StatusPayload)>>,
    deleted: Mutex<Vec<NotificationId>>,
    presence: Mutex<Vec<bool>>,
    fail_send: AtomicBool,
    fail_delete: AtomicBool,
    fail_presence: AtomicBool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every payload sent so far, with the id it was given.
    pub async fn sent(&self) -> Vec<(NotificationId, StatusPayload)> {
        self.sent.lock().await.clone()
    }

    /// Ids deleted so far.
    pub async fn deleted(&self) -> Vec<NotificationId> {
        self.deleted.lock().await.clone()
    }

    /// Presence values applied so far.
    pub async fn presence(&self) -> Vec<bool> {
        self.presence.lock().await.clone()
    }

    pub fn set_fail_send(&self, fail: bool) {
        self.fail_send.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_delete(&self, fail: bool) {
        self.fail_delete.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_presence(&self, fail: bool) {
        self.fail_presence.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, payload: &StatusPayload) -> Result<NotificationId> {
        if self.fail_send.load(Ordering::SeqCst) {
            return Err(RuntimeError::Notify("send rejected".into()));
        }
        let id = NotificationId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        self.sent.lock().await.push((id, payload.clone()));
        Ok(id)
    }

    async fn delete(&self, id: NotificationId) -> Result<()> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(RuntimeError::Notify(format!("message {} not found", id)));
        }
        self.deleted.lock().await.push(id);
        Ok(())
    }

    async fn set_presence(&self, is_online: bool) -> Result<()> {
        if self.fail_presence.load(Ordering::SeqCst) {
            return Err(RuntimeError::Notify("presence rejected".into()));
        }
        self.presence.lock().await.push(is_online);
        Ok(())
    }
}

//! Shared relay state.

use std::sync::Arc;

use relay_models::ServiceStatus;
use tokio::sync::{Mutex, MutexGuard, RwLock};

use crate::notifier::NotificationId;

/// What the status channel currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnouncementState {
    /// Availability of the last posted notification; `None` until the first post.
    pub last_announced: Option<bool>,
    /// Id of the last posted notification.
    pub last_message_id: Option<NotificationId>,
}

impl AnnouncementState {
    /// Returns true if `is_online` differs from what was last posted.
    ///
    /// Nothing posted yet always counts as a difference.
    pub fn should_announce(&self, is_online: bool) -> bool {
        self.last_announced != Some(is_online)
    }

    /// Records a successful post.
    pub fn record(&mut self, is_online: bool, id: NotificationId) {
        self.last_announced = Some(is_online);
        self.last_message_id = Some(id);
    }
}

/// State shared between the poller, the command handlers and the health endpoint.
///
/// Only the poller's cycle writes; everything else reads snapshots.
#[derive(Debug, Default)]
pub struct RelayContext {
    cache: RwLock<ServiceStatus>,
    announcement: Mutex<AnnouncementState>,
}

impl RelayContext {
    /// Creates a context holding the initial (offline) status.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context seeded with a status, for fixtures.
    pub fn with_status(status: ServiceStatus) -> Self {
        Self {
            cache: RwLock::new(status),
            announcement: Mutex::new(AnnouncementState::default()),
        }
    }

    /// Creates a new context behind an `Arc`.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Snapshot of the cached status.
    pub async fn status(&self) -> ServiceStatus {
        self.cache.read().await.clone()
    }

    /// Overwrites the cached status.
    pub async fn update_status(&self, status: ServiceStatus) {
        *self.cache.write().await = status;
    }

    /// Snapshot of the announcement state.
    pub async fn announcement(&self) -> AnnouncementState {
        self.announcement.lock().await.clone()
    }

    /// Exclusive access to the announcement state for the duration of a cycle.
    pub(crate) async fn lock_announcement(&self) -> MutexGuard<'_, AnnouncementState> {
        self.announcement.lock().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_value_always_announces() {
        let state = AnnouncementState::default();
        assert!(state.should_announce(true));
        assert!(state.should_announce(false));
    }

    #[test]
    fn test_record_then_compare() {
        let mut state = AnnouncementState::default();
        state.record(false, NotificationId(10));

        assert_eq!(state.last_announced, Some(false));
        assert_eq!(state.last_message_id, Some(NotificationId(10)));
        assert!(!state.should_announce(false));
        assert!(state.should_announce(true));
    }

    #[tokio::test]
    async fn test_context_starts_offline() {
        let context = RelayContext::new();
        let status = context.status().await;
        assert!(!status.is_online);
        assert_eq!(context.announcement().await, AnnouncementState::default());
    }

    #[tokio::test]
    async fn test_update_status_replaces_cache() {
        let context = RelayContext::new();
        context
            .update_status(ServiceStatus::new(true, Some("All good".into())))
            .await;

        let status = context.status().await;
        assert!(status.is_online);
        assert_eq!(status.effective_message(), "All good");
    }
}

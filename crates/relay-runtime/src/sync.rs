//! One read → diff → notify cycle.

use std::sync::Arc;

use relay_models::render_status_payload;
use relay_store::StatusSource;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::context::{AnnouncementState, RelayContext};
use crate::error::Result;
use crate::notifier::{NotificationId, Notifier};

/// Result of a single cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The store held no status record; nothing changed.
    NoRecord,
    /// The cache was refreshed; the channel already shows this state.
    Unchanged,
    /// A new notification was posted.
    Announced(NotificationId),
    /// A notification was due but could not be posted; it is retried on the
    /// next cycle that still differs.
    SendFailed,
}

/// Runs status cycles against a source and a notifier.
pub struct StatusSync {
    source: Arc<dyn StatusSource>,
    notifier: Arc<dyn Notifier>,
    context: Arc<RelayContext>,
    /// Presence value the notifier last accepted.
    applied_presence: Mutex<Option<bool>>,
}

impl StatusSync {
    pub fn new(
        source: Arc<dyn StatusSource>,
        notifier: Arc<dyn Notifier>,
        context: Arc<RelayContext>,
    ) -> Self {
        Self {
            source,
            notifier,
            context,
            applied_presence: Mutex::new(None),
        }
    }

    /// Reflect `is_online` in the bot profile unless it already shows it.
    ///
    /// A failed update is logged and retried on the next call.
    pub async fn apply_presence(&self, is_online: bool) {
        let mut applied = self.applied_presence.lock().await;
        if *applied == Some(is_online) {
            return;
        }
        match self.notifier.set_presence(is_online).await {
            Ok(()) => {
                *applied = Some(is_online);
                debug!(online = is_online, "presence updated");
            }
            Err(e) => warn!(error = %e, online = is_online, "failed to update presence"),
        }
    }

    /// Read the record, refresh the cache, and post a notification if the
    /// availability differs from what was last posted.
    ///
    /// A read failure is returned as an error and leaves all state untouched.
    pub async fn run_cycle(&self) -> Result<CycleOutcome> {
        let Some(status) = self.source.fetch_status().await? else {
            debug!("no status record found");
            return Ok(CycleOutcome::NoRecord);
        };

        let is_online = status.is_online;
        let message = status.message.clone();
        self.context.update_status(status).await;
        info!(online = is_online, "status updated");

        self.apply_presence(is_online).await;

        let mut announcement = self.context.lock_announcement().await;
        if !announcement.should_announce(is_online) {
            debug!("status unchanged; no new post");
            return Ok(CycleOutcome::Unchanged);
        }

        Ok(self
            .announce(&mut announcement, is_online, message.as_deref())
            .await)
    }

    async fn announce(
        &self,
        announcement: &mut AnnouncementState,
        is_online: bool,
        message: Option<&str>,
    ) -> CycleOutcome {
        if let Some(previous) = announcement.last_message_id {
            match self.notifier.delete(previous).await {
                Ok(()) => debug!(message_id = %previous, "old status message deleted"),
                Err(e) => warn!(
                    message_id = %previous,
                    error = %e,
                    "could not delete old status message"
                ),
            }
        }

        let payload = render_status_payload(is_online, message);
        match self.notifier.send(&payload).await {
            Ok(id) => {
                announcement.record(is_online, id);
                info!(message_id = %id, online = is_online, "status message posted");
                CycleOutcome::Announced(id)
            }
            Err(e) => {
                warn!(error = %e, online = is_online, "failed to post status message");
                CycleOutcome::SendFailed
            }
        }
    }
}

//! Fixed-interval status poller.

use std::sync::Arc;
use std::time::Duration;

use relay_models::ConnectionState;
use tokio::sync::watch;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::sync::StatusSync;

/// Runs status cycles while the store is connected.
///
/// Cycles never overlap: each tick awaits its cycle before the next tick is
/// taken, and ticks missed meanwhile are skipped.
pub struct StatusPoller {
    sync: Arc<StatusSync>,
    poll_interval: Duration,
    /// Store reachability published by the connection monitor.
    connection: watch::Receiver<ConnectionState>,
    /// Shutdown signal receiver.
    shutdown: watch::Receiver<bool>,
}

impl StatusPoller {
    /// Creates a new status poller.
    pub fn new(
        sync: Arc<StatusSync>,
        poll_interval: Duration,
        connection: watch::Receiver<ConnectionState>,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            sync,
            poll_interval,
            connection,
            shutdown,
        }
    }

    /// Run until the shutdown signal, pausing while the store is disconnected.
    pub async fn run(&mut self) {
        debug!(
            poll_interval_ms = self.poll_interval.as_millis(),
            "starting status poller"
        );

        while self.wait_for_connection().await {
            info!("starting status polling");

            if !self.poll_while_connected().await {
                break;
            }

            info!("store disconnected; status polling paused");
        }

        debug!("status poller stopped");
    }

    /// Block until the store is connected. Returns false on shutdown.
    async fn wait_for_connection(&mut self) -> bool {
        loop {
            if *self.shutdown.borrow() {
                return false;
            }
            if self.connection.borrow().is_connected() {
                return true;
            }

            tokio::select! {
                changed = self.connection.changed() => {
                    if changed.is_err() {
                        return false;
                    }
                }
                changed = self.shutdown.changed() => {
                    if changed.is_err() {
                        return false;
                    }
                }
            }
        }
    }

    /// Poll immediately and then on every tick. Returns true when the
    /// connection dropped, false on shutdown.
    async fn poll_while_connected(&mut self) -> bool {
        let mut ticker = interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.poll_once().await;
                }
                changed = self.connection.changed() => {
                    if changed.is_err() {
                        return false;
                    }
                    if !self.connection.borrow().is_connected() {
                        return true;
                    }
                }
                changed = self.shutdown.changed() => {
                    if changed.is_err() || *self.shutdown.borrow() {
                        debug!("poller received shutdown signal");
                        return false;
                    }
                }
            }
        }
    }

    async fn poll_once(&self) {
        match self.sync.run_cycle().await {
            Ok(outcome) => debug!(?outcome, "poll cycle complete"),
            Err(e) => warn!(error = %e, "poll failed; retrying next interval"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RelayContext;
    use crate::notifier::{Notifier, RecordingNotifier};
    use relay_models::ServiceStatus;
    use relay_store::{MemoryStatusSource, StatusSource};

    struct Harness {
        source: Arc<MemoryStatusSource>,
        notifier: Arc<RecordingNotifier>,
        connection_tx: watch::Sender<ConnectionState>,
        shutdown_tx: watch::Sender<bool>,
        handle: tokio::task::JoinHandle<()>,
    }

    fn spawn_poller(initial: ConnectionState) -> Harness {
        let source = Arc::new(MemoryStatusSource::with_status(ServiceStatus::new(true, None)));
        let notifier = Arc::new(RecordingNotifier::new());
        let sync = Arc::new(StatusSync::new(
            Arc::clone(&source) as Arc<dyn StatusSource>,
            Arc::clone(&notifier) as Arc<dyn Notifier>,
            RelayContext::shared(),
        ));
        let (connection_tx, connection_rx) = watch::channel(initial);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let mut poller =
            StatusPoller::new(sync, Duration::from_secs(10), connection_rx, shutdown_rx);
        let handle = tokio::spawn(async move {
            poller.run().await;
        });

        Harness {
            source,
            notifier,
            connection_tx,
            shutdown_tx,
            handle,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_polls_immediately_then_on_interval() {
        let h = spawn_poller(ConnectionState::Connected);

        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(h.source.read_count(), 1);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(h.source.read_count(), 2);

        tokio::time::sleep(Duration::from_secs(20)).await;
        assert_eq!(h.source.read_count(), 4);

        // Unchanged status: only the first read posted
        assert_eq!(h.notifier.sent().await.len(), 1);

        h.shutdown_tx.send(true).unwrap();
        h.handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_for_connection() {
        let h = spawn_poller(ConnectionState::Connecting);

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(h.source.read_count(), 0);

        h.connection_tx.send(ConnectionState::Connected).unwrap();
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(h.source.read_count(), 1);

        h.shutdown_tx.send(true).unwrap();
        h.handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_disconnect_pauses_and_reconnect_resumes() {
        let h = spawn_poller(ConnectionState::Connected);
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(h.source.read_count(), 1);

        h.connection_tx.send(ConnectionState::Disconnected).unwrap();
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(h.source.read_count(), 1);

        h.connection_tx.send(ConnectionState::Connected).unwrap();
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(h.source.read_count(), 2);

        h.shutdown_tx.send(true).unwrap();
        h.handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_read_failures_are_retried() {
        let h = spawn_poller(ConnectionState::Connected);
        h.source.set_fail_reads(true);

        tokio::time::sleep(Duration::from_secs(15)).await;
        assert_eq!(h.source.read_count(), 2);
        assert!(h.notifier.sent().await.is_empty());

        h.source.set_fail_reads(false);
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(h.notifier.sent().await.len(), 1);

        h.shutdown_tx.send(true).unwrap();
        h.handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_poller_shutdown() {
        let h = spawn_poller(ConnectionState::Disconnected);

        h.shutdown_tx.send(true).unwrap();
        let result = tokio::time::timeout(Duration::from_millis(100), h.handle).await;
        assert!(result.is_ok(), "poller should stop after shutdown signal");
    }
}

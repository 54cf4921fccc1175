//! Store connection monitor.

use std::sync::Arc;
use std::time::Duration;

use relay_models::ConnectionState;
use relay_store::StatusSource;
use tokio::sync::watch;
use tokio::time::{interval, timeout, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Probes the status store and publishes its reachability.
///
/// Only transitions are published, so subscribers wake once per change.
pub struct ConnectionMonitor {
    source: Arc<dyn StatusSource>,
    state: Arc<watch::Sender<ConnectionState>>,
    ping_interval: Duration,
    ping_timeout: Duration,
    shutdown: watch::Receiver<bool>,
}

impl ConnectionMonitor {
    pub fn new(
        source: Arc<dyn StatusSource>,
        state: Arc<watch::Sender<ConnectionState>>,
        ping_interval: Duration,
        ping_timeout: Duration,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            source,
            state,
            ping_interval,
            ping_timeout,
            shutdown,
        }
    }

    /// Probe on every interval until the shutdown signal.
    pub async fn run(&mut self) {
        let mut ticker = interval(self.ping_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        debug!(
            ping_interval_ms = self.ping_interval.as_millis(),
            "starting connection monitor"
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.ping_once().await;
                }
                changed = self.shutdown.changed() => {
                    if changed.is_err() || *self.shutdown.borrow() {
                        debug!("monitor received shutdown signal");
                        break;
                    }
                }
            }
        }

        debug!("connection monitor stopped");
    }

    /// Ping the store once and publish the result if it changed.
    pub async fn ping_once(&self) -> ConnectionState {
        let next = match timeout(self.ping_timeout, self.source.ping()).await {
            Ok(Ok(())) => ConnectionState::Connected,
            Ok(Err(e)) => {
                debug!(error = %e, "store ping failed");
                ConnectionState::Disconnected
            }
            Err(_) => {
                debug!(timeout_ms = self.ping_timeout.as_millis(), "store ping timed out");
                ConnectionState::Disconnected
            }
        };

        self.state.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            match next {
                ConnectionState::Connected => info!("connected to status store"),
                _ => warn!("status store connection lost"),
            }
            *current = next;
            true
        });

        next
    }
}

//! Main runtime manager.

use std::sync::Arc;

use relay_models::ConnectionState;
use relay_store::StatusSource;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::RelayConfig;
use crate::context::RelayContext;
use crate::error::{Result, RuntimeError};
use crate::monitor::ConnectionMonitor;
use crate::notifier::Notifier;
use crate::poller::StatusPoller;
use crate::sync::StatusSync;

/// Main runtime manager combining the connection monitor and the poller.
pub struct RelayRuntime {
    config: RelayConfig,
    source: Arc<dyn StatusSource>,
    notifier: Arc<dyn Notifier>,
    context: Arc<RelayContext>,
    /// Store reachability, published by the monitor.
    connection_tx: Arc<watch::Sender<ConnectionState>>,
    /// Handles to the monitor and poller tasks.
    handles: Vec<JoinHandle<()>>,
    /// Shutdown signal sender.
    shutdown_tx: watch::Sender<bool>,
    /// Shutdown signal receiver (for cloning to tasks).
    shutdown_rx: watch::Receiver<bool>,
    /// Whether the runtime has been started.
    started: bool,
}

impl RelayRuntime {
    /// Create a new runtime. Nothing runs until [`RelayRuntime::start`].
    pub fn new(
        config: RelayConfig,
        context: Arc<RelayContext>,
        source: Arc<dyn StatusSource>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let (connection_tx, _) = watch::channel(ConnectionState::Connecting);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Self {
            config,
            source,
            notifier,
            context,
            connection_tx: Arc::new(connection_tx),
            handles: Vec::new(),
            shutdown_tx,
            shutdown_rx,
            started: false,
        }
    }

    /// Start monitoring the store and polling the status record.
    pub async fn start(&mut self) -> Result<()> {
        if self.started {
            return Err(RuntimeError::AlreadyStarted);
        }

        info!(
            poll_interval_secs = self.config.poll_interval.as_secs(),
            "starting relay runtime"
        );

        let mut monitor = ConnectionMonitor::new(
            Arc::clone(&self.source),
            Arc::clone(&self.connection_tx),
            self.config.ping_interval,
            self.config.ping_timeout,
            self.shutdown_rx.clone(),
        );
        self.handles.push(tokio::spawn(async move {
            monitor.run().await;
        }));

        let sync = Arc::new(StatusSync::new(
            Arc::clone(&self.source),
            Arc::clone(&self.notifier),
            Arc::clone(&self.context),
        ));

        // Profile reflects the cache from the start, before the first read
        let initial = self.context.status().await;
        sync.apply_presence(initial.is_online).await;

        let mut poller = StatusPoller::new(
            sync,
            self.config.poll_interval,
            self.connection_tx.subscribe(),
            self.shutdown_rx.clone(),
        );
        self.handles.push(tokio::spawn(async move {
            poller.run().await;
        }));

        self.started = true;

        debug!("relay runtime started");

        Ok(())
    }

    /// Stop the runtime gracefully.
    pub async fn shutdown(&mut self) -> Result<()> {
        if !self.started {
            return Err(RuntimeError::NotStarted);
        }

        info!("shutting down relay runtime");

        self.shutdown_tx.send(true).map_err(|e| {
            RuntimeError::Shutdown(format!("failed to send shutdown signal: {}", e))
        })?;

        for handle in self.handles.drain(..) {
            handle
                .await
                .map_err(|e| RuntimeError::Shutdown(format!("task panicked: {}", e)))?;
        }

        self.started = false;

        info!("relay runtime stopped");

        Ok(())
    }

    /// Subscribe to store reachability updates.
    pub fn connection(&self) -> watch::Receiver<ConnectionState> {
        self.connection_tx.subscribe()
    }

    /// The shared context.
    pub fn context(&self) -> Arc<RelayContext> {
        Arc::clone(&self.context)
    }

    /// Check if the runtime has been started.
    pub fn is_started(&self) -> bool {
        self.started
    }
}

impl Drop for RelayRuntime {
    fn drop(&mut self) {
        // Send shutdown signal if still running
        if self.started {
            let _ = self.shutdown_tx.send(true);
        }
    }
}

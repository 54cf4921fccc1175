//! In-process status source.
//!
//! Holds the record in memory and can be told to fail reads or pings, so
//! the runtime can be exercised without a database.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use relay_models::ServiceStatus;
use tokio::sync::RwLock;

use crate::error::{Result, StoreError};
use crate::source::StatusSource;

/// A status source backed by memory.
#[derive(Debug, Default)]
pub struct MemoryStatusSource {
    current: RwLock<Option<ServiceStatus>>,
    /// Values handed out by successive reads before falling back to `current`.
    script: RwLock<VecDeque<ServiceStatus>>,
    fail_reads: AtomicBool,
    unreachable: AtomicBool,
    reads: AtomicUsize,
}

impl MemoryStatusSource {
    /// Creates an empty source (reads return `None`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source holding the given record.
    pub fn with_status(status: ServiceStatus) -> Self {
        Self {
            current: RwLock::new(Some(status)),
            ..Self::default()
        }
    }

    /// Replaces the stored record.
    pub async fn set(&self, status: ServiceStatus) {
        *self.current.write().await = Some(status);
    }

    /// Removes the stored record.
    pub async fn clear(&self) {
        *self.current.write().await = None;
    }

    /// Queues records returned by the next reads, in order. Each scripted
    /// read also becomes the stored record.
    pub async fn push_script(&self, statuses: impl IntoIterator<Item = ServiceStatus>) {
        self.script.write().await.extend(statuses);
    }

    /// Makes subsequent reads fail.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes subsequent pings (and reads) fail.
    pub fn set_reachable(&self, reachable: bool) {
        self.unreachable.store(!reachable, Ordering::SeqCst);
    }

    /// Number of read attempts so far, failed ones included.
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatusSource for MemoryStatusSource {
    async fn fetch_status(&self) -> Result<Option<ServiceStatus>> {
        self.reads.fetch_add(1, Ordering::SeqCst);

        if self.unreachable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("store unreachable".into()));
        }
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("read failed".into()));
        }

        if let Some(next) = self.script.write().await.pop_front() {
            *self.current.write().await = Some(next.clone());
            return Ok(Some(next));
        }

        Ok(self.current.read().await.clone())
    }

    async fn ping(&self) -> Result<()> {
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("store unreachable".into()));
        }
        Ok(())
    }
}

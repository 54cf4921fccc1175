//! The read seam between the runtime and a status store.

use async_trait::async_trait;
use relay_models::ServiceStatus;

use crate::error::Result;

/// A read-only source of the service status record.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch the status record, or `None` if the store holds none.
    async fn fetch_status(&self) -> Result<Option<ServiceStatus>>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<()>;
}

//! Status store access for Status Relay.
//!
//! The status record lives in a single-document collection written by an
//! external service. This crate only reads it:
//! - `StatusSource` - the read seam used by the runtime
//! - `MongoStatusStore` - the MongoDB implementation
//! - `MemoryStatusSource` - an in-process source for tests and dry runs
//!
//! # Example
//!
//! ```no_run
//! use relay_store::{MongoStatusStore, StatusSource, StoreConfig};
//!
//! # async fn run() -> relay_store::Result<()> {
//! let config = StoreConfig::new("mongodb://localhost:27017/status");
//! let store = MongoStatusStore::connect(&config).await?;
//!
//! if let Some(status) = store.fetch_status().await? {
//!     println!("online: {}", status.is_online);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod memory;
pub mod mongo;
pub mod source;

pub use config::StoreConfig;
pub use document::StatusDocument;
pub use error::{Result, StoreError};
pub use memory::MemoryStatusSource;
pub use mongo::MongoStatusStore;
pub use source::StatusSource;

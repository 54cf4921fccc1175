//! Status synchronization runtime for Status Relay.
//!
//! This crate owns the poll → diff → notify loop:
//! - `RelayContext` - the status cache and announcement state shared with
//!   every handler
//! - `StatusSync` - one read/diff/notify cycle
//! - `StatusPoller` - runs cycles on a fixed interval while the store is up
//! - `ConnectionMonitor` - pings the store and publishes its reachability
//! - `RelayRuntime` - main entry point combining monitor and poller
//!
//! # Example
//!
//! ```ignore
//! use relay_runtime::{RelayConfig, RelayContext, RelayRuntime};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let context = RelayContext::shared();
//!     let mut runtime = RelayRuntime::new(RelayConfig::default(), context, source, notifier);
//!
//!     runtime.start().await?;
//!     tokio::signal::ctrl_c().await?;
//!     runtime.shutdown().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Key Concepts
//!
//! ## Cache vs. announcement
//!
//! The cache is overwritten on every successful read so that command
//! handlers always see fresh data. The announcement state only moves when a
//! notification was actually posted, so a failed send is retried on the
//! next poll that still differs from what the channel shows.
//!
//! ## Connection gating
//!
//! The poller only runs while the monitor reports the store as connected.
//! A disconnect pauses the schedule; the next successful ping resumes it
//! with an immediate cycle.

pub mod config;
pub mod context;
pub mod error;
pub mod monitor;
pub mod notifier;
pub mod poller;
pub mod runtime;
pub mod sync;

pub use config::RelayConfig;
pub use context::{AnnouncementState, RelayContext};
pub use error::{Result, RuntimeError};
pub use monitor::ConnectionMonitor;
pub use notifier::{NotificationId, Notifier, RecordingNotifier};
pub use poller::StatusPoller;
pub use runtime::RelayRuntime;
pub use sync::{CycleOutcome, StatusSync};

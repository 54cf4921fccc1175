//! HTTP surface for Status Relay.
//!
//! A single unauthenticated health endpoint used by the hosting platform's
//! liveness checks:
//! - `GET /health` - process, bot, service and database status
//!
//! # Example
//!
//! ```ignore
//! use relay_api::{ApiConfig, AppState, serve};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = AppState::new(ApiConfig::default(), context, runtime.connection());
//!     serve(state, shutdown_signal).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod types;

pub use config::ApiConfig;
pub use error::ApiError;
pub use router::{create_router, serve};
pub use state::AppState;

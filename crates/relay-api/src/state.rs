//! Application state shared across handlers.

use std::sync::Arc;

use relay_models::ConnectionState;
use relay_runtime::RelayContext;
use tokio::sync::{watch, RwLock};

use crate::config::ApiConfig;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: Arc<ApiConfig>,
    /// Relay context holding the cached service status.
    pub context: Arc<RelayContext>,
    /// Store reachability published by the runtime.
    connection: watch::Receiver<ConnectionState>,
    /// Bot display name once logged in.
    bot_identity: Arc<RwLock<Option<String>>>,
}

impl AppState {
    /// Creates a new AppState.
    pub fn new(
        config: ApiConfig,
        context: Arc<RelayContext>,
        connection: watch::Receiver<ConnectionState>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            context,
            connection,
            bot_identity: Arc::new(RwLock::new(None)),
        }
    }

    /// Current store reachability.
    pub fn connection_state(&self) -> ConnectionState {
        *self.connection.borrow()
    }

    /// Records the bot's display name after login.
    pub async fn set_bot_identity(&self, identity: impl Into<String>) {
        *self.bot_identity.write().await = Some(identity.into());
    }

    /// The bot's display name, if logged in.
    pub async fn bot_identity(&self) -> Option<String> {
        self.bot_identity.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_app_state_bot_identity() {
        let (_tx, rx) = watch::channel(ConnectionState::Connecting);
        let state = AppState::new(ApiConfig::default(), RelayContext::shared(), rx);

        assert!(state.bot_identity().await.is_none());

        // Clones share the identity
        let clone = state.clone();
        clone.set_bot_identity("@status_bot").await;
        assert_eq!(state.bot_identity().await.as_deref(), Some("@status_bot"));
    }

    #[tokio::test]
    async fn test_app_state_connection_follows_channel() {
        let (tx, rx) = watch::channel(ConnectionState::Connecting);
        let state = AppState::new(ApiConfig::default(), RelayContext::shared(), rx);
        assert_eq!(state.connection_state(), ConnectionState::Connecting);

        tx.send(ConnectionState::Connected).unwrap();
        assert_eq!(state.connection_state(), ConnectionState::Connected);
    }
}

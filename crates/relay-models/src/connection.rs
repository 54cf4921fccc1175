//! Store connection state.

use serde::{Deserialize, Serialize};

/// Reachability of the status store, as last observed by the connection monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    /// No ping has completed yet.
    #[default]
    Connecting,
    /// The last ping succeeded.
    Connected,
    /// The last ping failed.
    Disconnected,
}

impl ConnectionState {
    /// Returns true if the store is reachable.
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected)
    }

    /// Label reported by the health endpoint.
    pub fn label(&self) -> &'static str {
        if self.is_connected() {
            "connected"
        } else {
            "disconnected"
        }
    }
}

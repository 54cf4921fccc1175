//! Runtime configuration.

use std::time::Duration;

/// Configuration for the relay runtime.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// How often to read the status record while connected.
    pub poll_interval: Duration,
    /// How often to ping the store.
    pub ping_interval: Duration,
    /// How long a single ping may take before it counts as a failure.
    pub ping_timeout: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(10),
            ping_interval: Duration::from_secs(5),
            ping_timeout: Duration::from_secs(5),
        }
    }
}

impl RelayConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the poll interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Sets the ping interval.
    pub fn with_ping_interval(mut self, interval: Duration) -> Self {
        self.ping_interval = interval;
        self
    }

    /// Sets the ping timeout.
    pub fn with_ping_timeout(mut self, timeout: Duration) -> Self {
        self.ping_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RelayConfig::default();

        assert_eq!(config.poll_interval, Duration::from_secs(10));
        assert_eq!(config.ping_interval, Duration::from_secs(5));
        assert_eq!(config.ping_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_config_builder() {
        let config = RelayConfig::new()
            .with_poll_interval(Duration::from_secs(30))
            .with_ping_interval(Duration::from_secs(2))
            .with_ping_timeout(Duration::from_millis(500));

        assert_eq!(config.poll_interval, Duration::from_secs(30));
        assert_eq!(config.ping_interval, Duration::from_secs(2));
        assert_eq!(config.ping_timeout, Duration::from_millis(500));
    }
}

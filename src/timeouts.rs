//! Timeout configuration for feed client operations.
//!
//! Provides centralized timeout management for the WebSocket connection
//! and its keepalive probing.

use std::time::Duration;

/// Timeout configuration for feed client operations.
///
/// All timeout values have sensible defaults.
///
/// # Examples
///
/// ```rust
/// use ledger_link::LedgerLinkTimeouts;
/// use std::time::Duration;
///
/// // Use defaults (recommended for most cases)
/// let timeouts = LedgerLinkTimeouts::default();
///
/// // Custom timeouts for high-latency environments
/// let timeouts = LedgerLinkTimeouts::builder()
///     .connection_timeout(Duration::from_secs(60))
///     .keepalive_interval(Duration::from_secs(30))
///     .build();
///
/// // Aggressive timeouts for local development
/// let timeouts = LedgerLinkTimeouts::fast();
/// ```
#[derive(Debug, Clone)]
pub struct LedgerLinkTimeouts {
    /// Timeout for establishing the connection (TCP + TLS + WebSocket handshake).
    /// Set to 0 to wait indefinitely.
    /// Default: 10 seconds
    pub connection_timeout: Duration,

    /// Keep-alive ping interval for the feed connection.
    /// Set to 0 to disable keep-alive pings.
    /// Default: 10 seconds
    pub keepalive_interval: Duration,

    /// Maximum time to wait for a Pong response after sending a keepalive Ping.
    /// If no Pong (or any other frame) arrives within this window, the
    /// connection is considered dead and will be torn down / reconnected.
    /// Set to 0 to disable pong timeout checking.
    /// Default: 5 seconds
    pub pong_timeout: Duration,
}

impl Default for LedgerLinkTimeouts {
    fn default() -> Self {
        Self {
            connection_timeout: Duration::from_secs(10),
            keepalive_interval: Duration::from_secs(10),
            pong_timeout: Duration::from_secs(5),
        }
    }
}

impl LedgerLinkTimeouts {
    /// Create a new builder for custom timeout configuration.
    pub fn builder() -> LedgerLinkTimeoutsBuilder {
        LedgerLinkTimeoutsBuilder::new()
    }

    /// Create timeouts optimized for fast local development.
    pub fn fast() -> Self {
        Self {
            connection_timeout: Duration::from_secs(2),
            keepalive_interval: Duration::from_secs(5),
            pong_timeout: Duration::from_secs(2),
        }
    }

    /// Check if a duration represents "no timeout" (zero or very large).
    pub fn is_no_timeout(duration: Duration) -> bool {
        duration.is_zero() || duration > Duration::from_secs(86400 * 365) // > 1 year
    }
}

/// Builder for creating custom [`LedgerLinkTimeouts`] configurations.
#[derive(Debug, Clone)]
pub struct LedgerLinkTimeoutsBuilder {
    timeouts: LedgerLinkTimeouts,
}

impl LedgerLinkTimeoutsBuilder {
    fn new() -> Self {
        Self {
            timeouts: LedgerLinkTimeouts::default(),
        }
    }

    /// Set the connection timeout (TCP + TLS + WebSocket handshake).
    pub fn connection_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.connection_timeout = timeout;
        self
    }

    /// Set the connection timeout in seconds.
    pub fn connection_timeout_secs(self, secs: u64) -> Self {
        self.connection_timeout(Duration::from_secs(secs))
    }

    /// Set the keepalive ping interval.
    /// Set to 0 to disable keepalive pings.
    pub fn keepalive_interval(mut self, interval: Duration) -> Self {
        self.timeouts.keepalive_interval = interval;
        self
    }

    /// Set the keepalive ping interval in seconds.
    /// Set to 0 to disable keepalive pings.
    pub fn keepalive_interval_secs(self, secs: u64) -> Self {
        self.keepalive_interval(Duration::from_secs(secs))
    }

    /// Set the pong timeout (max wait for Pong after sending a Ping).
    /// Set to 0 to disable pong timeout checking.
    pub fn pong_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.pong_timeout = timeout;
        self
    }

    /// Set the pong timeout in seconds.
    /// Set to 0 to disable pong timeout checking.
    pub fn pong_timeout_secs(self, secs: u64) -> Self {
        self.pong_timeout(Duration::from_secs(secs))
    }

    /// Build the timeout configuration.
    pub fn build(self) -> LedgerLinkTimeouts {
        self.timeouts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeouts() {
        let timeouts = LedgerLinkTimeouts::default();
        assert_eq!(timeouts.connection_timeout, Duration::from_secs(10));
        assert_eq!(timeouts.keepalive_interval, Duration::from_secs(10));
        assert_eq!(timeouts.pong_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_builder() {
        let timeouts = LedgerLinkTimeouts::builder()
            .connection_timeout_secs(60)
            .keepalive_interval_secs(30)
            .pong_timeout_secs(10)
            .build();

        assert_eq!(timeouts.connection_timeout, Duration::from_secs(60));
        assert_eq!(timeouts.keepalive_interval, Duration::from_secs(30));
        assert_eq!(timeouts.pong_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_fast_preset() {
        let timeouts = LedgerLinkTimeouts::fast();
        assert!(timeouts.connection_timeout <= Duration::from_secs(5));
        assert!(timeouts.keepalive_interval <= Duration::from_secs(10));
    }

    #[test]
    fn test_is_no_timeout() {
        assert!(LedgerLinkTimeouts::is_no_timeout(Duration::ZERO));
        assert!(!LedgerLinkTimeouts::is_no_timeout(Duration::from_secs(1)));
        assert!(!LedgerLinkTimeouts::is_no_timeout(Duration::from_secs(3600)));
    }
}

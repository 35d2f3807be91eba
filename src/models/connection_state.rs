use std::fmt;

/// Health of the feed connection, as observed by the client.
///
/// Exactly one state is active at any time. The nominal cycle is
/// `Connecting → Connected → Disconnected → Connecting → …`;
/// [`AccessDenied`](ConnectionState::AccessDenied) is terminal for the
/// lifetime of the current `start()` invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectionState {
    /// A connection attempt is in flight (transport dial or handshake).
    Connecting,
    /// The server has acknowledged the feed handshake.
    Connected,
    /// No live connection. Either the client has not started, or the last
    /// connection was lost and a reconnect may be pending.
    #[default]
    Disconnected,
    /// The server rejected the credential. No reconnect is scheduled until
    /// the next explicit `start()`.
    AccessDenied,
}

impl ConnectionState {
    /// Whether the feed handshake has been acknowledged.
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }

    /// Whether this state has no outgoing transition other than a fresh `start()`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::AccessDenied)
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connecting => write!(f, "connecting"),
            Self::Connected => write!(f, "connected"),
            Self::Disconnected => write!(f, "disconnected"),
            Self::AccessDenied => write!(f, "access denied"),
        }
    }
}

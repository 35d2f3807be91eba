//! Error types for ledger-link

use thiserror::Error;

/// Errors that can occur in feed client operations
#[derive(Error, Debug)]
pub enum LedgerLinkError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("WebSocket error: {0}")]
    WebSocketError(String),

    #[error("Timeout error: {0}")]
    TimeoutError(String),
}

/// Result type for feed client operations
pub type Result<T> = std::result::Result<T, LedgerLinkError>;

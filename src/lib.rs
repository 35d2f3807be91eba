//! # ledger-link: Ledger journal-entry feed client
//!
//! Client library for subscribing to a Ledger accounting server's
//! real-time journal-entry feed over WebSocket.
//!
//! ## Features
//!
//! - **Live journal entries**: server-pushed notifications for every posted entry
//! - **Bounded history**: newest-first buffer of the last 100 entries (configurable)
//! - **Automatic reconnection**: exponential backoff from 1s up to 30s,
//!   reset on every successful handshake
//! - **Terminal access denial**: a close with code 4003 stops retrying until
//!   the next explicit `start()`
//! - **Non-blocking API**: `start()`/`stop()` return immediately; connection
//!   health is observed through a state value or a watch channel
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ledger_link::{ConnectionState, FeedClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FeedClient::builder()
//!         .base_url("http://localhost:3000")
//!         .access_token("api-token")
//!         .build()?;
//!
//!     client.start();
//!
//!     let mut status = client.watch_status();
//!     status.wait_for(|s| *s == ConnectionState::Connected).await?;
//!
//!     // Render the latest entries, newest first
//!     for entry in client.events() {
//!         println!("{} — {}", entry.entry_number, entry.description);
//!     }
//!
//!     client.stop();
//!     Ok(())
//! }
//! ```
//!
//! ## Lifecycle hooks
//!
//! ```rust,no_run
//! use ledger_link::{EventHandlers, FeedClient};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let handlers = EventHandlers::new()
//!     .on_connect(|| println!("feed connected"))
//!     .on_disconnect(|reason| println!("feed disconnected: {}", reason))
//!     .on_entry(|entry| println!("posted: {}", entry.entry_number));
//!
//! let client = FeedClient::builder()
//!     .base_url("http://localhost:3000")
//!     .access_token("api-token")
//!     .event_handlers(handlers)
//!     .build()?;
//! # Ok(())
//! # }
//! ```

mod backoff;
pub mod client;
mod connection;
pub mod error;
pub mod event_handlers;
pub mod models;
pub mod timeouts;

// Re-export main types for convenience
pub use client::{FeedClient, FeedClientBuilder};
pub use error::{LedgerLinkError, Result};
pub use event_handlers::{ConnectionError, DisconnectReason, EventHandlers};
pub use models::{ConnectionState, EventBuffer, FeedOptions, JournalEntry, JournalLine, ServerMessage};
pub use timeouts::LedgerLinkTimeouts;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Main feed client with builder pattern.
//!
//! Provides the primary interface for subscribing to a Ledger server's
//! real-time journal-entry feed.

use crate::{
    connection::{resolve_feed_url, FeedCmd, FeedTask},
    error::{LedgerLinkError, Result},
    event_handlers::EventHandlers,
    models::{ConnectionState, EventBuffer, FeedOptions, JournalEntry},
    timeouts::LedgerLinkTimeouts,
};
use std::sync::{Arc, Mutex, RwLock};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Capacity of the command channel to the background task.  Only shutdown
/// commands travel on it, so a small buffer is plenty.
const CMD_CHANNEL_CAPACITY: usize = 8;

/// Client for the real-time journal-entry feed.
///
/// Use [`FeedClient::builder`] to construct instances with custom
/// configuration, then call [`start`](FeedClient::start) from within a
/// tokio runtime. The connection is owned by a background task;
/// [`status`](FeedClient::status) and [`events`](FeedClient::events)
/// observe it without blocking.
///
/// # Examples
///
/// ```rust,no_run
/// use ledger_link::FeedClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = FeedClient::builder()
///     .base_url("http://localhost:3000")
///     .access_token("api-token")
///     .build()?;
///
/// client.start();
///
/// // ... later, from the UI refresh path:
/// println!("feed is {}", client.status());
/// for entry in client.events() {
///     println!("{} {}", entry.entry_number, entry.description);
/// }
///
/// client.stop();
/// # Ok(())
/// # }
/// ```
pub struct FeedClient {
    base_url: String,
    access_token: Option<String>,
    options: FeedOptions,
    timeouts: LedgerLinkTimeouts,
    event_handlers: EventHandlers,
    status_tx: Arc<watch::Sender<ConnectionState>>,
    status_rx: watch::Receiver<ConnectionState>,
    buffer: Arc<RwLock<EventBuffer>>,
    runner: Mutex<Option<FeedRunner>>,
}

/// Handle to a running background feed task.
struct FeedRunner {
    cmd_tx: mpsc::Sender<FeedCmd>,
    task: JoinHandle<()>,
}

impl FeedClient {
    /// Create a new builder for configuring the client
    pub fn builder() -> FeedClientBuilder {
        FeedClientBuilder::new()
    }

    /// Begin (or resume) the feed subscription.
    ///
    /// Returns immediately; connection progress is observable through
    /// [`status`](FeedClient::status). Idempotent — calling while the feed
    /// is already running has no additional effect. When no access token
    /// is configured, no connection is attempted and the status stays
    /// [`Disconnected`](ConnectionState::Disconnected).
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self) {
        let mut runner = self.runner.lock().unwrap();
        if let Some(existing) = runner.as_ref() {
            if !existing.task.is_finished() {
                log::debug!("[ledger-link] start() called while feed already running");
                return;
            }
        }

        let token = match &self.access_token {
            Some(token) => token.clone(),
            None => {
                log::debug!("[ledger-link] No access token configured, feed stays disconnected");
                return;
            },
        };

        let feed_url = match resolve_feed_url(&self.base_url, &token) {
            Ok(url) => url,
            Err(e) => {
                // build() validated the base URL, so this is unreachable in practice
                log::error!("Failed to resolve feed URL: {}", e);
                return;
            },
        };

        let (cmd_tx, cmd_rx) = mpsc::channel(CMD_CHANNEL_CAPACITY);
        let task = FeedTask::new(
            feed_url,
            self.options.clone(),
            self.timeouts.clone(),
            self.event_handlers.clone(),
            Arc::clone(&self.status_tx),
            Arc::clone(&self.buffer),
            cmd_rx,
        );
        let handle = tokio::spawn(task.run());
        *runner = Some(FeedRunner {
            cmd_tx,
            task: handle,
        });
    }

    /// Stop the feed subscription.
    ///
    /// Cancels any pending reconnect timer, tears down a live transport,
    /// and suppresses all further status transitions and callbacks. The
    /// status is left at whatever it was at the moment of the call.
    /// Idempotent and safe to call in any state, including mid-handshake.
    ///
    /// The event buffer is retained; a later [`start`](FeedClient::start)
    /// resumes with history intact and a fresh backoff schedule.
    pub fn stop(&self) {
        let mut runner = self.runner.lock().unwrap();
        if let Some(running) = runner.take() {
            log::debug!("[ledger-link] Stopping feed");
            let _ = running.cmd_tx.try_send(FeedCmd::Shutdown);
        }
    }

    /// Current connection state.
    pub fn status(&self) -> ConnectionState {
        *self.status_rx.borrow()
    }

    /// Whether the feed handshake has been acknowledged.
    pub fn is_connected(&self) -> bool {
        self.status().is_connected()
    }

    /// Whether a background feed task is currently running.
    pub fn is_running(&self) -> bool {
        let runner = self.runner.lock().unwrap();
        runner.as_ref().is_some_and(|r| !r.task.is_finished())
    }

    /// A watch receiver for observing status transitions.
    ///
    /// ```rust,no_run
    /// # async fn example(client: &ledger_link::FeedClient) {
    /// use ledger_link::ConnectionState;
    ///
    /// let mut status = client.watch_status();
    /// let _ = status.wait_for(|s| *s == ConnectionState::Connected).await;
    /// # }
    /// ```
    pub fn watch_status(&self) -> watch::Receiver<ConnectionState> {
        self.status_rx.clone()
    }

    /// Snapshot of the buffered journal entries, newest-first.
    pub fn events(&self) -> Vec<JournalEntry> {
        self.buffer.read().unwrap().snapshot()
    }

    /// The most recently received journal entry, if any.
    pub fn latest(&self) -> Option<JournalEntry> {
        self.buffer.read().unwrap().latest().cloned()
    }

    /// Number of journal entries currently buffered.
    pub fn event_count(&self) -> usize {
        self.buffer.read().unwrap().len()
    }

    /// Get the configured feed options
    pub fn feed_options(&self) -> &FeedOptions {
        &self.options
    }

    /// Get the configured timeouts
    pub fn timeouts(&self) -> &LedgerLinkTimeouts {
        &self.timeouts
    }
}

impl Drop for FeedClient {
    fn drop(&mut self) {
        // Best-effort shutdown signal.
        if let Ok(mut runner) = self.runner.lock() {
            if let Some(running) = runner.take() {
                let _ = running.cmd_tx.try_send(FeedCmd::Shutdown);
            }
        }
    }
}

/// Builder for configuring [`FeedClient`] instances.
pub struct FeedClientBuilder {
    base_url: Option<String>,
    access_token: Option<String>,
    options: FeedOptions,
    timeouts: LedgerLinkTimeouts,
    event_handlers: EventHandlers,
}

impl FeedClientBuilder {
    fn new() -> Self {
        Self {
            base_url: None,
            access_token: None,
            options: FeedOptions::default(),
            timeouts: LedgerLinkTimeouts::default(),
            event_handlers: EventHandlers::default(),
        }
    }

    /// Set the base URL for the Ledger server
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the access token used to authenticate the feed.
    ///
    /// Without a token the client builds fine but never attempts a
    /// connection; [`start`](FeedClient::start) leaves the status at
    /// `Disconnected`.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set reconnection and buffering options
    pub fn options(mut self, options: FeedOptions) -> Self {
        self.options = options;
        self
    }

    /// Set timeout configuration for the feed connection
    pub fn timeouts(mut self, timeouts: LedgerLinkTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Set connection lifecycle event handlers
    pub fn event_handlers(mut self, handlers: EventHandlers) -> Self {
        self.event_handlers = handlers;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<FeedClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| LedgerLinkError::ConfigurationError("base_url is required".into()))?;

        // Validate the base URL up front — the background task has no
        // error channel back to the caller.
        resolve_feed_url(&base_url, self.access_token.as_deref().unwrap_or(""))?;

        if self.options.buffer_capacity == 0 {
            return Err(LedgerLinkError::ConfigurationError(
                "buffer_capacity must be greater than zero".into(),
            ));
        }

        let (status_tx, status_rx) = watch::channel(ConnectionState::Disconnected);
        let buffer = Arc::new(RwLock::new(EventBuffer::new(self.options.buffer_capacity)));

        Ok(FeedClient {
            base_url,
            access_token: self.access_token,
            options: self.options,
            timeouts: self.timeouts,
            event_handlers: self.event_handlers,
            status_tx: Arc::new(status_tx),
            status_rx,
            buffer,
            runner: Mutex::new(None),
        })
    }
}

#![allow(dead_code)]
//! Shared helpers for ledger-link integration tests.
//!
//! Provides an in-process mock feed server. Each accepted WebSocket
//! connection plays a per-connection script of [`Step`]s, then holds the
//! connection open until the client goes away.

use futures_util::{SinkExt, StreamExt};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;
use tokio_tungstenite::tungstenite::protocol::{CloseFrame, Message};

/// One scripted action on a mock feed connection.
#[derive(Debug, Clone)]
pub enum Step {
    /// Send the `connection_established` acknowledgment.
    Established,
    /// Send a `journal_entry_posted` frame for an entry with this id.
    Entry(&'static str),
    /// Send a raw text frame verbatim.
    Raw(String),
    /// Pause between frames.
    Wait(u64),
    /// Send a close frame with the given code, then end the connection.
    CloseWith(u16, &'static str),
    /// Drop the TCP connection without a close handshake.
    Abort,
}

/// In-process WebSocket server playing one script per accepted connection.
///
/// Connections beyond the scripted ones are accepted (and counted) but
/// receive no frames.
pub struct MockFeedServer {
    addr: SocketAddr,
    connections: Arc<AtomicUsize>,
    accept_task: JoinHandle<()>,
}

impl MockFeedServer {
    pub async fn start(scripts: Vec<Vec<Step>>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock feed server");
        let addr = listener.local_addr().expect("mock feed server addr");
        let connections = Arc::new(AtomicUsize::new(0));
        let connections_clone = Arc::clone(&connections);

        let accept_task = tokio::spawn(async move {
            let mut next = 0usize;
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    return;
                };
                let script = scripts.get(next).cloned().unwrap_or_default();
                next += 1;
                connections_clone.fetch_add(1, Ordering::SeqCst);
                tokio::spawn(serve_connection(stream, script));
            }
        });

        Self {
            addr,
            connections,
            accept_task,
        }
    }

    /// Base URL for a `FeedClient` pointed at this server.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of WebSocket connections accepted so far.
    pub fn connection_count(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }
}

impl Drop for MockFeedServer {
    fn drop(&mut self) {
        self.accept_task.abort();
    }
}

async fn serve_connection(stream: TcpStream, script: Vec<Step>) {
    let Ok(mut ws) = accept_async(stream).await else {
        return;
    };

    for step in script {
        match step {
            Step::Established => {
                let frame = json!({
                    "type": "connection_established",
                    "message": "feed ready"
                })
                .to_string();
                if ws.send(Message::text(frame)).await.is_err() {
                    return;
                }
            },
            Step::Entry(id) => {
                if ws.send(Message::text(entry_frame(id))).await.is_err() {
                    return;
                }
            },
            Step::Raw(text) => {
                if ws.send(Message::text(text)).await.is_err() {
                    return;
                }
            },
            Step::Wait(ms) => tokio::time::sleep(Duration::from_millis(ms)).await,
            Step::CloseWith(code, reason) => {
                let _ = ws
                    .send(Message::Close(Some(CloseFrame {
                        code: CloseCode::from(code),
                        reason: reason.into(),
                    })))
                    .await;
                // Drain until the peer acknowledges the close
                while let Some(Ok(_)) = ws.next().await {}
                return;
            },
            Step::Abort => return,
        }
    }

    // Script exhausted — hold the connection open (answering pings) until
    // the client disconnects.
    while let Some(Ok(_)) = ws.next().await {}
}

/// A well-formed `journal_entry_posted` frame for an entry with this id.
pub fn entry_frame(id: &str) -> String {
    json!({
        "type": "journal_entry_posted",
        "entry": {
            "id": id,
            "entry_number": format!("JE-{}", id),
            "date": "2025-07-01",
            "description": format!("Test entry {}", id),
            "status": "posted",
            "business_name": "Acme Widgets Ltd",
            "contact_name": "Jordan Li",
            "lines": [
                {
                    "account_code": "1000",
                    "account_name": "Cash",
                    "debit": "100.00",
                    "credit": "0.00"
                },
                {
                    "account_code": "4000",
                    "account_name": "Revenue",
                    "debit": "0.00",
                    "credit": "100.00"
                }
            ],
            "created_by": "user-1",
            "created_at": "2025-07-01T12:00:00Z"
        }
    })
    .to_string()
}

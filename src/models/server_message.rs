use serde::{Deserialize, Serialize};

use super::journal_entry::JournalEntry;

/// Feed message types sent from server to client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Handshake acknowledgement. The connection counts as live only once
    /// this message arrives.
    ConnectionEstablished {
        /// Optional human-readable greeting from the server.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// A journal entry was posted.
    JournalEntryPosted {
        /// The posted entry.
        entry: JournalEntry,
    },
}

/// Parse a raw feed frame.
///
/// Returns `None` for frames that are not valid JSON or whose `type`
/// discriminant is not recognized. Such frames are ignored by the feed
/// task without affecting connection state.
pub(crate) fn parse_message(raw: &str) -> Option<ServerMessage> {
    serde_json::from_str(raw).ok()
}

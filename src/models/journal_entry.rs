use serde::{Deserialize, Serialize};

/// A posted journal entry, as delivered on the feed.
///
/// Treated as immutable once received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique entry identifier.
    pub id: String,

    /// Human-facing entry number (e.g. "JE-00042").
    pub entry_number: String,

    /// Posting date.
    pub date: String,

    /// Free-form description.
    pub description: String,

    /// Entry status as reported by the server (e.g. "posted").
    pub status: String,

    /// The business the entry was posted under.
    pub business_name: String,

    /// Contact associated with the entry, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,

    /// Line items, in posting order.
    #[serde(default)]
    pub lines: Vec<JournalLine>,

    /// Identifier of the user who created the entry.
    pub created_by: String,

    /// Creation timestamp as reported by the server.
    pub created_at: String,
}

/// A single debit/credit line of a journal entry.
///
/// Amounts are exact decimal text as sent by the server. They are never
/// parsed into floating-point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalLine {
    /// Account code (e.g. "1200").
    pub account_code: String,

    /// Account display name.
    pub account_name: String,

    /// Debit amount as decimal text ("0.00" when the line is a credit).
    pub debit: String,

    /// Credit amount as decimal text ("0.00" when the line is a debit).
    pub credit: String,
}

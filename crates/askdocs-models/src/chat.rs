//! Chat transcript types.
//!
//! A transcript is an ordered sequence of [`ChatMessage`] entries, one per
//! turn, in insertion order.  Transcripts are transient UI state: they are
//! never persisted and die with the widget session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Who authored a transcript entry.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The person typing into the widget.
    User,
    /// The retrieval-backed assistant.
    Assistant,
}

// ---------------------------------------------------------------------------
// ChatMessage
// ---------------------------------------------------------------------------

/// One entry in the chat transcript.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChatMessage {
    /// Author of the entry.
    pub role: Role,
    /// Message body.  Assistant entries may contain markdown.
    pub content: String,
    /// Optional source links shown beneath an assistant answer.
    /// `None` both when absent and when the upstream list was empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls: Option<Vec<String>>,
    /// Creation time (UTC), used for display only.
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Build a user-role entry with the literal input text.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            urls: None,
            timestamp: Utc::now(),
        }
    }

    /// Build an assistant-role entry.
    ///
    /// An empty url list is normalized to `None` so rendering code only
    /// has one "no links" case to handle.
    pub fn assistant(content: impl Into<String>, urls: Option<Vec<String>>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            urls: urls.filter(|u| !u.is_empty()),
            timestamp: Utc::now(),
        }
    }
}

//! Wire DTOs for the proxy endpoint and the upstream retrieval service.
//!
//! The proxy relays the upstream body opaquely (it never validates the
//! upstream shape), so [`ChatResponse`] carries a raw [`serde_json::Value`].
//! The widget, by contrast, normalizes the nested upstream shape into
//! [`AssistantReply`] immediately after the network call instead of
//! trusting optional-chaining access at render time.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Assistant text shown when the upstream reply carries no `content` field.
pub const NO_CONTENT_FALLBACK: &str = "No content available";

// ---------------------------------------------------------------------------
// Proxy contract (widget ↔ proxy)
// ---------------------------------------------------------------------------

/// Body of `POST /api/chat`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    /// The user's question, forwarded verbatim to the retrieval service.
    ///
    /// Defaults to empty when the field is absent so that a `{}` body
    /// reaches validation instead of failing JSON extraction.
    #[serde(default)]
    pub message: String,
}

impl ChatRequest {
    /// Reject absent, empty, or whitespace-only messages.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.message.trim().is_empty() {
            return Err(ModelError::EmptyMessage);
        }
        Ok(())
    }
}

/// Success body of `POST /api/chat`: the upstream JSON wrapped unchanged
/// under a `response` field.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChatResponse {
    /// Opaque upstream body, relayed without shape validation.
    pub response: serde_json::Value,
}

// ---------------------------------------------------------------------------
// Upstream contract (proxy ↔ retrieval service)
// ---------------------------------------------------------------------------

/// Body the proxy POSTs to the retrieval service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RetrievalQuery {
    /// The user's question.
    pub query: String,
}

/// Expected success shape of the retrieval service.
///
/// The contract is assumed, not enforced: every field is lenient so a
/// partially-shaped body still deserializes and falls back gracefully.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct RetrievalReply {
    /// Nested answer object.
    #[serde(default)]
    pub response: RetrievalContent,
    /// Source links scraped while answering, possibly absent or empty.
    #[serde(default)]
    pub scraped_urls: Option<Vec<String>>,
}

/// Inner answer object of a [`RetrievalReply`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct RetrievalContent {
    /// Answer text in markdown, absent when the service had nothing to say.
    #[serde(default)]
    pub content: Option<String>,
}

// ---------------------------------------------------------------------------
// AssistantReply — normalized boundary type
// ---------------------------------------------------------------------------

/// A retrieval reply normalized for rendering.
///
/// Built from [`RetrievalReply`] right after the network call, so the
/// widget only ever sees a fully-shaped reply: `content` is always
/// present (falling back to [`NO_CONTENT_FALLBACK`]) and `urls` is `None`
/// whenever there is nothing to link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantReply {
    /// Answer text, never empty of meaning: absent upstream content
    /// becomes the fallback literal.
    pub content: String,
    /// Source links, `None` when absent or empty upstream.
    pub urls: Option<Vec<String>>,
}

impl From<RetrievalReply> for AssistantReply {
    fn from(reply: RetrievalReply) -> Self {
        Self {
            content: reply
                .response
                .content
                .unwrap_or_else(|| NO_CONTENT_FALLBACK.to_string()),
            urls: reply.scraped_urls.filter(|u| !u.is_empty()),
        }
    }
}

//! Chat proxy client.
//!
//! One awaited request/response task per question, no retries.  The
//! nested upstream shape is normalized immediately after the network
//! call so callers never reach into `response.response.content` by hand.

use askdocs_models::{AssistantReply, ChatRequest, ChatResponse, RetrievalReply};

use crate::error::SdkError;

/// Client for the AskDocs proxy endpoint.
///
/// Cheap to clone: the underlying [`reqwest::Client`] shares its
/// connection pool across clones.
#[derive(Debug, Clone)]
pub struct ChatProxyClient {
    http: reqwest::Client,
    base_url: String,
}

impl ChatProxyClient {
    /// Create a client for the proxy at `base_url`
    /// (e.g. `http://localhost:3002`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from the `ASKDOCS_PROXY_URL` environment variable,
    /// defaulting to `http://localhost:3002`.
    pub fn from_env() -> Self {
        let url = std::env::var("ASKDOCS_PROXY_URL")
            .unwrap_or_else(|_| "http://localhost:3002".to_string());
        Self::new(url)
    }

    /// Send one question and return the normalized assistant reply.
    pub async fn ask(&self, message: &str) -> Result<AssistantReply, SdkError> {
        let url = format!("{}/api/chat", self.base_url);

        let res = self
            .http
            .post(&url)
            .json(&ChatRequest {
                message: message.to_string(),
            })
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(SdkError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: ChatResponse = res.json().await?;
        decode_reply(envelope)
    }
}

/// Unwrap the proxy envelope and normalize the upstream shape.
fn decode_reply(envelope: ChatResponse) -> Result<AssistantReply, SdkError> {
    let reply: RetrievalReply = serde_json::from_value(envelope.response)?;
    Ok(AssistantReply::from(reply))
}

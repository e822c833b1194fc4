//! Forwarding to the retrieval service.
//!
//! One HTTPS POST per chat exchange: single attempt, fail fast, no
//! retries and no timeout beyond the client defaults.  The upstream body
//! is parsed as JSON but its shape is never validated here — the proxy
//! relays it opaquely.

use askdocs_models::RetrievalQuery;

use crate::error::ProxyError;

/// Forward a user query to the retrieval service and return its JSON body.
///
/// Non-success upstream statuses become [`ProxyError::UpstreamStatus`]
/// (mirrored to the caller); a body that is not JSON becomes
/// [`ProxyError::Internal`].
pub async fn forward_query(
    client: &reqwest::Client,
    upstream_url: &str,
    query: &str,
) -> Result<serde_json::Value, ProxyError> {
    let res = client
        .post(upstream_url)
        .json(&RetrievalQuery {
            query: query.to_string(),
        })
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        return Err(ProxyError::UpstreamStatus {
            status: status.as_u16(),
        });
    }

    res.json::<serde_json::Value>()
        .await
        .map_err(|e| ProxyError::Internal(format!("upstream body was not JSON: {e}")))
}

//! AskDocs proxy — relays chat questions to the hosted retrieval service.
//!
//! The service exposes a single exchange endpoint:
//!
//! 1. `POST /api/chat` validates the incoming `message`.
//! 2. The message is forwarded verbatim as `{ "query": … }` to the
//!    configured upstream URL.
//! 3. The upstream JSON body is wrapped unchanged under `response` and
//!    returned, or the failure is normalized to a JSON error payload.

mod config;
mod error;
mod upstream;

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::routing::{get, post};
use axum::Router;
use tracing::info;
use uuid::Uuid;

use askdocs_models::{ChatRequest, ChatResponse};

use crate::config::ProxyConfig;
use crate::error::ProxyError;

// ---------------------------------------------------------------------------
// Shared application state
// ---------------------------------------------------------------------------

/// State shared across all Axum handlers.
struct AppState {
    /// Reused HTTP client for upstream calls.
    http: reqwest::Client,
    /// Global configuration (upstream URL, listen port).
    config: ProxyConfig,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `POST /api/chat` — forward one question and relay the answer.
async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ProxyError> {
    req.validate()?;

    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, chars = req.message.len(), "chat request received");

    let body = upstream::forward_query(&state.http, &state.config.upstream_url, &req.message).await?;

    info!(%correlation_id, "upstream reply relayed");
    Ok(Json(ChatResponse { response: body }))
}

/// `GET /healthz` — liveness probe for deploy checks.
async fn healthz() -> &'static str {
    "ok"
}

/// Build the service router over the given state.
fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/healthz", get(healthz))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging (controlled via RUST_LOG env var).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ProxyConfig::from_env();
    info!(upstream = %config.upstream_url, "retrieval upstream configured");

    let listen_port = config.listen_port;
    let state = Arc::new(AppState {
        http: reqwest::Client::new(),
        config,
    });

    let addr = format!("0.0.0.0:{listen_port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(address = %addr, "proxy listening");
    axum::serve(listener, router(state)).await?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    /// Serve the given router on an ephemeral local port and return its URL.
    async fn spawn_upstream(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/chat_endpoint")
    }

    fn proxy_for(upstream_url: String) -> TestServer {
        let state = Arc::new(AppState {
            http: reqwest::Client::new(),
            config: ProxyConfig {
                upstream_url,
                listen_port: 0,
            },
        });
        TestServer::new(router(state)).unwrap()
    }

    #[tokio::test]
    async fn empty_body_is_rejected_with_400() {
        let server = proxy_for("http://unused.invalid".to_string());

        let res = server.post("/api/chat").json(&json!({})).await;

        assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(res.json::<Value>(), json!({ "error": "Message required" }));
    }

    #[tokio::test]
    async fn whitespace_message_is_rejected_with_400() {
        let server = proxy_for("http://unused.invalid".to_string());

        let res = server.post("/api/chat").json(&json!({ "message": "   " })).await;

        assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(res.json::<Value>(), json!({ "error": "Message required" }));
    }

    #[tokio::test]
    async fn upstream_body_is_relayed_under_response() {
        let upstream_body = json!({
            "response": { "content": "Hello" },
            "scraped_urls": ["https://a.example"]
        });
        let reply = upstream_body.clone();
        let upstream = Router::new().route(
            "/chat_endpoint",
            post(move || {
                let reply = reply.clone();
                async move { Json(reply) }
            }),
        );
        let server = proxy_for(spawn_upstream(upstream).await);

        let res = server
            .post("/api/chat")
            .json(&json!({ "message": "hi" }))
            .await;

        assert_eq!(res.status_code(), StatusCode::OK);
        assert_eq!(res.json::<Value>(), json!({ "response": upstream_body }));
    }

    #[tokio::test]
    async fn upstream_receives_query_field() {
        // Echo the request body back so the test can inspect what the
        // proxy actually forwarded.
        let upstream = Router::new().route(
            "/chat_endpoint",
            post(|Json(body): Json<Value>| async move { Json(json!({ "echo": body })) }),
        );
        let server = proxy_for(spawn_upstream(upstream).await);

        let res = server
            .post("/api/chat")
            .json(&json!({ "message": "  spaced  " }))
            .await;

        assert_eq!(res.status_code(), StatusCode::OK);
        // The message is forwarded verbatim, untrimmed.
        assert_eq!(
            res.json::<Value>(),
            json!({ "response": { "echo": { "query": "  spaced  " } } })
        );
    }

    #[tokio::test]
    async fn upstream_failure_status_is_mirrored() {
        let upstream = Router::new().route(
            "/chat_endpoint",
            post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "overloaded") }),
        );
        let server = proxy_for(spawn_upstream(upstream).await);

        let res = server
            .post("/api/chat")
            .json(&json!({ "message": "hi" }))
            .await;

        assert_eq!(res.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            res.json::<Value>(),
            json!({ "error": "Error from FastAPI server" })
        );
    }

    #[tokio::test]
    async fn unreachable_upstream_maps_to_502() {
        // Reserve a port, then drop the listener so the connection is refused.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let server = proxy_for(format!("http://{addr}/chat_endpoint"));

        let res = server
            .post("/api/chat")
            .json(&json!({ "message": "hi" }))
            .await;

        assert_eq!(res.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            res.json::<Value>(),
            json!({ "error": "Error from FastAPI server" })
        );
    }

    #[tokio::test]
    async fn non_json_upstream_body_maps_to_500() {
        let upstream = Router::new().route(
            "/chat_endpoint",
            post(|| async { "plain text, not json" }),
        );
        let server = proxy_for(spawn_upstream(upstream).await);

        let res = server
            .post("/api/chat")
            .json(&json!({ "message": "hi" }))
            .await;

        assert_eq!(res.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            res.json::<Value>(),
            json!({ "error": "Internal Server Error" })
        );
    }

    #[tokio::test]
    async fn healthz_is_ok() {
        let server = proxy_for("http://unused.invalid".to_string());
        let res = server.get("/healthz").await;
        assert_eq!(res.status_code(), StatusCode::OK);
        assert_eq!(res.text(), "ok");
    }
}

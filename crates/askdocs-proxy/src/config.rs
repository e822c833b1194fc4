//! Proxy service configuration.
//!
//! Built from environment variables at startup and injected into Axum
//! handlers via [`axum::extract::State`].  The upstream URL is deliberately
//! configuration rather than a constant so deployments can point at a
//! staging retrieval service.

/// Global configuration shared across all handlers.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Retrieval-service endpoint queries are forwarded to.
    pub upstream_url: String,
    /// Port to listen on (default `3002`).
    pub listen_port: u16,
}

impl ProxyConfig {
    /// Build the configuration from environment variables.
    ///
    /// | Variable               | Default                                            | Description               |
    /// |------------------------|----------------------------------------------------|---------------------------|
    /// | `ASKDOCS_UPSTREAM_URL` | `https://aptos-fastapi.onrender.com/chat_endpoint` | Retrieval service URL     |
    /// | `ASKDOCS_PROXY_PORT`   | `3002`                                             | HTTP listen port          |
    pub fn from_env() -> Self {
        let upstream_url = std::env::var("ASKDOCS_UPSTREAM_URL")
            .unwrap_or_else(|_| "https://aptos-fastapi.onrender.com/chat_endpoint".to_string());

        let listen_port: u16 = std::env::var("ASKDOCS_PROXY_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3002);

        Self {
            upstream_url,
            listen_port,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_upstream_is_https() {
        let cfg = ProxyConfig::from_env();
        assert!(cfg.upstream_url.starts_with("https://"));
    }

    #[test]
    fn default_listen_port() {
        let cfg = ProxyConfig::from_env();
        assert_eq!(cfg.listen_port, 3002);
    }
}

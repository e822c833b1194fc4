//! # AskDocs SDK
//!
//! Client for the AskDocs proxy endpoint.  [`ChatProxyClient`] performs
//! one exchange per call: POST the question, check the HTTP status,
//! unwrap the proxy envelope, and normalize the upstream shape into an
//! [`askdocs_models::AssistantReply`] at the boundary.

mod client;
mod error;

pub use client::ChatProxyClient;
pub use error::SdkError;

#![deny(missing_docs)]

//! # AskDocs Models
//!
//! Shared data types for the AskDocs assistant: the proxy wire contract,
//! the upstream retrieval-service contract, and the chat transcript types
//! used by the client widget.
//!
//! ## Data flow
//!
//! ```text
//! ChatRequest { message }            widget → proxy
//! RetrievalQuery { query }           proxy  → retrieval service
//! RetrievalReply { response, urls }  retrieval service → proxy (relayed opaquely)
//! ChatResponse { response }          proxy  → widget
//! AssistantReply                     normalized at the widget boundary
//! ChatMessage                        one transcript entry
//! ```
//!
//! ## Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`chat`] | Transcript entry types (`Role`, `ChatMessage`) |
//! | [`wire`] | Wire DTOs for the proxy and upstream contracts |
//! | [`error`] | Validation errors (`ModelError`) |

pub mod chat;
pub mod error;
pub mod wire;

// Re-export all public types at crate root for convenience.
pub use chat::*;
pub use error::*;
pub use wire::*;

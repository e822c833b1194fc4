//! Error types for the `askdocs-models` crate.
//!
//! Fallible validation in this crate returns variants of [`ModelError`].

/// Errors produced when validating model types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A chat message was missing, empty, or whitespace-only.
    #[error("message must not be empty")]
    EmptyMessage,
}

//! Cross-cutting error types for Cultura.
//!
//! Store-facing errors (`FetchError`, `SubmitError`) live in `cultura-db` and
//! configuration errors in `cultura-config`. The CLI converges them with
//! `anyhow`.

use thiserror::Error;

/// Errors raised by pure catalog logic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A required form field was absent or blank.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// An operation that needs an owner was called with an anonymous session.
    #[error("Not authenticated: sign in before creating or saving content")]
    Unauthenticated,
}

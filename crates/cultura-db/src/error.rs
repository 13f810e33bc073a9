//! Database error types for cultura-db.
//!
//! `DatabaseError` is the low-level failure. Callers of the catalog see one of
//! two surfaces: `FetchError` for reads and `SubmitError` for writes. Neither
//! is retried; recovery is a manual re-run.

use cultura_core::errors::CoreError;
use cultura_core::kinds::EntityKind;
use thiserror::Error;

/// Errors from raw database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or a row could not be decoded.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Store settings are missing or invalid.
    #[error(transparent)]
    Config(#[from] cultura_config::ConfigError),
}

/// A read against the store failed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The store rejected or could not answer the query.
    #[error("Could not load {kind} records: {message}")]
    Store { kind: EntityKind, message: String },

    /// A returned row did not match the expected shape.
    #[error("Could not read {kind} record: {message}")]
    Decode { kind: EntityKind, message: String },

    /// The favorites table could not be read.
    #[error("Could not load favorites: {0}")]
    Favorites(String),

    /// The read is scoped to a user but the session is anonymous.
    #[error(transparent)]
    Unauthenticated(#[from] CoreError),
}

impl FetchError {
    pub(crate) fn store(kind: EntityKind, error: impl std::fmt::Display) -> Self {
        Self::Store {
            kind,
            message: error.to_string(),
        }
    }

    pub(crate) fn decode(kind: EntityKind, error: impl std::fmt::Display) -> Self {
        Self::Decode {
            kind,
            message: error.to_string(),
        }
    }
}

/// A write against the store failed. Form input is untouched so the caller
/// can resubmit.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// No owner id on the session.
    #[error("Not authenticated: sign in before creating or saving content")]
    Unauthenticated,

    /// A required form field was blank.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The input could not be interpreted.
    #[error("Invalid input: {0}")]
    Invalid(String),

    /// The referenced catalog item does not exist.
    #[error("No {kind} with id '{id}'")]
    NotFound { kind: EntityKind, id: String },

    /// The store rejected the insert.
    #[error("Could not save {kind}: {message}")]
    Store { kind: EntityKind, message: String },
}

impl SubmitError {
    pub(crate) fn store(kind: EntityKind, error: impl std::fmt::Display) -> Self {
        Self::Store {
            kind,
            message: error.to_string(),
        }
    }
}

impl From<CoreError> for SubmitError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Unauthenticated => Self::Unauthenticated,
            CoreError::MissingField(field) => Self::MissingField(field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_onto_submit_errors() {
        assert!(matches!(
            SubmitError::from(CoreError::Unauthenticated),
            SubmitError::Unauthenticated
        ));
        assert!(matches!(
            SubmitError::from(CoreError::MissingField("title")),
            SubmitError::MissingField("title")
        ));
    }

    #[test]
    fn fetch_error_message_carries_store_text() {
        let err = FetchError::store(EntityKind::Grant, "no such table: grants");
        assert_eq!(
            err.to_string(),
            "Could not load grant records: no such table: grants"
        );
    }
}

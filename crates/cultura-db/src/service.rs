//! Service layer over the catalog store.
//!
//! `CatalogService` wraps `CatalogDb` (raw database access). All repo methods
//! are implemented as `impl CatalogService` blocks in `crate::repos`.

use cultura_config::StoreConfig;

use crate::error::DatabaseError;
use crate::{CatalogDb, StoreMode};

/// Entry point for catalog reads and writes.
///
/// Every call is an independent request against the store. Nothing is cached
/// between calls and nothing is retried.
pub struct CatalogService {
    db: CatalogDb,
}

impl CatalogService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = CatalogDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create a service backed by the hosted store.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the remote client cannot be opened.
    pub async fn new_remote(url: &str, access_key: &str) -> Result<Self, DatabaseError> {
        let db = CatalogDb::open_remote(url, access_key).await?;
        Ok(Self { db })
    }

    /// Open whichever store the configuration names.
    ///
    /// A configured `local_path` wins. Otherwise the remote URL and access key
    /// must both be present.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Config` when neither a local path nor a complete
    /// remote configuration is available, before any connection is attempted.
    pub async fn open_from_config(store: &StoreConfig) -> Result<Self, DatabaseError> {
        if store.has_local_path() {
            tracing::debug!(path = %store.local_path, "opening local catalog store");
            return Self::new_local(&store.local_path).await;
        }
        let remote = store.require()?;
        tracing::debug!(url = remote.url, "opening remote catalog store");
        Self::new_remote(remote.url, remote.access_key).await
    }

    /// Create from an existing `CatalogDb` (for testing).
    #[must_use]
    pub const fn from_db(db: CatalogDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &CatalogDb {
        &self.db
    }

    /// Returns whether this service talks to the hosted store.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        self.db.mode() == StoreMode::Remote
    }
}

#[cfg(test)]
mod tests {
    use cultura_config::ConfigError;

    use super::*;

    #[tokio::test]
    async fn local_path_takes_precedence() {
        let store = StoreConfig {
            url: "libsql://example.turso.io".into(),
            access_key: "secret".into(),
            local_path: ":memory:".into(),
        };
        let svc = CatalogService::open_from_config(&store).await.unwrap();
        assert!(!svc.is_remote());
    }

    #[tokio::test]
    async fn missing_remote_settings_fail_before_connecting() {
        let store = StoreConfig {
            url: "libsql://example.turso.io".into(),
            ..Default::default()
        };
        let Err(err) = CatalogService::open_from_config(&store).await else {
            panic!("expected configuration error");
        };
        assert!(matches!(
            err,
            DatabaseError::Config(ConfigError::NotConfigured { ref missing, .. }) if missing == "access_key"
        ));
    }
}

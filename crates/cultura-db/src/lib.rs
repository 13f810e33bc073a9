//! # cultura-db
//!
//! libSQL store for the Cultura catalog.
//!
//! Handles the catalog's relational state: cultural events, podcasts,
//! timeline entries, grants and user favorites. Production talks to a hosted
//! Turso database; development and tests use a local file or `:memory:`.
//!
//! Reads go through the Remote Data Fetcher (`CatalogService::fetch` and the
//! typed `list_*` methods) and writes through the Create Form Submitter
//! (`CatalogService::submit`). Every call takes an explicit
//! [`cultura_core::identity::Session`].

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Where the connection points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreMode {
    Local,
    Remote,
}

/// Database handle wrapping a libSQL database and one connection.
pub struct CatalogDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    mode: StoreMode,
}

impl CatalogDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        let catalog = Self {
            db,
            conn,
            mode: StoreMode::Local,
        };
        catalog.run_migrations().await?;
        Ok(catalog)
    }

    /// Open a hosted database over the network.
    ///
    /// Runs migrations on open; they are idempotent against an existing
    /// schema.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the client cannot be built or migrations fail.
    pub async fn open_remote(url: &str, access_key: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), access_key.to_string())
            .build()
            .await?;
        let conn = db.connect()?;
        let catalog = Self {
            db,
            conn,
            mode: StoreMode::Remote,
        };
        catalog.run_migrations().await?;
        Ok(catalog)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    #[must_use]
    pub const fn mode(&self) -> StoreMode {
        self.mode
    }
}

//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time and executes them on open.
//! All statements use `IF NOT EXISTS` so re-running is a no-op.

use crate::CatalogDb;
use crate::error::DatabaseError;

/// Catalog schema: 5 tables, 5 indexes.
const MIGRATION_001: &str = include_str!("../migrations/001_catalog.sql");

impl CatalogDb {
    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_catalog: {e}")))?;
        Ok(())
    }
}

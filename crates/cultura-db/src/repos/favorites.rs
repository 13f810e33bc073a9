//! Favorites repository: per-user bookmarks of catalog items.
//!
//! Every call needs an authenticated session. Favorites are scoped to the
//! session's owner id.

use cultura_core::entities::Favorite;
use cultura_core::identity::Session;
use cultura_core::kinds::EntityKind;

use crate::error::{DatabaseError, FetchError, SubmitError};
use crate::helpers::parse_datetime;
use crate::service::CatalogService;

fn parse_kind(raw: &str) -> Result<EntityKind, DatabaseError> {
    EntityKind::ALL
        .into_iter()
        .find(|k| k.as_str() == raw)
        .ok_or_else(|| DatabaseError::Query(format!("Unknown item kind '{raw}'")))
}

fn row_to_favorite(row: &libsql::Row) -> Result<Favorite, DatabaseError> {
    Ok(Favorite {
        id: row.get::<String>(0)?,
        user_id: row.get::<String>(1)?,
        item_kind: parse_kind(&row.get::<String>(2)?)?,
        item_id: row.get::<String>(3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl CatalogService {
    /// Save a catalog item for the session's user. Returns whether it was
    /// newly saved; saving an item twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Unauthenticated` for an anonymous session,
    /// `SubmitError::NotFound` if no item of `kind` has `item_id`, and
    /// `SubmitError::Store` if the store rejects the write.
    pub async fn add_favorite(
        &self,
        kind: EntityKind,
        item_id: &str,
        session: &Session,
    ) -> Result<bool, SubmitError> {
        let owner = session.require_owner()?;

        let exists_sql = format!("SELECT 1 FROM {} WHERE id = ?1", kind.table());
        let mut rows = self
            .db()
            .conn()
            .query(&exists_sql, [item_id])
            .await
            .map_err(|e| SubmitError::store(kind, e))?;
        if rows
            .next()
            .await
            .map_err(|e| SubmitError::store(kind, e))?
            .is_none()
        {
            return Err(SubmitError::NotFound {
                kind,
                id: item_id.to_string(),
            });
        }

        let inserted = self
            .db()
            .conn()
            .execute(
                "INSERT OR IGNORE INTO favorites (user_id, item_kind, item_id) VALUES (?1, ?2, ?3)",
                libsql::params![owner, kind.as_str(), item_id],
            )
            .await
            .map_err(|e| {
                tracing::warn!(%kind, item_id, error = %e, "favorite insert failed");
                SubmitError::store(kind, e)
            })?;
        tracing::debug!(%kind, item_id, inserted, "saved favorite");
        Ok(inserted > 0)
    }

    /// Remove a saved item. Returns whether anything was removed.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Unauthenticated` for an anonymous session and
    /// `SubmitError::Store` if the delete fails.
    pub async fn remove_favorite(
        &self,
        kind: EntityKind,
        item_id: &str,
        session: &Session,
    ) -> Result<bool, SubmitError> {
        let owner = session.require_owner()?;
        let removed = self
            .db()
            .conn()
            .execute(
                "DELETE FROM favorites WHERE user_id = ?1 AND item_kind = ?2 AND item_id = ?3",
                libsql::params![owner, kind.as_str(), item_id],
            )
            .await
            .map_err(|e| SubmitError::store(kind, e))?;
        tracing::debug!(%kind, item_id, removed, "removed favorite");
        Ok(removed > 0)
    }

    /// The session user's favorites, newest first.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Unauthenticated` for an anonymous session and
    /// `FetchError::Favorites` if the read fails.
    pub async fn list_favorites(&self, session: &Session) -> Result<Vec<Favorite>, FetchError> {
        let owner = session.require_owner()?;
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, user_id, item_kind, item_id, created_at FROM favorites
                 WHERE user_id = ?1 ORDER BY created_at DESC, rowid DESC",
                [owner],
            )
            .await
            .map_err(|e| FetchError::Favorites(e.to_string()))?;

        let mut results = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| FetchError::Favorites(e.to_string()))?
        {
            results.push(row_to_favorite(&row).map_err(|e| FetchError::Favorites(e.to_string()))?);
        }
        tracing::debug!(rows = results.len(), "fetched favorites");
        Ok(results)
    }
}

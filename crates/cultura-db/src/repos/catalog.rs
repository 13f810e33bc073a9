//! Kind-generic fetch and submit.
//!
//! `fetch` is the Remote Data Fetcher: one `SELECT` per call, ordered by the
//! kind's default column. `submit` is the Create Form Submitter: owner check,
//! presence validation, then exactly one `INSERT`. Neither retries.

use cultura_core::drafts::Draft;
use cultura_core::entities::Record;
use cultura_core::identity::Session;
use cultura_core::kinds::EntityKind;

use crate::error::{DatabaseError, FetchError, SubmitError};
use crate::service::CatalogService;

type RowDecoder<T> = fn(&libsql::Row) -> Result<T, DatabaseError>;

/// `SELECT` for a whole table in the kind's default order.
///
/// `rowid` breaks ties in the same direction so equal keys come back in
/// insertion order (newest first for podcasts).
fn select_sql(kind: EntityKind, columns: &str) -> String {
    let (_, direction) = kind.default_order();
    format!(
        "SELECT {columns} FROM {} ORDER BY {}, rowid {}",
        kind.table(),
        kind.order_clause(),
        direction.as_sql()
    )
}

fn insert_sql(kind: EntityKind, columns: &[&str]) -> String {
    let placeholders = (1..=columns.len())
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({placeholders})",
        kind.table(),
        columns.join(", ")
    )
}

impl CatalogService {
    /// Load every record of `kind`, in the kind's default order.
    ///
    /// Anonymous sessions may read.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Store` if the query fails and `FetchError::Decode`
    /// if a row does not match the entity shape.
    pub async fn fetch(&self, kind: EntityKind, session: &Session) -> Result<Vec<Record>, FetchError> {
        tracing::debug!(
            %kind,
            authenticated = session.is_authenticated(),
            "fetching catalog records"
        );
        let records = match kind {
            EntityKind::Event => self
                .list_events()
                .await?
                .into_iter()
                .map(Record::Event)
                .collect(),
            EntityKind::Podcast => self
                .list_podcasts()
                .await?
                .into_iter()
                .map(Record::Podcast)
                .collect(),
            EntityKind::Timeline => self
                .list_timeline()
                .await?
                .into_iter()
                .map(Record::Timeline)
                .collect(),
            EntityKind::Grant => self
                .list_grants()
                .await?
                .into_iter()
                .map(Record::Grant)
                .collect(),
        };
        Ok(records)
    }

    /// Persist a new catalog entry owned by the session's user.
    ///
    /// The store assigns `id` and `created_at`. Callers re-fetch afterwards to
    /// see the new entry.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Unauthenticated` for an anonymous session (no I/O
    /// happens), `SubmitError::MissingField` for a blank required field, and
    /// `SubmitError::Store` if the insert is rejected.
    pub async fn submit(&self, draft: Draft, session: &Session) -> Result<(), SubmitError> {
        let owner = session.require_owner()?;
        draft.validate()?;

        match &draft {
            Draft::Event(d) => self.insert_event(d, owner).await,
            Draft::Podcast(d) => self.insert_podcast(d, owner).await,
            Draft::Timeline(d) => self.insert_timeline(d, owner).await,
            Draft::Grant(d) => self.insert_grant(d, owner).await,
        }
    }

    pub(crate) async fn select_all<T>(
        &self,
        kind: EntityKind,
        columns: &str,
        decode: RowDecoder<T>,
    ) -> Result<Vec<T>, FetchError> {
        let sql = select_sql(kind, columns);
        let mut rows = self.db().conn().query(&sql, ()).await.map_err(|e| {
            tracing::warn!(%kind, error = %e, "catalog query failed");
            FetchError::store(kind, e)
        })?;

        let mut results = Vec::new();
        while let Some(row) = rows.next().await.map_err(|e| FetchError::store(kind, e))? {
            results.push(decode(&row).map_err(|e| {
                tracing::warn!(%kind, error = %e, "catalog row did not decode");
                FetchError::decode(kind, e)
            })?);
        }
        tracing::debug!(%kind, rows = results.len(), "fetched catalog records");
        Ok(results)
    }

    pub(crate) async fn insert_row(
        &self,
        kind: EntityKind,
        columns: &[&str],
        values: Vec<libsql::Value>,
    ) -> Result<(), SubmitError> {
        let sql = insert_sql(kind, columns);
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(values))
            .await
            .map_err(|e| {
                tracing::warn!(%kind, error = %e, "catalog insert failed");
                SubmitError::store(kind, e)
            })?;
        tracing::debug!(%kind, "submitted catalog entry");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use cultura_core::drafts::{EventDraft, GrantDraft, PodcastDraft, TimelineDraft};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::{test_service, user_session};

    #[test]
    fn select_sql_breaks_ties_in_key_direction() {
        assert_eq!(
            select_sql(EntityKind::Podcast, "id"),
            "SELECT id FROM podcasts ORDER BY created_at DESC, rowid DESC"
        );
        assert_eq!(
            select_sql(EntityKind::Grant, "id, title"),
            "SELECT id, title FROM grants ORDER BY deadline ASC, rowid ASC"
        );
    }

    #[test]
    fn insert_sql_numbers_placeholders() {
        assert_eq!(
            insert_sql(EntityKind::Timeline, &["year", "title", "created_by"]),
            "INSERT INTO timeline_events (year, title, created_by) VALUES (?1, ?2, ?3)"
        );
    }

    #[tokio::test]
    async fn empty_store_fetches_nothing() {
        let svc = test_service().await;
        for kind in EntityKind::ALL {
            let records = svc.fetch(kind, &Session::anonymous()).await.unwrap();
            assert!(records.is_empty(), "{kind} should be empty");
        }
    }

    #[tokio::test]
    async fn anonymous_submit_is_rejected_without_insert() {
        let svc = test_service().await;
        let draft = Draft::Grant(GrantDraft {
            title: "Heritage Fund".into(),
            ..Default::default()
        });
        let err = svc.submit(draft, &Session::anonymous()).await.unwrap_err();
        assert!(matches!(err, SubmitError::Unauthenticated));
        assert!(svc.list_grants().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn owner_is_checked_before_fields() {
        let svc = test_service().await;
        let err = svc
            .submit(Draft::Event(EventDraft::default()), &Session::anonymous())
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitError::Unauthenticated));
    }

    #[tokio::test]
    async fn missing_title_is_reported() {
        let svc = test_service().await;
        let err = svc
            .submit(Draft::Podcast(PodcastDraft::default()), &user_session())
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitError::MissingField("title")));
    }

    #[tokio::test]
    async fn submitted_entries_appear_on_next_fetch() {
        let svc = test_service().await;
        let session = user_session();
        svc.submit(
            Draft::Timeline(TimelineDraft {
                year: "1600-1750".into(),
                title: "Baroque Era".into(),
                ..Default::default()
            }),
            &session,
        )
        .await
        .unwrap();

        let records = svc.fetch(EntityKind::Timeline, &session).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind(), EntityKind::Timeline);
        assert_eq!(records[0].title(), "Baroque Era");
    }
}

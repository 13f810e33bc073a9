//! Podcast repository.

use cultura_core::drafts::PodcastDraft;
use cultura_core::entities::Podcast;
use cultura_core::kinds::EntityKind;

use crate::error::{DatabaseError, FetchError, SubmitError};
use crate::helpers::{get_opt_f64, get_opt_i64, get_opt_string, integer, parse_datetime, real, text};
use crate::service::CatalogService;

const COLUMNS: &str = "id, title, description, embed_url, category, rating, episodes, duration, \
                       image_url, created_by, created_at";

const INSERT_COLUMNS: [&str; 9] = [
    "title",
    "description",
    "embed_url",
    "category",
    "rating",
    "episodes",
    "duration",
    "image_url",
    "created_by",
];

fn row_to_podcast(row: &libsql::Row) -> Result<Podcast, DatabaseError> {
    Ok(Podcast {
        id: row.get::<String>(0)?,
        title: row.get::<String>(1)?,
        description: get_opt_string(row, 2)?,
        embed_url: get_opt_string(row, 3)?,
        category: get_opt_string(row, 4)?,
        rating: get_opt_f64(row, 5)?,
        episodes: get_opt_i64(row, 6)?,
        duration: get_opt_string(row, 7)?,
        image_url: get_opt_string(row, 8)?,
        created_by: get_opt_string(row, 9)?,
        created_at: parse_datetime(&row.get::<String>(10)?)?,
    })
}

impl CatalogService {
    /// All podcasts, newest first.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the query or row decoding fails.
    pub async fn list_podcasts(&self) -> Result<Vec<Podcast>, FetchError> {
        self.select_all(EntityKind::Podcast, COLUMNS, row_to_podcast)
            .await
    }

    pub(crate) async fn insert_podcast(
        &self,
        draft: &PodcastDraft,
        owner: &str,
    ) -> Result<(), SubmitError> {
        let values = vec![
            libsql::Value::Text(draft.title.trim().to_string()),
            text(draft.description.as_deref()),
            text(draft.embed_url.as_deref()),
            text(draft.category.as_deref()),
            real(draft.rating),
            integer(draft.episodes),
            text(draft.duration.as_deref()),
            text(draft.image_url.as_deref()),
            text(Some(owner)),
        ];
        self.insert_row(EntityKind::Podcast, &INSERT_COLUMNS, values)
            .await
    }
}

#[cfg(test)]
mod tests {
    use cultura_core::drafts::Draft;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::{test_service, user_session};

    #[tokio::test]
    async fn newest_podcast_first() {
        let svc = test_service().await;
        let session = user_session();
        for title in ["Museum Stories", "The Art Hour", "Heritage Voices"] {
            svc.submit(
                Draft::Podcast(PodcastDraft {
                    title: title.into(),
                    ..Default::default()
                }),
                &session,
            )
            .await
            .unwrap();
        }

        let titles: Vec<_> = svc
            .list_podcasts()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["Heritage Voices", "The Art Hour", "Museum Stories"]);
    }

    #[tokio::test]
    async fn numeric_fields_are_typed() {
        let svc = test_service().await;
        svc.submit(
            Draft::Podcast(PodcastDraft {
                title: "The Art Hour".into(),
                rating: Some(4.8),
                episodes: Some(120),
                ..Default::default()
            }),
            &user_session(),
        )
        .await
        .unwrap();

        let podcast = svc.list_podcasts().await.unwrap().remove(0);
        assert_eq!(podcast.rating, Some(4.8));
        assert_eq!(podcast.episodes, Some(120));
        assert_eq!(podcast.embed_url, None);
    }
}

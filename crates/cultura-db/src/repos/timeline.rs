//! Timeline repository.
//!
//! `key_figures` is stored as a JSON array in a TEXT column.

use cultura_core::drafts::TimelineDraft;
use cultura_core::entities::TimelineEvent;
use cultura_core::kinds::EntityKind;

use crate::error::{DatabaseError, FetchError, SubmitError};
use crate::helpers::{get_opt_string, parse_datetime, parse_string_list, text};
use crate::service::CatalogService;

const COLUMNS: &str = "id, year, title, description, details, category, key_figures, image_url, \
                       location, created_by, created_at";

const INSERT_COLUMNS: [&str; 9] = [
    "year",
    "title",
    "description",
    "details",
    "category",
    "key_figures",
    "image_url",
    "location",
    "created_by",
];

fn row_to_timeline(row: &libsql::Row) -> Result<TimelineEvent, DatabaseError> {
    let key_figures = row.get::<Option<String>>(6)?;
    Ok(TimelineEvent {
        id: row.get::<String>(0)?,
        year: row.get::<String>(1)?,
        title: row.get::<String>(2)?,
        description: get_opt_string(row, 3)?,
        details: get_opt_string(row, 4)?,
        category: get_opt_string(row, 5)?,
        key_figures: parse_string_list(key_figures.as_deref())?,
        image_url: get_opt_string(row, 7)?,
        location: get_opt_string(row, 8)?,
        created_by: get_opt_string(row, 9)?,
        created_at: parse_datetime(&row.get::<String>(10)?)?,
    })
}

impl CatalogService {
    /// All timeline entries, by `year` ascending.
    ///
    /// `year` is free text ("1400-1600"), so the order is lexicographic.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the query or row decoding fails.
    pub async fn list_timeline(&self) -> Result<Vec<TimelineEvent>, FetchError> {
        self.select_all(EntityKind::Timeline, COLUMNS, row_to_timeline)
            .await
    }

    pub(crate) async fn insert_timeline(
        &self,
        draft: &TimelineDraft,
        owner: &str,
    ) -> Result<(), SubmitError> {
        let key_figures = serde_json::to_string(&draft.key_figures())
            .map_err(|e| SubmitError::Invalid(format!("key figures: {e}")))?;
        let values = vec![
            libsql::Value::Text(draft.year.trim().to_string()),
            libsql::Value::Text(draft.title.trim().to_string()),
            text(draft.description.as_deref()),
            text(draft.details.as_deref()),
            text(draft.category.as_deref()),
            libsql::Value::Text(key_figures),
            text(draft.image_url.as_deref()),
            text(draft.location.as_deref()),
            text(Some(owner)),
        ];
        self.insert_row(EntityKind::Timeline, &INSERT_COLUMNS, values)
            .await
    }
}

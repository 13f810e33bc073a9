//! Cultural event repository.

use cultura_core::drafts::EventDraft;
use cultura_core::entities::CulturalEvent;
use cultura_core::kinds::EntityKind;

use crate::error::{DatabaseError, FetchError, SubmitError};
use crate::helpers::{get_opt_f64, get_opt_string, parse_datetime, real, text};
use crate::service::CatalogService;

const COLUMNS: &str = "id, title, description, date, time, location, latitude, longitude, \
                       category, price, image_url, website_url, created_by, created_at";

const INSERT_COLUMNS: [&str; 12] = [
    "title",
    "description",
    "date",
    "time",
    "location",
    "latitude",
    "longitude",
    "category",
    "price",
    "image_url",
    "website_url",
    "created_by",
];

fn row_to_event(row: &libsql::Row) -> Result<CulturalEvent, DatabaseError> {
    Ok(CulturalEvent {
        id: row.get::<String>(0)?,
        title: row.get::<String>(1)?,
        description: get_opt_string(row, 2)?,
        date: get_opt_string(row, 3)?,
        time: get_opt_string(row, 4)?,
        location: get_opt_string(row, 5)?,
        latitude: get_opt_f64(row, 6)?,
        longitude: get_opt_f64(row, 7)?,
        category: get_opt_string(row, 8)?,
        price: get_opt_string(row, 9)?,
        image_url: get_opt_string(row, 10)?,
        website_url: get_opt_string(row, 11)?,
        created_by: get_opt_string(row, 12)?,
        created_at: parse_datetime(&row.get::<String>(13)?)?,
    })
}

impl CatalogService {
    /// All cultural events, soonest date first.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the query or row decoding fails.
    pub async fn list_events(&self) -> Result<Vec<CulturalEvent>, FetchError> {
        self.select_all(EntityKind::Event, COLUMNS, row_to_event)
            .await
    }

    pub(crate) async fn insert_event(
        &self,
        draft: &EventDraft,
        owner: &str,
    ) -> Result<(), SubmitError> {
        let values = vec![
            libsql::Value::Text(draft.title.trim().to_string()),
            text(draft.description.as_deref()),
            text(draft.date.as_deref()),
            text(draft.time.as_deref()),
            text(draft.location.as_deref()),
            real(draft.latitude),
            real(draft.longitude),
            text(draft.category.as_deref()),
            text(draft.price.as_deref()),
            text(draft.image_url.as_deref()),
            text(draft.website_url.as_deref()),
            text(Some(owner)),
        ];
        self.insert_row(EntityKind::Event, &INSERT_COLUMNS, values)
            .await
    }
}

#[cfg(test)]
mod tests {
    use cultura_core::drafts::Draft;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::{test_service, user_session};

    fn draft(title: &str, date: Option<&str>) -> Draft {
        Draft::Event(EventDraft {
            title: title.into(),
            date: date.map(String::from),
            location: Some("Kyoto, Japan".into()),
            latitude: Some(35.0116),
            longitude: Some(135.7681),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn events_come_back_by_date() {
        let svc = test_service().await;
        let session = user_session();
        svc.submit(draft("Tea Ceremony", Some("2024-10-05")), &session)
            .await
            .unwrap();
        svc.submit(draft("Noh Theatre", Some("2024-08-20")), &session)
            .await
            .unwrap();
        svc.submit(draft("Temple Walk", Some("2024-09-01")), &session)
            .await
            .unwrap();

        let titles: Vec<_> = svc
            .list_events()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["Noh Theatre", "Temple Walk", "Tea Ceremony"]);
    }

    #[tokio::test]
    async fn event_fields_round_trip_through_store() {
        let svc = test_service().await;
        svc.submit(draft("Tea Ceremony", Some("2024-10-05")), &user_session())
            .await
            .unwrap();

        let events = svc.list_events().await.unwrap();
        let event = &events[0];
        assert_eq!(event.location.as_deref(), Some("Kyoto, Japan"));
        assert_eq!(event.latitude, Some(35.0116));
        assert_eq!(event.description, None);
        assert_eq!(event.created_by.as_deref(), Some("user_test"));
        assert_eq!(event.id.len(), 32);
    }
}

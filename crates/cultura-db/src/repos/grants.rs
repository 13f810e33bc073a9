//! Grant repository.

use cultura_core::drafts::GrantDraft;
use cultura_core::entities::Grant;
use cultura_core::kinds::EntityKind;

use crate::error::{DatabaseError, FetchError, SubmitError};
use crate::helpers::{get_flag, get_opt_string, parse_datetime, text};
use crate::service::CatalogService;

const COLUMNS: &str = "id, title, organization, description, amount, deadline, region, category, \
                       eligibility, website_url, featured, created_by, created_at";

const INSERT_COLUMNS: [&str; 11] = [
    "title",
    "organization",
    "description",
    "amount",
    "deadline",
    "region",
    "category",
    "eligibility",
    "website_url",
    "featured",
    "created_by",
];

fn row_to_grant(row: &libsql::Row) -> Result<Grant, DatabaseError> {
    Ok(Grant {
        id: row.get::<String>(0)?,
        title: row.get::<String>(1)?,
        organization: get_opt_string(row, 2)?,
        description: get_opt_string(row, 3)?,
        amount: get_opt_string(row, 4)?,
        deadline: get_opt_string(row, 5)?,
        region: get_opt_string(row, 6)?,
        category: get_opt_string(row, 7)?,
        eligibility: get_opt_string(row, 8)?,
        website_url: get_opt_string(row, 9)?,
        featured: get_flag(row, 10)?,
        created_by: get_opt_string(row, 11)?,
        created_at: parse_datetime(&row.get::<String>(12)?)?,
    })
}

impl CatalogService {
    /// All grants, earliest deadline first.
    ///
    /// This is store order only. Display order comes from
    /// [`cultura_core::rank::rank_grants`].
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the query or row decoding fails.
    pub async fn list_grants(&self) -> Result<Vec<Grant>, FetchError> {
        self.select_all(EntityKind::Grant, COLUMNS, row_to_grant)
            .await
    }

    pub(crate) async fn insert_grant(
        &self,
        draft: &GrantDraft,
        owner: &str,
    ) -> Result<(), SubmitError> {
        let values = vec![
            libsql::Value::Text(draft.title.trim().to_string()),
            text(draft.organization.as_deref()),
            text(draft.description.as_deref()),
            text(draft.amount.as_deref()),
            text(draft.deadline.as_deref()),
            text(draft.region.as_deref()),
            text(draft.category.as_deref()),
            text(draft.eligibility.as_deref()),
            text(draft.website_url.as_deref()),
            libsql::Value::Integer(i64::from(draft.featured)),
            text(Some(owner)),
        ];
        self.insert_row(EntityKind::Grant, &INSERT_COLUMNS, values)
            .await
    }
}

use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A funding opportunity or residency.
///
/// `amount` is display text ("$5,000 - $15,000"); no arithmetic is done on it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Grant {
    pub id: String,
    pub title: String,
    pub organization: Option<String>,
    pub description: Option<String>,
    pub amount: Option<String>,
    pub deadline: Option<String>,
    pub region: Option<String>,
    pub category: Option<String>,
    pub eligibility: Option<String>,
    pub website_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Grant {
    /// The deadline as a calendar date, if present and well-formed.
    #[must_use]
    pub fn deadline_date(&self) -> Option<NaiveDate> {
        self.deadline.as_deref().and_then(crate::deadline::parse_date)
    }
}

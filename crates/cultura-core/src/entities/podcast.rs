use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An embeddable audio series.
///
/// `rating` is nominally 0-5 but is stored as given.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Podcast {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub embed_url: Option<String>,
    pub category: Option<String>,
    pub rating: Option<f64>,
    pub episodes: Option<i64>,
    pub duration: Option<String>,
    pub image_url: Option<String>,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

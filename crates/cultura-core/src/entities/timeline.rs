use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A period or moment on the cultural timeline.
///
/// `year` is free text ("1400-1600", "1960s") and is never parsed as a number.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TimelineEvent {
    pub id: String,
    pub year: String,
    pub title: String,
    pub description: Option<String>,
    pub details: Option<String>,
    pub category: Option<String>,
    pub key_figures: Vec<String>,
    pub image_url: Option<String>,
    pub location: Option<String>,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

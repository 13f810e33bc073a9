use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A dated cultural happening: exhibition, heritage walk, workshop, etc.
///
/// `date` and `time` are independent display strings, not a timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CulturalEvent {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub category: Option<String>,
    pub price: Option<String>,
    pub image_url: Option<String>,
    pub website_url: Option<String>,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

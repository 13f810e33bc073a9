use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::kinds::EntityKind;

/// A user's saved catalog item (bookmark).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Favorite {
    pub id: String,
    pub user_id: String,
    pub item_kind: EntityKind,
    pub item_id: String,
    pub created_at: DateTime<Utc>,
}

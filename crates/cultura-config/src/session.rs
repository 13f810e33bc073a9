//! Signed-in user configuration.

use cultura_core::identity::Session;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Identifier of the signed-in user. Empty means anonymous.
    #[serde(default)]
    pub user_id: String,
}

impl SessionConfig {
    /// Build the explicit session handed to store calls.
    #[must_use]
    pub fn to_session(&self) -> Session {
        Session::authenticated(self.user_id.as_str())
    }
}

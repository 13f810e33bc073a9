use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Explicit caller identity passed into every store call.
///
/// Anonymous sessions may read the catalog. Writes (creating content, saving
/// favorites) need an owner id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Session {
    user_id: Option<String>,
}

impl Session {
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { user_id: None }
    }

    /// A session owned by `user_id`. A blank id yields an anonymous session.
    #[must_use]
    pub fn authenticated(user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        let trimmed = user_id.trim();
        if trimmed.is_empty() {
            return Self::anonymous();
        }
        Self {
            user_id: Some(trimmed.to_string()),
        }
    }

    #[must_use]
    pub fn owner_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    /// The owner id, or `CoreError::Unauthenticated`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Unauthenticated` for anonymous sessions.
    pub fn require_owner(&self) -> Result<&str, CoreError> {
        self.owner_id().ok_or(CoreError::Unauthenticated)
    }
}

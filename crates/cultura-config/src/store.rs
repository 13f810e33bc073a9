//! Backing store configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// URL schemes the libSQL client can open remotely.
const REMOTE_SCHEMES: [&str; 4] = ["libsql://", "https://", "http://", "wss://"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Database URL (e.g., `libsql://cultura-myorg.turso.io`).
    #[serde(default)]
    pub url: String,

    /// Database access key (auth token).
    #[serde(default)]
    pub access_key: String,

    /// Local database file used instead of the remote store in development.
    #[serde(default)]
    pub local_path: String,
}

/// Validated remote connection values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteStore<'a> {
    pub url: &'a str,
    pub access_key: &'a str,
}

impl StoreConfig {
    /// Check if the store config has both required remote fields.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.access_key.is_empty()
    }

    /// Check if a local development database is configured.
    #[must_use]
    pub const fn has_local_path(&self) -> bool {
        !self.local_path.is_empty()
    }

    /// The remote URL and access key, or a startup error naming what is missing.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` if either value is empty and
    /// `ConfigError::InvalidValue` if the URL scheme is not one libSQL can open.
    pub fn require(&self) -> Result<RemoteStore<'_>, ConfigError> {
        let mut missing = Vec::new();
        if self.url.is_empty() {
            missing.push("url");
        }
        if self.access_key.is_empty() {
            missing.push("access_key");
        }
        if !missing.is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "store".into(),
                missing: missing.join(", "),
            });
        }
        if !REMOTE_SCHEMES.iter().any(|s| self.url.starts_with(s)) {
            return Err(ConfigError::InvalidValue {
                field: "store.url".into(),
                reason: format!(
                    "'{}' must start with one of {}",
                    self.url,
                    REMOTE_SCHEMES.join(", ")
                ),
            });
        }
        Ok(RemoteStore {
            url: &self.url,
            access_key: &self.access_key,
        })
    }
}

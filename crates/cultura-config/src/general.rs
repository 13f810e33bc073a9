//! General application configuration.

use cultura_core::deadline::DEFAULT_SOON_WINDOW_DAYS;
use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    50
}

const fn default_soon_window_days() -> i64 {
    DEFAULT_SOON_WINDOW_DAYS
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Days before a deadline at which a grant counts as closing soon.
    #[serde(default = "default_soon_window_days")]
    pub soon_window_days: i64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            soon_window_days: default_soon_window_days(),
        }
    }
}

//! # cultura-config
//!
//! Layered configuration loading for Cultura using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CULTURA_*` prefix, `__` as separator)
//! 2. Project-level `.cultura/config.toml`
//! 3. User-level `~/.config/cultura/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CULTURA_STORE__URL` -> `store.url`,
//! `CULTURA_STORE__ACCESS_KEY` -> `store.access_key`, and so on.
//!
//! # Usage
//!
//! ```no_run
//! use cultura_config::CulturaConfig;
//!
//! let config = CulturaConfig::load().expect("config");
//! let remote = config.store.require().expect("store url and access key");
//! println!("store: {}", remote.url);
//! ```

mod error;
mod general;
mod session;
mod store;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use session::SessionConfig;
pub use store::{RemoteStore, StoreConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for every config key.
pub const ENV_PREFIX: &str = "CULTURA_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CulturaConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl CulturaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// `.env` files are not read here; the binary loads them first.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".cultura/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cultura").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_unconfigured() {
        let config = CulturaConfig::default();
        assert!(!config.store.is_configured());
        assert!(!config.session.to_session().is_authenticated());
        assert_eq!(config.general.default_limit, 50);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: CulturaConfig = CulturaConfig::figment().extract()?;
            assert!(!config.store.is_configured());
            Ok(())
        });
    }
}

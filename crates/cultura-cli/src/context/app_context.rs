use anyhow::Context;
use cultura_config::CulturaConfig;
use cultura_core::identity::Session;
use cultura_db::service::CatalogService;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: CatalogService,
    pub config: CulturaConfig,
    pub session: Session,
}

impl AppContext {
    /// Open the catalog store and resolve the caller's session.
    ///
    /// `--local` bypasses the remote store. Otherwise an incomplete store
    /// configuration is fatal here, before any request is made.
    pub async fn init(config: CulturaConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let service = match flags.local.as_deref() {
            Some(path) => CatalogService::new_local(path)
                .await
                .with_context(|| format!("failed to open local catalog at {path}"))?,
            None => CatalogService::open_from_config(&config.store)
                .await
                .context("failed to open catalog store")?,
        };

        let session = resolve_session(flags.user.as_deref(), &config);
        tracing::debug!(
            remote = service.is_remote(),
            authenticated = session.is_authenticated(),
            "catalog context ready"
        );

        Ok(Self {
            service,
            config,
            session,
        })
    }
}

fn resolve_session(user_override: Option<&str>, config: &CulturaConfig) -> Session {
    match user_override {
        Some(user) => Session::authenticated(user),
        None => config.session.to_session(),
    }
}

#[cfg(test)]
mod tests {
    use cultura_config::{CulturaConfig, SessionConfig};

    use super::resolve_session;

    fn config_with_user(user_id: &str) -> CulturaConfig {
        CulturaConfig {
            session: SessionConfig {
                user_id: user_id.to_string(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn flag_overrides_configured_user() {
        let session = resolve_session(Some("user_flag"), &config_with_user("user_cfg"));
        assert_eq!(session.owner_id(), Some("user_flag"));
    }

    #[test]
    fn configured_user_used_without_flag() {
        let session = resolve_session(None, &config_with_user("user_cfg"));
        assert_eq!(session.owner_id(), Some("user_cfg"));
    }

    #[test]
    fn no_user_is_anonymous() {
        assert!(!resolve_session(None, &CulturaConfig::default()).is_authenticated());
    }
}

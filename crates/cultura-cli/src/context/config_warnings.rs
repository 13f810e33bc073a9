use cultura_config::CulturaConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &CulturaConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &CulturaConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.store.is_configured()
        && !config.store.has_local_path()
        && has_env_prefix(&env_keys, "CULTURA_STORE")
    {
        warnings.push(
            "Store config appears default while CULTURA_STORE* env vars exist. Use double underscores (example: CULTURA_STORE__URL)."
                .to_string(),
        );
    }

    if config.session.user_id.is_empty() && has_env_prefix(&env_keys, "CULTURA_SESSION") {
        warnings.push(
            "Session config appears default while CULTURA_SESSION* env vars exist. Use double underscores (example: CULTURA_SESSION__USER_ID)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use cultura_config::{CulturaConfig, SessionConfig, StoreConfig};

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_unconfigured_sections_with_env_prefixes() {
        let config = CulturaConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("CULTURA_STORE_URL".to_string(), "libsql://demo".to_string()),
                ("CULTURA_SESSION_USER_ID".to_string(), "user_1".to_string()),
            ],
        );

        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn does_not_warn_when_sections_are_configured() {
        let config = CulturaConfig {
            store: StoreConfig {
                url: "libsql://demo".to_string(),
                access_key: "token".to_string(),
                ..Default::default()
            },
            session: SessionConfig {
                user_id: "user_1".to_string(),
            },
            ..Default::default()
        };

        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("CULTURA_STORE__URL".to_string(), "libsql://demo".to_string()),
                ("CULTURA_SESSION__USER_ID".to_string(), "user_1".to_string()),
            ],
        );

        assert!(warnings.is_empty());
    }
}

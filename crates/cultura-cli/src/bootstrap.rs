use anyhow::Context;

/// Load `.env` (if present) and extract the layered configuration.
pub fn load_config() -> anyhow::Result<cultura_config::CulturaConfig> {
    load_dotenv()?;
    cultura_config::CulturaConfig::load().context("failed to load cultura configuration")
}

fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
        return Ok(());
    }

    dotenvy::dotenv().ok();
    Ok(())
}

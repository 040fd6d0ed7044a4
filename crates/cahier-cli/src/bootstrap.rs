use anyhow::Context;
use cahier_config::CahierConfig;

use crate::cli::Cli;

/// Load `.env`, the layered config, then apply command-line overrides.
pub fn load_config(cli: &Cli) -> anyhow::Result<CahierConfig> {
    load_dotenv()?;
    let mut config = CahierConfig::load().context("failed to load cahier configuration")?;
    apply_overrides(&mut config, cli)?;
    Ok(config)
}

fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}

fn apply_overrides(config: &mut CahierConfig, cli: &Cli) -> anyhow::Result<()> {
    if let Some(base_url) = &cli.base_url {
        config.api.base_url.clone_from(base_url);
        config
            .api
            .validate()
            .context("invalid --base-url")?;
    }
    Ok(())
}

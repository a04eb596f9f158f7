use std::time::Duration;

use anyhow::Context;
use tabloid_client::{ArticleClient, ClientSettings};
use tabloid_config::TabloidConfig;

use crate::cli::GlobalFlags;

/// Load layered config, then apply the `--base-url` override.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<TabloidConfig> {
    let mut config = TabloidConfig::load_with_dotenv().context("failed to load configuration")?;

    if let Some(base_url) = &flags.base_url {
        tracing::debug!(%base_url, "base URL overridden from command line");
        config.api.base_url.clone_from(base_url);
        config
            .api
            .validate()
            .context("invalid --base-url")?;
    }

    Ok(config)
}

#[must_use]
pub fn client_settings(config: &TabloidConfig) -> ClientSettings {
    ClientSettings {
        base_url: config.api.base_url.clone(),
        timeout: Duration::from_secs(config.api.timeout_secs),
        user_agent: config.api.user_agent.clone(),
    }
}

pub fn build_client(config: &TabloidConfig) -> anyhow::Result<ArticleClient> {
    let client = ArticleClient::new(&client_settings(config))
        .context("failed to build articles API client")?;
    tracing::debug!(base_url = client.base_url(), "articles API client ready");
    Ok(client)
}

use anyhow::Context;
use tabloid_client::ArticleApi;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `tabloid list`.
pub async fn handle(api: &impl ArticleApi, flags: &GlobalFlags) -> anyhow::Result<()> {
    let articles = api.list_all().await.context("failed to list articles")?;
    output(&articles, flags.format)
}

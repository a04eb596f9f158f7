use anyhow::Context;
use tabloid_client::ArticleApi;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::output::output;

/// Handle `tabloid search`.
pub async fn handle(
    args: &SearchArgs,
    api: &impl ArticleApi,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let articles = api
        .search(&args.keyword)
        .await
        .with_context(|| format!("failed to search articles for '{}'", args.keyword))?;
    tracing::debug!(keyword = %args.keyword, matches = articles.len(), "search complete");
    output(&articles, flags.format)
}

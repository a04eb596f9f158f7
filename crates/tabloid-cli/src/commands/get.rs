use anyhow::Context;
use tabloid_client::ArticleApi;
use tabloid_core::ArticleId;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `tabloid get`.
pub async fn handle(id: ArticleId, api: &impl ArticleApi, flags: &GlobalFlags) -> anyhow::Result<()> {
    let article = api
        .get_by_id(id)
        .await
        .with_context(|| format!("failed to get article {id}"))?;
    output(&article, flags.format)
}

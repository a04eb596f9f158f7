use anyhow::Context;
use tabloid_client::ArticleApi;
use tabloid_core::ArticleDraft;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CreateArgs;
use crate::output::output;

/// Handle `tabloid create`.
pub async fn handle(
    args: &CreateArgs,
    api: &impl ArticleApi,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let draft = ArticleDraft::new(args.title.as_str(), args.description.as_str());
    draft.validate()?;

    let article = api.create(&draft).await.context("failed to create article")?;
    output(&article, flags.format)
}

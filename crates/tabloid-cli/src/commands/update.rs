use anyhow::Context;
use tabloid_client::ArticleApi;
use tabloid_core::{Article, ArticleDraft};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::UpdateArgs;
use crate::output::output;

/// Handle `tabloid update`.
///
/// The API replaces both fields, so the current article is fetched first and
/// any field not given on the command line keeps its value.
pub async fn handle(
    args: &UpdateArgs,
    api: &impl ArticleApi,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if args.title.is_none() && args.description.is_none() {
        anyhow::bail!("nothing to update: pass --title and/or --description");
    }

    let current = api
        .get_by_id(args.id)
        .await
        .with_context(|| format!("failed to get article {}", args.id))?;
    let draft = merge(&current, args);
    draft.validate()?;

    let updated = api
        .update(args.id, &draft)
        .await
        .with_context(|| format!("failed to update article {}", args.id))?;
    output(&updated, flags.format)
}

fn merge(current: &Article, args: &UpdateArgs) -> ArticleDraft {
    let mut draft = current.to_draft();
    if let Some(title) = &args.title {
        draft.title.clone_from(title);
    }
    if let Some(description) = &args.description {
        draft.description.clone_from(description);
    }
    draft
}

use anyhow::Context;
use serde::Serialize;
use tabloid_client::ArticleApi;
use tabloid_core::ArticleId;
use tabloid_view::{Confirm, DELETE_PROMPT};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DeleteArgs;
use crate::output::output;
use crate::prompt::DialoguerConfirm;

#[derive(Debug, Serialize)]
struct DeleteResponse {
    id: ArticleId,
    deleted: bool,
}

/// Handle `tabloid delete`.
pub async fn handle(
    args: &DeleteArgs,
    api: &impl ArticleApi,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if !args.yes && !DialoguerConfirm.confirm(DELETE_PROMPT) {
        if !flags.quiet {
            eprintln!("delete cancelled");
        }
        return output(
            &DeleteResponse {
                id: args.id,
                deleted: false,
            },
            flags.format,
        );
    }

    api.delete(args.id)
        .await
        .with_context(|| format!("failed to delete article {}", args.id))?;
    output(
        &DeleteResponse {
            id: args.id,
            deleted: true,
        },
        flags.format,
    )
}

use tabloid_config::TabloidConfig;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &TabloidConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = bootstrap::build_client(config)?;

    match command {
        Commands::List => commands::list::handle(&client, flags).await,
        Commands::Get { id } => commands::get::handle(id, &client, flags).await,
        Commands::Search(args) => commands::search::handle(&args, &client, flags).await,
        Commands::Create(args) => commands::create::handle(&args, &client, flags).await,
        Commands::Update(args) => commands::update::handle(&args, &client, flags).await,
        Commands::Delete(args) => commands::delete::handle(&args, &client, flags).await,
        Commands::Shell => commands::shell::handle(client, config.view.refresh_policy).await,
    }
}

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List all articles (newest first, as the server orders them).
    List,
    /// Get one article by ID.
    Get { id: i64 },
    /// Search articles by keyword.
    Search(SearchArgs),
    /// Create an article.
    Create(CreateArgs),
    /// Update an article. Omitted fields keep their current value.
    Update(UpdateArgs),
    /// Delete an article.
    Delete(DeleteArgs),
    /// Interactive article browser.
    Shell,
}

#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Keyword matched against titles and descriptions by the server.
    pub keyword: String,
}

#[derive(Clone, Debug, Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long, default_value = "")]
    pub description: String,
}

#[derive(Clone, Debug, Args)]
pub struct UpdateArgs {
    pub id: i64,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct DeleteArgs {
    pub id: i64,
    /// Skip the confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

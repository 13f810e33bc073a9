use clap::{Args, Subcommand};

use super::FilterArgs;

/// Grant commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GrantCommands {
    /// List grants: featured first, then by deadline.
    List {
        #[command(flatten)]
        filters: FilterArgs,
        /// Exact deadline (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// Only featured grants
        #[arg(long)]
        featured_only: bool,
        /// Count days remaining from this date instead of now (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
    },
    /// Create a grant.
    Create(GrantCreateArgs),
}

#[derive(Clone, Debug, Args)]
pub struct GrantCreateArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub organization: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub amount: Option<String>,
    /// Application deadline (YYYY-MM-DD)
    #[arg(long)]
    pub deadline: Option<String>,
    #[arg(long)]
    pub region: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub eligibility: Option<String>,
    #[arg(long)]
    pub website_url: Option<String>,
    #[arg(long)]
    pub featured: bool,
}

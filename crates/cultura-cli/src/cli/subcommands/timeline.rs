use clap::{Args, Subcommand};

use super::FilterArgs;

/// Timeline commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TimelineCommands {
    /// List timeline entries by year.
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Create a timeline entry.
    Create(TimelineCreateArgs),
}

#[derive(Clone, Debug, Args)]
pub struct TimelineCreateArgs {
    /// Year or span, e.g. 1400-1600
    #[arg(long)]
    pub year: String,
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub details: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    /// Repeat for each key figure
    #[arg(long)]
    pub key_figure: Vec<String>,
    #[arg(long)]
    pub image_url: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
}

use clap::{Args, Subcommand};

/// Podcast commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PodcastCommands {
    /// List podcasts, newest first.
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Create a podcast.
    Create(PodcastCreateArgs),
}

#[derive(Clone, Debug, Args)]
pub struct PodcastCreateArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub embed_url: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub rating: Option<f64>,
    #[arg(long)]
    pub episodes: Option<i64>,
    #[arg(long)]
    pub duration: Option<String>,
    #[arg(long)]
    pub image_url: Option<String>,
}

use clap::{Args, Subcommand};

use super::FilterArgs;

/// Cultural event commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EventCommands {
    /// List events, soonest first.
    List {
        #[command(flatten)]
        filters: FilterArgs,
        /// City name contained in the location
        #[arg(long)]
        city: Option<String>,
        /// Exact date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Create an event.
    Create(EventCreateArgs),
}

#[derive(Clone, Debug, Args)]
pub struct EventCreateArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub time: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub latitude: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub longitude: Option<f64>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub price: Option<String>,
    #[arg(long)]
    pub image_url: Option<String>,
    #[arg(long)]
    pub website_url: Option<String>,
}

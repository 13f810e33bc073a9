use clap::Subcommand;

use crate::cli::subcommands::{
    EventCommands, FavoriteCommands, GrantCommands, PodcastCommands, TimelineCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Cultural events.
    Events {
        #[command(subcommand)]
        action: EventCommands,
    },
    /// Podcasts.
    Podcasts {
        #[command(subcommand)]
        action: PodcastCommands,
    },
    /// Historical timeline.
    Timeline {
        #[command(subcommand)]
        action: TimelineCommands,
    },
    /// Grants and funding opportunities.
    Grants {
        #[command(subcommand)]
        action: GrantCommands,
    },
    /// Saved items for the signed-in user.
    Favorites {
        #[command(subcommand)]
        action: FavoriteCommands,
    },
}

use clap::Subcommand;

/// Favorite (saved item) commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FavoriteCommands {
    /// Save an item.
    Add {
        /// event, podcast, timeline or grant
        kind: String,
        id: String,
    },
    /// Remove a saved item.
    Remove { kind: String, id: String },
    /// List saved items, newest first.
    List,
}

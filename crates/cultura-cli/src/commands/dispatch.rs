use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Events { action } => commands::events::handle(&action, ctx, flags).await,
        Commands::Podcasts { action } => commands::podcasts::handle(&action, ctx, flags).await,
        Commands::Timeline { action } => commands::timeline::handle(&action, ctx, flags).await,
        Commands::Grants { action } => commands::grants::handle(&action, ctx, flags).await,
        Commands::Favorites { action } => commands::favorites::handle(&action, ctx, flags).await,
    }
}

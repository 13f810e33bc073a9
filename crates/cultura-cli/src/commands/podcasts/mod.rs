mod create;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PodcastCommands;
use crate::context::AppContext;

/// Handle `cultura podcasts`.
pub async fn handle(
    action: &PodcastCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PodcastCommands::List { search, category } => {
            list::run(search.as_deref(), category.as_deref(), ctx, flags).await
        }
        PodcastCommands::Create(args) => create::run(args, ctx, flags).await,
    }
}

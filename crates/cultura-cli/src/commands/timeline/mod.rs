mod create;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TimelineCommands;
use crate::context::AppContext;

/// Handle `cultura timeline`.
pub async fn handle(
    action: &TimelineCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TimelineCommands::List { filters } => list::run(filters, ctx, flags).await,
        TimelineCommands::Create(args) => create::run(args, ctx, flags).await,
    }
}

mod create;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::GrantCommands;
use crate::context::AppContext;

/// Handle `cultura grants`.
pub async fn handle(action: &GrantCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        GrantCommands::List {
            filters,
            date,
            featured_only,
            today,
        } => {
            list::run(
                filters,
                date.as_deref(),
                *featured_only,
                today.as_deref(),
                ctx,
                flags,
            )
            .await
        }
        GrantCommands::Create(args) => create::run(args, ctx, flags).await,
    }
}

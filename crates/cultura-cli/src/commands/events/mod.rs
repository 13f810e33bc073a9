mod create;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::EventCommands;
use crate::context::AppContext;

/// Handle `cultura events`.
pub async fn handle(action: &EventCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        EventCommands::List {
            filters,
            city,
            date,
        } => list::run(filters, city.as_deref(), date.as_deref(), ctx, flags).await,
        EventCommands::Create(args) => create::run(args, ctx, flags).await,
    }
}

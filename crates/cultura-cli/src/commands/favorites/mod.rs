use cultura_core::kinds::EntityKind;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FavoriteCommands;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct FavoriteChange<'a> {
    kind: EntityKind,
    id: &'a str,
    saved: bool,
    changed: bool,
}

/// Handle `cultura favorites`.
pub async fn handle(
    action: &FavoriteCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        FavoriteCommands::Add { kind, id } => {
            let kind = parse_enum::<EntityKind>(kind, "kind")?;
            let changed = ctx.service.add_favorite(kind, id, &ctx.session).await?;
            output(
                &FavoriteChange {
                    kind,
                    id,
                    saved: true,
                    changed,
                },
                flags.format,
            )
        }
        FavoriteCommands::Remove { kind, id } => {
            let kind = parse_enum::<EntityKind>(kind, "kind")?;
            let changed = ctx.service.remove_favorite(kind, id, &ctx.session).await?;
            output(
                &FavoriteChange {
                    kind,
                    id,
                    saved: false,
                    changed,
                },
                flags.format,
            )
        }
        FavoriteCommands::List => {
            let favorites = ctx.service.list_favorites(&ctx.session).await?;
            output(&favorites, flags.format)
        }
    }
}

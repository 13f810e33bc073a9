use cultura_core::filter::filter;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FilterArgs;
use crate::commands::shared::criteria::from_args;
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(filters: &FilterArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    let entries = filter(ctx.service.list_timeline().await?, &from_args(filters));
    output(&apply_limit(entries, limit)?, flags.format)
}

use cultura_core::filter::filter;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FilterArgs;
use crate::commands::shared::criteria::{from_args, with_date_flag};
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    filters: &FilterArgs,
    city: Option<&str>,
    date: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let criteria = with_date_flag(from_args(filters), date)?.with_city(city);
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);

    let events = filter(ctx.service.list_events().await?, &criteria);
    tracing::debug!(matched = events.len(), "filtered events");
    output(&apply_limit(events, limit)?, flags.format)
}

use cultura_core::filter::{FilterCriteria, filter};

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    search: Option<&str>,
    category: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let criteria = FilterCriteria::default()
        .with_text(search)
        .with_category(category);
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);

    let podcasts = filter(ctx.service.list_podcasts().await?, &criteria);
    output(&apply_limit(podcasts, limit)?, flags.format)
}

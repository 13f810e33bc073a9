use cultura_core::drafts::{Draft, TimelineDraft};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TimelineCreateArgs;
use crate::commands::shared::submit::submit_and_refresh;
use crate::context::AppContext;

pub async fn run(
    args: &TimelineCreateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let draft = TimelineDraft {
        year: args.year.clone(),
        title: args.title.clone(),
        description: args.description.clone(),
        details: args.details.clone(),
        category: args.category.clone(),
        key_figures: args.key_figure.clone(),
        image_url: args.image_url.clone(),
        location: args.location.clone(),
    };
    submit_and_refresh(Draft::Timeline(draft), ctx, flags).await
}

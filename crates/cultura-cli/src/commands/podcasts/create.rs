use cultura_core::drafts::{Draft, PodcastDraft};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PodcastCreateArgs;
use crate::commands::shared::submit::submit_and_refresh;
use crate::context::AppContext;

pub async fn run(
    args: &PodcastCreateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let draft = PodcastDraft {
        title: args.title.clone(),
        description: args.description.clone(),
        embed_url: args.embed_url.clone(),
        category: args.category.clone(),
        rating: args.rating,
        episodes: args.episodes,
        duration: args.duration.clone(),
        image_url: args.image_url.clone(),
    };
    submit_and_refresh(Draft::Podcast(draft), ctx, flags).await
}

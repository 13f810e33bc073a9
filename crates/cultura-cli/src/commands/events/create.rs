use cultura_core::drafts::{Draft, EventDraft};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::EventCreateArgs;
use crate::commands::shared::submit::submit_and_refresh;
use crate::context::AppContext;

pub async fn run(args: &EventCreateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    submit_and_refresh(Draft::Event(to_draft(args)), ctx, flags).await
}

fn to_draft(args: &EventCreateArgs) -> EventDraft {
    EventDraft {
        title: args.title.clone(),
        description: args.description.clone(),
        date: args.date.clone(),
        time: args.time.clone(),
        location: args.location.clone(),
        latitude: args.latitude,
        longitude: args.longitude,
        category: args.category.clone(),
        price: args.price.clone(),
        image_url: args.image_url.clone(),
        website_url: args.website_url.clone(),
    }
}

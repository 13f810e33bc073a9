use cultura_core::drafts::{Draft, GrantDraft};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::GrantCreateArgs;
use crate::commands::shared::submit::submit_and_refresh;
use crate::context::AppContext;

pub async fn run(args: &GrantCreateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let draft = GrantDraft {
        title: args.title.clone(),
        organization: args.organization.clone(),
        description: args.description.clone(),
        amount: args.amount.clone(),
        deadline: args.deadline.clone(),
        region: args.region.clone(),
        category: args.category.clone(),
        eligibility: args.eligibility.clone(),
        website_url: args.website_url.clone(),
        featured: args.featured,
    };
    submit_and_refresh(Draft::Grant(draft), ctx, flags).await
}

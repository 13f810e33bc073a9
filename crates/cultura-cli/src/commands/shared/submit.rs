use cultura_core::drafts::Draft;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SubmitResponse {
    created: &'static str,
    total: usize,
}

/// Submit a draft, then re-fetch its kind and report the refreshed count.
pub async fn submit_and_refresh(
    draft: Draft,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let kind = draft.kind();
    ctx.service.submit(draft, &ctx.session).await?;
    let total = ctx.service.fetch(kind, &ctx.session).await?.len();

    output(
        &SubmitResponse {
            created: kind.as_str(),
            total,
        },
        flags.format,
    )
}

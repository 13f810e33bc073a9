use clap::Args;

/// Filters shared by the event, timeline and grant listings.
///
/// Blank values and "All ..." picker values are accepted and ignored.
#[derive(Clone, Debug, Default, Args)]
pub struct FilterArgs {
    /// Case-insensitive text search
    #[arg(long)]
    pub search: Option<String>,
    /// Exact category
    #[arg(long)]
    pub category: Option<String>,
    /// Exact region (location for events and timeline entries)
    #[arg(long)]
    pub region: Option<String>,
}

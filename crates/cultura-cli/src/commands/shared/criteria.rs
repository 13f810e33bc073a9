use cultura_core::filter::FilterCriteria;

use crate::cli::subcommands::FilterArgs;
use crate::commands::shared::parse::parse_date_flag;

/// Build filter criteria from the shared list flags.
///
/// Sentinel values ("All", "All Locations", blank) are normalized away by the
/// criteria builders.
pub fn from_args(args: &FilterArgs) -> FilterCriteria {
    FilterCriteria::default()
        .with_text(args.search.as_deref())
        .with_category(args.category.as_deref())
        .with_region(args.region.as_deref())
}

/// Add a `--date` flag to `criteria`.
pub fn with_date_flag(criteria: FilterCriteria, raw: Option<&str>) -> anyhow::Result<FilterCriteria> {
    Ok(criteria.with_date(parse_date_flag(raw, "date")?))
}

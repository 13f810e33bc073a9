use chrono::{DateTime, NaiveDate, Utc};
use cultura_core::deadline::{Urgency, days_remaining, days_remaining_at};
use cultura_core::entities::Grant;
use cultura_core::filter::filter;
use cultura_core::rank::{featured_grants, rank_grants};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FilterArgs;
use crate::commands::shared::criteria::{from_args, with_date_flag};
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::commands::shared::parse::parse_date_flag;
use crate::context::AppContext;
use crate::output::output;

/// A ranked grant with its countdown.
#[derive(Debug, Serialize)]
struct GrantRow {
    #[serde(flatten)]
    grant: Grant,
    days_remaining: Option<i64>,
    urgency: Option<Urgency>,
}

/// Reference point for the countdown.
#[derive(Clone, Copy, Debug)]
enum Today {
    Date(NaiveDate),
    Now(DateTime<Utc>),
}

impl Today {
    fn days_until(self, deadline: NaiveDate) -> i64 {
        match self {
            Self::Date(today) => days_remaining(deadline, today),
            Self::Now(now) => days_remaining_at(deadline, now),
        }
    }
}

pub async fn run(
    filters: &FilterArgs,
    date: Option<&str>,
    featured_only: bool,
    today: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let criteria = with_date_flag(from_args(filters), date)?;
    let today = parse_date_flag(today, "today")?.map_or_else(|| Today::Now(Utc::now()), Today::Date);
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);

    let grants = filter(ctx.service.list_grants().await?, &criteria);
    let ranked = if featured_only {
        featured_grants(&grants)
    } else {
        rank_grants(grants)
    };

    let rows = annotate(ranked, today, ctx.config.general.soon_window_days);
    output(&apply_limit(rows, limit)?, flags.format)
}

fn annotate(grants: Vec<Grant>, today: Today, soon_window: i64) -> Vec<GrantRow> {
    grants
        .into_iter()
        .map(|grant| {
            let days = grant.deadline_date().map(|d| today.days_until(d));
            GrantRow {
                urgency: days.map(|d| Urgency::classify(d, soon_window)),
                days_remaining: days,
                grant,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use cultura_core::deadline::Urgency;
    use cultura_core::entities::Grant;
    use pretty_assertions::assert_eq;

    use super::{Today, annotate};

    fn grant(title: &str, deadline: Option<&str>) -> Grant {
        Grant {
            id: title.to_lowercase(),
            title: title.to_string(),
            organization: None,
            description: None,
            amount: None,
            deadline: deadline.map(String::from),
            region: None,
            category: None,
            eligibility: None,
            website_url: None,
            featured: false,
            created_by: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn countdown_from_fixed_date() {
        let today = Today::Date(NaiveDate::from_ymd_opt(2024, 9, 26).unwrap());
        let rows = annotate(
            vec![
                grant("Soon", Some("2024-10-01")),
                grant("Past", Some("2024-09-17")),
                grant("Later", Some("2024-11-15")),
                grant("Undated", None),
            ],
            today,
            7,
        );

        let days: Vec<_> = rows.iter().map(|r| r.days_remaining).collect();
        assert_eq!(days, vec![Some(5), Some(-9), Some(50), None]);
        let urgency: Vec<_> = rows.iter().map(|r| r.urgency).collect();
        assert_eq!(
            urgency,
            vec![
                Some(Urgency::ClosingSoon),
                Some(Urgency::Expired),
                Some(Urgency::Open),
                None
            ]
        );
    }

    #[test]
    fn countdown_from_instant_rounds_up() {
        let now = Utc.with_ymd_and_hms(2024, 9, 26, 15, 0, 0).unwrap();
        let rows = annotate(vec![grant("Soon", Some("2024-10-01"))], Today::Now(now), 7);
        assert_eq!(rows[0].days_remaining, Some(5));
    }

    #[test]
    fn row_serializes_flat() {
        let today = Today::Date(NaiveDate::from_ymd_opt(2024, 9, 26).unwrap());
        let rows = annotate(vec![grant("Soon", Some("2024-10-01"))], today, 7);
        let value = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(value["title"], "Soon");
        assert_eq!(value["days_remaining"], 5);
        assert_eq!(value["urgency"], "closing_soon");
    }
}

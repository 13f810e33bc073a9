//! Deadline arithmetic for grants and other dated items.
//!
//! Every function takes the current date or instant as an argument; nothing in
//! here reads the system clock.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Default number of days before a deadline that counts as "closing soon".
pub const DEFAULT_SOON_WINDOW_DAYS: i64 = 7;

/// Parse a stored date column.
///
/// Accepts `YYYY-MM-DD` and full RFC 3339 timestamps (the date part is kept).
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).date_naive())
    })
}

/// Whole days from `now` until `deadline`.
///
/// Zero on the deadline itself, negative once it has passed.
#[must_use]
pub fn days_remaining(deadline: NaiveDate, now: NaiveDate) -> i64 {
    (deadline - now).num_days()
}

/// Days from the instant `now` until the start of `deadline` (UTC), rounded up.
///
/// `ceil((deadline - now) / 1 day)`: with half a day left this is 1, with
/// half a day overdue it is 0.
#[must_use]
pub fn days_remaining_at(deadline: NaiveDate, now: DateTime<Utc>) -> i64 {
    let deadline_start = deadline.and_time(NaiveTime::MIN).and_utc();
    let millis = (deadline_start - now).num_milliseconds();
    let days = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) > 0 {
        days + 1
    } else {
        days
    }
}

/// How pressing a deadline is, for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Expired,
    ClosingSoon,
    Open,
}

impl Urgency {
    /// Classify a days-remaining value. Negative means expired.
    #[must_use]
    pub const fn classify(days: i64, soon_window: i64) -> Self {
        if days < 0 {
            Self::Expired
        } else if days <= soon_window {
            Self::ClosingSoon
        } else {
            Self::Open
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Expired => "expired",
            Self::ClosingSoon => "closing_soon",
            Self::Open => "open",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn future_deadline_is_positive() {
        assert_eq!(days_remaining(date(2024, 9, 15), date(2024, 9, 10)), 5);
    }

    #[test]
    fn past_deadline_is_negative() {
        assert_eq!(days_remaining(date(2024, 9, 1), date(2024, 9, 10)), -9);
    }

    #[test]
    fn same_day_is_zero() {
        assert_eq!(days_remaining(date(2024, 9, 10), date(2024, 9, 10)), 0);
    }

    #[test]
    fn crosses_month_and_leap_day() {
        assert_eq!(days_remaining(date(2024, 3, 1), date(2024, 2, 28)), 2);
    }

    #[test]
    fn instant_variant_rounds_up_partial_days() {
        let noon = Utc.with_ymd_and_hms(2024, 9, 10, 12, 0, 0).unwrap();
        assert_eq!(days_remaining_at(date(2024, 9, 15), noon), 5);
        assert_eq!(days_remaining_at(date(2024, 9, 11), noon), 1);
        // Half a day past midnight of the deadline rounds towards zero.
        assert_eq!(days_remaining_at(date(2024, 9, 10), noon), 0);
        assert_eq!(days_remaining_at(date(2024, 9, 1), noon), -9);
    }

    #[test]
    fn instant_variant_at_midnight_matches_date_variant() {
        let midnight = Utc.with_ymd_and_hms(2024, 9, 10, 0, 0, 0).unwrap();
        assert_eq!(days_remaining_at(date(2024, 9, 15), midnight), 5);
        assert_eq!(days_remaining_at(date(2024, 9, 10), midnight), 0);
    }

    #[test]
    fn parses_plain_and_rfc3339_dates() {
        assert_eq!(parse_date("2024-09-15"), Some(date(2024, 9, 15)));
        assert_eq!(
            parse_date("2024-09-15T08:00:00+00:00"),
            Some(date(2024, 9, 15))
        );
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("next tuesday"), None);
    }

    #[test]
    fn urgency_thresholds() {
        assert_eq!(Urgency::classify(-1, 7), Urgency::Expired);
        assert_eq!(Urgency::classify(0, 7), Urgency::ClosingSoon);
        assert_eq!(Urgency::classify(7, 7), Urgency::ClosingSoon);
        assert_eq!(Urgency::classify(8, 7), Urgency::Open);
    }
}

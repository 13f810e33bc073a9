use chrono::NaiveDate;
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse an optional `YYYY-MM-DD` flag value.
pub fn parse_date_flag(raw: Option<&str>, flag: &str) -> anyhow::Result<Option<NaiveDate>> {
    raw.map(|value| {
        cultura_core::deadline::parse_date(value)
            .ok_or_else(|| anyhow::anyhow!("invalid --{flag} '{value}': expected YYYY-MM-DD"))
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use cultura_core::kinds::EntityKind;

    use super::{parse_date_flag, parse_enum};

    #[test]
    fn parses_snake_case_enum() {
        let kind: EntityKind = parse_enum("grant", "kind").expect("kind should parse");
        assert_eq!(kind, EntityKind::Grant);
    }

    #[test]
    fn parses_mixed_case() {
        let kind: EntityKind = parse_enum("Timeline", "kind").expect("kind should parse");
        assert_eq!(kind, EntityKind::Timeline);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<EntityKind>("trail", "kind").expect_err("should fail");
        assert!(err.to_string().contains("invalid kind 'trail'"));
    }

    #[test]
    fn date_flag_parses_or_errors() {
        assert_eq!(
            parse_date_flag(Some("2024-09-26"), "today").unwrap(),
            NaiveDate::from_ymd_opt(2024, 9, 26)
        );
        assert_eq!(parse_date_flag(None, "today").unwrap(), None);
        let err = parse_date_flag(Some("next week"), "date").unwrap_err();
        assert!(err.to_string().contains("invalid --date"));
    }
}

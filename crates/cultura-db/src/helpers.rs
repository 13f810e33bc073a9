//! Row-to-entity parsing helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. Nullable columns must be read as `Option<T>`: reading SQL NULL as
//! a plain `String` is an error, not `""`.

use chrono::{DateTime, Utc};

use crate::error::DatabaseError;

/// Parse a TEXT timestamp column as `DateTime<Utc>`.
///
/// Handles RFC 3339 (what the schema defaults write) and `SQLite`'s
/// `datetime('now')` format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string matches neither format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Read a nullable REAL column.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_f64(row: &libsql::Row, idx: i32) -> Result<Option<f64>, DatabaseError> {
    Ok(row.get::<Option<f64>>(idx)?)
}

/// Read a nullable INTEGER column.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_i64(row: &libsql::Row, idx: i32) -> Result<Option<i64>, DatabaseError> {
    Ok(row.get::<Option<i64>>(idx)?)
}

/// Read an INTEGER 0/1 column as a flag.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_flag(row: &libsql::Row, idx: i32) -> Result<bool, DatabaseError> {
    Ok(row.get::<i64>(idx)? != 0)
}

/// Decode a JSON array of strings stored in a TEXT column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the column holds invalid JSON.
pub fn parse_string_list(s: Option<&str>) -> Result<Vec<String>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => serde_json::from_str(s)
            .map_err(|e| DatabaseError::Query(format!("Invalid JSON list in column: {e}"))),
        _ => Ok(Vec::new()),
    }
}

/// Bind an optional string as TEXT or NULL.
pub fn text(value: Option<&str>) -> libsql::Value {
    value.map_or(libsql::Value::Null, |s| libsql::Value::Text(s.to_string()))
}

/// Bind an optional float as REAL or NULL.
pub fn real(value: Option<f64>) -> libsql::Value {
    value.map_or(libsql::Value::Null, libsql::Value::Real)
}

/// Bind an optional integer as INTEGER or NULL.
pub fn integer(value: Option<i64>) -> libsql::Value {
    value.map_or(libsql::Value::Null, libsql::Value::Integer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_schema_default_timestamp() {
        let dt = parse_datetime("2024-09-10T12:34:56.789Z").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-09-10T12:34:56.789+00:00");
    }

    #[test]
    fn parses_sqlite_datetime() {
        let dt = parse_datetime("2024-09-10 12:34:56").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-09-10T12:34:56+00:00");
    }

    #[test]
    fn rejects_garbage_datetime() {
        assert!(parse_datetime("yesterday").is_err());
    }

    #[test]
    fn string_list_handles_null_and_json() {
        assert!(parse_string_list(None).unwrap().is_empty());
        assert_eq!(
            parse_string_list(Some(r#"["Monet","Degas"]"#)).unwrap(),
            vec!["Monet", "Degas"]
        );
        assert!(parse_string_list(Some("not json")).is_err());
    }

    #[test]
    fn binders_map_none_to_null() {
        assert!(matches!(text(None), libsql::Value::Null));
        assert!(matches!(text(Some("x")), libsql::Value::Text(ref s) if s == "x"));
        assert!(matches!(real(Some(4.5)), libsql::Value::Real(v) if (v - 4.5).abs() < f64::EPSILON));
        assert!(matches!(integer(None), libsql::Value::Null));
    }
}

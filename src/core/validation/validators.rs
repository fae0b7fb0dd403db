//! Reusable field validators
//!
//! Used from `#[validate(schema(function = ...))]` rules on the payload types.

use chrono::{DateTime, NaiveDate, Utc};
use validator::ValidationError;

/// Parse a timestamp given either as RFC 3339 or as a `YYYY-MM-DD`
/// calendar date (interpreted as midnight UTC).
pub fn parse_date_like(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Validator: every present date field must be date-like.
///
/// `fields` pairs the wire name of each field with its raw value.
pub fn date_like(fields: &[(&'static str, Option<&String>)]) -> Result<(), ValidationError> {
    for (name, value) in fields {
        let Some(value) = value else { continue };
        if parse_date_like(value).is_none() {
            let mut err = ValidationError::new("date_like");
            err.message = Some(
                format!(
                    "'{}' must be an RFC 3339 timestamp or a YYYY-MM-DD date (got: {})",
                    name, value
                )
                .into(),
            );
            err.add_param("field".into(), name);
            return Err(err);
        }
    }
    Ok(())
}

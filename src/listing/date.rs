//! Publication date formatting.

use chrono::{DateTime, FixedOffset, Locale};
use chrono_tz::Tz;

use crate::errors::AppError;

/// Long pt-BR date, e.g. `19 de outubro de 2026`.
const DATE_FORMAT: &str = "%d de %B de %Y";
const DATE_LOCALE: Locale = Locale::pt_BR;

/// Parse a CMS timestamp. The CMS writes offsets without a colon (`+0000`).
pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, AppError> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z"))
        .map_err(|e| AppError::upstream(format!("Invalid publication date {:?}: {}", raw, e)))
}

/// Format a CMS timestamp as a localized day/long-month/year string in `tz`.
pub fn format_publication_date(raw: &str, tz: Tz) -> Result<String, AppError> {
    let date = parse_timestamp(raw)?.with_timezone(&tz);
    Ok(date.format_localized(DATE_FORMAT, DATE_LOCALE).to_string())
}

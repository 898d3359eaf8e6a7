/// Utilities for date and time formatting
///
/// Mock data keeps dates as ISO strings; everything here falls back to the
/// raw input when it cannot be parsed.
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

fn parse_naive(datetime_str: &str) -> Option<NaiveDateTime> {
    let trimmed = datetime_str.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}

/// "2023-06-15T14:30:00" -> "Jun 15, 2023, 02:30 PM"
pub fn format_datetime(datetime_str: &str) -> String {
    match parse_naive(datetime_str) {
        Some(dt) => dt.format("%b %d, %Y, %I:%M %p").to_string(),
        None => datetime_str.to_string(),
    }
}

/// "2023-06-15" or "2023-06-15T14:30:00" -> "Jun 15, 2023"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%b %d, %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Время чека: "06/15/2023 02:30:00 PM"
pub fn format_receipt_time(dt: &DateTime<Utc>) -> String {
    dt.format("%m/%d/%Y %I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2023-06-15T14:30:00"), "Jun 15, 2023, 02:30 PM");
        assert_eq!(format_datetime("2023-06-08T10:05:00Z"), "Jun 08, 2023, 10:05 AM");
        assert_eq!(format_datetime("2024-12-31T23:59:59.123"), "Dec 31, 2024, 11:59 PM");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2023-01-15"), "Jan 15, 2023");
        assert_eq!(format_date("2023-06-15T14:30:00"), "Jun 15, 2023");
    }

    #[test]
    fn test_receipt_time() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 1, 9, 5, 7).unwrap();
        assert_eq!(format_receipt_time(&dt), "03/01/2024 09:05:07 AM");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}

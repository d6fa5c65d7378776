use chrono::{DateTime, NaiveDate};

/// Format an ISO-8601 date string the way comment bylines display it:
/// en-US short month, 2-digit day, 4-digit year.
/// Example: "2023-05-07" -> "May 07, 2023"
///
/// Accepts both bare dates and full RFC 3339 timestamps. A string that
/// parses as neither is returned unchanged; upstream data is expected to be
/// well-formed, so this is a passthrough rather than an error path.
pub fn format_comment_date(date_str: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return dt.format("%b %d, %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        return date.format("%b %d, %Y").to_string();
    }
    date_str.to_string()
}

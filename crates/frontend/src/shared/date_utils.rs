/// Utilities for date formatting
///
/// Transaction dates arrive as RFC 3339 strings, bare dates or epoch millis;
/// all of them are shown as "Mar 15, 2024".
use chrono::{DateTime, Utc};

/// Format epoch milliseconds to "Mon D, YYYY"
pub fn format_millis(millis: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(millis).map(|dt| dt.format("%b %-d, %Y").to_string())
}

/// Format a transaction date for display; "N/A" when missing
/// Example: Some("2024-03-15T14:02:26.123Z") -> "Mar 15, 2024"
pub fn format_transaction_date(raw: Option<&str>, millis: i64) -> String {
    match raw.map(str::trim) {
        None | Some("") => "N/A".to_string(),
        Some(raw) if millis == 0 => raw.to_string(),
        Some(_) => format_millis(millis).unwrap_or_else(|| "N/A".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_millis() {
        assert_eq!(format_millis(1_063_065_600_000).as_deref(), Some("Sep 9, 2003"));
        assert_eq!(format_millis(0).as_deref(), Some("Jan 1, 1970"));
    }

    #[test]
    fn test_format_transaction_date() {
        assert_eq!(format_transaction_date(None, 0), "N/A");
        assert_eq!(format_transaction_date(Some("  "), 0), "N/A");
        // unparsable dates are shown as is
        assert_eq!(format_transaction_date(Some("yesterday"), 0), "yesterday");
        assert_eq!(
            format_transaction_date(Some("2003-09-09T00:00:00Z"), 1_063_065_600_000),
            "Sep 9, 2003"
        );
    }
}

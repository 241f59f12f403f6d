//! Number formatting for tables and cards

/// Formats a number with a thousands separator and the given number of decimals
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2, ','), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize, separator: char) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((integer, decimal)) => (integer, Some(decimal)),
        None => (formatted.as_str(), None),
    };

    // insert the separator every 3 digits from the right
    let mut grouped = String::new();
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// US dollars: `$1,234.50`, `-$12.00`
pub fn format_usd(value: f64) -> String {
    let amount = format_number_with_decimals(value, 2, ',');
    match amount.strip_prefix('-') {
        Some(positive) => format!("-${}", positive),
        None => format!("${}", amount),
    }
}

/// `format_usd`, or "N/A" for a missing or zero amount
pub fn format_usd_or_na(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 && v.is_finite() => format_usd(v),
        _ => "N/A".to_string(),
    }
}

/// Integer count without decimals ("3", "1,024")
pub fn format_count(value: f64) -> String {
    format_number_with_decimals(value, 0, ',')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(80.0), "$80.00");
        assert_eq!(format_usd(1234.5), "$1,234.50");
        assert_eq!(format_usd(1234567.891), "$1,234,567.89");
        assert_eq!(format_usd(-42.0), "-$42.00");
        assert_eq!(format_usd(0.0), "$0.00");
    }

    #[test]
    fn test_missing_amount() {
        assert_eq!(format_usd_or_na(None), "N/A");
        assert_eq!(format_usd_or_na(Some(0.0)), "N/A");
        assert_eq!(format_usd_or_na(Some(7514.0)), "$7,514.00");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(format_number_with_decimals(1234.567, 2, ' '), "1 234.57");
        assert_eq!(format_number_with_decimals(999.0, 0, ','), "999");
        assert_eq!(format_count(100000.0), "100,000");
        assert_eq!(format_number_with_decimals(-0.001, 2, ','), "0.00");
    }
}

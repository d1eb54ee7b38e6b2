/// Utilities for the date stamps carried on ledger records
///
/// Records are stamped with ISO dates (%Y-%m-%d); display formatting is
/// US-locale MM/DD/YYYY.
use chrono::Utc;

/// Current date as the ISO stamp stored on records.
pub fn today_iso() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Format an ISO date stamp for display.
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "03/15/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", month, day, year);
        }
    }
    date_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "03/15/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "03/15/2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_today_is_iso_shaped() {
        let today = today_iso();
        assert_eq!(today.len(), 10);
        assert_eq!(&today[4..5], "-");
        assert_eq!(&today[7..8], "-");
    }
}

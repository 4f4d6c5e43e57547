//! Date display formatting.

use chrono::NaiveDate;

/// Format a date for display as DD.MM.YYYY.
/// Example: 2024-03-15 -> "15.03.2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date(d), "15.03.2024");
        let d = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(format_date(d), "01.12.2024");
    }
}

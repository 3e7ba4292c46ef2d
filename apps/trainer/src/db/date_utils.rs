//! Date utilities for session records.

use chrono::{Datelike, Local, NaiveDate};

/// Format a date as a US short date (`M/D/YYYY`), the format stored in
/// session records.
pub fn format_short_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Today's local date as a short date string.
pub fn today_short_date() -> String {
    format_short_date(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_zero_padding() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(format_short_date(date), "3/7/2025");
    }

    #[test]
    fn test_two_digit_fields() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        assert_eq!(format_short_date(date), "12/25/2024");
    }

    #[test]
    fn test_today_matches_local_date() {
        let result = today_short_date();
        assert_eq!(result, format_short_date(Local::now().date_naive()));
        assert_eq!(result.matches('/').count(), 2);
    }
}

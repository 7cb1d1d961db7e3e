/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{Datelike, NaiveDate};

/// Месяцы в родительном падеже для дат вида "5 марта 2024 г."
const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Format ISO date string to the long Russian form
/// Example: "2024-03-05" or "2024-03-05T10:00:00Z" -> "5 марта 2024 г."
pub fn format_date_long(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => format!(
            "{} {} {} г.",
            date.day(),
            MONTHS_GENITIVE[date.month0() as usize],
            date.year()
        ),
        Err(_) => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_long() {
        assert_eq!(format_date_long("2024-03-05"), "5 марта 2024 г.");
        assert_eq!(format_date_long("2023-12-31T23:59:59Z"), "31 декабря 2023 г.");
        assert_eq!(format_date_long("2024-01-01"), "1 января 2024 г.");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date_long("invalid"), "invalid");
        assert_eq!(format_date_long("2024-13-01"), "2024-13-01");
    }
}

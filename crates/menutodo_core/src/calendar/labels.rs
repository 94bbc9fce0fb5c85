//! Fixed-pattern calendar labels.

use chrono::NaiveDate;

/// Column headers, Sunday first.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Month header above the grid, e.g. `October 2026`.
pub fn month_title(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Heading of the selected day's task list, e.g. `Oct 19, 2026`.
pub fn day_heading(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Short date used in the menu-bar label, e.g. `Jan 5`.
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::{day_heading, month_title, short_date};
    use chrono::NaiveDate;

    #[test]
    fn labels_use_fixed_english_patterns() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 9).unwrap();
        assert_eq!(month_title(date), "October 2026");
        assert_eq!(day_heading(date), "Oct 9, 2026");
        assert_eq!(short_date(date), "Oct 9");
    }
}
